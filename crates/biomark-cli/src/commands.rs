use anyhow::Context;

use biomark_cli::logging::redact_value;
use biomark_core::{CompareError, FlagSummary, build_comparison};
use biomark_model::{Flag, Gender, LabSnapshot};
use biomark_query::{get_lab_results, get_patient_lab_history};
use biomark_registry::BiomarkerRegistry;
use biomark_store::CsvStore;

use crate::cli::{Cli, OutputArg, PatientArgs, ResultsArgs};

pub struct CommandContext {
    pub store: CsvStore,
    pub registry: BiomarkerRegistry,
    pub output: OutputArg,
}

impl CommandContext {
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let registry = BiomarkerRegistry::from_builtin()
            .context("biomarker registry failed to build")?;
        Ok(Self {
            store: CsvStore::new(&cli.data_dir),
            registry,
            output: cli.output,
        })
    }
}

pub fn run_results(ctx: &CommandContext, args: &ResultsArgs) -> anyhow::Result<()> {
    let gender: Gender = args.gender.into();
    let response = get_lab_results(&ctx.store, &ctx.registry, &args.lab_id, gender)?;

    // Lab values are PHI; they only reach the log stream under --log-data.
    for result in &response.results {
        if result.flag.is_some_and(Flag::is_out_of_range) {
            tracing::debug!(
                biomarker = %result.biomarker_key,
                value = redact_value(&result.value.to_string()),
                "out-of-range result"
            );
        }
    }

    let prior = match &args.with_prior {
        Some(patient_id) => prior_snapshot(ctx, patient_id, gender, &args.lab_id)?,
        None => None,
    };

    if ctx.output == OutputArg::Json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("{}", biomark_report::lab_heading(&response));
    let summary = FlagSummary::from_results(&response.results);
    println!("{}", biomark_report::summary_line(&summary));
    let table = biomark_report::render_single_lab(
        &response,
        &ctx.registry,
        args.filter.into(),
        prior.as_ref(),
    );
    println!("{table}");
    Ok(())
}

pub fn run_history(ctx: &CommandContext, args: &PatientArgs) -> anyhow::Result<()> {
    let response =
        get_patient_lab_history(&ctx.store, &ctx.registry, &args.patient_id, args.gender.into())?;

    if ctx.output == OutputArg::Json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    if response.labs.is_empty() {
        println!("No lab draws on file for patient {}.", args.patient_id);
        return Ok(());
    }
    println!("{}", biomark_report::render_history(&response));
    Ok(())
}

pub fn run_compare(ctx: &CommandContext, args: &PatientArgs) -> anyhow::Result<()> {
    let response =
        get_patient_lab_history(&ctx.store, &ctx.registry, &args.patient_id, args.gender.into())?;

    let comparison = match build_comparison(&response.labs, &ctx.registry) {
        Ok(comparison) => comparison,
        Err(CompareError::InsufficientData { have }) => {
            // A thin history is "no data", not a failure.
            println!("Need at least 2 labs to compare; patient has {have}.");
            return Ok(());
        }
    };

    if ctx.output == OutputArg::Json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
        return Ok(());
    }

    println!("{}", biomark_report::render_comparison(&comparison));
    Ok(())
}

pub fn run_markers(ctx: &CommandContext) -> anyhow::Result<()> {
    if ctx.output == OutputArg::Json {
        let definitions: Vec<_> = ctx
            .registry
            .all_keys()
            .map(|key| ctx.registry.definition_or_fallback(key))
            .collect();
        println!("{}", serde_json::to_string_pretty(&definitions)?);
        return Ok(());
    }

    for category in ctx.registry.categories_in_order() {
        println!("{category}");
        for def in ctx.registry.markers_in_category(category) {
            if def.unit.is_empty() {
                println!("  {:<24} {}", def.key, def.label);
            } else {
                println!("  {:<24} {} ({})", def.key, def.label, def.unit);
            }
        }
    }
    Ok(())
}

/// The snapshot immediately preceding `lab_id` in the patient's history.
fn prior_snapshot(
    ctx: &CommandContext,
    patient_id: &str,
    gender: Gender,
    lab_id: &str,
) -> anyhow::Result<Option<LabSnapshot>> {
    let history = get_patient_lab_history(&ctx.store, &ctx.registry, patient_id, gender)?;
    let position = history.labs.iter().position(|snapshot| snapshot.id == lab_id);
    Ok(position
        .and_then(|index| history.labs.into_iter().nth(index + 1)))
}
