//! CLI argument definitions for the biomark tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use biomark_core::FlagFilter;
use biomark_model::Gender;

#[derive(Parser)]
#[command(
    name = "biomark",
    version,
    about = "Review clinic lab results - flag biomarkers and compare draws over time",
    long_about = "Review clinic lab draws against gender-aware reference ranges.\n\n\
                  Reads labs.csv and reference_ranges.csv from the data directory,\n\
                  flags each biomarker, and renders single-draw, history, and\n\
                  latest-vs-prior comparison views."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory containing labs.csv and reference_ranges.csv.
    #[arg(long = "data-dir", value_name = "DIR", default_value = "data", global = true)]
    pub data_dir: PathBuf,

    /// Output format.
    #[arg(long = "output", value_enum, default_value = "table", global = true)]
    pub output: OutputArg,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow row-level lab values (PHI) in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show one lab draw with per-biomarker flags.
    Results(ResultsArgs),

    /// List a patient's lab draws, most recent first.
    History(PatientArgs),

    /// Compare a patient's draws side by side with deltas.
    Compare(PatientArgs),

    /// List the biomarker registry grouped by category.
    Markers,
}

#[derive(Parser)]
pub struct ResultsArgs {
    /// Lab draw identifier.
    #[arg(value_name = "LAB_ID")]
    pub lab_id: String,

    /// Patient gender, selects the applicable reference ranges.
    #[arg(long = "gender", value_enum)]
    pub gender: GenderArg,

    /// Show only a subset of results.
    #[arg(long = "filter", value_enum, default_value = "all")]
    pub filter: FilterArg,

    /// Add a change column against the patient's immediately prior draw.
    #[arg(long = "with-prior", value_name = "PATIENT_ID")]
    pub with_prior: Option<String>,
}

#[derive(Parser)]
pub struct PatientArgs {
    /// Patient identifier.
    #[arg(value_name = "PATIENT_ID")]
    pub patient_id: String,

    /// Patient gender, selects the applicable reference ranges.
    #[arg(long = "gender", value_enum)]
    pub gender: GenderArg,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FilterArg {
    All,
    Flagged,
    InRange,
}

impl From<FilterArg> for FlagFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => FlagFilter::All,
            FilterArg::Flagged => FlagFilter::Flagged,
            FilterArg::InRange => FlagFilter::InRange,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
