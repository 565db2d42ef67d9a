//! Built-in biomarker table: category -> (key, label, unit).
//!
//! This is the single source of truth for biomarker identity and display
//! metadata. Category order here is display order everywhere; keys must be
//! unique across the whole table (enforced when the registry is built).

pub(crate) type MarkerRow = (&'static str, &'static str, &'static str);

pub(crate) const BIOMARKER_GROUPS: &[(&str, &[MarkerRow])] = &[
    (
        "Hormones",
        &[
            ("total_testosterone", "Total Testosterone", "ng/dL"),
            ("free_testosterone", "Free Testosterone", "pg/mL"),
            ("shbg", "SHBG", "nmol/L"),
            ("estradiol", "Estradiol", "pg/mL"),
            ("progesterone", "Progesterone", "ng/mL"),
            ("dhea_s", "DHEA-S", "µg/dL"),
            ("dht", "DHT", "ng/dL"),
            ("fsh", "FSH", "mIU/mL"),
            ("lh", "LH", "mIU/mL"),
            ("igf_1", "IGF-1", "ng/mL"),
            ("cortisol", "Cortisol", "µg/dL"),
        ],
    ),
    (
        "Thyroid",
        &[
            ("tsh", "TSH", "uIU/mL"),
            ("free_t3", "Free T3", "pg/mL"),
            ("free_t4", "Free T4", "ng/dL"),
            ("tpo_antibody", "TPO Antibody", "IU/mL"),
            ("thyroglobulin_antibody", "Thyroglobulin Antibody", "IU/mL"),
        ],
    ),
    (
        "Blood Sugar & Metabolism",
        &[
            ("glucose", "Glucose", "mg/dL"),
            ("fasting_insulin", "Fasting Insulin", "µIU/mL"),
            ("hemoglobin_a1c", "Hemoglobin A1C", "%"),
            ("uric_acid", "Uric Acid", "mg/dL"),
        ],
    ),
    (
        "Lipids",
        &[
            ("total_cholesterol", "Total Cholesterol", "mg/dL"),
            ("ldl_cholesterol", "LDL", "mg/dL"),
            ("hdl_cholesterol", "HDL", "mg/dL"),
            ("triglycerides", "Triglycerides", "mg/dL"),
            ("vldl_cholesterol", "VLDL", "mg/dL"),
            ("apolipoprotein_b", "Apolipoprotein B", "mg/dL"),
            ("apolipoprotein_a1", "Apolipoprotein A1", "mg/dL"),
            ("lp_a", "Lp(a)", "nmol/L"),
        ],
    ),
    (
        "Vitamins & Minerals",
        &[
            ("vitamin_d", "Vitamin D", "ng/mL"),
            ("vitamin_b12", "Vitamin B12", "pg/mL"),
            ("folate", "Folate", "ng/mL"),
            ("magnesium", "Magnesium", "mg/dL"),
        ],
    ),
    (
        "Inflammation",
        &[
            ("crp_hs", "CRP (hs)", "mg/L"),
            ("esr", "ESR", "mm/hr"),
            ("homocysteine", "Homocysteine", "µmol/L"),
        ],
    ),
    (
        "Liver Function",
        &[
            ("alt", "ALT", "U/L"),
            ("ast", "AST", "U/L"),
            ("alkaline_phosphatase", "Alkaline Phosphatase", "U/L"),
            ("total_bilirubin", "Total Bilirubin", "mg/dL"),
            ("albumin", "Albumin", "g/dL"),
            ("total_protein", "Total Protein", "g/dL"),
            ("ggt", "GGT", "U/L"),
        ],
    ),
    (
        "Kidney Function",
        &[
            ("creatinine", "Creatinine", "mg/dL"),
            ("bun", "BUN", "mg/dL"),
            ("egfr", "eGFR", "mL/min/1.73m²"),
            ("bun_creatinine_ratio", "BUN/Creatinine Ratio", ""),
        ],
    ),
    (
        "Electrolytes",
        &[
            ("sodium", "Sodium", "mmol/L"),
            ("potassium", "Potassium", "mmol/L"),
            ("chloride", "Chloride", "mmol/L"),
            ("co2", "CO2", "mmol/L"),
            ("calcium", "Calcium", "mg/dL"),
        ],
    ),
    (
        "Complete Blood Count",
        &[
            ("wbc", "WBC", "K/µL"),
            ("rbc", "RBC", "M/µL"),
            ("hemoglobin", "Hemoglobin", "g/dL"),
            ("hematocrit", "Hematocrit", "%"),
            ("mcv", "MCV", "fL"),
            ("mch", "MCH", "pg"),
            ("mchc", "MCHC", "g/dL"),
            ("rdw", "RDW", "%"),
            ("platelets", "Platelets", "K/µL"),
            ("neutrophils_percent", "Neutrophils %", "%"),
            ("lymphocytes_percent", "Lymphocytes %", "%"),
            ("monocytes_percent", "Monocytes %", "%"),
            ("eosinophils_percent", "Eosinophils %", "%"),
            ("basophils_percent", "Basophils %", "%"),
            ("neutrophils_absolute", "Neutrophils (abs)", "K/µL"),
            ("lymphocytes_absolute", "Lymphocytes (abs)", "K/µL"),
            ("monocytes_absolute", "Monocytes (abs)", "K/µL"),
            ("eosinophils_absolute", "Eosinophils (abs)", "K/µL"),
            ("basophils_absolute", "Basophils (abs)", "K/µL"),
        ],
    ),
    (
        "Iron Studies",
        &[
            ("iron", "Iron", "µg/dL"),
            ("tibc", "TIBC", "µg/dL"),
            ("iron_saturation", "Iron Saturation", "%"),
            ("ferritin", "Ferritin", "ng/mL"),
        ],
    ),
    (
        "Prostate",
        &[
            ("psa_total", "PSA Total", "ng/mL"),
            ("psa_free", "PSA Free", "ng/mL"),
        ],
    ),
];
