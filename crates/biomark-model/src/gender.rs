use serde::{Deserialize, Serialize};

/// Gender dimension of a reference range.
///
/// Stored range rows use `Male`, `Female`, or `Both`; queries always filter
/// by a concrete gender, and `Both` rows apply to either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Both,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Both => "Both",
        }
    }

    /// Whether a range row with this gender applies to a query for `query`.
    pub fn applies_to(self, query: Gender) -> bool {
        self == Gender::Both || self == query
    }

    /// `true` for `Male`/`Female` rows, `false` for `Both`.
    pub fn is_specific(self) -> bool {
        self != Gender::Both
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unrecognized gender value: {value}")]
pub struct ParseGenderError {
    pub value: String,
}

impl std::str::FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "both" => Ok(Gender::Both),
            _ => Err(ParseGenderError {
                value: s.to_string(),
            }),
        }
    }
}
