use serde::{Deserialize, Serialize};

/// Clinical classification of a single biomarker value against its
/// reference and optimal ranges.
///
/// A value with no applicable reference range carries no flag at all
/// (`Option<Flag>::None`), which is distinct from `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    High,
    Low,
    BorderlineHigh,
    BorderlineLow,
    Optimal,
    Normal,
}

impl Flag {
    pub fn as_str(self) -> &'static str {
        match self {
            Flag::High => "high",
            Flag::Low => "low",
            Flag::BorderlineHigh => "borderline_high",
            Flag::BorderlineLow => "borderline_low",
            Flag::Optimal => "optimal",
            Flag::Normal => "normal",
        }
    }

    /// Out-of-range flags that warrant provider follow-up.
    pub fn is_out_of_range(self) -> bool {
        matches!(self, Flag::High | Flag::Low)
    }

    pub fn is_borderline(self) -> bool {
        matches!(self, Flag::BorderlineHigh | Flag::BorderlineLow)
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
