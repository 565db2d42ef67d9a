pub mod compare;
pub mod evaluate;
pub mod history;
pub mod ranges;
pub mod summary;
pub mod transform;

pub use compare::{
    CompareError, ComparisonCategory, ComparisonColumn, ComparisonRow, ComparisonTable, Delta,
    Direction, build_comparison, delta_between,
};
pub use evaluate::evaluate_flag;
pub use history::{build_history, build_snapshot};
pub use ranges::{RangeConflict, RangeIndex, resolve_ranges};
pub use summary::{FlagFilter, FlagSummary, group_by_category};
pub use transform::{parse_numeric, transform_lab};
