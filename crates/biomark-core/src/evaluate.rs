use biomark_model::Flag;

/// Margin fraction of the reference span treated as borderline.
const BORDERLINE_FRACTION: f64 = 0.1;

/// Classify a biomarker value against its reference and optimal bounds.
///
/// Check order is load-bearing: out-of-range beats borderline beats optimal.
/// Borderline applies only when both reference bounds are present; the
/// margin is 10% of the span, so a degenerate span (`ref_high == ref_low`)
/// reduces the borderline checks to boundary-equality checks, which is
/// intentional. Both boundary comparisons are strict: a value exactly at
/// `ref_low + margin` is not borderline.
///
/// Callers that have no reference range at all must not call this — an
/// unflagged result (`None`) is distinct from `Normal`.
pub fn evaluate_flag(
    value: f64,
    ref_low: Option<f64>,
    ref_high: Option<f64>,
    optimal_low: Option<f64>,
    optimal_high: Option<f64>,
) -> Flag {
    if let Some(low) = ref_low {
        if value < low {
            return Flag::Low;
        }
    }
    if let Some(high) = ref_high {
        if value > high {
            return Flag::High;
        }
    }
    if let (Some(low), Some(high)) = (ref_low, ref_high) {
        let margin = (high - low) * BORDERLINE_FRACTION;
        if value < low + margin {
            return Flag::BorderlineLow;
        }
        if value > high - margin {
            return Flag::BorderlineHigh;
        }
    }
    if let (Some(low), Some(high)) = (optimal_low, optimal_high) {
        if value >= low && value <= high {
            return Flag::Optimal;
        }
    }
    Flag::Normal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_low_is_low_regardless_of_optimal() {
        let flag = evaluate_flag(25.0, Some(30.0), Some(100.0), Some(20.0), Some(40.0));
        assert_eq!(flag, Flag::Low);
    }

    #[test]
    fn above_high_is_high() {
        assert_eq!(
            evaluate_flag(120.0, Some(30.0), Some(100.0), None, None),
            Flag::High
        );
    }

    #[test]
    fn boundary_value_is_not_borderline() {
        // span 300..1000, margin 70: exactly 370 fails the strict < check.
        assert_eq!(
            evaluate_flag(370.0, Some(300.0), Some(1000.0), None, None),
            Flag::Normal
        );
        assert_eq!(
            evaluate_flag(369.9, Some(300.0), Some(1000.0), None, None),
            Flag::BorderlineLow
        );
        assert_eq!(
            evaluate_flag(930.0, Some(300.0), Some(1000.0), None, None),
            Flag::Normal
        );
        assert_eq!(
            evaluate_flag(930.1, Some(300.0), Some(1000.0), None, None),
            Flag::BorderlineHigh
        );
    }

    #[test]
    fn degenerate_span_has_zero_margin() {
        // ref_low == ref_high: only the exact boundary value is in range,
        // and it is classified by the (zero-margin) borderline checks.
        assert_eq!(
            evaluate_flag(5.0, Some(5.0), Some(5.0), None, None),
            Flag::Normal
        );
        assert_eq!(
            evaluate_flag(4.9, Some(5.0), Some(5.0), None, None),
            Flag::Low
        );
    }

    #[test]
    fn borderline_beats_optimal() {
        // Value is inside the optimal range but also within the low margin.
        assert_eq!(
            evaluate_flag(31.0, Some(30.0), Some(50.0), Some(30.0), Some(45.0)),
            Flag::BorderlineLow
        );
    }

    #[test]
    fn optimal_requires_both_bounds() {
        assert_eq!(
            evaluate_flag(40.0, None, None, Some(30.0), None),
            Flag::Normal
        );
        assert_eq!(
            evaluate_flag(40.0, None, None, Some(30.0), Some(45.0)),
            Flag::Optimal
        );
    }

    #[test]
    fn single_bound_skips_borderline() {
        // Only a high bound: in-range values are never borderline.
        assert_eq!(
            evaluate_flag(99.0, None, Some(100.0), None, None),
            Flag::Normal
        );
    }
}
