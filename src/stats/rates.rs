use crate::model::GroupSample;

/// Conversion rate in percent; zero when the sample has no trials.
pub fn rate(sample: GroupSample) -> f64 {
    sample
        .proportion()
        .map(|proportion| proportion * 100.0)
        .unwrap_or(0.0)
}

/// Percentage change of the variant rate relative to the control rate.
pub fn relative_uplift(control_rate: f64, variant_rate: f64) -> f64 {
    if control_rate > 0.0 {
        (variant_rate - control_rate) / control_rate * 100.0
    } else {
        0.0
    }
}

/// Difference between the two rates in percentage points.
pub fn absolute_uplift(control_rate: f64, variant_rate: f64) -> f64 {
    variant_rate - control_rate
}
