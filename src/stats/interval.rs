use super::DEFAULT_Z_CRITICAL;
use crate::model::{ConfidenceInterval, GroupSample};

/// Wald interval around the observed rate, in percent, clamped to [0, 100].
pub fn confidence_interval(sample: GroupSample, z_critical: f64) -> ConfidenceInterval {
    let Some(rate) = sample.proportion() else {
        return ConfidenceInterval::default();
    };

    let se = (rate * (1.0 - rate) / sample.trials as f64).sqrt();
    ConfidenceInterval {
        lower: ((rate - z_critical * se) * 100.0).max(0.0),
        upper: ((rate + z_critical * se) * 100.0).min(100.0),
    }
}

pub fn confidence_interval_95(sample: GroupSample) -> ConfidenceInterval {
    confidence_interval(sample, DEFAULT_Z_CRITICAL)
}
