//! Two-proportion significance testing for A/B experiments.
//!
//! Every function here is pure and total: degenerate inputs (empty arms,
//! zero variance) produce defined "no evidence" results instead of errors.
//! Callers are responsible for clamping raw input into valid
//! [`GroupSample`]s before handing them over.

mod decision;
mod interval;
mod normal;
mod rates;
mod ztest;

use serde::{Deserialize, Serialize};

use crate::model::{GroupSample, TestResult};

pub use self::decision::winner_decision;
pub use self::interval::{confidence_interval, confidence_interval_95};
pub use self::normal::normal_cdf;
pub use self::rates::{absolute_uplift, rate, relative_uplift};
pub use self::ztest::{ZTest, two_proportion_z_test};

pub const DEFAULT_ALPHA: f64 = 0.05;
pub const DEFAULT_Z_CRITICAL: f64 = 1.96;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Significance threshold for the two-tailed p-value.
    pub alpha: f64,
    /// Critical value used for per-arm confidence intervals.
    pub z_critical: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            z_critical: DEFAULT_Z_CRITICAL,
        }
    }
}

impl AnalysisConfig {
    /// Confidence level implied by `alpha`, in percent.
    pub fn confidence_percent(&self) -> f64 {
        (1.0 - self.alpha) * 100.0
    }
}

pub fn analyze(control: GroupSample, variant: GroupSample, config: &AnalysisConfig) -> TestResult {
    let control_rate = rate(control);
    let variant_rate = rate(variant);
    let test = two_proportion_z_test(control, variant, config.alpha);

    TestResult {
        control_rate,
        variant_rate,
        absolute_uplift: absolute_uplift(control_rate, variant_rate),
        relative_uplift_percent: relative_uplift(control_rate, variant_rate),
        z_score: test.z_score,
        p_value: test.p_value,
        is_significant: test.is_significant,
        confidence_level: test.confidence_level,
        control_ci: confidence_interval(control, config.z_critical),
        variant_ci: confidence_interval(variant, config.z_critical),
        winner: winner_decision(test.is_significant, control_rate, variant_rate),
    }
}
