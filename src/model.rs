use serde::{Deserialize, Serialize};

use crate::channel::{Channel, ChannelTerms};

/// Observed outcome of one experiment arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GroupSample {
    pub trials: u64,
    pub successes: u64,
}

impl GroupSample {
    /// Builds a sample, capping `successes` at `trials`.
    pub fn clamped(trials: u64, successes: u64) -> Self {
        Self {
            trials,
            successes: successes.min(trials),
        }
    }

    pub fn proportion(&self) -> Option<f64> {
        if self.trials == 0 {
            return None;
        }
        Some(self.successes as f64 / self.trials as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Inconclusive,
    VariantWins,
    ControlWins,
    Tie,
}

impl Winner {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inconclusive => "Inconclusive",
            Self::VariantWins => "Variant Wins",
            Self::ControlWins => "Control Wins",
            Self::Tie => "Tie",
        }
    }

    pub fn is_decided(self) -> bool {
        !matches!(self, Self::Inconclusive)
    }
}

/// Everything derived from a control/variant pair. Rates, uplifts and
/// interval bounds are percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub control_rate: f64,
    pub variant_rate: f64,
    pub absolute_uplift: f64,
    pub relative_uplift_percent: f64,
    pub z_score: f64,
    pub p_value: f64,
    pub is_significant: bool,
    pub confidence_level: f64,
    pub control_ci: ConfidenceInterval,
    pub variant_ci: ConfidenceInterval,
    pub winner: Winner,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperimentReport {
    pub name: Option<String>,
    pub channel: Channel,
    pub terms: ChannelTerms,
    pub alpha: f64,
    pub z_critical: f64,
    pub control: GroupSample,
    pub variant: GroupSample,
    pub result: TestResult,
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportEnvelope {
    pub generated_at: String,
    pub report_count: usize,
    pub reports: Vec<ExperimentReport>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawSample {
    pub trials: i64,
    pub successes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchExperiment {
    pub name: String,
    #[serde(default)]
    pub channel: Option<Channel>,
    pub control: RawSample,
    pub variant: RawSample,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchManifest {
    pub experiments: Vec<BatchExperiment>,
}
