use anyhow::{Result, bail};

use crate::channel::Channel;
use crate::cli::TestSettings;
use crate::model::{ExperimentReport, GroupSample, Winner};
use crate::stats::{AnalysisConfig, analyze};

pub(super) fn analysis_config(settings: &TestSettings) -> Result<AnalysisConfig> {
    if !settings.alpha.is_finite() || settings.alpha <= 0.0 || settings.alpha >= 1.0 {
        bail!("--alpha must lie strictly between 0 and 1, got {}", settings.alpha);
    }
    if !settings.z_critical.is_finite() || settings.z_critical <= 0.0 {
        bail!("--z-critical must be positive, got {}", settings.z_critical);
    }

    Ok(AnalysisConfig {
        alpha: settings.alpha,
        z_critical: settings.z_critical,
    })
}

pub(super) fn build_report(
    name: Option<String>,
    channel: Channel,
    control: GroupSample,
    variant: GroupSample,
    config: &AnalysisConfig,
) -> ExperimentReport {
    let result = analyze(control, variant, config);

    ExperimentReport {
        name,
        channel,
        terms: channel.terms(),
        alpha: config.alpha,
        z_critical: config.z_critical,
        control,
        variant,
        recommendation: recommendation(result.winner, config),
        result,
    }
}

pub(super) fn recommendation(winner: Winner, config: &AnalysisConfig) -> Option<String> {
    match winner {
        Winner::Inconclusive => Some(format!(
            "The test results are not statistically significant at the {:.0}% confidence level. \
             Consider running the test longer or with more traffic to reach significance.",
            config.confidence_percent()
        )),
        Winner::VariantWins => Some(
            "The variant shows a statistically significant improvement over the control. \
             Consider implementing this variation."
                .to_string(),
        ),
        Winner::ControlWins => Some(
            "The control performs significantly better than the variant. \
             Keep the current version or test a different variation."
                .to_string(),
        ),
        Winner::Tie => None,
    }
}
