use std::io::Write;

use anyhow::Result;

use crate::model::{ConfidenceInterval, ExperimentReport, GroupSample};
use crate::stats::normal_cdf;

const BAR_WIDTH: usize = 40;

pub(super) fn write_text_report<W: Write>(output: &mut W, report: &ExperimentReport) -> Result<()> {
    let terms = report.terms;
    let result = &report.result;
    let ci_label = interval_label(report.z_critical);

    if let Some(name) = &report.name {
        writeln!(output, "Experiment: {name}")?;
    }
    writeln!(output, "Channel: {}", report.channel.as_str())?;

    for (arm, sample, rate, interval) in [
        ("Control", report.control, result.control_rate, result.control_ci),
        ("Variant", report.variant, result.variant_rate, result.variant_ci),
    ] {
        writeln!(
            output,
            "{arm}: {}={} {}={} {}={rate:.2}% ({ci_label}: {})",
            terms.trials_label,
            sample.trials,
            terms.successes_label,
            sample.successes,
            terms.rate_label,
            format_interval(interval)
        )?;
    }

    if result.winner.is_decided() {
        writeln!(
            output,
            "Result: {} ({:.1}% confidence)",
            result.winner.as_str(),
            result.confidence_level
        )?;
    } else {
        writeln!(output, "Result: {}", result.winner.as_str())?;
    }

    writeln!(
        output,
        "Relative Uplift: {} ({:.2}pp absolute change)",
        format_signed_percent(result.relative_uplift_percent),
        result.absolute_uplift.abs()
    )?;
    writeln!(output, "Z-Score: {:.4}", result.z_score)?;
    writeln!(output, "P-Value: {:.4}", result.p_value)?;
    writeln!(
        output,
        "Significant (alpha={}): {}",
        report.alpha,
        if result.is_significant { "Yes" } else { "No" }
    )?;
    writeln!(
        output,
        "Sample Size: {}",
        report.control.trials.saturating_add(report.variant.trials)
    )?;
    if let Some(recommendation) = &report.recommendation {
        writeln!(output, "Recommendation: {recommendation}")?;
    }

    writeln!(output, "Visual comparison:")?;
    write_bar(output, "Control", report.control, result.control_rate)?;
    write_bar(output, "Variant", report.variant, result.variant_rate)?;

    Ok(())
}

fn write_bar<W: Write>(output: &mut W, arm: &str, sample: GroupSample, rate: f64) -> Result<()> {
    writeln!(
        output,
        "  {arm:<7} [{}] {rate:.2}% {}",
        render_bar(rate),
        sample.successes
    )?;
    Ok(())
}

/// Bar fill is twice the rate so typical single-digit rates stay visible.
pub(super) fn render_bar(rate: f64) -> String {
    let fill = (rate * 2.0).clamp(0.0, 100.0);
    let filled = ((fill / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// Names the interval by its two-sided coverage, e.g. "95% CI" for 1.96.
pub(super) fn interval_label(z_critical: f64) -> String {
    let coverage = (2.0 * normal_cdf(z_critical) - 1.0) * 100.0;
    format!("{coverage:.0}% CI")
}

pub(super) fn format_interval(interval: ConfidenceInterval) -> String {
    format!("{:.2}% - {:.2}%", interval.lower, interval.upper)
}

pub(super) fn format_signed_percent(value: f64) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{value:.2}%")
}

#[cfg(test)]
mod tests {
    use super::{
        BAR_WIDTH, format_interval, format_signed_percent, interval_label, render_bar,
        write_text_report,
    };
    use crate::channel::Channel;
    use crate::commands::report::build_report;
    use crate::model::{ConfidenceInterval, GroupSample};
    use crate::stats::AnalysisConfig;

    #[test]
    fn render_bar_doubles_rate_and_saturates() {
        assert_eq!(render_bar(0.0), ".".repeat(BAR_WIDTH));
        assert_eq!(render_bar(25.0), format!("{}{}", "#".repeat(20), ".".repeat(20)));
        assert_eq!(render_bar(80.0), "#".repeat(BAR_WIDTH));
    }

    #[test]
    fn interval_label_reflects_critical_value() {
        assert_eq!(interval_label(1.96), "95% CI");
        assert_eq!(interval_label(2.576), "99% CI");
        assert_eq!(interval_label(1.645), "90% CI");
    }

    #[test]
    fn signed_percent_marks_gains() {
        assert_eq!(format_signed_percent(15.555_6), "+15.56%");
        assert_eq!(format_signed_percent(0.0), "+0.00%");
        assert_eq!(format_signed_percent(-3.2), "-3.20%");
    }

    #[test]
    fn interval_formats_both_bounds() {
        let interval = ConfidenceInterval {
            lower: 4.093_684,
            upper: 4.906_316,
        };
        assert_eq!(format_interval(interval), "4.09% - 4.91%");
    }

    #[test]
    fn text_report_uses_channel_labels() {
        let report = build_report(
            None,
            Channel::Email,
            GroupSample::clamped(10_000, 450),
            GroupSample::clamped(10_000, 520),
            &AnalysisConfig::default(),
        );

        let mut buffer = Vec::new();
        write_text_report(&mut buffer, &report).expect("report should render");
        let text = String::from_utf8(buffer).expect("report should be utf-8");

        assert!(text.contains("Control: Sends=10000 Clicks=450 Click Rate=4.50% (95% CI: 4.09% - 4.91%)"));
        assert!(text.contains("Result: Variant Wins (97.9% confidence)"));
        assert!(text.contains("Relative Uplift: +15.56% (0.70pp absolute change)"));
        assert!(text.contains("Z-Score: 2.3041"));
        assert!(text.contains("P-Value: 0.0212"));
        assert!(text.contains("Significant (alpha=0.05): Yes"));
        assert!(text.contains("Sample Size: 20000\n"));
        assert!(!text.contains("Experiment:"));
    }

    #[test]
    fn inconclusive_report_omits_confidence() {
        let arm = GroupSample::clamped(1_000, 100);
        let report = build_report(
            Some("identical".to_string()),
            Channel::Web,
            arm,
            arm,
            &AnalysisConfig::default(),
        );

        let mut buffer = Vec::new();
        write_text_report(&mut buffer, &report).expect("report should render");
        let text = String::from_utf8(buffer).expect("report should be utf-8");

        assert!(text.starts_with("Experiment: identical\n"));
        assert!(text.contains("Result: Inconclusive\n"));
        assert!(text.contains("Significant (alpha=0.05): No"));
        assert!(text.contains("Sample Size: 2000\n"));
        assert!(text.contains("not statistically significant at the 95% confidence level"));
    }
}
