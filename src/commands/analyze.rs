use std::io::{self, Write};

use anyhow::{Context, Result};
use regex::Regex;
use tracing::{info, warn};

use super::output::write_text_report;
use super::report::{analysis_config, build_report};
use crate::cli::AnalyzeArgs;
use crate::model::{GroupSample, ReportEnvelope};
use crate::util::{now_utc_string, parse_count_lenient, write_json_stdout};

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let config = analysis_config(&args.settings)?;
    let pattern = shorthand_pattern()?;

    let control = resolve_sample(
        "control",
        args.control.as_deref(),
        &args.control_trials,
        &args.control_successes,
        &pattern,
    )?;
    let variant = resolve_sample(
        "variant",
        args.variant.as_deref(),
        &args.variant_trials,
        &args.variant_successes,
        &pattern,
    )?;

    info!(
        channel = args.channel.as_str(),
        control_trials = control.trials,
        control_successes = control.successes,
        variant_trials = variant.trials,
        variant_successes = variant.successes,
        alpha = config.alpha,
        "analyzing experiment"
    );

    let report = build_report(None, args.channel, control, variant, &config);
    info!(
        winner = report.result.winner.as_str(),
        p_value = report.result.p_value,
        "analysis complete"
    );

    if args.settings.json {
        return write_json_stdout(&ReportEnvelope {
            generated_at: now_utc_string(),
            report_count: 1,
            reports: vec![report],
        });
    }

    let mut output = io::BufWriter::new(io::stdout().lock());
    write_text_report(&mut output, &report)?;
    output.flush()?;
    Ok(())
}

fn shorthand_pattern() -> Result<Regex> {
    Regex::new(r"^\s*(\d+)\s*/\s*(\d+)\s*$").context("failed to compile sample shorthand regex")
}

fn resolve_sample(
    arm: &str,
    shorthand: Option<&str>,
    raw_trials: &str,
    raw_successes: &str,
    pattern: &Regex,
) -> Result<GroupSample> {
    let (trials, successes) = match shorthand {
        Some(value) => parse_shorthand(value, pattern)
            .with_context(|| format!("invalid --{arm} sample: {value}"))?,
        None => (
            parse_count_lenient(&format!("{arm}_trials"), raw_trials),
            parse_count_lenient(&format!("{arm}_successes"), raw_successes),
        ),
    };

    Ok(clamp_sample(arm, trials, successes))
}

/// Parses `SUCCESSES/TRIALS`, the order a rate is usually written in.
fn parse_shorthand(value: &str, pattern: &Regex) -> Result<(u64, u64)> {
    let captures = pattern
        .captures(value)
        .context("expected SUCCESSES/TRIALS, e.g. 450/10000")?;

    let successes = captures
        .get(1)
        .map(|m| m.as_str())
        .context("missing successes capture")?
        .parse::<u64>()
        .context("successes out of range")?;

    let trials = captures
        .get(2)
        .map(|m| m.as_str())
        .context("missing trials capture")?
        .parse::<u64>()
        .context("trials out of range")?;

    Ok((trials, successes))
}

pub(super) fn clamp_sample(arm: &str, trials: u64, successes: u64) -> GroupSample {
    let sample = GroupSample::clamped(trials, successes);
    if sample.successes != successes {
        warn!(
            arm,
            trials,
            successes,
            clamped = sample.successes,
            "successes exceed trials; clamped"
        );
    }
    sample
}
