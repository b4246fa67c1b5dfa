use std::io::{self, Write};

use anyhow::{Result, bail};
use tracing::{info, warn};

use super::analyze::clamp_sample;
use super::output::write_text_report;
use super::report::{analysis_config, build_report};
use crate::cli::BatchArgs;
use crate::model::{BatchManifest, ExperimentReport, GroupSample, RawSample, ReportEnvelope};
use crate::stats::AnalysisConfig;
use crate::util::{now_utc_string, read_json_file, write_json_stdout};

pub fn run(args: BatchArgs) -> Result<()> {
    let config = analysis_config(&args.settings)?;
    let manifest: BatchManifest = read_json_file(&args.input)?;

    info!(
        path = %args.input.display(),
        experiments = manifest.experiments.len(),
        "loaded batch manifest"
    );

    let reports = build_reports(manifest, &config)?;
    let significant = reports
        .iter()
        .filter(|report| report.result.is_significant)
        .count();
    info!(
        experiments = reports.len(),
        significant = significant,
        "batch analysis complete"
    );

    if args.settings.json {
        return write_json_stdout(&ReportEnvelope {
            generated_at: now_utc_string(),
            report_count: reports.len(),
            reports,
        });
    }

    let mut output = io::BufWriter::new(io::stdout().lock());
    for (index, report) in reports.iter().enumerate() {
        if index > 0 {
            writeln!(output)?;
        }
        write_text_report(&mut output, report)?;
    }
    output.flush()?;
    Ok(())
}

fn build_reports(manifest: BatchManifest, config: &AnalysisConfig) -> Result<Vec<ExperimentReport>> {
    if manifest.experiments.is_empty() {
        bail!("batch manifest lists no experiments");
    }

    let reports = manifest
        .experiments
        .into_iter()
        .map(|experiment| {
            let control = coerce_raw_sample("control", experiment.control);
            let variant = coerce_raw_sample("variant", experiment.variant);
            build_report(
                Some(experiment.name),
                experiment.channel.unwrap_or_default(),
                control,
                variant,
                config,
            )
        })
        .collect();

    Ok(reports)
}

fn coerce_raw_sample(arm: &str, raw: RawSample) -> GroupSample {
    let trials = coerce_raw_count(arm, "trials", raw.trials);
    let successes = coerce_raw_count(arm, "successes", raw.successes);
    clamp_sample(arm, trials, successes)
}

fn coerce_raw_count(arm: &str, field: &str, raw: i64) -> u64 {
    match u64::try_from(raw) {
        Ok(value) => value,
        Err(_) => {
            warn!(arm, field, raw, "coerced invalid count to 0");
            0
        }
    }
}
