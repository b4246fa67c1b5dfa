use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::channel::Channel;
use crate::stats::{DEFAULT_ALPHA, DEFAULT_Z_CRITICAL};

#[derive(Parser, Debug)]
#[command(
    name = "abcalc",
    version,
    about = "Significance calculator for two-arm A/B experiments"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare one control/variant pair
    Analyze(AnalyzeArgs),
    /// Compare every experiment listed in a JSON manifest
    Batch(BatchArgs),
    /// List field terminology per channel
    Channels(ChannelsArgs),
}

#[derive(Args, Debug, Clone)]
pub struct TestSettings {
    #[arg(long, default_value_t = DEFAULT_ALPHA)]
    pub alpha: f64,

    #[arg(long, default_value_t = DEFAULT_Z_CRITICAL)]
    pub z_critical: f64,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[arg(long, default_value = "10000")]
    pub control_trials: String,

    #[arg(long, default_value = "450")]
    pub control_successes: String,

    #[arg(long, default_value = "10000")]
    pub variant_trials: String,

    #[arg(long, default_value = "520")]
    pub variant_successes: String,

    /// Control sample as SUCCESSES/TRIALS, overriding the individual flags
    #[arg(long)]
    pub control: Option<String>,

    /// Variant sample as SUCCESSES/TRIALS, overriding the individual flags
    #[arg(long)]
    pub variant: Option<String>,

    #[arg(long, value_enum, default_value_t = Channel::Web)]
    pub channel: Channel,

    #[command(flatten)]
    pub settings: TestSettings,
}

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[arg(long)]
    pub input: PathBuf,

    #[command(flatten)]
    pub settings: TestSettings,
}

#[derive(Args, Debug, Clone)]
pub struct ChannelsArgs {
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
