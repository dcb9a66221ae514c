use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "riskgate",
    version,
    about = "Quality risk scoring and release gating for software applications"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file to use instead of ./riskgate.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score an application's measurements and derive its release status
    Evaluate(EvaluateCommand),
    /// Print the active scoring model
    Model(ModelCommand),
}

#[derive(Args)]
pub struct EvaluateCommand {
    pub app_name: String,
    pub version: String,
    /// Measurements file (.csv or .json)
    pub input: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Write the JSON report to this path
    #[arg(short, long, conflicts_with = "save")]
    pub output: Option<PathBuf>,
    /// Write the JSON report to report_<app>_<version>.json
    #[arg(long)]
    pub save: bool,
}

#[derive(Args)]
pub struct ModelCommand {
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
