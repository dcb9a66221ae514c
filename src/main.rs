mod cli;

use clap::Parser;
use riskgate::error::RiskError;
use riskgate::types::report::Status;
use riskgate::{config, engine, input, report, telemetry};
use std::path::{Path, PathBuf};

pub mod exit_code {
    pub const APPROVED: i32 = 0;
    pub const CONDITIONAL: i32 = 1;
    pub const BLOCKED: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn output_format(format: cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn run() -> Result<i32, RiskError> {
    let cli = cli::Cli::parse();

    let loaded = config::load_config(Path::new("."), cli.config.as_deref())?;
    let cfg = loaded.unwrap_or_default();
    let model = cfg.scoring_model()?;

    let level = telemetry::resolve_level(&cfg.telemetry.log_level, cli.verbose, cli.quiet);
    if let Err(e) = telemetry::init(&level) {
        eprintln!("warning: {e}");
    }

    match cli.command {
        cli::Commands::Evaluate(cmd) => {
            let dataset = input::load_dataset(&cmd.input, &model)?;
            let result = engine::evaluate_with(&model, &cmd.app_name, &cmd.version, &dataset)?;

            let rendered = report::render(&result, output_format(cmd.format))?;
            println!("{rendered}");

            let target = match (cmd.output, cmd.save) {
                (Some(path), _) => Some(path),
                (None, true) => Some(PathBuf::from(report::default_file_name(
                    &result.app_name,
                    &result.version,
                ))),
                (None, false) => None,
            };
            if let Some(path) = target {
                let written = report::write_json(&result, &path)?;
                if !cli.quiet {
                    eprintln!("report saved to {}", written.display());
                }
            }

            Ok(match result.status {
                Status::Approved => exit_code::APPROVED,
                Status::Conditional => exit_code::CONDITIONAL,
                Status::Blocked => exit_code::BLOCKED,
            })
        }
        cli::Commands::Model(cmd) => {
            let rendered = report::render_model(&model, output_format(cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::APPROVED)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
