mod config;

use anyhow::{Context, Result};
use clap::Parser;
use config::Settings;
use prefixnet_core::{classify_with, ClassifyConfig, OperandWidth, OverlapPolicy};
use prefixnet_render::{render_report, OutputFormat, RenderOptions};
use std::path::PathBuf;
use tracing::info;

/// Print the cell layout of a Han-Carlson parallel-prefix carry network
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Operand width in bits (default 8)
    width: Option<String>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// How to handle slots matching several rules: all, priority
    #[arg(long)]
    policy: Option<OverlapPolicy>,

    /// Output format: text, json
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Append cell counts
    #[arg(long)]
    stats: bool,

    /// Classify stages in parallel
    #[arg(long)]
    parallel: bool,

    /// Settings file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let settings = match &cli.config {
        Some(path) => config::from_path(path)?,
        None => Settings::default(),
    };

    let width = resolve_width(cli.width.as_deref(), &settings)?;
    let classify_config = ClassifyConfig {
        policy: cli.policy.or(settings.policy).unwrap_or_default(),
        parallel: cli.parallel || settings.parallel,
    };
    let options = RenderOptions {
        format: cli.format.or(settings.format).unwrap_or_default(),
        stats: cli.stats || settings.stats,
    };

    info!(
        "Classifying {} bits with policy {}",
        width, classify_config.policy
    );

    let network = classify_with(width, &classify_config);
    let report = render_report(&network, options).context("Failed to render network")?;
    print!("{}", report);

    Ok(())
}

/// Positional argument first, then the settings file, then 8
fn resolve_width(arg: Option<&str>, settings: &Settings) -> Result<OperandWidth> {
    if let Some(arg) = arg {
        return Ok(arg.parse::<OperandWidth>()?);
    }
    match settings.width {
        Some(bits) => OperandWidth::new(bits).context("Invalid width in config file"),
        None => Ok(OperandWidth::default()),
    }
}
