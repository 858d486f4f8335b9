//! vscore - CVSS 4.0 vulnerability scoring from the command line
//!
//! Reads a metrics record as JSON (file or stdin), evaluates it and prints
//! the sub-scores, severity and canonical vector string.

mod assessment;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

use assessment::Assessment;
use vscore_common::{Config, LogConfig, LogFormat};
use vscore_core::MetricsRecord;
use vscore_engine::evaluate;

/// vscore CVSS 4.0 calculator
#[derive(Parser, Debug)]
#[command(name = "vscore")]
#[command(version)]
#[command(about = "CVSS 4.0 vulnerability scoring engine", long_about = None)]
struct Args {
    /// Metrics record JSON file (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "/etc/vscore/vscore.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log format (pretty, json, compact)
    #[arg(long, default_value = "pretty")]
    log_format: String,

    /// Output format (text, json), overrides config
    #[arg(short, long)]
    output: Option<String>,

    /// Assessment name attached to JSON output
    #[arg(long, default_value = "unnamed")]
    name: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_config = LogConfig::new()
        .level(&args.log_level)
        .format(LogFormat::from_name(&args.log_format));
    vscore_common::init_logging_with_config(log_config);

    // Load configuration
    let config = if std::path::Path::new(&args.config).exists() {
        Config::from_file(&args.config)?
    } else {
        Config::default()
    };
    let config = config.merge_env();

    let output_format = args.output.unwrap_or_else(|| config.output.format.clone());

    // Read the metrics record
    let data = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read metrics from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read metrics from stdin")?;
            buf
        }
    };

    let record = MetricsRecord::from_json(&data).context("Invalid metrics record")?;
    let evaluation = evaluate(&record);

    info!(vector = %evaluation.vector, "record evaluated");

    match output_format.as_str() {
        "json" => {
            let assessment = Assessment::new(args.name, record, evaluation);
            println!("{}", serde_json::to_string_pretty(&assessment)?);
        }
        _ => print_text(&evaluation, config.output.show_breakdown),
    }

    Ok(())
}

fn print_text(evaluation: &vscore_engine::Evaluation, show_breakdown: bool) {
    let scores = &evaluation.scores;

    println!(
        "{} ({:.1}) - {}",
        scores.severity,
        scores.final_score,
        scores.severity.description()
    );
    if show_breakdown {
        println!("  base:          {:.1}", scores.base_score);
        println!("  threat:        {:.1}", scores.threat_score);
        println!("  environmental: {:.1}", scores.environmental_score);
        println!("  supplemental:  {:.1}", scores.supplemental_score);
    }
    println!("{}", evaluation.vector);
}
