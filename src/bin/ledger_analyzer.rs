//! Fraud ring analysis CLI for money-transfer ledgers.
//!
//! Loads a JSON ledger, runs the graph analysis pipeline, and writes
//! JSON and text reports.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Context, Result};

use fraudscan::analysis::{self, ingest::ParsedLedger};
use fraudscan::config::AnalysisConfig;

#[derive(Parser)]
#[command(name = "ledger-analyzer")]
#[command(about = "Fraud ring analysis for money-transfer ledgers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the ledger file (JSON array of transaction records)
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory for reports
    #[arg(short, long, default_value = "analysis_output")]
    output: PathBuf,

    /// Optional YAML file with analysis thresholds
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Number of parallel workers (0 = auto-detect)
    #[arg(short = 'j', long, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis and write JSON + text reports
    Analyze {
        /// Distinct-counterparty threshold for fan-in/fan-out hubs
        #[arg(long)]
        fan_threshold: Option<usize>,

        /// Minimum ring length
        #[arg(long)]
        min_cycle_length: Option<usize>,

        /// Maximum ring length
        #[arg(long)]
        max_cycle_length: Option<usize>,

        /// Cap on enumerated cycles; exceeding it marks the report truncated
        #[arg(long)]
        max_cycles: Option<usize>,
    },

    /// Show ledger statistics without running the analysis
    Summary,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    // Set thread pool size
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    log::info!("Loading ledger from {}...", cli.input.display());
    let ledger = load_ledger(&cli.input)?;
    log::info!(
        "Loaded {} transaction records ({} rows skipped)",
        ledger.records.len(),
        ledger.skipped_rows
    );

    match cli.command {
        Commands::Analyze {
            fan_threshold,
            min_cycle_length,
            max_cycle_length,
            max_cycles,
        } => {
            let mut config = match &cli.config {
                Some(path) => fraudscan::config::load_config(path)?,
                None => AnalysisConfig::default(),
            };

            // Command-line flags override file values.
            if let Some(threshold) = fan_threshold {
                config.fan_threshold = threshold;
            }
            if let Some(min) = min_cycle_length {
                config.min_cycle_length = min;
            }
            if let Some(max) = max_cycle_length {
                config.max_cycle_length = max;
            }
            if let Some(cap) = max_cycles {
                config.max_cycles = Some(cap);
            }
            config.validate().context("Invalid analysis configuration")?;

            fs::create_dir_all(&cli.output).with_context(|| {
                format!("Failed to create output directory: {}", cli.output.display())
            })?;

            let report = analysis::analyze_ledger(&ledger.records, &config);

            analysis::generate_json_report(&report, &cli.output.join("fraud_report.json"))?;
            analysis::generate_text_report(&report, &cli.output.join("report.txt"))?;
            analysis::report::print_summary(&report);

            log::info!("Analysis complete. Reports written to {}", cli.output.display());
        }
        Commands::Summary => {
            let unique_senders: std::collections::HashSet<&str> = ledger
                .records
                .iter()
                .map(|r| r.sender_id.as_str())
                .collect();
            let unique_receivers: std::collections::HashSet<&str> = ledger
                .records
                .iter()
                .map(|r| r.receiver_id.as_str())
                .collect();

            println!("\n=== LEDGER SUMMARY ===\n");
            println!("Ledger file: {}", cli.input.display());
            println!("Transaction records: {}", ledger.records.len());
            println!("Skipped rows: {}", ledger.skipped_rows);
            println!("Distinct senders: {}", unique_senders.len());
            println!("Distinct receivers: {}", unique_receivers.len());
            println!();
        }
    }

    Ok(())
}

fn load_ledger(path: &PathBuf) -> Result<ParsedLedger> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read ledger from {}", path.display()))?;

    let rows: Vec<serde_json::Value> =
        serde_json::from_str(&content).context("Failed to parse ledger JSON")?;

    let ledger = analysis::parse_records(&rows)
        .context("Ledger does not match the required transaction schema")?;

    Ok(ledger)
}
