//! wikidata-people CLI
//!
//! Usage:
//!   wdp <input.nt.gz>
//!   wdp <input.nt.gz> --output-dir people --summary stats.json
//!   wdp <input.nt.gz> --config wdp.toml
//!
//! Download the Wikidata truthy dump first:
//! https://dumps.wikimedia.org/other/wikibase/wikidatawiki/latest-truthy.nt.gz

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wdp_core::{AppConfig, LoggingConfig};

#[derive(Parser)]
#[command(name = "wdp")]
#[command(about = "Extract person relations from a Wikidata truthy dump")]
#[command(version)]
struct Cli {
    /// Path to the gzip-compressed N-Triples dump
    input: PathBuf,

    /// Directory receiving one file per relation (default: people)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Create the output directory if it does not exist
    #[arg(long)]
    create_dir: bool,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write run statistics as JSON to this file
    #[arg(long)]
    summary: Option<PathBuf>,
}

impl Cli {
    /// Resolve configuration: file or defaults, then environment, then flags
    fn load_config(&self) -> anyhow::Result<AppConfig> {
        let config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };
        let mut config = config.with_env_override()?;

        if let Some(dir) = &self.output_dir {
            config.output.dir = dir.clone();
        }
        if self.create_dir {
            config.output.create_dir = true;
        }

        Ok(config)
    }
}

/// Initialize tracing on stderr; `RUST_LOG` wins over the configured level
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.json_format {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    init_tracing(&config.logging);

    let stats = wdp_extractor::run(&config, &cli.input)
        .with_context(|| format!("Extraction from {} failed", cli.input.display()))?;

    if let Some(path) = &cli.summary {
        let json = serde_json::to_string_pretty(&stats)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write summary to {}", path.display()))?;
        tracing::info!("Summary written to {}", path.display());
    }

    Ok(())
}
