//! Finstat batch reporter
//!
//! Reads a transaction batch from a CSV file, runs the statement engine,
//! and prints the statement bundle as JSON on stdout. Warnings and omitted
//! statements are logged as they are found; they also travel inside the
//! JSON output for downstream consumers.
//!
//! Usage: finstat <batch.csv>

use std::fs::File;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finstat_core::engine::{EngineConfig, ReportEngine};
use finstat_core::ingest;
use finstat_shared::AppConfig;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finstat=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    let path = std::env::args()
        .nth(1)
        .context("Usage: finstat <batch.csv>")?;
    let file = File::open(&path).with_context(|| format!("Failed to open {path}"))?;

    let entries = ingest::read_entries(file).context("Batch rejected")?;
    info!(rows = entries.len(), path = %path, "Batch ingested");

    let engine = ReportEngine::new(EngineConfig::from_app_config(&config)?);
    let statements = engine.run(&entries);

    for omitted in &statements.omitted {
        warn!(statement = %omitted.kind, reason = %omitted.reason, "Statement omitted");
    }
    for warning in &statements.warnings {
        warn!(%warning, "Warning");
    }
    info!(
        warnings = statements.warnings.len(),
        omitted = statements.omitted.len(),
        "Statements generated"
    );

    println!("{}", serde_json::to_string_pretty(&statements)?);

    Ok(())
}
