use analytics::AnalyticsEngine;
use anyhow::Context;
use clap::{Parser, Subcommand};
use configuration::Config;
use events::{JournalEvent, run_event_logger};
use std::path::PathBuf;
use storage::JsonFileStore;
use tokio::sync::broadcast;

mod logging;
mod pipeline;
mod summary;

/// The main entry point for the trading journal.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load JOURNAL__* overrides from a .env file, if there is one.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = configuration::load_config(cli.config.as_deref())
        .context("Failed to load journal configuration")?;
    let _log_guard = logging::init(&config.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Generate(args) => handle_generate(args, config).await,
        Commands::Show(args) => handle_show(args, &config),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Performance analytics for a personal trading journal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a configuration file (defaults to ./journal.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recompute analytics from the trades index and store the result.
    Generate(GenerateArgs),
    /// Print the most recently stored analytics.
    Show(ShowArgs),
}

#[derive(Parser)]
struct GenerateArgs {
    /// The journal data directory (overrides `storage.data_dir`).
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Don't print the summary table.
    #[arg(long, short)]
    quiet: bool,
}

#[derive(Parser)]
struct ShowArgs {
    /// The journal data directory (overrides `storage.data_dir`).
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Print the raw JSON document instead of the summary table.
    #[arg(long)]
    json: bool,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn build_store(config: &Config, data_dir: Option<PathBuf>) -> JsonFileStore {
    let storage = &config.storage;
    JsonFileStore::with_paths(
        data_dir.unwrap_or_else(|| storage.data_dir.clone()),
        &storage.trades_index,
        &storage.account_config,
        &storage.analytics_output,
    )
}

/// Runs the analytics pipeline while the event logger listens alongside it.
async fn handle_generate(args: GenerateArgs, config: Config) -> anyhow::Result<()> {
    let store = build_store(&config, args.data_dir);
    let engine = AnalyticsEngine::with_risk_free_rate(config.analytics.risk_free_rate)?;

    let (event_tx, event_rx) = broadcast::channel::<JournalEvent>(16);
    let logger = tokio::spawn(run_event_logger(event_rx));

    tracing::info!(output = %store.analytics_output().display(), "Generating analytics...");

    // The engine is synchronous; keep it off the async worker threads.
    let report = tokio::task::spawn_blocking(move || {
        pipeline::refresh_analytics(&store, &engine, &event_tx)
    })
    .await
    .context("Analytics task panicked")?
    .context("Failed to generate analytics")?;

    // The sender was dropped with the blocking task, so the logger drains and exits.
    logger.await.context("Event logger task panicked")?;

    if !args.quiet {
        println!("{}", summary::summary_table(&report));
    }

    Ok(())
}

fn handle_show(args: ShowArgs, config: &Config) -> anyhow::Result<()> {
    let store = build_store(config, args.data_dir);
    let report = store.load_analytics().with_context(|| {
        format!(
            "No stored analytics at {}; run `journal generate` first",
            store.analytics_output().display()
        )
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Generated at {}", report.generated_at);
        println!("{}", summary::summary_table(&report));
    }

    Ok(())
}
