use anyhow::Context;
use clap::{Parser, Subcommand};
use configuration::Settings;
use database::{connect, DbRepository};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use web_server::{run_server, shutdown_signal, AppState};

/// The main entry point for the quiz question service.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the variables may come from the real environment.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => handle_serve(args).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// An HTTP API for quiz questions stored in MongoDB.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect to MongoDB and serve the question API.
    Serve(ServeArgs),
}

#[derive(Parser)]
struct ServeArgs {
    /// Path to the TOML settings file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Address to bind to, overriding the settings (e.g., "127.0.0.1:8080").
    #[arg(long)]
    bind: Option<SocketAddr>,
}

// ==============================================================================
// Serve Command Logic
// ==============================================================================

/// Loads settings, connects to the store and runs the server until shutdown.
async fn handle_serve(args: ServeArgs) -> anyhow::Result<()> {
    let settings = configuration::load_settings_from(&args.config, std::env::vars().collect())
        .context("failed to load settings")?;

    let _log_guard = init_tracing(&settings);

    let addr = match args.bind {
        Some(addr) => addr,
        None => settings.socket_addr()?,
    };

    let client = connect(&settings)
        .await
        .context("failed to connect to MongoDB")?;
    let repository = DbRepository::new(&client, &settings);
    tracing::info!(
        database = %settings.database_name,
        collection = %settings.collection_name,
        "Question store ready."
    );

    let state = AppState::new(Arc::new(repository));
    let served = run_server(addr, state, shutdown_signal()).await;

    client.shutdown().await;
    tracing::info!("Disconnected from MongoDB.");

    served
}

/// Installs the global subscriber. `RUST_LOG` wins over the configured filter.
///
/// The returned guard flushes buffered log lines when dropped.
fn init_tracing(settings: &Settings) -> tracing_appender::non_blocking::WorkerGuard {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .init();

    guard
}
