//! Droplink CLI entry point.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use droplink_core::config::{AppConfig, LoggingConfig};

#[derive(Parser)]
#[command(name = "droplink", about = "Upload-and-link file service", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server.
    Serve {
        /// Configuration overlay to merge over `config/default.toml`.
        #[arg(long, default_value = "default")]
        env: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Serve { env } => serve(&env).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn serve(env: &str) -> Result<(), droplink_core::AppError> {
    let config = AppConfig::load(env)?;
    init_tracing(&config.logging);
    droplink_api::run_server(config).await
}

/// Initialize the tracing subscriber. `RUST_LOG` wins over the configured
/// level when set.
fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    if config.format == "json" {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
