use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hashlink::{config, server};

/// Checksum-keyed URL shortener and its key-value storage facade.
#[derive(Parser)]
#[command(name = "hashlink")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the key-value storage facade
    Storage {
        /// Listen address, overrides STORAGE_LISTEN
        #[arg(short, long)]
        listen: Option<String>,
    },

    /// Run the shortening and redirect service
    Shortener {
        /// Listen address, overrides SHORTENER_LISTEN
        #[arg(short, long)]
        listen: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Storage { listen } => {
            let mut config = config::StorageConfig::from_env();
            if let Some(listen) = listen {
                config.listen_addr = listen;
            }
            config.validate()?;

            init_tracing(&config.log_level, &config.log_format);
            config.print_summary();

            server::run_storage(config).await
        }
        Commands::Shortener { listen } => {
            let mut config = config::ShortenerConfig::from_env();
            if let Some(listen) = listen {
                config.listen_addr = listen;
            }
            config.validate()?;

            init_tracing(&config.log_level, &config.log_format);
            config.print_summary();

            server::run_shortener(config).await
        }
    }
}

fn init_tracing(level: &str, format: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    if format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
