//! Main entry point for the LangLand CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use langland::cli::commands::{self, Commands};
use langland::TranslatorConfig;

/// LangLand - translate text through free public translation APIs
#[derive(Parser, Debug)]
#[command(name = "langland", version, about, long_about = None)]
struct Args {
    /// Config file (TOML or JSON); defaults to LANGLAND_CONFIG if set
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}={}", env!("CARGO_CRATE_NAME"), log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = TranslatorConfig::load(args.config.as_deref())?;

    match args.command {
        Some(Commands::Translate {
            text,
            source_lang,
            target_lang,
            swap,
        }) => {
            commands::handle_translate(config, text, source_lang, target_lang, swap).await?;
        }
        Some(Commands::Providers) => {
            commands::handle_providers(config)?;
        }
        Some(Commands::Server { host, port }) => {
            commands::handle_server(config, host, port).await?;
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}
