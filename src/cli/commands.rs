//! CLI command definitions and handlers

use clap::Subcommand;
use std::io::Read;

use crate::core::client::FallbackTranslator;
use crate::core::config::TranslatorConfig;
use crate::core::models::{LanguagePair, TranslationRequest, TranslationResult};

/// Commands for LangLand
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate text (reads stdin when TEXT is omitted)
    Translate {
        /// Text to translate
        text: Option<String>,

        /// Source language (default from config: en)
        #[arg(short, long)]
        source_lang: Option<String>,

        /// Target language (default from config: tr)
        #[arg(short, long)]
        target_lang: Option<String>,

        /// Swap source and target before translating
        #[arg(long)]
        swap: bool,
    },

    /// List translation providers in fallback order
    Providers,

    /// Start HTTP API server
    Server {
        /// Bind address (default: 127.0.0.1)
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Listen port (default: 8000)
        #[arg(short, long, default_value_t = 8000)]
        port: u16,
    },
}

/// Resolve the language pair for a translate command
pub fn resolve_languages(
    config: &TranslatorConfig,
    source_lang: Option<String>,
    target_lang: Option<String>,
    swap: bool,
) -> anyhow::Result<LanguagePair> {
    let mut languages = LanguagePair::new(
        source_lang.unwrap_or_else(|| config.source_lang.clone()),
        target_lang.unwrap_or_else(|| config.target_lang.clone()),
    )?;

    if swap {
        languages.swap();
    }

    Ok(languages)
}

/// Credit line naming the provider that produced the result
pub fn credit_line(result: &TranslationResult) -> String {
    format!(
        "Translated by {} ({})",
        result.provider.name(),
        result.provider.homepage()
    )
}

/// Handle translate command
pub async fn handle_translate(
    config: TranslatorConfig,
    text: Option<String>,
    source_lang: Option<String>,
    target_lang: Option<String>,
    swap: bool,
) -> anyhow::Result<()> {
    use indicatif::{ProgressBar, ProgressStyle};
    use std::time::Duration;
    use tracing::info;

    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let languages = resolve_languages(&config, source_lang, target_lang, swap)?;

    let request = match TranslationRequest::new(&text, languages) {
        Ok(request) => request,
        Err(e) => anyhow::bail!(e.user_notice()),
    };

    info!("Translating {}", request.languages());

    let translator = FallbackTranslator::from_config(&config)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")?);
    pb.set_message("Translating...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let outcome = translator.translate(&request).await;
    pb.finish_and_clear();

    match outcome {
        Ok(result) => {
            println!("{}", result.translated_text);
            eprintln!("{}", credit_line(&result));
            Ok(())
        }
        Err(e) => {
            tracing::error!("{}", e);
            anyhow::bail!(e.user_notice())
        }
    }
}

/// Handle providers command
pub fn handle_providers(config: TranslatorConfig) -> anyhow::Result<()> {
    let translator = FallbackTranslator::from_config(&config)?;

    for (i, provider) in translator.providers().iter().enumerate() {
        println!("{}. {} ({})", i + 1, provider.kind(), provider.kind().homepage());
        for endpoint in provider.endpoints() {
            println!("   {}", endpoint);
        }
    }

    Ok(())
}

/// Handle server command
pub async fn handle_server(config: TranslatorConfig, host: String, port: u16) -> anyhow::Result<()> {
    use crate::server::api::run_server;
    use tracing::info;

    info!("Starting HTTP server on {}:{}", host, port);
    println!("Server starting on http://{}:{}", host, port);

    run_server(host, port, config).await?;

    Ok(())
}
