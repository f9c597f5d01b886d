//! Translation client that walks the provider chain in order

use std::sync::Arc;
use tracing::{info, warn};

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{TranslationRequest, TranslationResult};
use crate::providers::{
    build_http_client, LibreTranslateProvider, MyMemoryProvider, TranslationProvider,
};

/// Sequential fallback over an ordered list of providers
#[derive(Debug, Clone)]
pub struct FallbackTranslator {
    chain: Vec<Arc<dyn TranslationProvider>>,
}

impl FallbackTranslator {
    /// Create a translator over an explicit chain
    pub fn new(chain: Vec<Arc<dyn TranslationProvider>>) -> Result<Self> {
        if chain.is_empty() {
            return Err(TranslationError::ConfigError {
                message: "No translation providers configured".to_string(),
            });
        }

        Ok(Self { chain })
    }

    /// LibreTranslate instances first, MyMemory last
    pub fn from_config(config: &TranslatorConfig) -> Result<Self> {
        config.validate().map_err(|e| TranslationError::ConfigError {
            message: e.to_string(),
        })?;

        let client = build_http_client(config)?;
        let primary = LibreTranslateProvider::from_config(client.clone(), config);
        let secondary = MyMemoryProvider::from_config(client, config);

        Self::new(vec![
            Arc::new(primary) as Arc<dyn TranslationProvider>,
            Arc::new(secondary) as Arc<dyn TranslationProvider>,
        ])
    }

    /// Translate a single request.
    ///
    /// Tiers are awaited one after another; the first success wins and the
    /// error of the last tier is returned when all of them fail.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResult> {
        let mut last_error = None;

        for provider in &self.chain {
            match provider.attempt(request).await {
                Ok((endpoint, translated_text)) => {
                    info!(
                        "Translated {} chars ({}) via {}",
                        request.text().chars().count(),
                        request.languages(),
                        provider.kind()
                    );
                    return Ok(TranslationResult {
                        translated_text,
                        provider: provider.kind(),
                        endpoint,
                    });
                }
                Err(e) => {
                    warn!("{} failed: {}", provider.kind(), e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| TranslationError::ConfigError {
            message: "No translation providers configured".to_string(),
        }))
    }

    /// Providers in the order they are tried
    pub fn providers(&self) -> &[Arc<dyn TranslationProvider>] {
        &self.chain
    }
}
