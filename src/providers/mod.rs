//! Translation providers that make up the fallback chain

use async_trait::async_trait;
use std::fmt::Debug;
use std::time::Duration;

use crate::core::config::TranslatorConfig;
use crate::core::errors::Result;
use crate::core::models::{ProviderKind, TranslationRequest};

pub mod libre;
pub mod mymemory;

pub use libre::LibreTranslateProvider;
pub use mymemory::MyMemoryProvider;

/// One tier of the fallback chain
#[async_trait]
pub trait TranslationProvider: Send + Sync + Debug {
    /// Provider used for attribution
    fn kind(&self) -> ProviderKind;

    /// Endpoints this provider talks to, in the order they are tried
    fn endpoints(&self) -> Vec<String>;

    /// Translate the request, returning the endpoint that answered and the text.
    ///
    /// The returned text is never empty.
    async fn attempt(&self, request: &TranslationRequest) -> Result<(String, String)>;
}

/// Shared HTTP client for all providers
pub fn build_http_client(config: &TranslatorConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .pool_idle_timeout(Some(Duration::from_secs(30)))
        .pool_max_idle_per_host(10);

    if let Some(timeout_ms) = config.timeout_ms {
        builder = builder.timeout(Duration::from_millis(timeout_ms));
    }

    Ok(builder.build()?)
}

/// Pull a non-empty string out of a JSON body
pub(crate) fn non_empty_str(value: &serde_json::Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}
