//! MyMemory client, the single-endpoint last resort

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{ProviderKind, TranslationRequest};
use crate::providers::{non_empty_str, TranslationProvider};

/// One GET against MyMemory, no retry
#[derive(Debug, Clone)]
pub struct MyMemoryProvider {
    client: reqwest::Client,
    endpoint: String,
    contact_email: Option<String>,
}

impl MyMemoryProvider {
    /// Create a provider for the given endpoint
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            contact_email: None,
        }
    }

    /// Create from configuration
    pub fn from_config(client: reqwest::Client, config: &TranslatorConfig) -> Self {
        let mut provider = Self::new(client, config.fallback_endpoint.clone());
        provider.contact_email = config.contact_email.clone();
        provider
    }

    /// Identify ourselves with an email for the larger daily quota
    pub fn with_contact_email(mut self, email: impl Into<String>) -> Self {
        self.contact_email = Some(email.into());
        self
    }

    async fn send_request(&self, request: &TranslationRequest) -> Result<String> {
        let langpair = request.languages().langpair();
        let mut query = vec![("q", request.text()), ("langpair", langpair.as_str())];
        if let Some(email) = &self.contact_email {
            query.push(("de", email.as_str()));
        }

        let response = self
            .client
            .get(&self.endpoint)
            .query(&query)
            .send()
            .await
            .map_err(|e| TranslationError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslationError::ApiError {
                status: status.as_u16(),
                message: format!("MyMemory HTTP {}", status.as_u16()),
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponseError {
                message: e.to_string(),
            })?;

        non_empty_str(&json["responseData"]["translatedText"])
            .map(str::to_string)
            .ok_or_else(|| TranslationError::InvalidResponseError {
                message: "MyMemory no translatedText".to_string(),
            })
    }
}

#[async_trait]
impl TranslationProvider for MyMemoryProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::MyMemory
    }

    fn endpoints(&self) -> Vec<String> {
        vec![self.endpoint.clone()]
    }

    async fn attempt(&self, request: &TranslationRequest) -> Result<(String, String)> {
        debug!("Trying MyMemory at {}", self.endpoint);

        match self.send_request(request).await {
            Ok(translated) => Ok((self.endpoint.clone(), translated)),
            Err(e) => {
                warn!("MyMemory failed: {}", e);
                Err(TranslationError::FallbackFailed {
                    message: e.to_string(),
                })
            }
        }
    }
}
