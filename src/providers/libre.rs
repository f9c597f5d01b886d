//! LibreTranslate client with ordered endpoint fallback

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{ProviderKind, TranslationRequest};
use crate::providers::{non_empty_str, TranslationProvider};

/// Tries each LibreTranslate instance in order until one answers
#[derive(Debug, Clone)]
pub struct LibreTranslateProvider {
    client: reqwest::Client,
    endpoints: Vec<String>,
    api_key: Option<String>,
}

impl LibreTranslateProvider {
    /// Create a provider over the given endpoints
    pub fn new(client: reqwest::Client, endpoints: Vec<String>) -> Self {
        Self {
            client,
            endpoints,
            api_key: None,
        }
    }

    /// Create from configuration
    pub fn from_config(client: reqwest::Client, config: &TranslatorConfig) -> Self {
        let mut provider = Self::new(client, config.primary_endpoints.clone());
        provider.api_key = config.api_key.clone();
        provider
    }

    /// Send the API key with every request
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Send one request to one endpoint
    async fn send_request(&self, endpoint: &str, request: &TranslationRequest) -> Result<String> {
        let mut body = serde_json::json!({
            "q": request.text(),
            "source": request.source_lang(),
            "target": request.target_lang(),
            "format": "text",
        });

        if let Some(api_key) = &self.api_key {
            body["api_key"] = serde_json::json!(api_key);
        }

        let response = self
            .client
            .post(endpoint)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| TranslationError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TranslationError::ApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponseError {
                message: e.to_string(),
            })?;

        non_empty_str(&json["translatedText"])
            .map(str::to_string)
            .ok_or_else(|| TranslationError::InvalidResponseError {
                message: "Empty response".to_string(),
            })
    }
}

#[async_trait]
impl TranslationProvider for LibreTranslateProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::LibreTranslate
    }

    fn endpoints(&self) -> Vec<String> {
        self.endpoints.clone()
    }

    async fn attempt(&self, request: &TranslationRequest) -> Result<(String, String)> {
        // Cursor lives for this request only; an exhausted list never
        // carries over to the next call.
        let mut cursor = 0;

        while cursor < self.endpoints.len() {
            let endpoint = &self.endpoints[cursor];
            debug!("Trying endpoint {} ({}/{})", endpoint, cursor + 1, self.endpoints.len());

            match self.send_request(endpoint, request).await {
                Ok(translated) => {
                    if cursor > 0 {
                        info!("Endpoint {} succeeded after {} failures", endpoint, cursor);
                    }
                    return Ok((endpoint.clone(), translated));
                }
                Err(e) if e.is_endpoint_failure() => {
                    warn!("Endpoint failed ({}): {}", endpoint, e);
                    cursor += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Err(TranslationError::AllEndpointsFailed {
            attempted: self.endpoints.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::LanguagePair;
    use mockito::Matcher;
    use serde_json::json;

    fn hello() -> TranslationRequest {
        TranslationRequest::new("Hello", LanguagePair::new("en", "tr").unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_first_endpoint_wins_and_later_untouched() {
        let mut server = mockito::Server::new_async().await;
        let first = server
            .mock("POST", "/one/translate")
            .match_header("content-type", "application/json")
            .match_header("accept", "application/json")
            .match_body(Matcher::Json(json!({
                "q": "Hello",
                "source": "en",
                "target": "tr",
                "format": "text"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"translatedText":"Merhaba"}"#)
            .expect(1)
            .create_async()
            .await;
        let second = server
            .mock("POST", "/two/translate")
            .expect(0)
            .create_async()
            .await;

        let provider = LibreTranslateProvider::new(
            reqwest::Client::new(),
            vec![
                format!("{}/one/translate", server.url()),
                format!("{}/two/translate", server.url()),
            ],
        );

        let (endpoint, text) = provider.attempt(&hello()).await.unwrap();
        assert_eq!(text, "Merhaba");
        assert!(endpoint.ends_with("/one/translate"));

        first.assert_async().await;
        second.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_error_falls_through_to_next_endpoint() {
        let mut server = mockito::Server::new_async().await;
        let broken = server
            .mock("POST", "/one/translate")
            .with_status(500)
            .expect(1)
            .create_async()
            .await;
        let healthy = server
            .mock("POST", "/two/translate")
            .with_status(200)
            .with_body(r#"{"translatedText":"Merhaba"}"#)
            .expect(1)
            .create_async()
            .await;

        let provider = LibreTranslateProvider::new(
            reqwest::Client::new(),
            vec![
                format!("{}/one/translate", server.url()),
                format!("{}/two/translate", server.url()),
            ],
        );

        let (endpoint, text) = provider.attempt(&hello()).await.unwrap();
        assert_eq!(text, "Merhaba");
        assert!(endpoint.ends_with("/two/translate"));

        broken.assert_async().await;
        healthy.assert_async().await;
    }

    #[tokio::test]
    async fn test_empty_and_missing_translation_are_failures() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/empty/translate")
            .with_status(200)
            .with_body(r#"{"translatedText":""}"#)
            .create_async()
            .await;
        let _mock = server
            .mock("POST", "/missing/translate")
            .with_status(200)
            .with_body(r#"{"error":"nope"}"#)
            .create_async()
            .await;
        let _mock = server
            .mock("POST", "/garbage/translate")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let provider = LibreTranslateProvider::new(
            reqwest::Client::new(),
            vec![
                format!("{}/empty/translate", server.url()),
                format!("{}/missing/translate", server.url()),
                format!("{}/garbage/translate", server.url()),
            ],
        );

        let err = provider.attempt(&hello()).await.unwrap_err();
        assert!(matches!(err, TranslationError::AllEndpointsFailed { attempted: 3 }));
    }

    #[tokio::test]
    async fn test_whitespace_translation_is_accepted() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/translate")
            .with_status(200)
            .with_body(r#"{"translatedText":" "}"#)
            .create_async()
            .await;

        let provider = LibreTranslateProvider::new(
            reqwest::Client::new(),
            vec![format!("{}/translate", server.url())],
        );

        let (_, text) = provider.attempt(&hello()).await.unwrap();
        assert_eq!(text, " ");
    }

    #[tokio::test]
    async fn test_network_failure_then_success() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/translate")
            .with_status(200)
            .with_body(r#"{"translatedText":"Merhaba"}"#)
            .create_async()
            .await;

        let provider = LibreTranslateProvider::new(
            reqwest::Client::new(),
            vec![
                "http://127.0.0.1:1/translate".to_string(),
                format!("{}/translate", server.url()),
            ],
        );

        let (_, text) = provider.attempt(&hello()).await.unwrap();
        assert_eq!(text, "Merhaba");
    }

    #[tokio::test]
    async fn test_cursor_resets_between_requests() {
        let mut server = mockito::Server::new_async().await;
        let down = server
            .mock("POST", "/one/translate")
            .with_status(503)
            .expect(1)
            .create_async()
            .await;

        let provider = LibreTranslateProvider::new(
            reqwest::Client::new(),
            vec![format!("{}/one/translate", server.url())],
        );

        let err = provider.attempt(&hello()).await.unwrap_err();
        assert!(matches!(err, TranslationError::AllEndpointsFailed { attempted: 1 }));
        down.assert_async().await;
        down.remove_async().await;

        let up = server
            .mock("POST", "/one/translate")
            .with_status(200)
            .with_body(r#"{"translatedText":"Merhaba"}"#)
            .expect(2)
            .create_async()
            .await;

        for _ in 0..2 {
            let (_, text) = provider.attempt(&hello()).await.unwrap();
            assert_eq!(text, "Merhaba");
        }
        up.assert_async().await;
    }

    #[tokio::test]
    async fn test_api_key_is_sent() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/translate")
            .match_body(Matcher::PartialJson(json!({"api_key": "secret"})))
            .with_status(200)
            .with_body(r#"{"translatedText":"Merhaba"}"#)
            .expect(1)
            .create_async()
            .await;

        let provider = LibreTranslateProvider::new(
            reqwest::Client::new(),
            vec![format!("{}/translate", server.url())],
        )
        .with_api_key("secret");

        tokio_test::assert_ok!(provider.attempt(&hello()).await);
        mock.assert_async().await;
    }
}
