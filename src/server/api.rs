//! HTTP API server implementation

use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

use crate::core::client::FallbackTranslator;
use crate::core::config::TranslatorConfig;
use crate::core::errors::TranslationError;
use crate::core::models::{LanguagePair, TranslationRequest};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    translator: Arc<FallbackTranslator>,
    default_languages: LanguagePair,
}

impl AppState {
    /// Create state around a translator and the pair used when a request names none
    pub fn new(translator: FallbackTranslator, default_languages: LanguagePair) -> Self {
        Self {
            translator: Arc::new(translator),
            default_languages,
        }
    }
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

/// Provider list response
#[derive(Serialize)]
struct ProvidersResponse {
    data: Vec<ProviderInfo>,
}

#[derive(Serialize)]
struct ProviderInfo {
    name: String,
    url: String,
    endpoints: Vec<String>,
}

/// Translation request body
#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    /// Missing text is treated as empty and rejected with the usual notice
    #[serde(default)]
    pub text: String,
    /// Falls back to the configured source language
    pub source_lang: Option<String>,
    /// Falls back to the configured target language
    pub target_lang: Option<String>,
}

/// Translation response body
#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    /// Translation returned by the provider
    pub translated_text: String,
    /// Display name of the provider that answered
    pub provider: String,
    /// Provider homepage for the credit link
    pub provider_url: String,
    /// Source language actually used
    pub source_lang: String,
    /// Target language actually used
    pub target_lang: String,
    /// Unix timestamp of the response
    pub created: i64,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error body
    pub error: ErrorDetail,
}

/// Generic notice plus a machine-readable code
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// Human-readable notice
    pub message: String,
    /// `invalid_request` or `translation_failed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

impl From<TranslationError> for ApiError {
    fn from(err: TranslationError) -> Self {
        let (status, code) = if err.is_validation() {
            (StatusCode::BAD_REQUEST, "invalid_request")
        } else {
            (StatusCode::BAD_GATEWAY, "translation_failed")
        };

        (
            status,
            Json(ErrorResponse {
                error: ErrorDetail {
                    message: err.user_notice(),
                    code: Some(code.to_string()),
                },
            }),
        )
    }
}

/// Health check handler
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: crate::NAME.to_string(),
        version: crate::VERSION.to_string(),
    })
}

/// List providers in fallback order
async fn get_providers(State(state): State<Arc<AppState>>) -> Json<ProvidersResponse> {
    let data = state
        .translator
        .providers()
        .iter()
        .map(|p| ProviderInfo {
            name: p.kind().name().to_string(),
            url: p.kind().homepage().to_string(),
            endpoints: p.endpoints(),
        })
        .collect();

    Json(ProvidersResponse { data })
}

/// Translation handler
async fn translate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let languages = LanguagePair::new(
        payload
            .source_lang
            .unwrap_or_else(|| state.default_languages.source.clone()),
        payload
            .target_lang
            .unwrap_or_else(|| state.default_languages.target.clone()),
    )?;

    let request = TranslationRequest::new(&payload.text, languages)?;

    let result = state.translator.translate(&request).await.map_err(|e| {
        warn!("Translation failed: {}", e);
        e
    })?;

    Ok(Json(TranslateResponse {
        translated_text: result.translated_text,
        provider: result.provider.name().to_string(),
        provider_url: result.provider.homepage().to_string(),
        source_lang: request.source_lang().to_string(),
        target_lang: request.target_lang().to_string(),
        created: chrono::Utc::now().timestamp(),
    }))
}

/// Build the router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/providers", get(get_providers))
        .route("/translate", post(translate))
        .with_state(Arc::new(state))
}

/// Run the HTTP server
pub async fn run_server(host: String, port: u16, config: TranslatorConfig) -> anyhow::Result<()> {
    let translator = FallbackTranslator::from_config(&config)?;
    let state = AppState::new(translator, config.default_languages()?);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
