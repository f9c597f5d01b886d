//! Custom error types for translation operations

use thiserror::Error;

/// Notice shown when every provider in the chain has failed
pub const ALL_FAILED_NOTICE: &str = "Translation failed on all free endpoints. Please try again later.";

/// Notice shown when the input text is empty
pub const EMPTY_TEXT_NOTICE: &str = "Please enter text to translate.";

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Endpoint answered with a non-2xx status
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Endpoint could not be reached
    #[error("Network error: {message}")]
    NetworkError {
        message: String,
    },

    /// Endpoint answered 2xx but without a usable translation
    #[error("Invalid response: {message}")]
    InvalidResponseError {
        message: String,
    },

    /// Every endpoint of the primary provider failed
    #[error("All {attempted} translation endpoints failed")]
    AllEndpointsFailed {
        /// Number of endpoints tried
        attempted: usize,
    },

    /// The single-endpoint fallback provider failed
    #[error("Fallback translation failed: {message}")]
    FallbackFailed {
        message: String,
    },

    /// Input text is empty or whitespace only
    #[error("Text to translate is empty")]
    EmptyText,

    /// Language code is blank
    #[error("Invalid language code: '{code}'")]
    InvalidLanguage {
        /// Code as received
        code: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
    },

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),
}

impl TranslationError {
    /// Whether this failure only concerns one endpoint and the next one may be tried
    pub fn is_endpoint_failure(&self) -> bool {
        matches!(
            self,
            TranslationError::ApiError { .. }
                | TranslationError::NetworkError { .. }
                | TranslationError::InvalidResponseError { .. }
        )
    }

    /// Whether the input was rejected before any request was sent
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TranslationError::EmptyText | TranslationError::InvalidLanguage { .. }
        )
    }

    /// Generic human-readable notice for the user. No internal detail leaks out.
    pub fn user_notice(&self) -> String {
        match self {
            TranslationError::EmptyText => EMPTY_TEXT_NOTICE.to_string(),
            TranslationError::InvalidLanguage { code } => {
                format!("'{}' is not a valid language code.", code)
            }
            TranslationError::ConfigError { message } => {
                format!("Translator is misconfigured: {}", message)
            }
            _ => ALL_FAILED_NOTICE.to_string(),
        }
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
