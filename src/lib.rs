//! LangLand - text translation over free public APIs
//!
//! Requests go to a list of LibreTranslate instances in order and, if every
//! one of them fails, to MyMemory. Exposed as a library, a CLI and a small
//! JSON HTTP API.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod providers;
pub mod server;

// Re-export key types for convenience
pub use crate::core::{
    client::FallbackTranslator,
    config::TranslatorConfig,
    errors::TranslationError,
    models::{LanguagePair, ProviderKind, TranslationRequest, TranslationResult},
};

pub use providers::{LibreTranslateProvider, MyMemoryProvider, TranslationProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
