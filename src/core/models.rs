//! Core data models for translation

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::errors::{Result, TranslationError};

/// Translation provider behind a result, used for attribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderKind {
    /// LibreTranslate-compatible instances (POST JSON)
    LibreTranslate,
    /// MyMemory translation memory (GET query)
    MyMemory,
}

impl ProviderKind {
    /// Display name used in credits
    pub fn name(&self) -> &'static str {
        match self {
            ProviderKind::LibreTranslate => "LibreTranslate",
            ProviderKind::MyMemory => "MyMemory",
        }
    }

    /// Homepage linked from the credit line
    pub fn homepage(&self) -> &'static str {
        match self {
            ProviderKind::LibreTranslate => "https://libretranslate.com/",
            ProviderKind::MyMemory => "https://mymemory.translated.net/",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Source and target language selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    /// Language of the input text
    pub source: String,
    /// Language to translate into
    pub target: String,
}

impl LanguagePair {
    /// Create a pair, rejecting blank codes
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Result<Self> {
        let source = normalize_code(source.into())?;
        let target = normalize_code(target.into())?;
        Ok(Self { source, target })
    }

    /// Exchange source and target
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.source, &mut self.target);
    }

    /// `source|target` form used by MyMemory
    pub fn langpair(&self) -> String {
        format!("{}|{}", self.source, self.target)
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

fn normalize_code(code: String) -> Result<String> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return Err(TranslationError::InvalidLanguage { code });
    }
    Ok(trimmed.to_string())
}

/// Translation request. The text is trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    text: String,
    languages: LanguagePair,
}

impl TranslationRequest {
    /// Build a request; empty or whitespace-only text is rejected here,
    /// so nothing downstream can send it.
    pub fn new(text: impl AsRef<str>, languages: LanguagePair) -> Result<Self> {
        let text = text.as_ref().trim();
        if text.is_empty() {
            return Err(TranslationError::EmptyText);
        }

        Ok(Self {
            text: text.to_string(),
            languages,
        })
    }

    /// Trimmed text to translate
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Language pair of this request
    pub fn languages(&self) -> &LanguagePair {
        &self.languages
    }

    /// Source language code
    pub fn source_lang(&self) -> &str {
        &self.languages.source
    }

    /// Target language code
    pub fn target_lang(&self) -> &str {
        &self.languages.target
    }
}

/// Translation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    /// Never empty
    pub translated_text: String,
    /// Provider credited for the result
    pub provider: ProviderKind,
    /// Endpoint that answered
    pub endpoint: String,
}
