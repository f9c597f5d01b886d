//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::models::LanguagePair;

/// Public LibreTranslate instances, tried in this order
pub const DEFAULT_PRIMARY_ENDPOINTS: &[&str] = &[
    "https://translate.argosopentech.com/translate",
    "https://libretranslate.de/translate",
    "https://libretranslate.com/translate",
];

/// MyMemory lookup endpoint
pub const DEFAULT_FALLBACK_ENDPOINT: &str = "https://api.mymemory.translated.net/get";

/// Environment variable naming an optional config file
pub const CONFIG_PATH_ENV: &str = "LANGLAND_CONFIG";

/// Configuration for translator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// LibreTranslate endpoints, tried in order
    pub primary_endpoints: Vec<String>,
    /// MyMemory endpoint used after every primary endpoint failed
    pub fallback_endpoint: String,
    /// Sent as `api_key` to LibreTranslate instances that require one
    pub api_key: Option<String>,
    /// Sent as `de` to MyMemory for the larger free quota
    pub contact_email: Option<String>,
    /// Unset means the HTTP transport default
    pub timeout_ms: Option<u64>,
    /// Source language when none is given
    pub source_lang: String,
    /// Target language when none is given
    pub target_lang: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            primary_endpoints: DEFAULT_PRIMARY_ENDPOINTS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            fallback_endpoint: DEFAULT_FALLBACK_ENDPOINT.to_string(),
            api_key: None,
            contact_email: None,
            timeout_ms: None,
            source_lang: "en".to_string(),
            target_lang: "tr".to_string(),
        }
    }
}

impl TranslatorConfig {
    /// Load configuration: defaults, then the config file (explicit path or
    /// `LANGLAND_CONFIG`), then `LANGLAND_*` environment variables.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from));

        let mut config = match path {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                Self::from_file(&path)?
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        debug!(
            "Loaded {} primary endpoints, fallback {}",
            config.primary_endpoints.len(),
            config.fallback_endpoint
        );

        Ok(config)
    }

    /// Load from a TOML or JSON file; missing keys keep their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .build()?;
        let config: Self = settings.try_deserialize()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply `LANGLAND_*` overrides from a key lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoints) = lookup("LANGLAND_PRIMARY_ENDPOINTS") {
            self.primary_endpoints = endpoints
                .split(',')
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(endpoint) = lookup("LANGLAND_FALLBACK_ENDPOINT") {
            self.fallback_endpoint = endpoint;
        }

        if let Some(api_key) = lookup("LANGLAND_API_KEY") {
            self.api_key = Some(api_key);
        }

        if let Some(email) = lookup("LANGLAND_CONTACT_EMAIL") {
            self.contact_email = Some(email);
        }

        if let Some(timeout) = lookup("LANGLAND_TIMEOUT_MS") {
            self.timeout_ms = Some(timeout.parse::<u64>()?);
        }

        if let Some(source) = lookup("LANGLAND_SOURCE_LANG") {
            self.source_lang = source;
        }

        if let Some(target) = lookup("LANGLAND_TARGET_LANG") {
            self.target_lang = target;
        }

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.primary_endpoints.is_empty() {
            return Err(anyhow::anyhow!("At least one primary endpoint is required"));
        }

        if self.primary_endpoints.iter().any(|e| e.trim().is_empty()) {
            return Err(anyhow::anyhow!("Primary endpoints must not be blank"));
        }

        if self.fallback_endpoint.trim().is_empty() {
            return Err(anyhow::anyhow!("Fallback endpoint is required"));
        }

        if self.timeout_ms == Some(0) {
            return Err(anyhow::anyhow!("timeout_ms must be greater than 0"));
        }

        self.default_languages()?;

        Ok(())
    }

    /// Language pair used when a request does not name one
    pub fn default_languages(&self) -> anyhow::Result<LanguagePair> {
        Ok(LanguagePair::new(&self.source_lang, &self.target_lang)?)
    }
}
