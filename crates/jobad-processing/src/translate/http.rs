//! HTTP translation provider.
//!
//! Talks to a LibreTranslate-compatible endpoint (`POST /translate` with a
//! JSON body of `q`/`source`/`target`). The endpoint URL, API key, and
//! timeout are configurable; requests are blocking and sequential, matching
//! the batch nature of the pipeline.

use super::TranslationProvider;
use anyhow::{anyhow, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default translation endpoint (a local LibreTranslate instance).
const DEFAULT_BASE_URL: &str = "http://localhost:5000/translate";

/// Default timeout for translation requests in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

/// Configuration for the HTTP translation provider.
#[derive(Debug, Clone)]
pub struct HttpTranslatorConfig {
    /// Full endpoint URL.
    pub base_url: String,
    /// Optional API key sent in the request body.
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for HttpTranslatorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl HttpTranslatorConfig {
    /// Create a new configuration builder.
    pub fn builder() -> HttpTranslatorConfigBuilder {
        HttpTranslatorConfigBuilder::default()
    }
}

/// Builder for [`HttpTranslatorConfig`].
#[derive(Default)]
pub struct HttpTranslatorConfigBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout_secs: Option<u64>,
}

impl HttpTranslatorConfigBuilder {
    /// Set the endpoint URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout in seconds.
    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> HttpTranslatorConfig {
        HttpTranslatorConfig {
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key: self.api_key,
            timeout_secs: self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Translation provider backed by a LibreTranslate-compatible service.
pub struct HttpTranslationProvider {
    config: HttpTranslatorConfig,
    client: Client,
}

impl HttpTranslationProvider {
    /// Create a provider with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Self::with_config(HttpTranslatorConfig::default())
    }

    /// Create a provider with custom configuration.
    pub fn with_config(config: HttpTranslatorConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self { config, client })
    }
}

impl TranslationProvider for HttpTranslationProvider {
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let request = TranslateRequest {
            q: text,
            source,
            target,
            format: "text",
            api_key: self.config.api_key.as_deref(),
        };

        let response = self
            .client
            .post(&self.config.base_url)
            .json(&request)
            .send()?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "Translation API error {}: {}",
                response.status(),
                response.text()?
            ));
        }

        let result: TranslateResponse = response.json()?;
        result
            .translated_text
            .ok_or_else(|| anyhow!("No translated text in response"))
    }

    fn name(&self) -> &str {
        "http"
    }
}
