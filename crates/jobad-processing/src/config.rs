//! Configuration for the preprocessing pipeline.
//!
//! Uses the builder pattern for flexible setup; the configuration is
//! validated on build and serde round-trippable.

use serde::{Deserialize, Serialize};

/// Default sentinel for missing company names.
pub const DEFAULT_COMPANY_NAME_FILL: &str = "UNKNOWN COMPANY";

/// Default sentinel for missing job titles.
pub const DEFAULT_JOB_TITLE_FILL: &str = "EMPTY TITLE";

/// Default sentinel for missing ad bodies.
pub const DEFAULT_AD_TEXT_FILL: &str = "EMPTY BODY";

/// Default extra attempts after a failed translation call.
pub const DEFAULT_TRANSLATION_RETRIES: usize = 2;

/// Configuration for the preprocessing pipeline.
///
/// Use [`PipelineConfig::builder()`] for fluent construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Constant fill for missing CompanyName cells.
    pub company_name_fill: String,

    /// Constant fill for missing JobTitle cells.
    pub job_title_fill: String,

    /// Constant fill for missing AdText cells.
    pub ad_text_fill: String,

    /// Extra attempts after the first failed translation call.
    pub translation_retries: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            company_name_fill: DEFAULT_COMPANY_NAME_FILL.to_string(),
            job_title_fill: DEFAULT_JOB_TITLE_FILL.to_string(),
            ad_text_fill: DEFAULT_AD_TEXT_FILL.to_string(),
            translation_retries: DEFAULT_TRANSLATION_RETRIES,
        }
    }
}

impl PipelineConfig {
    /// Create a new configuration builder.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        for (field, value) in [
            ("company_name_fill", &self.company_name_fill),
            ("job_title_fill", &self.job_title_fill),
            ("ad_text_fill", &self.ad_text_fill),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigValidationError::BlankFillValue(field.to_string()));
            }
        }

        if self.translation_retries > 20 {
            return Err(ConfigValidationError::ExcessiveRetries(
                self.translation_retries,
            ));
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Fill value for '{0}' must not be blank (blank means missing)")]
    BlankFillValue(String),

    #[error("Translation retries {0} exceeds the allowed maximum of 20")]
    ExcessiveRetries(usize),
}

/// Builder for [`PipelineConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct PipelineConfigBuilder {
    company_name_fill: Option<String>,
    job_title_fill: Option<String>,
    ad_text_fill: Option<String>,
    translation_retries: Option<usize>,
}

impl PipelineConfigBuilder {
    /// Set the constant fill for missing CompanyName cells.
    pub fn company_name_fill(mut self, fill: impl Into<String>) -> Self {
        self.company_name_fill = Some(fill.into());
        self
    }

    /// Set the constant fill for missing JobTitle cells.
    pub fn job_title_fill(mut self, fill: impl Into<String>) -> Self {
        self.job_title_fill = Some(fill.into());
        self
    }

    /// Set the constant fill for missing AdText cells.
    pub fn ad_text_fill(mut self, fill: impl Into<String>) -> Self {
        self.ad_text_fill = Some(fill.into());
        self
    }

    /// Set the number of extra attempts after a failed translation call.
    pub fn translation_retries(mut self, retries: usize) -> Self {
        self.translation_retries = Some(retries);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `PipelineConfig` or an error if validation fails.
    pub fn build(self) -> Result<PipelineConfig, ConfigValidationError> {
        let config = PipelineConfig {
            company_name_fill: self
                .company_name_fill
                .unwrap_or_else(|| DEFAULT_COMPANY_NAME_FILL.to_string()),
            job_title_fill: self
                .job_title_fill
                .unwrap_or_else(|| DEFAULT_JOB_TITLE_FILL.to_string()),
            ad_text_fill: self
                .ad_text_fill
                .unwrap_or_else(|| DEFAULT_AD_TEXT_FILL.to_string()),
            translation_retries: self
                .translation_retries
                .unwrap_or(DEFAULT_TRANSLATION_RETRIES),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.company_name_fill, "UNKNOWN COMPANY");
        assert_eq!(config.job_title_fill, "EMPTY TITLE");
        assert_eq!(config.ad_text_fill, "EMPTY BODY");
        assert_eq!(config.translation_retries, 2);
    }

    #[test]
    fn test_builder_custom_values() {
        let config = PipelineConfig::builder()
            .company_name_fill("N/A")
            .translation_retries(0)
            .build()
            .unwrap();

        assert_eq!(config.company_name_fill, "N/A");
        assert_eq!(config.job_title_fill, "EMPTY TITLE");
        assert_eq!(config.translation_retries, 0);
    }

    #[test]
    fn test_validation_rejects_blank_fill() {
        let result = PipelineConfig::builder().ad_text_fill("   ").build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::BlankFillValue(_)
        ));
    }

    #[test]
    fn test_validation_rejects_excessive_retries() {
        let result = PipelineConfig::builder().translation_retries(100).build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::ExcessiveRetries(100)
        ));
    }

    #[test]
    fn test_config_serialization_round_trip() {
        let config = PipelineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: PipelineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.company_name_fill, deserialized.company_name_fill);
        assert_eq!(config.translation_retries, deserialized.translation_retries);
    }
}
