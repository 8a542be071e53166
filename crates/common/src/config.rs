//! Site configuration.
//!
//! Defaults come from the build environment; a page may override any key
//! with a JSON document (see `SiteConfig::from_json`).

use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::SiteError;

const MAX_DURATION_MS: u32 = 10_000;

/// How an accepted recruitment form reaches its endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitMode {
    /// Browser form submission to the form's `action`.
    #[default]
    Native,
    /// `POST` of the form data from script.
    Fetch,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub environment: String,
    pub log_level: String,
    pub submit_delay_ms: u32,
    pub submit_mode: SubmitMode,
    pub endpoint: Option<String>,
    pub reveal_duration_ms: u32,
    pub ripple_duration_ms: u32,
    pub live_validation: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::for_environment(build_environment())
    }
}

/// Environment baked in at compile time, `production` when unset.
pub fn build_environment() -> &'static str {
    option_env!("ENVIRONMENT").unwrap_or("production")
}

impl SiteConfig {
    pub fn for_environment(environment: &str) -> Self {
        let log_level = if environment == "development" { "debug" } else { "info" };
        Self {
            environment: environment.to_string(),
            log_level: log_level.to_string(),
            submit_delay_ms: 1000,
            submit_mode: SubmitMode::Native,
            endpoint: None,
            reveal_duration_ms: 600,
            ripple_duration_ms: 600,
            live_validation: true,
        }
    }

    /// Parse a JSON override document. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, SiteError> {
        let config: SiteConfig =
            serde_json::from_str(json).map_err(|e| SiteError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`SiteConfig::from_json`], but falls back to defaults on error.
    pub fn from_json_or_default(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|e| {
            log::warn!("{e}, using defaults");
            Self::default()
        })
    }

    pub fn validate(&self) -> Result<(), SiteError> {
        check_duration("reveal_duration_ms", self.reveal_duration_ms)?;
        check_duration("ripple_duration_ms", self.ripple_duration_ms)?;
        if self.submit_delay_ms > MAX_DURATION_MS {
            return Err(SiteError::Config(format!(
                "submit_delay_ms must be at most {MAX_DURATION_MS}, got {}",
                self.submit_delay_ms
            )));
        }
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| SiteError::Config(format!("unknown log_level '{}'", self.log_level)))?;
        Ok(())
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

fn check_duration(key: &str, value: u32) -> Result<(), SiteError> {
    if (1..=MAX_DURATION_MS).contains(&value) {
        Ok(())
    } else {
        Err(SiteError::Config(format!(
            "{key} must be between 1 and {MAX_DURATION_MS}, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::for_environment("production");
        assert_eq!(config.submit_delay_ms, 1000);
        assert_eq!(config.submit_mode, SubmitMode::Native);
        assert_eq!(config.reveal_duration_ms, 600);
        assert_eq!(config.level_filter(), LevelFilter::Info);
        assert!(config.live_validation);
        assert!(config.endpoint.is_none());

        let dev = SiteConfig::for_environment("development");
        assert!(dev.is_development());
        assert_eq!(dev.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = SiteConfig::from_json(
            r#"{"submit_mode": "fetch", "endpoint": "https://forms.example/seletiva", "submit_delay_ms": 0}"#,
        )
        .unwrap();
        assert_eq!(config.submit_mode, SubmitMode::Fetch);
        assert_eq!(config.endpoint.as_deref(), Some("https://forms.example/seletiva"));
        assert_eq!(config.submit_delay_ms, 0);
        assert_eq!(config.ripple_duration_ms, 600);
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        assert!(matches!(
            SiteConfig::from_json(r#"{"reveal_duration_ms": 0}"#),
            Err(SiteError::Config(_))
        ));
        assert!(SiteConfig::from_json(r#"{"submit_delay_ms": 60000}"#).is_err());
        assert!(SiteConfig::from_json(r#"{"log_level": "loud"}"#).is_err());
        assert!(SiteConfig::from_json(r#"{"submit_mode": "carrier-pigeon"}"#).is_err());
    }

    #[test]
    fn test_bad_json_falls_back() {
        let config = SiteConfig::from_json_or_default("{not json");
        assert_eq!(config, SiteConfig::default());
    }
}
