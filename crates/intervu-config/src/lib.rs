// SPDX-FileCopyrightText: 2026 Intervu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Intervu pipeline.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`) and environment variable overrides via Figment.
//! All sections are optional and default to the production values, so an
//! empty config is valid.

pub mod model;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use intervu_core::IntervuError;

pub use model::{
    CatalogConfig, DomainKeywords, IntervuConfig, ModelsConfig, ResumeHeuristicConfig,
    ScoringConfig, ToolsConfig,
};

/// Environment variable prefix for overrides (`INTERVU_MODELS__CHAT_MODEL`).
const ENV_PREFIX: &str = "INTERVU_";

/// Loads configuration from `intervu.toml` in the working directory (if
/// present) plus `INTERVU_*` environment overrides, then validates it.
pub fn load() -> Result<IntervuConfig, IntervuError> {
    let figment = Figment::from(Serialized::defaults(IntervuConfig::default()))
        .merge(Toml::file("intervu.toml"))
        .merge(Env::prefixed(ENV_PREFIX).split("__"));
    let config = extract(figment)?;
    tracing::debug!(
        chat_model = config.models.chat_model.as_str(),
        "configuration loaded"
    );
    Ok(config)
}

/// Loads configuration from a TOML string. Used by tests and embedders that
/// manage their own config sources.
pub fn load_from_str(toml_content: &str) -> Result<IntervuConfig, IntervuError> {
    let figment = Figment::from(Serialized::defaults(IntervuConfig::default()))
        .merge(Toml::string(toml_content));
    extract(figment)
}

fn extract(figment: Figment) -> Result<IntervuConfig, IntervuError> {
    let config: IntervuConfig = figment
        .extract()
        .map_err(|e| IntervuError::Config(e.to_string()))?;
    validate(&config)?;
    Ok(config)
}

/// Post-deserialization validation of cross-field constraints.
fn validate(config: &IntervuConfig) -> Result<(), IntervuError> {
    if config.models.max_steps == 0 {
        return Err(IntervuError::Config(
            "models.max_steps must be at least 1".into(),
        ));
    }
    if config.catalog.ttl_secs == 0 {
        return Err(IntervuError::Config(
            "catalog.ttl_secs must be positive".into(),
        ));
    }
    if config.resume.min_chars == 0 {
        return Err(IntervuError::Config(
            "resume.min_chars must be positive".into(),
        ));
    }
    if config.scoring.domains.is_empty() {
        return Err(IntervuError::Config(
            "scoring.domains must not be empty".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = load_from_str("").unwrap();
        assert_eq!(config.models.chat_model, "chat-model");
        assert_eq!(config.catalog.ttl_secs, 86_400);
        assert_eq!(config.scoring.domains.len(), 6);
    }

    #[test]
    fn toml_overrides_defaults() {
        let config = load_from_str(
            r#"
            [models]
            chat_model = "deepseek-chat"
            max_steps = 3

            [catalog]
            ttl_secs = 600
            "#,
        )
        .unwrap();
        assert_eq!(config.models.chat_model, "deepseek-chat");
        assert_eq!(config.models.max_steps, 3);
        assert_eq!(config.catalog.ttl_secs, 600);
        // Untouched sections keep defaults.
        assert_eq!(config.resume.min_chars, 200);
    }

    #[test]
    fn unknown_keys_rejected() {
        let result = load_from_str(
            r#"
            [models]
            chat_modle = "typo"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn zero_max_steps_rejected() {
        let result = load_from_str(
            r#"
            [models]
            max_steps = 0
            "#,
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("max_steps"), "got: {err}");
    }

    #[test]
    fn custom_scoring_keywords_replace_defaults() {
        let config = load_from_str(
            r#"
            [scoring]
            advanced_keywords = ["expert", "architecture"]
            "#,
        )
        .unwrap();
        assert_eq!(config.scoring.advanced_keywords.len(), 2);
        // Other scoring fields keep their defaults.
        assert_eq!(config.scoring.proficient_keywords.len(), 3);
    }
}
