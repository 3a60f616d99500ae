//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DECISION_RANKER` prefix and nested values use double underscores as separators.
//!
//! Every section has defaults, so an empty environment yields a usable
//! configuration.
//!
//! # Example
//!
//! ```no_run
//! use decision_ranker::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Scoring with {}", config.analysis.scoring_method);
//! ```

mod analysis;
mod error;
mod logging;

pub use analysis::AnalysisConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Weight computation and ranking settings
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Tracing subscriber settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DECISION_RANKER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DECISION_RANKER__ANALYSIS__CONSISTENCY_THRESHOLD=0.2` -> `analysis.consistency_threshold = 0.2`
    /// - `DECISION_RANKER__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DECISION_RANKER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.analysis.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::ScoringMethod;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("DECISION_RANKER__ANALYSIS__CONSISTENCY_THRESHOLD");
        env::remove_var("DECISION_RANKER__ANALYSIS__SCORING_METHOD");
        env::remove_var("DECISION_RANKER__ANALYSIS__MIN_CRITERIA");
        env::remove_var("DECISION_RANKER__LOGGING__LEVEL");
        env::remove_var("DECISION_RANKER__LOGGING__JSON");
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.analysis.consistency_threshold, 0.10);
        assert_eq!(config.analysis.scoring_method, ScoringMethod::GapSimilarity);
        assert!(!config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_analysis_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DECISION_RANKER__ANALYSIS__CONSISTENCY_THRESHOLD", "0.2");
        env::set_var("DECISION_RANKER__ANALYSIS__SCORING_METHOD", "inverse_gap");
        env::set_var("DECISION_RANKER__ANALYSIS__MIN_CRITERIA", "3");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.analysis.consistency_threshold, 0.2);
        assert_eq!(config.analysis.scoring_method, ScoringMethod::InverseGap);
        assert_eq!(config.analysis.min_criteria, 3);
    }

    #[test]
    fn test_load_logging_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DECISION_RANKER__LOGGING__LEVEL", "warn");
        env::set_var("DECISION_RANKER__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.logging.level, "warn");
        assert!(config.logging.json);
    }

    #[test]
    fn test_validate_rejects_out_of_range_threshold() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DECISION_RANKER__ANALYSIS__CONSISTENCY_THRESHOLD", "2.5");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidConsistencyThreshold)
        ));
    }

    #[test]
    fn test_unknown_scoring_method_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DECISION_RANKER__ANALYSIS__SCORING_METHOD", "topsis");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
