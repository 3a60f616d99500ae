//! Analysis engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::{ScoringMethod, CONSISTENCY_THRESHOLD};

/// Settings for weight computation and ranking
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// CR at or above this value flags the pairwise judgments as unreliable
    #[serde(default = "default_consistency_threshold")]
    pub consistency_threshold: f64,

    /// Scoring transform used when a request does not name one
    #[serde(default = "default_scoring_method")]
    pub scoring_method: ScoringMethod,

    /// Fewest criteria accepted for an AHP run
    #[serde(default = "default_min_criteria")]
    pub min_criteria: usize,
}

impl AnalysisConfig {
    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.consistency_threshold > 0.0 && self.consistency_threshold <= 1.0) {
            return Err(ValidationError::InvalidConsistencyThreshold);
        }
        if self.min_criteria == 0 {
            return Err(ValidationError::InvalidMinCriteria);
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            consistency_threshold: default_consistency_threshold(),
            scoring_method: default_scoring_method(),
            min_criteria: default_min_criteria(),
        }
    }
}

fn default_consistency_threshold() -> f64 {
    CONSISTENCY_THRESHOLD
}

fn default_scoring_method() -> ScoringMethod {
    ScoringMethod::GapSimilarity
}

fn default_min_criteria() -> usize {
    2
}
