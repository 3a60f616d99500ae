//! Pairwise comparison - One stored judgment between two criteria.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::CriterionId;

/// "`criterion_i` is `value` times as important as `criterion_j`."
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairwiseComparison {
    pub criterion_i: CriterionId,
    pub criterion_j: CriterionId,
    pub value: f64,
}

impl PairwiseComparison {
    /// Creates a comparison.
    pub fn new(criterion_i: CriterionId, criterion_j: CriterionId, value: f64) -> Self {
        Self {
            criterion_i,
            criterion_j,
            value,
        }
    }
}
