//! Criterion weight vectors and stored AHP results.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{CriterionId, DomainError, ErrorCode, Timestamp, ValidationError};

/// Tolerance used when checking that weights sum to 1.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Ordered, non-negative criterion weights summing to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Creates a weight vector, validating the simplex constraint.
    pub fn new(weights: Vec<f64>) -> Result<Self, ValidationError> {
        if weights.is_empty() {
            return Err(ValidationError::empty_field("weights"));
        }
        if weights.iter().any(|w| !w.is_finite()) {
            return Err(ValidationError::invalid_format(
                "weights",
                "every weight must be finite",
            ));
        }
        if let Some(&w) = weights.iter().find(|w| !(0.0..=1.0).contains(*w)) {
            return Err(ValidationError::out_of_range("weights", 0.0, 1.0, w));
        }

        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ValidationError::invalid_format(
                "weights",
                format!("weights must sum to 1.0, got {}", sum),
            ));
        }

        Ok(Self(weights))
    }

    /// Returns the weights as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns the number of weights.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no weights.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<f64>> for WeightVector {
    type Error = ValidationError;

    fn try_from(weights: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(weights)
    }
}

impl From<WeightVector> for Vec<f64> {
    fn from(weights: WeightVector) -> Self {
        weights.0
    }
}

/// A persisted AHP outcome: weights keyed by criterion plus the consistency ratio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightSnapshot {
    pub weights: HashMap<CriterionId, f64>,
    pub consistency_ratio: f64,
    pub computed_at: Timestamp,
}

impl WeightSnapshot {
    /// Pairs an ordered weight vector with the criteria it was computed for.
    ///
    /// # Errors
    /// `InvalidMatrixShape` when the lengths differ.
    pub fn new(
        criteria: &[CriterionId],
        weights: &[f64],
        consistency_ratio: f64,
    ) -> Result<Self, DomainError> {
        if criteria.len() != weights.len() {
            return Err(DomainError::new(
                ErrorCode::InvalidMatrixShape,
                format!(
                    "{} weights cannot be assigned to {} criteria",
                    weights.len(),
                    criteria.len()
                ),
            ));
        }

        Ok(Self {
            weights: criteria.iter().cloned().zip(weights.iter().copied()).collect(),
            consistency_ratio,
            computed_at: Timestamp::now(),
        })
    }

    /// Returns the weights re-ordered to match `criteria`.
    ///
    /// # Errors
    /// `WeightsNotComputed` when a criterion was added after this snapshot.
    pub fn weights_for(&self, criteria: &[CriterionId]) -> Result<Vec<f64>, DomainError> {
        criteria
            .iter()
            .map(|id| {
                self.weights.get(id).copied().ok_or_else(|| {
                    DomainError::new(
                        ErrorCode::WeightsNotComputed,
                        format!("No AHP weight recorded for criterion '{}'", id),
                    )
                    .with_detail("criterion_id", id.as_str())
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<CriterionId> {
        names.iter().map(|n| CriterionId::from_string(*n)).collect()
    }

    #[test]
    fn weight_vector_accepts_simplex() {
        let weights = WeightVector::new(vec![0.5, 0.3, 0.2]).unwrap();
        assert_eq!(weights.len(), 3);
        assert_eq!(weights.as_slice(), &[0.5, 0.3, 0.2]);
    }

    #[test]
    fn weight_vector_rejects_empty() {
        assert!(matches!(
            WeightVector::new(vec![]),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn weight_vector_rejects_negative() {
        assert_eq!(
            WeightVector::new(vec![1.2, -0.2]),
            Err(ValidationError::out_of_range("weights", 0.0, 1.0, 1.2))
        );
    }

    #[test]
    fn weight_vector_rejects_nan_as_format_error() {
        assert!(matches!(
            WeightVector::new(vec![f64::NAN, 1.0]),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn weight_vector_rejects_bad_sum() {
        assert!(WeightVector::new(vec![0.5, 0.4]).is_err());
    }

    #[test]
    fn weight_vector_deserializes_with_validation() {
        let ok: WeightVector = serde_json::from_str("[0.6, 0.4]").unwrap();
        assert_eq!(ok.as_slice(), &[0.6, 0.4]);

        let bad: Result<WeightVector, _> = serde_json::from_str("[0.6, 0.6]");
        assert!(bad.is_err());
    }

    #[test]
    fn snapshot_reorders_weights() {
        let snapshot =
            WeightSnapshot::new(&ids(&["price", "grip", "weight"]), &[0.5, 0.3, 0.2], 0.01)
                .unwrap();

        let reordered = snapshot.weights_for(&ids(&["weight", "price", "grip"])).unwrap();
        assert_eq!(reordered, vec![0.2, 0.5, 0.3]);
    }

    #[test]
    fn snapshot_reports_unknown_criterion() {
        let snapshot = WeightSnapshot::new(&ids(&["price"]), &[1.0], 0.0).unwrap();
        let err = snapshot.weights_for(&ids(&["price", "grip"])).unwrap_err();

        assert_eq!(err.code, ErrorCode::WeightsNotComputed);
        assert_eq!(err.details.get("criterion_id"), Some(&"grip".to_string()));
    }

    #[test]
    fn snapshot_rejects_length_mismatch() {
        let result = WeightSnapshot::new(&ids(&["price", "grip"]), &[1.0], 0.0);
        assert!(result.is_err());
    }
}
