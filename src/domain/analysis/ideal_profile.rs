//! Ideal Profile - Per-criterion target values alternatives are measured against.

use serde::{Deserialize, Serialize};

use super::{AnalysisError, DecisionMatrix};
use crate::domain::foundation::CriterionType;

/// One ideal value per criterion, in decision-matrix column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct IdealProfile(Vec<f64>);

impl IdealProfile {
    /// Creates an ideal profile from explicit values.
    ///
    /// # Errors
    /// `InvalidMatrixShape` if empty or any value is not finite.
    pub fn from_values(values: Vec<f64>) -> Result<Self, AnalysisError> {
        if values.is_empty() {
            return Err(AnalysisError::invalid_shape("ideal profile has no criteria"));
        }
        if let Some(j) = values.iter().position(|v| !v.is_finite()) {
            return Err(AnalysisError::non_finite(format!("ideal value {}", j)));
        }
        Ok(Self(values))
    }

    /// Derives the ideal profile from a decision matrix.
    ///
    /// Benefit criteria take the column maximum, cost criteria the column
    /// minimum.
    ///
    /// # Errors
    /// `InvalidMatrixShape` if `types` does not have one entry per column.
    pub fn derive(
        decision: &DecisionMatrix,
        types: &[CriterionType],
    ) -> Result<Self, AnalysisError> {
        if types.len() != decision.criterion_count() {
            return Err(AnalysisError::invalid_shape(format!(
                "{} criterion types supplied for {} decision columns",
                types.len(),
                decision.criterion_count()
            )));
        }

        let values = types
            .iter()
            .enumerate()
            .map(|(j, criterion_type)| {
                criterion_type
                    .ideal_of(decision.column(j))
                    .ok_or(AnalysisError::NullInput)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self(values))
    }

    /// Returns the ideal values.
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Returns the number of criteria.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the profile is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<f64>> for IdealProfile {
    type Error = AnalysisError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_values(values)
    }
}

impl From<IdealProfile> for Vec<f64> {
    fn from(profile: IdealProfile) -> Self {
        profile.0
    }
}
