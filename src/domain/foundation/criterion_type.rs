//! Criterion type: whether higher or lower raw values are preferable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Direction of preference for a criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionType {
    /// Higher values are better; the ideal is the column maximum.
    #[default]
    Benefit,
    /// Lower values are better; the ideal is the column minimum.
    Cost,
}

impl CriterionType {
    /// Returns the wire tag used by callers.
    pub fn as_str(&self) -> &'static str {
        match self {
            CriterionType::Benefit => "benefit",
            CriterionType::Cost => "cost",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            CriterionType::Benefit => "Benefit (higher is better)",
            CriterionType::Cost => "Cost (lower is better)",
        }
    }

    /// Picks the ideal value out of a column of raw values.
    ///
    /// Returns None for an empty column.
    pub fn ideal_of(&self, column: impl IntoIterator<Item = f64>) -> Option<f64> {
        let mut values = column.into_iter();
        let first = values.next()?;
        Some(match self {
            CriterionType::Benefit => values.fold(first, f64::max),
            CriterionType::Cost => values.fold(first, f64::min),
        })
    }
}

impl fmt::Display for CriterionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CriterionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "benefit" => Ok(CriterionType::Benefit),
            "cost" => Ok(CriterionType::Cost),
            other => Err(ValidationError::invalid_format(
                "criterion_type",
                format!("expected 'benefit' or 'cost', got '{}'", other),
            )),
        }
    }
}
