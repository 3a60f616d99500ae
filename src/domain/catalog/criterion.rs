//! Criterion entity - A dimension alternatives are evaluated on.

use serde::{Deserialize, Serialize};

use super::Source;
use crate::domain::foundation::{CriterionId, CriterionType, ValidationError};

/// A decision criterion as stored by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: CriterionId,
    pub name: String,
    #[serde(rename = "type")]
    pub criterion_type: CriterionType,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub source: Option<Source>,
}

impl Criterion {
    /// Creates a criterion, trimming and requiring a name.
    pub fn new(
        id: CriterionId,
        name: impl Into<String>,
        criterion_type: CriterionType,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }

        Ok(Self {
            id,
            name,
            criterion_type,
            unit: None,
            source: None,
        })
    }

    /// Sets the measurement unit; blank units are dropped.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        let unit = unit.into().trim().to_string();
        self.unit = (!unit.is_empty()).then_some(unit);
        self
    }

    /// Attaches the reference the criterion was taken from.
    pub fn with_source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    /// Returns true if lower raw values are preferable.
    pub fn is_cost(&self) -> bool {
        self.criterion_type == CriterionType::Cost
    }
}
