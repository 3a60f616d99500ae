//! Alternative entity - A candidate being ranked.

use serde::{Deserialize, Serialize};

use super::Source;
use crate::domain::foundation::{AlternativeId, CriterionId, ValidationError};

/// A candidate alternative (e.g. a product) as stored by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: AlternativeId,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub sport: Option<String>,
    #[serde(default)]
    pub source: Option<Source>,
}

impl Alternative {
    /// Creates an alternative, trimming and requiring a name.
    pub fn new(id: AlternativeId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }

        Ok(Self {
            id,
            name,
            brand: None,
            sport: None,
            source: None,
        })
    }

    /// Sets the brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Sets the sport or usage category.
    pub fn with_sport(mut self, sport: impl Into<String>) -> Self {
        self.sport = Some(sport.into());
        self
    }

    /// Attaches the reference the alternative was taken from.
    pub fn with_source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }
}

/// The raw value of one alternative on one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeValue {
    pub alternative_id: AlternativeId,
    pub criterion_id: CriterionId,
    pub value: f64,
}

impl AlternativeValue {
    /// Creates a value cell.
    pub fn new(alternative_id: AlternativeId, criterion_id: CriterionId, value: f64) -> Self {
        Self {
            alternative_id,
            criterion_id,
            value,
        }
    }
}
