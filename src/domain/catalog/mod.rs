//! Catalog - Entities the caller stores and the evaluation service reads.
//!
//! The engines never see these types; the application layer turns them
//! into matrices.

mod alternative;
mod comparison;
mod criterion;

pub use alternative::{Alternative, AlternativeValue};
pub use comparison::PairwiseComparison;
pub use criterion::Criterion;

use serde::{Deserialize, Serialize};

/// Where a criterion or alternative was documented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub url: String,
}

impl Source {
    /// Creates a source reference.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}
