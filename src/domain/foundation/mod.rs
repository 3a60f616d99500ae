//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the decision ranking domain.

mod criterion_type;
mod errors;
mod ids;
mod timestamp;

pub use criterion_type::CriterionType;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AlternativeId, CriterionId};
pub use timestamp::Timestamp;
