//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `catalog` - Criteria, alternatives, values, and pairwise judgments
//! - `analysis` - Pure domain services for decision analysis (AHP, Profile Matching)

pub mod analysis;
pub mod catalog;
pub mod foundation;
