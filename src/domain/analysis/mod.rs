//! Analysis Module - Pure domain services for multi-criteria decision analysis.
//!
//! This module contains stateless functions that operate on validated
//! matrices to derive criterion weights and rank alternatives.
//!
//! # Components
//!
//! - `PairwiseMatrix` / `DecisionMatrix` - Length-checked matrix inputs
//! - `AhpCalculator` - Criterion weights and consistency ratio (AHP)
//! - `IdealProfile` - Per-criterion targets (benefit → max, cost → min)
//! - `ProfileMatching` - Gap-based similarity scoring on a 0–100 scale
//! - `InverseGapScoring` - Weighted `1 / (1 + |gap|)` scoring
//! - `ScoringStrategy` - Explicit selection between the two transforms
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. Identical inputs
//! always yield identical outputs, and calls can run in parallel on
//! independent inputs. No ports or adapters are needed since there's no I/O.

mod ahp;
mod errors;
mod ideal_profile;
mod inverse_gap;
mod matrix;
mod profile_matching;
mod ranking;
mod scoring;
mod weights;

// Re-export all public types
pub use ahp::{
    random_index, random_index_is_tabulated, AhpCalculator, AhpWeights, CONSISTENCY_THRESHOLD,
    RANDOM_INDEX_FALLBACK, RANDOM_INDEX_TABLE,
};
pub use errors::AnalysisError;
pub use ideal_profile::IdealProfile;
pub use inverse_gap::{InverseGapResult, InverseGapScoring, INVERSE_GAP_METHOD};
pub use matrix::{DecisionMatrix, PairwiseMatrix, PairwiseMatrixBuilder};
pub use profile_matching::{
    AlternativeBreakdown, CalculationSteps, ProfileMatching, ProfileMatchingResult,
    PERFECT_MATCH_SCORE, PROFILE_MATCHING_METHOD,
};
pub use ranking::RankedAlternative;
pub use scoring::{
    GapSimilarityStrategy, InverseGapStrategy, ScoringInput, ScoringMethod, ScoringOutcome,
    ScoringStrategy,
};
pub use weights::{WeightSnapshot, WeightVector, WEIGHT_SUM_TOLERANCE};
