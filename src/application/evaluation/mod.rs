//! Evaluation handlers.
//!
//! Synchronous command and query handlers that feed catalog data through
//! the analysis engines.

mod compute_weights;
mod evaluate_decision;
mod rank_alternatives;

pub use compute_weights::{ComputeWeightsCommand, ComputeWeightsHandler, ComputeWeightsResult};
pub use evaluate_decision::{
    CriterionWeight, EvaluationReport, EvaluationRequest, EvaluationService,
};
pub use rank_alternatives::{
    RankAlternativesHandler, RankAlternativesQuery, RankedEntry, RankingReport,
};
