//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations. Following CQRS, weight
//! computation is a command and ranking is a query; `EvaluationService`
//! chains the two.

pub mod evaluation;

pub use evaluation::{
    ComputeWeightsCommand, ComputeWeightsHandler, ComputeWeightsResult, CriterionWeight,
    EvaluationReport, EvaluationRequest, EvaluationService, RankAlternativesHandler,
    RankAlternativesQuery, RankedEntry, RankingReport,
};
