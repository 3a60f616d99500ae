//! EvaluationService - Runs the full weights-then-ranking pipeline.
//!
//! One request carries everything needed: criteria, alternatives, raw
//! values, and pairwise judgments. The service computes AHP weights, then
//! ranks alternatives with those weights.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    ComputeWeightsCommand, ComputeWeightsHandler, RankAlternativesHandler, RankAlternativesQuery,
    RankedEntry,
};
use crate::config::AnalysisConfig;
use crate::domain::analysis::{ScoringMethod, ScoringOutcome};
use crate::domain::catalog::{Alternative, AlternativeValue, Criterion, PairwiseComparison};
use crate::domain::foundation::{CriterionId, DomainError, Timestamp};

/// A complete evaluation request, as read from a request file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub criteria: Vec<Criterion>,
    pub alternatives: Vec<Alternative>,
    #[serde(default)]
    pub values: Vec<AlternativeValue>,
    #[serde(default)]
    pub comparisons: Vec<PairwiseComparison>,
    /// Scoring method; the configured default applies when absent.
    #[serde(default)]
    pub method: Option<ScoringMethod>,
}

/// A criterion and its AHP weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionWeight {
    pub criterion_id: CriterionId,
    pub name: String,
    pub weight: f64,
}

/// Outcome of a full evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub method: ScoringMethod,
    pub weights: Vec<CriterionWeight>,
    pub lambda_max: f64,
    pub consistency_index: f64,
    pub random_index: f64,
    pub consistency_ratio: f64,
    pub consistent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistency_warning: Option<String>,
    pub ideal_profile: Vec<f64>,
    pub ranking: Vec<RankedEntry>,
    pub details: ScoringOutcome,
    pub computed_at: Timestamp,
}

/// Runs weight computation and ranking in sequence.
pub struct EvaluationService {
    weights: ComputeWeightsHandler,
    ranking: RankAlternativesHandler,
    consistency_threshold: f64,
}

impl EvaluationService {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            consistency_threshold: config.consistency_threshold,
            weights: ComputeWeightsHandler::new(config.clone()),
            ranking: RankAlternativesHandler::new(config),
        }
    }

    pub fn evaluate(&self, request: EvaluationRequest) -> Result<EvaluationReport, DomainError> {
        let computed = self.weights.handle(ComputeWeightsCommand {
            criteria: request.criteria.clone(),
            comparisons: request.comparisons,
        })?;

        let weights: Vec<CriterionWeight> = request
            .criteria
            .iter()
            .zip(&computed.ahp.weights)
            .map(|(criterion, &weight)| CriterionWeight {
                criterion_id: criterion.id.clone(),
                name: criterion.name.clone(),
                weight,
            })
            .collect();

        let consistency_warning = (!computed.consistent).then(|| {
            format!(
                "Consistency ratio {:.4} is at or above {:.2}; revise the pairwise comparisons",
                computed.ahp.consistency_ratio, self.consistency_threshold
            )
        });

        let report = self.ranking.handle(RankAlternativesQuery {
            criteria: request.criteria,
            alternatives: request.alternatives,
            values: request.values,
            weights: computed.snapshot.clone(),
            method: request.method,
        })?;

        debug!(
            method = %report.method,
            consistency_ratio = computed.ahp.consistency_ratio,
            alternatives = report.entries.len(),
            "Evaluation complete"
        );

        Ok(EvaluationReport {
            method: report.method,
            weights,
            lambda_max: computed.ahp.lambda_max,
            consistency_index: computed.ahp.consistency_index,
            random_index: computed.ahp.random_index,
            consistency_ratio: computed.ahp.consistency_ratio,
            consistent: computed.consistent,
            consistency_warning,
            ideal_profile: report.ideal_profile,
            ranking: report.entries,
            details: report.outcome,
            computed_at: computed.snapshot.computed_at,
        })
    }
}
