//! RankAlternativesHandler - Query handler ranking alternatives against the ideal.
//!
//! Turns catalog data into a decision matrix, derives the ideal profile from
//! criterion types, and runs the selected scoring strategy.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::domain::analysis::{
    DecisionMatrix, IdealProfile, ScoringInput, ScoringMethod, ScoringOutcome, WeightSnapshot,
};
use crate::domain::catalog::{Alternative, AlternativeValue, Criterion};
use crate::domain::foundation::{AlternativeId, CriterionId, DomainError, ErrorCode};

/// Query to rank alternatives with previously computed weights.
#[derive(Debug, Clone)]
pub struct RankAlternativesQuery {
    pub criteria: Vec<Criterion>,
    pub alternatives: Vec<Alternative>,
    pub values: Vec<AlternativeValue>,
    pub weights: WeightSnapshot,
    /// Overrides the configured scoring method.
    pub method: Option<ScoringMethod>,
}

/// One alternative in a ranking, with its display fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub alternative_id: AlternativeId,
    pub name: String,
    pub brand: Option<String>,
    pub sport: Option<String>,
    pub source_url: Option<String>,
    pub score: f64,
}

/// Result of ranking alternatives.
#[derive(Debug, Clone, Serialize)]
pub struct RankingReport {
    pub method: ScoringMethod,
    /// Weights in criterion order.
    pub weights: Vec<f64>,
    pub ideal_profile: Vec<f64>,
    /// Best first.
    pub entries: Vec<RankedEntry>,
    /// Strategy-specific intermediate values.
    pub outcome: ScoringOutcome,
}

impl RankingReport {
    /// Returns the top-ranked entry.
    pub fn best(&self) -> Option<&RankedEntry> {
        self.entries.first()
    }
}

/// Handler for ranking alternatives.
pub struct RankAlternativesHandler {
    config: AnalysisConfig,
}

impl RankAlternativesHandler {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn handle(&self, query: RankAlternativesQuery) -> Result<RankingReport, DomainError> {
        if query.criteria.is_empty() {
            return Err(DomainError::new(
                ErrorCode::InsufficientCriteria,
                "At least one criterion is required to rank alternatives",
            ));
        }
        if query.alternatives.is_empty() {
            return Err(DomainError::new(
                ErrorCode::NoAlternatives,
                "At least one alternative is required",
            ));
        }

        let criterion_ids: Vec<CriterionId> =
            query.criteria.iter().map(|c| c.id.clone()).collect();
        let decision = decision_matrix(&query.criteria, &query.alternatives, &query.values)?;
        let weights = query.weights.weights_for(&criterion_ids)?;

        let types: Vec<_> = query.criteria.iter().map(|c| c.criterion_type).collect();
        let ideal = IdealProfile::derive(&decision, &types)?;

        let names: Vec<String> = query.alternatives.iter().map(|a| a.name.clone()).collect();
        let input = ScoringInput::new(&decision, &weights, &names, &ideal)?;

        let method = query.method.unwrap_or(self.config.scoring_method);
        let outcome = method.strategy().score(&input)?;

        let entries: Vec<RankedEntry> = outcome
            .ranking()
            .iter()
            .map(|ranked| {
                let alternative = &query.alternatives[ranked.index];
                RankedEntry {
                    rank: ranked.rank,
                    alternative_id: alternative.id.clone(),
                    name: alternative.name.clone(),
                    brand: alternative.brand.clone(),
                    sport: alternative.sport.clone(),
                    source_url: alternative.source.as_ref().map(|s| s.url.clone()),
                    score: ranked.score,
                }
            })
            .collect();

        debug!(
            method = %method,
            criteria = criterion_ids.len(),
            alternatives = entries.len(),
            best = %outcome.best().name,
            "Ranked alternatives"
        );

        Ok(RankingReport {
            method,
            weights,
            ideal_profile: ideal.values().to_vec(),
            entries,
            outcome,
        })
    }
}

/// Lays the value cells out as alternatives × criteria.
///
/// When a cell is supplied more than once the last value wins.
fn decision_matrix(
    criteria: &[Criterion],
    alternatives: &[Alternative],
    values: &[AlternativeValue],
) -> Result<DecisionMatrix, DomainError> {
    let cells: HashMap<(&AlternativeId, &CriterionId), f64> = values
        .iter()
        .map(|v| ((&v.alternative_id, &v.criterion_id), v.value))
        .collect();

    let rows = alternatives
        .iter()
        .map(|alternative| {
            criteria
                .iter()
                .map(|criterion| {
                    cells
                        .get(&(&alternative.id, &criterion.id))
                        .copied()
                        .ok_or_else(|| {
                            DomainError::new(
                                ErrorCode::MissingValue,
                                format!(
                                    "No value for alternative '{}' on criterion '{}'",
                                    alternative.name, criterion.name
                                ),
                            )
                            .with_detail("alternative_id", alternative.id.as_str())
                            .with_detail("criterion_id", criterion.id.as_str())
                        })
                })
                .collect::<Result<Vec<f64>, DomainError>>()
        })
        .collect::<Result<Vec<_>, DomainError>>()?;

    Ok(DecisionMatrix::from_rows(rows)?)
}
