//! ComputeWeightsHandler - Command handler deriving criterion weights via AHP.
//!
//! Assembles the reciprocal pairwise matrix from stored comparisons, runs the
//! AHP engine, and returns a weight snapshot keyed by criterion.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::config::AnalysisConfig;
use crate::domain::analysis::{AhpCalculator, AhpWeights, PairwiseMatrix, WeightSnapshot};
use crate::domain::catalog::{Criterion, PairwiseComparison};
use crate::domain::foundation::{CriterionId, DomainError, ErrorCode};

/// Command to compute AHP weights for a set of criteria.
#[derive(Debug, Clone)]
pub struct ComputeWeightsCommand {
    /// Criteria in the order weights should be reported.
    pub criteria: Vec<Criterion>,
    /// One judgment per unordered pair of distinct criteria.
    pub comparisons: Vec<PairwiseComparison>,
}

/// Result of a successful weight computation.
#[derive(Debug, Clone)]
pub struct ComputeWeightsResult {
    /// Weights keyed by criterion id.
    pub snapshot: WeightSnapshot,
    /// Full engine output, weights in criterion order.
    pub ahp: AhpWeights,
    /// Whether CR is below the configured threshold.
    pub consistent: bool,
}

/// Handler for computing criterion weights.
pub struct ComputeWeightsHandler {
    config: AnalysisConfig,
}

impl ComputeWeightsHandler {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn handle(&self, cmd: ComputeWeightsCommand) -> Result<ComputeWeightsResult, DomainError> {
        if cmd.criteria.len() < self.config.min_criteria {
            return Err(DomainError::new(
                ErrorCode::InsufficientCriteria,
                format!(
                    "At least {} criteria are required for AHP, got {}",
                    self.config.min_criteria,
                    cmd.criteria.len()
                ),
            ));
        }

        let ids: Vec<CriterionId> = cmd.criteria.iter().map(|c| c.id.clone()).collect();
        let positions = index_criteria(&ids)?;

        let mut builder = PairwiseMatrix::builder(ids.len());
        for comparison in &cmd.comparisons {
            let row = position_of(&positions, &comparison.criterion_i)?;
            let column = position_of(&positions, &comparison.criterion_j)?;
            builder = builder.compare(row, column, comparison.value);
        }
        let matrix = builder.build()?;

        let ahp = AhpCalculator::calculate_weights(&matrix)?;
        let consistent = ahp.is_consistent_at(self.config.consistency_threshold);

        if consistent {
            debug!(
                criteria = ids.len(),
                consistency_ratio = ahp.consistency_ratio,
                "Computed AHP weights"
            );
        } else {
            warn!(
                criteria = ids.len(),
                consistency_ratio = ahp.consistency_ratio,
                threshold = self.config.consistency_threshold,
                "Pairwise comparisons are inconsistent, revise the judgments"
            );
        }

        let snapshot = WeightSnapshot::new(&ids, &ahp.weights, ahp.consistency_ratio)?;

        Ok(ComputeWeightsResult {
            snapshot,
            ahp,
            consistent,
        })
    }
}

fn index_criteria(ids: &[CriterionId]) -> Result<HashMap<&CriterionId, usize>, DomainError> {
    let mut positions = HashMap::with_capacity(ids.len());
    for (index, id) in ids.iter().enumerate() {
        if positions.insert(id, index).is_some() {
            return Err(DomainError::validation(
                "criteria",
                format!("Criterion '{}' is listed more than once", id),
            ));
        }
    }
    Ok(positions)
}

fn position_of(
    positions: &HashMap<&CriterionId, usize>,
    id: &CriterionId,
) -> Result<usize, DomainError> {
    positions.get(id).copied().ok_or_else(|| {
        DomainError::new(
            ErrorCode::InvalidComparison,
            format!("Comparison references unknown criterion '{}'", id),
        )
        .with_detail("criterion_id", id.as_str())
    })
}
