//! Inverse Gap Scoring - Weighted sum of per-criterion closeness to the ideal.

use serde::{Deserialize, Serialize};

use super::ranking::{order_by_score, ranked_alternatives};
use super::scoring::ensure_finite;
use super::{AnalysisError, DecisionMatrix, IdealProfile, RankedAlternative, ScoringInput};

/// Display name of the method in results.
pub const INVERSE_GAP_METHOD: &str = "Weighted Inverse Gap";

/// Result of scoring with `1 / (1 + |gap|)` per cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InverseGapResult {
    pub method: String,
    pub ideal_profile: Vec<f64>,
    /// score[i][j] = 1 / (1 + |decision[i][j] − ideal[j]|), in (0, 1]
    pub cell_scores: Vec<Vec<f64>>,
    /// final[i] = Σ_j weight[j] × score[i][j], in input order
    pub final_scores: Vec<f64>,
    /// Alternative indices from best to worst.
    pub order: Vec<usize>,
    pub ranking: Vec<RankedAlternative>,
    pub best: RankedAlternative,
    pub worst: RankedAlternative,
}

/// Inverse gap scoring functions.
pub struct InverseGapScoring;

impl InverseGapScoring {
    /// Scores alternatives by weighted closeness to the ideal profile.
    ///
    /// Unlike profile matching, scores are not rescaled against the worst
    /// alternative: an alternative matching the ideal on every criterion
    /// scores the sum of the weights.
    ///
    /// # Errors
    /// `InvalidMatrixShape` if weights, ideal profile, or names do not match
    /// the decision matrix dimensions, or a gap overflows to a non-finite value.
    pub fn calculate(
        decision: &DecisionMatrix,
        weights: &[f64],
        alternatives: &[String],
        ideal: &IdealProfile,
    ) -> Result<InverseGapResult, AnalysisError> {
        let input = ScoringInput::new(decision, weights, alternatives, ideal)?;
        Self::calculate_input(&input)
    }

    /// Runs inverse gap scoring on already-validated input.
    ///
    /// # Errors
    /// `InvalidMatrixShape` if a gap or final score is not finite.
    pub fn calculate_input(input: &ScoringInput<'_>) -> Result<InverseGapResult, AnalysisError> {
        let ideal = input.ideal.values();

        let gaps: Vec<Vec<f64>> = input
            .decision
            .rows()
            .iter()
            .map(|row| row.iter().zip(ideal).map(|(v, target)| (v - target).abs()).collect())
            .collect();
        ensure_finite(gaps.iter().flatten(), "gap")?;

        let cell_scores: Vec<Vec<f64>> = gaps
            .iter()
            .map(|row| row.iter().map(|gap| 1.0 / (1.0 + gap)).collect())
            .collect();

        let final_scores: Vec<f64> = cell_scores
            .iter()
            .map(|row| row.iter().zip(input.weights).map(|(s, w)| s * w).sum())
            .collect();
        ensure_finite(&final_scores, "final score")?;

        let order = order_by_score(&final_scores);
        let ranking = ranked_alternatives(&order, input.alternatives, &final_scores);
        let best = ranking[0].clone();
        let worst = ranking[ranking.len() - 1].clone();

        Ok(InverseGapResult {
            method: INVERSE_GAP_METHOD.to_string(),
            ideal_profile: ideal.to_vec(),
            cell_scores,
            final_scores,
            order,
            ranking,
            best,
            worst,
        })
    }
}
