//! Profile Matching - Gap-based similarity scoring against an ideal profile.

use serde::{Deserialize, Serialize};

use super::ranking::{order_by_score, ranked_alternatives, ranks_from_order};
use super::scoring::ensure_finite;
use super::{AnalysisError, DecisionMatrix, IdealProfile, RankedAlternative, ScoringInput};

/// Display name of the method in results.
pub const PROFILE_MATCHING_METHOD: &str = "Profile Matching";

/// Score given to every alternative when no alternative deviates from the ideal.
pub const PERFECT_MATCH_SCORE: f64 = 100.0;

/// Per-alternative breakdown of the profile matching computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeBreakdown {
    pub alternative: String,
    pub gaps: Vec<f64>,
    pub weighted_gaps: Vec<f64>,
    pub total_gap: f64,
    pub similarity_score: f64,
    pub ranking: usize,
}

/// Formulas and per-alternative details, for explaining a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationSteps {
    pub gap_formula: String,
    pub weighted_gap_formula: String,
    pub total_gap_formula: String,
    pub similarity_formula: String,
    pub detailed_calculations: Vec<AlternativeBreakdown>,
}

impl CalculationSteps {
    fn with_details(detailed_calculations: Vec<AlternativeBreakdown>) -> Self {
        Self {
            gap_formula: "|Alternative_value - Ideal_value|".to_string(),
            weighted_gap_formula: "w_j × gap_ij".to_string(),
            total_gap_formula: "Σ(weighted_gaps)".to_string(),
            similarity_formula: "100 × (1 - total_gap / max_gap)".to_string(),
            detailed_calculations,
        }
    }
}

/// Full result of a profile matching run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileMatchingResult {
    pub method: String,
    pub ideal_profile: Vec<f64>,
    /// gap[i][j] = |decision[i][j] − ideal[j]|
    pub gaps: Vec<Vec<f64>>,
    /// weighted_gap[i][j] = weight[j] × gap[i][j]
    pub weighted_gaps: Vec<Vec<f64>>,
    pub total_gaps: Vec<f64>,
    pub max_gap: f64,
    /// Similarity scores on the 0–100 scale, in input order.
    pub similarity_scores: Vec<f64>,
    /// Alternative indices from best to worst.
    pub order: Vec<usize>,
    pub ranking: Vec<RankedAlternative>,
    pub best: RankedAlternative,
    pub worst: RankedAlternative,
    pub calculation_steps: CalculationSteps,
}

impl ProfileMatchingResult {
    /// Returns the 1-based rank of the named alternative.
    pub fn rank_of(&self, alternative: &str) -> Option<usize> {
        self.ranking
            .iter()
            .find(|r| r.name == alternative)
            .map(|r| r.rank)
    }
}

/// Profile matching scoring functions.
pub struct ProfileMatching;

impl ProfileMatching {
    /// Scores every alternative by its weighted deviation from the ideal profile.
    ///
    /// # Algorithm
    /// 1. gap[i][j] = |decision[i][j] − ideal[j]|
    /// 2. weighted_gap[i][j] = weight[j] × gap[i][j]
    /// 3. total_gap[i] = Σ_j weighted_gap[i][j]
    /// 4. score[i] = 100 × (1 − total_gap[i] / max_gap), or 100 for all when
    ///    max_gap is 0
    /// 5. Rank by descending score, ties keep input order
    ///
    /// # Errors
    /// `InvalidMatrixShape` if weights, ideal profile, or names do not match
    /// the decision matrix dimensions, or a gap overflows to a non-finite value.
    pub fn calculate(
        decision: &DecisionMatrix,
        weights: &[f64],
        alternatives: &[String],
        ideal: &IdealProfile,
    ) -> Result<ProfileMatchingResult, AnalysisError> {
        let input = ScoringInput::new(decision, weights, alternatives, ideal)?;
        Self::calculate_input(&input)
    }

    /// Runs profile matching on already-validated input.
    ///
    /// # Errors
    /// `InvalidMatrixShape` if a gap, total gap, or the maximum gap is not
    /// finite.
    pub fn calculate_input(
        input: &ScoringInput<'_>,
    ) -> Result<ProfileMatchingResult, AnalysisError> {
        let ideal = input.ideal.values();

        let gaps: Vec<Vec<f64>> = input
            .decision
            .rows()
            .iter()
            .map(|row| row.iter().zip(ideal).map(|(v, target)| (v - target).abs()).collect())
            .collect();
        ensure_finite(gaps.iter().flatten(), "gap")?;

        let weighted_gaps: Vec<Vec<f64>> = gaps
            .iter()
            .map(|row| row.iter().zip(input.weights).map(|(gap, w)| w * gap).collect())
            .collect();

        let total_gaps: Vec<f64> = weighted_gaps.iter().map(|row| row.iter().sum()).collect();
        ensure_finite(&total_gaps, "total gap")?;

        let max_gap = total_gaps.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let similarity_scores: Vec<f64> = if max_gap > 0.0 {
            total_gaps
                .iter()
                .map(|total| 100.0 * (1.0 - total / max_gap))
                .collect()
        } else {
            vec![PERFECT_MATCH_SCORE; total_gaps.len()]
        };

        let order = order_by_score(&similarity_scores);
        let ranks = ranks_from_order(&order);
        let ranking = ranked_alternatives(&order, input.alternatives, &similarity_scores);

        let details = input
            .alternatives
            .iter()
            .enumerate()
            .map(|(i, name)| AlternativeBreakdown {
                alternative: name.clone(),
                gaps: gaps[i].clone(),
                weighted_gaps: weighted_gaps[i].clone(),
                total_gap: total_gaps[i],
                similarity_score: similarity_scores[i],
                ranking: ranks[i],
            })
            .collect();

        // ScoringInput guarantees at least one alternative.
        let best = ranking[0].clone();
        let worst = ranking[ranking.len() - 1].clone();

        Ok(ProfileMatchingResult {
            method: PROFILE_MATCHING_METHOD.to_string(),
            ideal_profile: ideal.to_vec(),
            gaps,
            weighted_gaps,
            total_gaps,
            max_gap,
            similarity_scores,
            order,
            ranking,
            best,
            worst,
            calculation_steps: CalculationSteps::with_details(details),
        })
    }
}
