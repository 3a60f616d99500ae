//! Scoring strategies - Interchangeable gap-to-score transforms.
//!
//! Two transforms exist and produce differently shaped results, so they are
//! kept as separate named strategies rather than merged:
//!
//! - `GapSimilarity` - profile matching, rescaled onto 0–100
//! - `InverseGap` - weighted sum of `1 / (1 + |gap|)`
//!
//! Callers select one explicitly through [`ScoringMethod`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{
    AnalysisError, DecisionMatrix, IdealProfile, InverseGapResult, InverseGapScoring,
    ProfileMatching, ProfileMatchingResult, RankedAlternative,
};
use crate::domain::foundation::ValidationError;

/// Dimension-checked inputs shared by every scoring strategy.
#[derive(Debug, Clone, Copy)]
pub struct ScoringInput<'a> {
    pub decision: &'a DecisionMatrix,
    pub weights: &'a [f64],
    pub alternatives: &'a [String],
    pub ideal: &'a IdealProfile,
}

impl<'a> ScoringInput<'a> {
    /// Bundles and validates scoring inputs.
    ///
    /// # Errors
    /// `InvalidMatrixShape` if the weight count or ideal profile length
    /// differs from the criterion count, the name count differs from the
    /// alternative count, or a weight is not finite.
    pub fn new(
        decision: &'a DecisionMatrix,
        weights: &'a [f64],
        alternatives: &'a [String],
        ideal: &'a IdealProfile,
    ) -> Result<Self, AnalysisError> {
        let m = decision.alternative_count();
        let n = decision.criterion_count();

        if weights.len() != n {
            return Err(AnalysisError::invalid_shape(format!(
                "{} weights supplied for {} criteria",
                weights.len(),
                n
            )));
        }
        if ideal.len() != n {
            return Err(AnalysisError::invalid_shape(format!(
                "ideal profile has {} values for {} criteria",
                ideal.len(),
                n
            )));
        }
        if alternatives.len() != m {
            return Err(AnalysisError::invalid_shape(format!(
                "{} alternative names supplied for {} decision rows",
                alternatives.len(),
                m
            )));
        }
        if let Some(j) = weights.iter().position(|w| !w.is_finite()) {
            return Err(AnalysisError::non_finite(format!("weight {}", j)));
        }

        Ok(Self {
            decision,
            weights,
            alternatives,
            ideal,
        })
    }
}

/// Fails with `InvalidMatrixShape` when any computed value is not finite.
pub(super) fn ensure_finite<'v>(
    values: impl IntoIterator<Item = &'v f64>,
    what: &str,
) -> Result<(), AnalysisError> {
    match values.into_iter().position(|v| !v.is_finite()) {
        Some(i) => Err(AnalysisError::non_finite(format!("{} {}", what, i))),
        None => Ok(()),
    }
}

/// Named scoring transforms a caller can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMethod {
    /// Profile matching: `100 × (1 − total_gap / max_gap)`.
    GapSimilarity,
    /// Weighted sum of `1 / (1 + |gap|)`.
    InverseGap,
}

impl ScoringMethod {
    /// Returns the strategy implementing this method.
    pub fn strategy(&self) -> Box<dyn ScoringStrategy> {
        match self {
            ScoringMethod::GapSimilarity => Box::new(GapSimilarityStrategy),
            ScoringMethod::InverseGap => Box::new(InverseGapStrategy),
        }
    }

    /// Returns the config/wire tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringMethod::GapSimilarity => "gap_similarity",
            ScoringMethod::InverseGap => "inverse_gap",
        }
    }
}

impl fmt::Display for ScoringMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScoringMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "gap_similarity" | "profile_matching" => Ok(ScoringMethod::GapSimilarity),
            "inverse_gap" => Ok(ScoringMethod::InverseGap),
            other => Err(ValidationError::invalid_format(
                "scoring_method",
                format!("unknown scoring method '{}'", other),
            )),
        }
    }
}

/// Result of a scoring strategy, tagged with the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", content = "result", rename_all = "snake_case")]
pub enum ScoringOutcome {
    GapSimilarity(ProfileMatchingResult),
    InverseGap(InverseGapResult),
}

impl ScoringOutcome {
    /// Returns the method that produced this outcome.
    pub fn method(&self) -> ScoringMethod {
        match self {
            ScoringOutcome::GapSimilarity(_) => ScoringMethod::GapSimilarity,
            ScoringOutcome::InverseGap(_) => ScoringMethod::InverseGap,
        }
    }

    /// Returns the alternatives from best to worst.
    pub fn ranking(&self) -> &[RankedAlternative] {
        match self {
            ScoringOutcome::GapSimilarity(r) => &r.ranking,
            ScoringOutcome::InverseGap(r) => &r.ranking,
        }
    }

    /// Returns the best-ranked alternative.
    pub fn best(&self) -> &RankedAlternative {
        match self {
            ScoringOutcome::GapSimilarity(r) => &r.best,
            ScoringOutcome::InverseGap(r) => &r.best,
        }
    }

    /// Returns the worst-ranked alternative.
    pub fn worst(&self) -> &RankedAlternative {
        match self {
            ScoringOutcome::GapSimilarity(r) => &r.worst,
            ScoringOutcome::InverseGap(r) => &r.worst,
        }
    }
}

/// A transform from deviations-to-ideal into a ranking.
pub trait ScoringStrategy: Send + Sync {
    /// The method this strategy implements.
    fn method(&self) -> ScoringMethod;

    /// Scores and ranks the alternatives.
    fn score(&self, input: &ScoringInput<'_>) -> Result<ScoringOutcome, AnalysisError>;
}

/// Profile matching similarity on a 0–100 scale.
#[derive(Debug, Clone, Copy, Default)]
pub struct GapSimilarityStrategy;

impl ScoringStrategy for GapSimilarityStrategy {
    fn method(&self) -> ScoringMethod {
        ScoringMethod::GapSimilarity
    }

    fn score(&self, input: &ScoringInput<'_>) -> Result<ScoringOutcome, AnalysisError> {
        ProfileMatching::calculate_input(input).map(ScoringOutcome::GapSimilarity)
    }
}

/// Weighted inverse-gap closeness.
#[derive(Debug, Clone, Copy, Default)]
pub struct InverseGapStrategy;

impl ScoringStrategy for InverseGapStrategy {
    fn method(&self) -> ScoringMethod {
        ScoringMethod::InverseGap
    }

    fn score(&self, input: &ScoringInput<'_>) -> Result<ScoringOutcome, AnalysisError> {
        InverseGapScoring::calculate_input(input).map(ScoringOutcome::InverseGap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        decision: DecisionMatrix,
        weights: Vec<f64>,
        names: Vec<String>,
        ideal: IdealProfile,
    }

    fn fixture() -> Fixture {
        Fixture {
            decision: DecisionMatrix::from_rows(vec![
                vec![80.0, 70.0],
                vec![60.0, 90.0],
                vec![80.0, 89.0],
            ])
            .unwrap(),
            weights: vec![0.6, 0.4],
            names: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            ideal: IdealProfile::from_values(vec![80.0, 90.0]).unwrap(),
        }
    }

    #[test]
    fn scoring_input_rejects_wrong_weight_count() {
        let f = fixture();
        let result = ScoringInput::new(&f.decision, &[1.0], &f.names, &f.ideal);
        assert!(matches!(result, Err(AnalysisError::InvalidMatrixShape { .. })));
    }

    #[test]
    fn scoring_input_rejects_nan_weight() {
        let f = fixture();
        let result = ScoringInput::new(&f.decision, &[f64::NAN, 0.5], &f.names, &f.ideal);
        assert!(matches!(result, Err(AnalysisError::InvalidMatrixShape { .. })));
    }

    #[test]
    fn strategies_report_overflow_as_shape_error() {
        let decision = DecisionMatrix::from_rows(vec![vec![1e308], vec![-1e308]]).unwrap();
        let ideal = IdealProfile::from_values(vec![1e308]).unwrap();
        let names = vec!["A".to_string(), "B".to_string()];
        let input = ScoringInput::new(&decision, &[1.0], &names, &ideal).unwrap();

        for method in [ScoringMethod::GapSimilarity, ScoringMethod::InverseGap] {
            let result = method.strategy().score(&input);
            assert!(
                matches!(result, Err(AnalysisError::InvalidMatrixShape { .. })),
                "method {}",
                method
            );
        }
    }

    #[test]
    fn method_selects_matching_strategy() {
        assert_eq!(
            ScoringMethod::GapSimilarity.strategy().method(),
            ScoringMethod::GapSimilarity
        );
        assert_eq!(
            ScoringMethod::InverseGap.strategy().method(),
            ScoringMethod::InverseGap
        );
    }

    #[test]
    fn strategies_produce_their_own_result_shapes() {
        let f = fixture();
        let input = ScoringInput::new(&f.decision, &f.weights, &f.names, &f.ideal).unwrap();

        let similarity = GapSimilarityStrategy.score(&input).unwrap();
        let inverse = InverseGapStrategy.score(&input).unwrap();

        assert!(matches!(similarity, ScoringOutcome::GapSimilarity(_)));
        assert!(matches!(inverse, ScoringOutcome::InverseGap(_)));
        assert_eq!(similarity.method(), ScoringMethod::GapSimilarity);
        assert_eq!(inverse.ranking().len(), 3);
    }

    #[test]
    fn both_strategies_agree_on_clear_winner() {
        let f = fixture();
        let input = ScoringInput::new(&f.decision, &f.weights, &f.names, &f.ideal).unwrap();

        for method in [ScoringMethod::GapSimilarity, ScoringMethod::InverseGap] {
            let outcome = method.strategy().score(&input).unwrap();
            assert_eq!(outcome.best().name, "C", "method {}", method);
            assert_eq!(outcome.worst().name, "B", "method {}", method);
        }
    }

    #[test]
    fn scoring_method_parses_aliases() {
        assert_eq!(
            "profile-matching".parse::<ScoringMethod>().unwrap(),
            ScoringMethod::GapSimilarity
        );
        assert_eq!(
            "Inverse_Gap".parse::<ScoringMethod>().unwrap(),
            ScoringMethod::InverseGap
        );
        assert!("topsis".parse::<ScoringMethod>().is_err());
    }

    #[test]
    fn outcome_serializes_with_strategy_tag() {
        let f = fixture();
        let input = ScoringInput::new(&f.decision, &f.weights, &f.names, &f.ideal).unwrap();
        let outcome = InverseGapStrategy.score(&input).unwrap();

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["strategy"], "inverse_gap");
        assert_eq!(json["result"]["best"]["name"], "C");
    }
}
