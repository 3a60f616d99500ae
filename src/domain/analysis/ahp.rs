//! AHP Calculator - Criterion weights and consistency ratio from pairwise comparisons.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{AnalysisError, PairwiseMatrix, WeightVector};
use crate::domain::foundation::ValidationError;

/// Saaty's Random Index for matrix sizes 1 through 10.
pub const RANDOM_INDEX_TABLE: [f64; 10] = [0.00, 0.00, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// Random Index used for n > 10.
///
/// Saaty's table stops at n = 10; reusing the last entry is an approximation,
/// not a published value.
pub const RANDOM_INDEX_FALLBACK: f64 = 1.49;

/// Conventional upper bound (exclusive) for an acceptably consistent matrix.
pub const CONSISTENCY_THRESHOLD: f64 = 0.10;

/// Looks up the Random Index for an n×n matrix.
pub fn random_index(n: usize) -> f64 {
    match n {
        0 => 0.0,
        1..=10 => RANDOM_INDEX_TABLE[n - 1],
        _ => RANDOM_INDEX_FALLBACK,
    }
}

/// Returns true when the Random Index for n comes from Saaty's table
/// rather than the n > 10 fallback.
pub fn random_index_is_tabulated(n: usize) -> bool {
    n <= RANDOM_INDEX_TABLE.len()
}

/// Result of an AHP weight computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AhpWeights {
    /// Priority vector, same order as the matrix rows; sums to 1.
    pub weights: Vec<f64>,
    /// Estimated principal eigenvalue.
    pub lambda_max: f64,
    /// CI = (λmax − n) / (n − 1).
    pub consistency_index: f64,
    /// Random Index used for the ratio.
    pub random_index: f64,
    /// CR = CI / RI, or 0 when RI is 0.
    pub consistency_ratio: f64,
    /// False when the Random Index is the n > 10 approximation.
    pub random_index_tabulated: bool,
}

impl AhpWeights {
    /// The defined result for fewer than two criteria.
    fn trivial(n: usize) -> Self {
        Self {
            weights: vec![1.0],
            lambda_max: n as f64,
            consistency_index: 0.0,
            random_index: 0.0,
            consistency_ratio: 0.0,
            random_index_tabulated: true,
        }
    }

    /// Checks CR against the conventional 0.10 threshold.
    pub fn is_consistent(&self) -> bool {
        self.is_consistent_at(CONSISTENCY_THRESHOLD)
    }

    /// Checks CR against a caller-chosen threshold (exclusive).
    pub fn is_consistent_at(&self, threshold: f64) -> bool {
        self.consistency_ratio < threshold
    }

    /// Returns the weights as a validated vector.
    pub fn weight_vector(&self) -> Result<WeightVector, ValidationError> {
        WeightVector::new(self.weights.clone())
    }

    /// Splits into the `(weights, cr)` pair.
    pub fn into_parts(self) -> (Vec<f64>, f64) {
        (self.weights, self.consistency_ratio)
    }
}

/// Analytic Hierarchy Process weight computation.
///
/// Uses column normalization followed by row averaging as an approximation
/// of the principal eigenvector.
pub struct AhpCalculator;

impl AhpCalculator {
    /// Computes criterion weights and the consistency ratio.
    ///
    /// # Algorithm
    /// 1. Divide every entry by its column sum
    /// 2. Weight[i] = mean of normalized row i, re-normalized to sum to 1
    /// 3. λmax = mean of (A·w)[i] / w[i]
    /// 4. CI = (λmax − n) / (n − 1), CR = CI / RI(n)
    ///
    /// # Edge Cases
    /// - n < 2: weights `[1.0]`, CR 0
    /// - n = 2: RI is 0, so CR is 0
    /// - n > 10: RI falls back to 1.49
    ///
    /// # Errors
    /// - `DegenerateColumn` if a column sums to exactly 0
    /// - `InvalidMatrixShape` if the arithmetic produces NaN or infinity
    pub fn calculate_weights(matrix: &PairwiseMatrix) -> Result<AhpWeights, AnalysisError> {
        let n = matrix.size();
        if n < 2 {
            return Ok(AhpWeights::trivial(n));
        }

        let column_sums = matrix.column_sums();
        if let Some(column) = column_sums.iter().position(|sum| *sum == 0.0) {
            return Err(AnalysisError::DegenerateColumn { column });
        }

        let size = n as f64;
        let mut weights: Vec<f64> = matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&column_sums)
                    .map(|(entry, sum)| entry / sum)
                    .sum::<f64>()
                    / size
            })
            .collect();

        let total: f64 = weights.iter().sum();
        if !total.is_finite() || total == 0.0 {
            return Err(AnalysisError::non_finite("priority vector"));
        }
        for weight in &mut weights {
            *weight /= total;
        }

        let weighted_sums = matrix.multiply(&weights)?;
        let lambda_max = weighted_sums
            .iter()
            .zip(&weights)
            .map(|(aw, w)| aw / w)
            .sum::<f64>()
            / size;
        if !lambda_max.is_finite() {
            return Err(AnalysisError::non_finite("lambda_max"));
        }

        // λmax >= n for positive reciprocal matrices; anything below is rounding.
        let consistency_index = ((lambda_max - size) / (size - 1.0)).max(0.0);
        let ri = random_index(n);
        let consistency_ratio = if ri == 0.0 {
            0.0
        } else {
            consistency_index / ri
        };

        trace!(
            criteria = n,
            lambda_max,
            consistency_ratio,
            "Computed AHP weights"
        );

        Ok(AhpWeights {
            weights,
            lambda_max,
            consistency_index,
            random_index: ri,
            consistency_ratio,
            random_index_tabulated: random_index_is_tabulated(n),
        })
    }

    /// Builds the matrix from raw rows and computes its weights.
    pub fn calculate_from_rows(rows: Vec<Vec<f64>>) -> Result<AhpWeights, AnalysisError> {
        let matrix = PairwiseMatrix::from_rows(rows)?;
        Self::calculate_weights(&matrix)
    }
}
