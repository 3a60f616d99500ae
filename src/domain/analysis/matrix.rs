//! Length-checked matrix types consumed by the analysis engines.
//!
//! Both matrices are validated once at construction (shape and finiteness),
//! so the engines can index them without re-checking dimensions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::AnalysisError;

/// Square reciprocal matrix of pairwise criterion comparisons.
///
/// Entry (i, j) states how much more important criterion i is than
/// criterion j. Reciprocal symmetry (`a[j][i] == 1 / a[i][j]`) and a unit
/// diagonal are the caller's responsibility; [`PairwiseMatrix::builder`]
/// produces matrices that satisfy both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct PairwiseMatrix {
    rows: Vec<Vec<f64>>,
}

impl PairwiseMatrix {
    /// Creates a pairwise matrix from raw rows.
    ///
    /// # Errors
    /// - `NullInput` if there are no rows
    /// - `InvalidMatrixShape` if any row length differs from the row count,
    ///   or an entry is NaN or infinite
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, AnalysisError> {
        if rows.is_empty() {
            return Err(AnalysisError::NullInput);
        }

        let n = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(AnalysisError::invalid_shape(format!(
                    "pairwise matrix must be square: {} rows but row {} has {} columns",
                    n,
                    i,
                    row.len()
                )));
            }
            if let Some(j) = row.iter().position(|v| !v.is_finite()) {
                return Err(AnalysisError::non_finite(format!("pairwise entry ({}, {})", i, j)));
            }
        }

        Ok(Self { rows })
    }

    /// Creates a builder that assembles the matrix from upper-triangle comparisons.
    pub fn builder(size: usize) -> PairwiseMatrixBuilder {
        PairwiseMatrixBuilder::new(size)
    }

    /// Returns the number of criteria (n).
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns entry (i, j).
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.rows[row][column]
    }

    /// Returns the rows of the matrix.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Returns the sum of every column.
    pub fn column_sums(&self) -> Vec<f64> {
        let n = self.size();
        (0..n)
            .map(|j| self.rows.iter().map(|row| row[j]).sum())
            .collect()
    }

    /// Multiplies the matrix by a vector of length n.
    pub fn multiply(&self, vector: &[f64]) -> Result<Vec<f64>, AnalysisError> {
        if vector.len() != self.size() {
            return Err(AnalysisError::invalid_shape(format!(
                "vector of length {} cannot multiply a {}x{} matrix",
                vector.len(),
                self.size(),
                self.size()
            )));
        }

        Ok(self
            .rows
            .iter()
            .map(|row| row.iter().zip(vector).map(|(a, w)| a * w).sum())
            .collect())
    }
}

impl TryFrom<Vec<Vec<f64>>> for PairwiseMatrix {
    type Error = AnalysisError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<PairwiseMatrix> for Vec<Vec<f64>> {
    fn from(matrix: PairwiseMatrix) -> Self {
        matrix.rows
    }
}

/// Builder that fills a reciprocal pairwise matrix from individual judgments.
///
/// Only the upper triangle (i < j) needs to be supplied. A judgment given as
/// (j, i) is stored as the reciprocal of (i, j). The diagonal is always 1.
#[derive(Debug, Default)]
pub struct PairwiseMatrixBuilder {
    size: usize,
    judgments: Vec<(usize, usize, f64)>,
}

impl PairwiseMatrixBuilder {
    /// Creates a builder for an n×n matrix.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            judgments: Vec::new(),
        }
    }

    /// Records that criterion `row` is `value` times as important as `column`.
    pub fn compare(mut self, row: usize, column: usize, value: f64) -> Self {
        self.judgments.push((row, column, value));
        self
    }

    /// Builds the reciprocal matrix.
    ///
    /// # Errors
    /// - `NullInput` for a zero-sized matrix
    /// - `InvalidMatrixShape` for an index outside the matrix
    /// - `InvalidComparison` for a value that is not finite and > 0, a
    ///   diagonal judgment other than 1, or a second judgment on a pair
    ///   already recorded in either direction
    /// - `MissingComparison` when an upper-triangle pair was never supplied
    pub fn build(self) -> Result<PairwiseMatrix, AnalysisError> {
        let n = self.size;
        if n == 0 {
            return Err(AnalysisError::NullInput);
        }

        let mut upper: HashMap<(usize, usize), f64> = HashMap::new();
        for (row, column, value) in self.judgments {
            if row >= n || column >= n {
                return Err(AnalysisError::invalid_shape(format!(
                    "comparison ({}, {}) is outside a {}x{} matrix",
                    row, column, n, n
                )));
            }
            if !value.is_finite() || value <= 0.0 {
                return Err(AnalysisError::InvalidComparison { row, column, value });
            }

            if row == column {
                if value != 1.0 {
                    return Err(AnalysisError::InvalidComparison { row, column, value });
                }
                continue;
            }

            let (key, upper_value) = if row < column {
                ((row, column), value)
            } else {
                ((column, row), 1.0 / value)
            };
            if upper.insert(key, upper_value).is_some() {
                return Err(AnalysisError::InvalidComparison { row, column, value });
            }
        }

        let mut rows = vec![vec![1.0; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let value = upper
                    .get(&(i, j))
                    .copied()
                    .ok_or(AnalysisError::MissingComparison { row: i, column: j })?;
                rows[i][j] = value;
                rows[j][i] = 1.0 / value;
            }
        }

        PairwiseMatrix::from_rows(rows)
    }
}

/// m×n matrix of raw alternative values: rows are alternatives, columns criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct DecisionMatrix {
    rows: Vec<Vec<f64>>,
}

impl DecisionMatrix {
    /// Creates a decision matrix from raw rows.
    ///
    /// # Errors
    /// - `NullInput` if there are no alternatives
    /// - `InvalidMatrixShape` if there are no criteria, rows are ragged, or
    ///   an entry is NaN or infinite
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, AnalysisError> {
        let Some(first) = rows.first() else {
            return Err(AnalysisError::NullInput);
        };

        let n = first.len();
        if n == 0 {
            return Err(AnalysisError::invalid_shape("decision matrix has no criteria"));
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(AnalysisError::invalid_shape(format!(
                    "decision matrix row {} has {} values, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            if let Some(j) = row.iter().position(|v| !v.is_finite()) {
                return Err(AnalysisError::non_finite(format!("decision value ({}, {})", i, j)));
            }
        }

        Ok(Self { rows })
    }

    /// Returns the number of alternatives (m).
    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of criteria (n).
    pub fn criterion_count(&self) -> usize {
        self.rows[0].len()
    }

    /// Returns the values of one alternative.
    pub fn row(&self, alternative: usize) -> &[f64] {
        &self.rows[alternative]
    }

    /// Iterates the values of one criterion across all alternatives.
    pub fn column(&self, criterion: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(move |row| row[criterion])
    }

    /// Returns the rows of the matrix.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }
}

impl TryFrom<Vec<Vec<f64>>> for DecisionMatrix {
    type Error = AnalysisError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<DecisionMatrix> for Vec<Vec<f64>> {
    fn from(matrix: DecisionMatrix) -> Self {
        matrix.rows
    }
}
