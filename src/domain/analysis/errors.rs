//! Errors raised by the analysis engines.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Input errors detected by the AHP and scoring engines.
///
/// Engines fail fast: nothing is partially computed once one of these is
/// returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Matrix input is missing")]
    NullInput,

    #[error("Invalid matrix shape: {reason}")]
    InvalidMatrixShape { reason: String },

    #[error("Column {column} of the pairwise matrix sums to zero")]
    DegenerateColumn { column: usize },

    #[error("Missing pairwise comparison for ({row}, {column})")]
    MissingComparison { row: usize, column: usize },

    #[error("Pairwise comparison ({row}, {column}) must be a finite value > 0, got {value}")]
    InvalidComparison { row: usize, column: usize, value: f64 },
}

impl AnalysisError {
    /// Creates an invalid shape error with a reason.
    pub fn invalid_shape(reason: impl Into<String>) -> Self {
        AnalysisError::InvalidMatrixShape {
            reason: reason.into(),
        }
    }

    /// Creates the error reported when arithmetic yields NaN or infinity.
    pub fn non_finite(what: impl AsRef<str>) -> Self {
        AnalysisError::InvalidMatrixShape {
            reason: format!("{} is not finite", what.as_ref()),
        }
    }

    /// Returns the error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::NullInput => ErrorCode::NullInput,
            AnalysisError::InvalidMatrixShape { .. } => ErrorCode::InvalidMatrixShape,
            AnalysisError::DegenerateColumn { .. } => ErrorCode::DegenerateColumn,
            AnalysisError::MissingComparison { .. } => ErrorCode::MissingComparison,
            AnalysisError::InvalidComparison { .. } => ErrorCode::InvalidComparison,
        }
    }
}

impl From<AnalysisError> for DomainError {
    fn from(err: AnalysisError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            AnalysisError::DegenerateColumn { column } => {
                domain.with_detail("column", column.to_string())
            }
            AnalysisError::MissingComparison { row, column }
            | AnalysisError::InvalidComparison { row, column, .. } => domain
                .with_detail("row", row.to_string())
                .with_detail("column", column.to_string()),
            _ => domain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_is_reported_as_shape_error() {
        let err = AnalysisError::non_finite("lambda_max");
        assert_eq!(err.code(), ErrorCode::InvalidMatrixShape);
        assert_eq!(format!("{}", err), "Invalid matrix shape: lambda_max is not finite");
    }

    #[test]
    fn degenerate_column_converts_with_detail() {
        let err: DomainError = AnalysisError::DegenerateColumn { column: 1 }.into();
        assert_eq!(err.code, ErrorCode::DegenerateColumn);
        assert_eq!(err.details.get("column"), Some(&"1".to_string()));
    }

    #[test]
    fn invalid_comparison_displays_value() {
        let err = AnalysisError::InvalidComparison {
            row: 0,
            column: 2,
            value: -3.0,
        };
        assert_eq!(
            format!("{}", err),
            "Pairwise comparison (0, 2) must be a finite value > 0, got -3"
        );
    }

    #[test]
    fn null_input_maps_to_null_input_code() {
        let err: DomainError = AnalysisError::NullInput.into();
        assert_eq!(err.code, ErrorCode::NullInput);
        assert!(err.details.is_empty());
    }
}
