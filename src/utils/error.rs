use crate::domain::model::Shape;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("Invalid number '{token}' at position {position}")]
    InvalidNumber { token: String, position: usize },

    #[error("Expected {expected} values for a {rows}x{cols} matrix but found {found}")]
    MissingValues {
        rows: usize,
        cols: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid operation '{name}'")]
    UnknownOperation { name: String },

    #[error("Invalid matrix dimensions {rows}x{cols}: rows and columns must be positive")]
    InvalidDimensions { rows: i32, cols: i32 },

    #[error("Matrices must have the same dimensions for {operation}")]
    DimensionMismatch {
        operation: &'static str,
        left: Shape,
        right: Shape,
    },

    #[error("Number of columns in first matrix must equal number of rows in second matrix")]
    InnerDimensionMismatch { left: Shape, right: Shape },

    #[error("Second matrix must be square for division (using inverse)")]
    NonSquareDivisor { shape: Shape },

    #[error("Second matrix is singular and cannot be inverted")]
    SingularMatrix { pivot: f64 },

    #[error("Result of {operation} contains non-finite values")]
    NonFiniteResult { operation: &'static str },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Parse,
    Shape,
    Numeric,
    Config,
}

impl MatrixError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MatrixError::InvalidNumber { .. }
            | MatrixError::MissingValues { .. }
            | MatrixError::UnknownOperation { .. } => ErrorCategory::Parse,
            MatrixError::InvalidDimensions { .. }
            | MatrixError::DimensionMismatch { .. }
            | MatrixError::InnerDimensionMismatch { .. }
            | MatrixError::NonSquareDivisor { .. } => ErrorCategory::Shape,
            MatrixError::SingularMatrix { .. } | MatrixError::NonFiniteResult { .. } => {
                ErrorCategory::Numeric
            }
            MatrixError::ConfigError { .. }
            | MatrixError::InvalidConfigValue { .. }
            | MatrixError::IoError(_) => ErrorCategory::Config,
        }
    }

    /// The single-string form handed back across the calculator boundary.
    pub fn user_friendly_message(&self) -> String {
        format!("Error: {}", self)
    }
}

pub type Result<T> = std::result::Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_message_prefix() {
        let err = MatrixError::NonSquareDivisor {
            shape: Shape::new(2, 3),
        };
        assert_eq!(
            err.user_friendly_message(),
            "Error: Second matrix must be square for division (using inverse)"
        );
        assert_eq!(err.category(), ErrorCategory::Shape);
    }

    #[test]
    fn test_categories() {
        let parse = MatrixError::InvalidNumber {
            token: "x".to_string(),
            position: 0,
        };
        let numeric = MatrixError::SingularMatrix { pivot: 0.0 };
        assert_eq!(parse.category(), ErrorCategory::Parse);
        assert_eq!(numeric.category(), ErrorCategory::Numeric);
    }
}
