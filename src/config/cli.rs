use crate::core::formatter::DEFAULT_PRECISION;
use crate::core::linalg::DEFAULT_SINGULAR_TOLERANCE;
use crate::domain::model::{OperandSpec, OperationKind, OperationRequest};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_tolerance, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "matrix-calc")]
#[command(about = "Add, subtract, multiply or divide two dense matrices")]
pub struct CliConfig {
    #[arg(long, value_enum)]
    pub operation: OperationKind,

    #[arg(long)]
    pub rows_a: i32,

    #[arg(long)]
    pub cols_a: i32,

    /// Whitespace separated values of the first matrix, row by row
    #[arg(long, allow_hyphen_values = true)]
    pub matrix_a: String,

    #[arg(long)]
    pub rows_b: i32,

    #[arg(long)]
    pub cols_b: i32,

    /// Whitespace separated values of the second matrix, row by row
    #[arg(long, allow_hyphen_values = true)]
    pub matrix_b: String,

    #[arg(long, default_value_t = DEFAULT_PRECISION, help = "Significant digits in the output")]
    pub precision: usize,

    #[arg(long, default_value_t = DEFAULT_SINGULAR_TOLERANCE)]
    pub singular_tolerance: f64,

    #[arg(long, help = "Print the outcome as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn to_request(&self) -> OperationRequest {
        OperationRequest {
            operation: self.operation,
            a: OperandSpec::new(self.rows_a, self.cols_a, self.matrix_a.clone()),
            b: OperandSpec::new(self.rows_b, self.cols_b, self.matrix_b.clone()),
        }
    }
}

impl ConfigProvider for CliConfig {
    fn precision(&self) -> usize {
        self.precision
    }

    fn singular_tolerance(&self) -> f64 {
        self.singular_tolerance
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_range("precision", self.precision, 1, 17)?;
        validate_tolerance("singular_tolerance", self.singular_tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_arguments() {
        let config = CliConfig::try_parse_from([
            "matrix-calc",
            "--operation",
            "multiply",
            "--rows-a",
            "2",
            "--cols-a",
            "2",
            "--matrix-a",
            "-1 2 3 4",
            "--rows-b",
            "2",
            "--cols-b",
            "2",
            "--matrix-b",
            "1 0 0 1",
        ])
        .unwrap();

        assert_eq!(config.operation, OperationKind::Multiply);
        assert_eq!(config.precision, DEFAULT_PRECISION);
        assert_eq!(config.matrix_a, "-1 2 3 4");
        assert!(config.validate().is_ok());
        assert_eq!(config.to_request().b.values, "1 0 0 1");
    }

    #[test]
    fn test_invalid_precision_fails_validation() {
        let config = CliConfig::try_parse_from([
            "matrix-calc",
            "--operation",
            "add",
            "--rows-a",
            "1",
            "--cols-a",
            "1",
            "--matrix-a",
            "1",
            "--rows-b",
            "1",
            "--cols-b",
            "1",
            "--matrix-b",
            "1",
            "--precision",
            "0",
        ])
        .unwrap();

        assert!(config.validate().is_err());
    }
}
