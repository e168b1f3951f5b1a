use crate::utils::error::{MatrixError, Result};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// `(rows, cols)` extent of a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of scalars, saturating instead of wrapping for absurd extents.
    pub fn element_count(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Converts the signed dimensions received at the boundary, rejecting
    /// anything below 1 or an element count that does not fit in `usize`.
    pub fn from_dimensions(rows: i32, cols: i32) -> Result<Self> {
        if rows < 1 || cols < 1 {
            return Err(MatrixError::InvalidDimensions { rows, cols });
        }
        let (r, c) = (rows as usize, cols as usize);
        if r.checked_mul(c).is_none() {
            return Err(MatrixError::InvalidDimensions { rows, cols });
        }
        Ok(Self::new(r, c))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Dense row-major matrix of `f64`, never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Array2<f64>,
}

impl Matrix {
    /// Wraps an array, refusing zero-sized extents.
    pub fn from_array(data: Array2<f64>) -> Result<Self> {
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(MatrixError::InvalidDimensions {
                rows: data.nrows() as i32,
                cols: data.ncols() as i32,
            });
        }
        Ok(Self { data })
    }

    pub fn from_shape_vec(shape: Shape, values: Vec<f64>) -> Result<Self> {
        let found = values.len();
        let data = Array2::from_shape_vec((shape.rows, shape.cols), values).map_err(|_| {
            MatrixError::MissingValues {
                rows: shape.rows,
                cols: shape.cols,
                expected: shape.element_count(),
                found,
            }
        })?;
        Self::from_array(data)
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.rows(), self.cols())
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get((row, col)).copied()
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    /// Row-major copy of the values.
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.iter().copied().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OperationKind {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl OperationKind {
    pub fn name(&self) -> &'static str {
        match self {
            OperationKind::Add => "addition",
            OperationKind::Subtract => "subtraction",
            OperationKind::Multiply => "multiplication",
            OperationKind::Divide => "division",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OperationKind::Add => "add",
            OperationKind::Subtract => "subtract",
            OperationKind::Multiply => "multiply",
            OperationKind::Divide => "divide",
        };
        f.write_str(label)
    }
}

impl FromStr for OperationKind {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(OperationKind::Add),
            "subtract" => Ok(OperationKind::Subtract),
            "multiply" => Ok(OperationKind::Multiply),
            "divide" => Ok(OperationKind::Divide),
            _ => Err(MatrixError::UnknownOperation {
                name: s.to_string(),
            }),
        }
    }
}

/// One operand as it arrives at the boundary: raw dimensions plus scalar text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperandSpec {
    pub rows: i32,
    pub cols: i32,
    pub values: String,
}

impl OperandSpec {
    pub fn new(rows: i32, cols: i32, values: impl Into<String>) -> Self {
        Self {
            rows,
            cols,
            values: values.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationRequest {
    pub operation: OperationKind,
    pub a: OperandSpec,
    pub b: OperandSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "result", rename_all = "lowercase")]
pub enum OperationOutcome {
    Success(String),
    Failure(String),
}

impl OperationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, OperationOutcome::Success(_))
    }

    pub fn text(&self) -> &str {
        match self {
            OperationOutcome::Success(text) | OperationOutcome::Failure(text) => text,
        }
    }

    /// Collapses both outcomes into the single return slot of the boundary.
    pub fn into_text(self) -> String {
        match self {
            OperationOutcome::Success(text) | OperationOutcome::Failure(text) => text,
        }
    }
}
