use crate::core::linalg::{self, DEFAULT_SINGULAR_TOLERANCE};
use crate::domain::model::{Matrix, OperationKind, Shape};
use crate::utils::error::{MatrixError, Result};

/// Shape checks plus the four binary operations. Stateless apart from the
/// singularity tolerance, so one engine can serve any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct MatrixOperationEngine {
    singular_tolerance: f64,
}

impl Default for MatrixOperationEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SINGULAR_TOLERANCE)
    }
}

impl MatrixOperationEngine {
    pub fn new(singular_tolerance: f64) -> Self {
        Self { singular_tolerance }
    }

    pub fn singular_tolerance(&self) -> f64 {
        self.singular_tolerance
    }

    /// Checks the operation's precondition on shapes alone, so callers can
    /// reject a request before spending time on parsing.
    pub fn check_shapes(&self, kind: OperationKind, left: Shape, right: Shape) -> Result<()> {
        match kind {
            OperationKind::Add | OperationKind::Subtract => {
                if left != right {
                    return Err(MatrixError::DimensionMismatch {
                        operation: kind.name(),
                        left,
                        right,
                    });
                }
            }
            OperationKind::Multiply => {
                if left.cols != right.rows {
                    return Err(MatrixError::InnerDimensionMismatch { left, right });
                }
            }
            OperationKind::Divide => {
                if !right.is_square() {
                    return Err(MatrixError::NonSquareDivisor { shape: right });
                }
                if left.cols != right.rows {
                    return Err(MatrixError::InnerDimensionMismatch { left, right });
                }
            }
        }
        Ok(())
    }

    pub fn apply(&self, kind: OperationKind, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        match kind {
            OperationKind::Add => self.add(a, b),
            OperationKind::Subtract => self.subtract(a, b),
            OperationKind::Multiply => self.multiply(a, b),
            OperationKind::Divide => self.divide(a, b),
        }
    }

    pub fn add(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        self.check_shapes(OperationKind::Add, a.shape(), b.shape())?;
        finite(OperationKind::Add, a.as_array() + b.as_array())
    }

    pub fn subtract(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        self.check_shapes(OperationKind::Subtract, a.shape(), b.shape())?;
        finite(OperationKind::Subtract, a.as_array() - b.as_array())
    }

    pub fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        self.check_shapes(OperationKind::Multiply, a.shape(), b.shape())?;
        finite(OperationKind::Multiply, a.as_array().dot(b.as_array()))
    }

    /// `A * B^-1`, the matrix analogue of `a / b = a * b^-1`.
    pub fn divide(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        self.check_shapes(OperationKind::Divide, a.shape(), b.shape())?;
        let b_inverse = self.inverse(b)?;
        finite(OperationKind::Divide, a.as_array().dot(b_inverse.as_array()))
    }

    pub fn inverse(&self, m: &Matrix) -> Result<Matrix> {
        linalg::inverse(m, self.singular_tolerance)
    }
}

fn finite(kind: OperationKind, data: ndarray::Array2<f64>) -> Result<Matrix> {
    let result = Matrix::from_array(data)?;
    if !result.is_finite() {
        return Err(MatrixError::NonFiniteResult {
            operation: kind.name(),
        });
    }
    Ok(result)
}
