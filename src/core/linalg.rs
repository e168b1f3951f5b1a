//! Dense LU factorisation and the inverse/determinant built on it.

use crate::domain::model::Matrix;
use crate::utils::error::{MatrixError, Result};
use ndarray::Array2;

pub const DEFAULT_SINGULAR_TOLERANCE: f64 = 1e-12;

/// `P * A = L * U` packed into one array: unit-diagonal `L` below the
/// diagonal, `U` on and above it.
#[derive(Debug, Clone)]
pub struct LuDecomposition {
    lu: Array2<f64>,
    /// `pivots[k]` is the row swapped into position `k` at step `k`.
    pivots: Vec<usize>,
    num_swaps: usize,
}

impl LuDecomposition {
    /// Factorises a square matrix with partial pivoting.
    ///
    /// A pivot with magnitude at or below `tolerance * max|a_ij|` is treated
    /// as zero and the matrix is reported singular.
    pub fn new(matrix: &Matrix, tolerance: f64) -> Result<Self> {
        let shape = matrix.shape();
        if !shape.is_square() {
            return Err(MatrixError::NonSquareDivisor { shape });
        }

        let n = shape.rows;
        let mut lu = matrix.as_array().clone();
        let mut pivots = vec![0usize; n];
        let mut num_swaps = 0usize;

        let scale = lu.iter().fold(0.0f64, |acc, v| acc.max(v.abs()));
        let threshold = tolerance * scale;

        for col in 0..n {
            let mut pivot_row = col;
            let mut max_val = lu[[col, col]].abs();
            for row in (col + 1)..n {
                let val = lu[[row, col]].abs();
                if val > max_val {
                    max_val = val;
                    pivot_row = row;
                }
            }

            pivots[col] = pivot_row;
            if pivot_row != col {
                for j in 0..n {
                    lu.swap([col, j], [pivot_row, j]);
                }
                num_swaps += 1;
            }

            let pivot = lu[[col, col]];
            if scale == 0.0 || pivot.abs() <= threshold {
                tracing::debug!("Zero pivot {} at column {}", pivot, col);
                return Err(MatrixError::SingularMatrix { pivot });
            }

            for row in (col + 1)..n {
                lu[[row, col]] /= pivot;
            }

            for row in (col + 1)..n {
                let multiplier = lu[[row, col]];
                if multiplier == 0.0 {
                    continue;
                }
                for j in (col + 1)..n {
                    let upper = lu[[col, j]];
                    lu[[row, j]] -= multiplier * upper;
                }
            }
        }

        Ok(Self {
            lu,
            pivots,
            num_swaps,
        })
    }

    pub fn size(&self) -> usize {
        self.lu.nrows()
    }

    /// `(-1)^swaps * prod(U_ii)`
    pub fn determinant(&self) -> f64 {
        let sign = if self.num_swaps % 2 == 0 { 1.0 } else { -1.0 };
        (0..self.size()).fold(sign, |acc, i| acc * self.lu[[i, i]])
    }

    /// Solves `A * X = I` column by column.
    pub fn inverse(&self) -> Result<Matrix> {
        let n = self.size();
        let mut inv = Array2::<f64>::eye(n);

        for (k, &p) in self.pivots.iter().enumerate() {
            if p != k {
                for j in 0..n {
                    inv.swap([k, j], [p, j]);
                }
            }
        }

        for col in 0..n {
            // Forward substitution with unit-diagonal L.
            for i in 0..n {
                let mut sum = inv[[i, col]];
                for k in 0..i {
                    sum -= self.lu[[i, k]] * inv[[k, col]];
                }
                inv[[i, col]] = sum;
            }
            // Back substitution with U.
            for i in (0..n).rev() {
                let mut sum = inv[[i, col]];
                for k in (i + 1)..n {
                    sum -= self.lu[[i, k]] * inv[[k, col]];
                }
                inv[[i, col]] = sum / self.lu[[i, i]];
            }
        }

        Matrix::from_array(inv)
    }
}

pub fn inverse(matrix: &Matrix, tolerance: f64) -> Result<Matrix> {
    LuDecomposition::new(matrix, tolerance)?.inverse()
}

/// Determinant of a square matrix; singular input yields `0.0` rather than an error.
pub fn determinant(matrix: &Matrix) -> Result<f64> {
    match LuDecomposition::new(matrix, 0.0) {
        Ok(lu) => Ok(lu.determinant()),
        Err(MatrixError::SingularMatrix { .. }) => Ok(0.0),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Shape;

    const EPSILON: f64 = 1e-10;

    fn matrix(rows: usize, cols: usize, values: &[f64]) -> Matrix {
        Matrix::from_shape_vec(Shape::new(rows, cols), values.to_vec()).unwrap()
    }

    fn assert_close(actual: &Matrix, expected: &[f64]) {
        for (a, e) in actual.to_vec().iter().zip(expected) {
            assert!((a - e).abs() < EPSILON, "{} != {}", a, e);
        }
    }

    #[test]
    fn test_inverse_2x2() {
        let m = matrix(2, 2, &[4.0, 7.0, 2.0, 6.0]);
        let inv = inverse(&m, DEFAULT_SINGULAR_TOLERANCE).unwrap();
        assert_close(&inv, &[0.6, -0.7, -0.2, 0.4]);
    }

    #[test]
    fn test_inverse_needs_pivoting() {
        // Zero in the leading position forces a row swap.
        let m = matrix(3, 3, &[0.0, 1.0, 2.0, 1.0, 0.0, 3.0, 4.0, -3.0, 8.0]);
        let inv = inverse(&m, DEFAULT_SINGULAR_TOLERANCE).unwrap();
        let product = m.as_array().dot(inv.as_array());
        let identity = Array2::<f64>::eye(3);
        for (a, e) in product.iter().zip(identity.iter()) {
            assert!((a - e).abs() < EPSILON);
        }
    }

    #[test]
    fn test_singular_matrix_is_rejected() {
        let m = matrix(2, 2, &[1.0, 2.0, 2.0, 4.0]);
        let err = inverse(&m, DEFAULT_SINGULAR_TOLERANCE).unwrap_err();
        assert!(matches!(err, MatrixError::SingularMatrix { .. }));

        let zeros = matrix(2, 2, &[0.0; 4]);
        assert!(inverse(&zeros, DEFAULT_SINGULAR_TOLERANCE).is_err());
    }

    #[test]
    fn test_determinant_tracks_row_swaps() {
        let m = matrix(2, 2, &[0.0, 1.0, 1.0, 0.0]);
        assert!((determinant(&m).unwrap() + 1.0).abs() < EPSILON);

        let m = matrix(3, 3, &[2.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 4.0]);
        assert!((determinant(&m).unwrap() - 24.0).abs() < EPSILON);

        let singular = matrix(2, 2, &[1.0, 2.0, 2.0, 4.0]);
        assert_eq!(determinant(&singular).unwrap(), 0.0);
    }

    #[test]
    fn test_non_square_is_rejected() {
        let m = matrix(2, 3, &[1.0; 6]);
        assert!(matches!(
            LuDecomposition::new(&m, DEFAULT_SINGULAR_TOLERANCE),
            Err(MatrixError::NonSquareDivisor { .. })
        ));
    }
}
