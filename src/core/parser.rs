use crate::domain::model::{Matrix, Shape};
use crate::utils::error::{MatrixError, Result};

/// Reads whitespace separated scalars into a matrix, row by row.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixParser;

impl MatrixParser {
    pub fn new() -> Self {
        Self
    }

    /// Consumes the first `rows * cols` tokens of `text`; anything after them is ignored.
    pub fn parse(&self, shape: Shape, text: &str) -> Result<Matrix> {
        let expected = shape.element_count();
        // Sized by the tokens actually present, never by the requested extent.
        let values = text
            .split_whitespace()
            .take(expected)
            .enumerate()
            .map(|(position, token)| {
                token
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| MatrixError::InvalidNumber {
                        token: token.to_string(),
                        position,
                    })
            })
            .collect::<Result<Vec<f64>>>()?;

        if values.len() < expected {
            return Err(MatrixError::MissingValues {
                rows: shape.rows,
                cols: shape.cols,
                expected,
                found: values.len(),
            });
        }

        tracing::debug!("Parsed {} matrix", shape);
        Matrix::from_shape_vec(shape, values)
    }

    /// Same as [`parse`](Self::parse) but starting from the raw signed boundary dimensions.
    pub fn parse_dimensions(&self, rows: i32, cols: i32, text: &str) -> Result<Matrix> {
        self.parse(Shape::from_dimensions(rows, cols)?, text)
    }
}
