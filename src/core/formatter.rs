use crate::domain::model::Matrix;

pub const DEFAULT_PRECISION: usize = 4;

/// Renders a matrix as space separated columns and newline separated rows.
#[derive(Debug, Clone, Copy)]
pub struct MatrixFormatter {
    precision: usize,
}

impl Default for MatrixFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

impl MatrixFormatter {
    pub fn new(precision: usize) -> Self {
        Self {
            precision: precision.max(1),
        }
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn format(&self, matrix: &Matrix) -> String {
        matrix
            .as_array()
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .map(|v| self.format_scalar(*v))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// General-format rendering with `precision` significant digits: fixed
    /// notation for decimal exponents in `-4..precision`, scientific otherwise,
    /// trailing zeros dropped.
    ///
    /// Engine results are always finite; a non-finite value passed in
    /// directly falls through to Rust's own `NaN`/`inf` spelling.
    pub fn format_scalar(&self, value: f64) -> String {
        if value == 0.0 {
            return "0".to_string();
        }

        let digits = self.precision;
        // `{:e}` rounds to the requested digits first, so the exponent already
        // accounts for carries such as 9.9999 -> 1.000e1.
        let scientific = format!("{:.*e}", digits - 1, value);
        let (mantissa, exponent) = match scientific.split_once('e') {
            Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
            None => (scientific.as_str(), 0),
        };

        if exponent < -4 || exponent >= digits as i32 {
            let sign = if exponent < 0 { '-' } else { '+' };
            format!(
                "{}e{}{:02}",
                trim_fraction(mantissa),
                sign,
                exponent.unsigned_abs()
            )
        } else {
            let decimals = (digits as i32 - 1 - exponent) as usize;
            trim_fraction(&format!("{:.*}", decimals, value)).to_string()
        }
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
