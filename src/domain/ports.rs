pub trait ConfigProvider: Send + Sync {
    /// Significant digits used when rendering results.
    fn precision(&self) -> usize;
    /// Relative pivot threshold below which a divisor counts as singular.
    fn singular_tolerance(&self) -> f64;
}

/// The four calculator entry points, each taking two raw operands and
/// answering with either the rendered result or an `Error: ...` string.
pub trait MatrixService: Send + Sync {
    fn add(&self, rows_a: i32, cols_a: i32, a: &str, rows_b: i32, cols_b: i32, b: &str) -> String;
    fn subtract(
        &self,
        rows_a: i32,
        cols_a: i32,
        a: &str,
        rows_b: i32,
        cols_b: i32,
        b: &str,
    ) -> String;
    fn multiply(
        &self,
        rows_a: i32,
        cols_a: i32,
        a: &str,
        rows_b: i32,
        cols_b: i32,
        b: &str,
    ) -> String;
    fn divide(
        &self,
        rows_a: i32,
        cols_a: i32,
        a: &str,
        rows_b: i32,
        cols_b: i32,
        b: &str,
    ) -> String;
}
