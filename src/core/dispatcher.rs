use crate::core::engine::MatrixOperationEngine;
use crate::core::formatter::MatrixFormatter;
use crate::core::parser::MatrixParser;
use crate::domain::model::{
    Matrix, OperandSpec, OperationKind, OperationOutcome, OperationRequest, Shape,
};
use crate::domain::ports::{ConfigProvider, MatrixService};
use crate::utils::error::Result;

/// Entry point of the calculator: parse both operands, run the operation,
/// render the result. Every failure comes back as an `Error: ...` string.
#[derive(Debug, Clone, Copy, Default)]
pub struct OperationDispatcher {
    parser: MatrixParser,
    engine: MatrixOperationEngine,
    formatter: MatrixFormatter,
}

impl OperationDispatcher {
    pub fn new(engine: MatrixOperationEngine, formatter: MatrixFormatter) -> Self {
        Self {
            parser: MatrixParser::new(),
            engine,
            formatter,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(
            MatrixOperationEngine::new(config.singular_tolerance()),
            MatrixFormatter::new(config.precision()),
        )
    }

    pub fn engine(&self) -> &MatrixOperationEngine {
        &self.engine
    }

    pub fn formatter(&self) -> &MatrixFormatter {
        &self.formatter
    }

    /// Typed pipeline behind every entry point.
    pub fn execute(&self, request: &OperationRequest) -> Result<Matrix> {
        let kind = request.operation;
        let shape_a = Shape::from_dimensions(request.a.rows, request.a.cols)?;
        let shape_b = Shape::from_dimensions(request.b.rows, request.b.cols)?;

        tracing::debug!("Dispatching {} for {} and {}", kind, shape_a, shape_b);
        self.engine.check_shapes(kind, shape_a, shape_b)?;

        let a = self.parser.parse(shape_a, &request.a.values)?;
        let b = self.parser.parse(shape_b, &request.b.values)?;

        let result = self.engine.apply(kind, &a, &b)?;
        tracing::debug!("{} produced a {} matrix", kind, result.shape());
        Ok(result)
    }

    pub fn run(&self, request: &OperationRequest) -> OperationOutcome {
        match self.execute(request) {
            Ok(matrix) => OperationOutcome::Success(self.formatter.format(&matrix)),
            Err(e) => {
                tracing::warn!(
                    "{} failed: {} (Category: {:?})",
                    request.operation,
                    e,
                    e.category()
                );
                OperationOutcome::Failure(e.user_friendly_message())
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn dispatch(
        &self,
        kind: OperationKind,
        rows_a: i32,
        cols_a: i32,
        a: &str,
        rows_b: i32,
        cols_b: i32,
        b: &str,
    ) -> String {
        let request = OperationRequest {
            operation: kind,
            a: OperandSpec::new(rows_a, cols_a, a),
            b: OperandSpec::new(rows_b, cols_b, b),
        };
        self.run(&request).into_text()
    }

    /// Like [`dispatch`](Self::dispatch) with the operation picked by name, e.g. `"Add"`.
    #[allow(clippy::too_many_arguments)]
    pub fn dispatch_named(
        &self,
        operation: &str,
        rows_a: i32,
        cols_a: i32,
        a: &str,
        rows_b: i32,
        cols_b: i32,
        b: &str,
    ) -> String {
        match operation.parse::<OperationKind>() {
            Ok(kind) => self.dispatch(kind, rows_a, cols_a, a, rows_b, cols_b, b),
            Err(e) => {
                tracing::warn!("Rejected operation name '{}'", operation);
                e.user_friendly_message()
            }
        }
    }
}

impl MatrixService for OperationDispatcher {
    fn add(&self, rows_a: i32, cols_a: i32, a: &str, rows_b: i32, cols_b: i32, b: &str) -> String {
        self.dispatch(OperationKind::Add, rows_a, cols_a, a, rows_b, cols_b, b)
    }

    fn subtract(
        &self,
        rows_a: i32,
        cols_a: i32,
        a: &str,
        rows_b: i32,
        cols_b: i32,
        b: &str,
    ) -> String {
        self.dispatch(OperationKind::Subtract, rows_a, cols_a, a, rows_b, cols_b, b)
    }

    fn multiply(
        &self,
        rows_a: i32,
        cols_a: i32,
        a: &str,
        rows_b: i32,
        cols_b: i32,
        b: &str,
    ) -> String {
        self.dispatch(OperationKind::Multiply, rows_a, cols_a, a, rows_b, cols_b, b)
    }

    fn divide(
        &self,
        rows_a: i32,
        cols_a: i32,
        a: &str,
        rows_b: i32,
        cols_b: i32,
        b: &str,
    ) -> String {
        self.dispatch(OperationKind::Divide, rows_a, cols_a, a, rows_b, cols_b, b)
    }
}
