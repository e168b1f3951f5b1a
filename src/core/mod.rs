pub mod dispatcher;
pub mod engine;
pub mod formatter;
pub mod linalg;
pub mod parser;

pub use crate::domain::model::{Matrix, OperationKind, OperationOutcome, OperationRequest, Shape};
pub use crate::domain::ports::{ConfigProvider, MatrixService};
pub use crate::utils::error::Result;
