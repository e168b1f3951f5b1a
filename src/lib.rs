pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::BatchConfig;
pub use self::core::{
    dispatcher::OperationDispatcher, engine::MatrixOperationEngine, formatter::MatrixFormatter,
    parser::MatrixParser,
};
pub use domain::model::{
    Matrix, OperandSpec, OperationKind, OperationOutcome, OperationRequest, Shape,
};
pub use domain::ports::{ConfigProvider, MatrixService};
pub use utils::error::{MatrixError, Result};
