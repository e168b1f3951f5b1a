// Domain layer: matrix value types and the ports the engine is driven through.

pub mod model;
pub mod ports;
