//! Adapter contract and scalar bindings.

pub mod scalars;
pub mod traits;

pub use traits::{MarketScalar, MatrixSink, MatrixSource};
