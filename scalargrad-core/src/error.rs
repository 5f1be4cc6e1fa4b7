use crate::types::Op;
use thiserror::Error;

/// Custom error type for the ScalarGrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("power exponent must be a leaf value, but it was produced by operation '{op}'")]
    NonLeafExponent { op: Op },

    #[error("power of negative base {base} with fractional exponent {exponent} is undefined for this engine")]
    NegativeBasePower { base: f64, exponent: f64 },

    #[error("arity mismatch: expected {expected} inputs, got {actual} during operation {operation}")]
    ArityMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("cannot build a network with no layers")]
    EmptyNetwork,

    #[error("unsupported reduction type: {0}")]
    UnsupportedReduction(String),

    #[error("backward pass error: {0}")]
    BackwardError(String),
}
