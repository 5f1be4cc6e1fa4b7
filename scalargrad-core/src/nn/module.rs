use crate::error::ScalarGradError;
use crate::nn::Parameter;
use crate::value::Value;

/// The base trait for neural network modules (layers, containers, etc.).
///
/// A module consumes a slice of scalar nodes and produces new scalar nodes,
/// composing a fresh differentiable graph on every forward pass.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Errors
    /// Returns `ScalarGradError` if the input arity does not match the
    /// module or an operation fails during composition.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError>;

    /// Returns all learnable parameters of the module, including those of
    /// sub-modules. Parameters are cheap handle clones sharing the
    /// underlying nodes.
    fn parameters(&self) -> Vec<Parameter>;
}
