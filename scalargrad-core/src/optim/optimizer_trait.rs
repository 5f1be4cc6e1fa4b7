use crate::error::ScalarGradError;
use crate::nn::Parameter;

/// Common interface for parameter-update rules.
///
/// Optimizers are stateless with respect to the parameter list: the caller
/// passes the parameters to every call, mirroring how a fresh graph is
/// composed on every forward pass.
pub trait Optimizer {
    /// Performs a single optimization step (parameter update) using the
    /// gradients left on the parameters by the last `backward()` call.
    fn step(&mut self, params: &[Parameter]) -> Result<(), ScalarGradError>;

    /// Clears the gradients of all given parameters.
    fn zero_grad(&self, params: &[Parameter]);
}
