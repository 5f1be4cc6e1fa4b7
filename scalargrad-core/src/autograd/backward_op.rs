use crate::error::ScalarGradError;
use crate::value::Value;
use std::fmt::Debug;

/// Defines the interface for the backward pass of a differentiable operation.
///
/// Any operation that creates a non-leaf [`Value`] stores an implementation
/// of this trait in the output node's `grad_fn` field. During `backward()`
/// the traversal calls it exactly once per node, after the node's own `grad`
/// has received contributions from every downstream consumer.
pub trait BackwardOp: Debug {
    /// Computes the chain-rule contribution for each input of the operation.
    ///
    /// `upstream` is the fully-accumulated gradient of the backward root with
    /// respect to this operation's output. The returned vector holds one
    /// contribution per input; the caller adds each one into the matching
    /// input's `grad`.
    ///
    /// # Returns
    /// * `Ok(Vec<f64>)`: one contribution per input. The order **must**
    ///   strictly match the order of the nodes returned by [`inputs`].
    /// * `Err(ScalarGradError)`: if the local gradient cannot be computed.
    ///
    /// [`inputs`]: BackwardOp::inputs
    fn backward(&self, upstream: f64) -> Result<Vec<f64>, ScalarGradError>;

    /// The input nodes that receive the contributions of [`backward`].
    ///
    /// This may be a subset of the node's recorded operands: an operand that
    /// never receives gradient (such as a power exponent) is listed in the
    /// graph for traversal and visualization, but not here.
    ///
    /// [`backward`]: BackwardOp::backward
    fn inputs(&self) -> Vec<Value>;
}
