use crate::autograd::BackwardOp;
use crate::types::Op;
use crate::value::Value;
use std::rc::Rc;

/// Internal storage and metadata for a [`Value`] node.
///
/// This struct holds the forward scalar, the accumulated gradient, and the
/// autograd bookkeeping. It is wrapped in `Rc<RefCell<ValueData>>` by the
/// `Value` handle to allow shared ownership (the same node may be an operand
/// of many downstream nodes) and interior mutability of `grad`.
#[derive(Debug)]
pub struct ValueData {
    /// Forward-evaluated result of this node's operation (or the leaf value).
    /// Never mutated by the engine after construction; the optimizer updates
    /// leaf parameters through [`Value::set_data`].
    pub(crate) data: f64,
    /// Accumulated partial derivative of some backward root with respect to
    /// this node. Zeroed at the start of every backward pass, then only ever
    /// written via `+=`.
    pub(crate) grad: f64,
    /// Which operation produced this node. `None` for leaves. Diagnostics
    /// and visualization only.
    pub(crate) op: Option<Op>,
    /// Ordered strong references to the nodes this one was computed from.
    /// Empty for leaves. The same operand may appear under many nodes; the
    /// graph is a DAG, not a tree.
    pub(crate) operands: Vec<Value>,
    /// Backward node for the operation that produced this value, used by the
    /// backward pass to push gradient into the operands. Leaves have `None`.
    pub(crate) grad_fn: Option<Rc<dyn BackwardOp>>,
    /// Optional human-readable name, cosmetic only.
    pub(crate) label: Option<String>,
}

impl ValueData {
    /// Creates the record for a leaf node: no operands, no backward node.
    pub(crate) fn new_leaf(data: f64) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op: None,
            operands: Vec::new(),
            grad_fn: None,
            label: None,
        }
    }

    /// Creates the record for an operation result. Recording the operand
    /// references has no effect on the operands themselves.
    pub(crate) fn from_op(
        data: f64,
        op: Op,
        operands: Vec<Value>,
        grad_fn: Rc<dyn BackwardOp>,
    ) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op: Some(op),
            operands,
            grad_fn: Some(grad_fn),
            label: None,
        }
    }
}
