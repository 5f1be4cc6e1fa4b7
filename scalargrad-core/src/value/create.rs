use crate::autograd::BackwardOp;
use crate::types::Op;
use crate::value::Value;
use crate::value_data::ValueData;
use std::cell::RefCell;
use std::rc::Rc;

impl Value {
    /// Creates a leaf node holding `data`, with zero gradient and no
    /// operands.
    pub fn new(data: f64) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::new_leaf(data))),
        }
    }

    /// Creates a labelled leaf node.
    pub fn with_label(data: f64, label: &str) -> Self {
        let value = Value::new(data);
        value.set_label(label);
        value
    }

    /// Creates an operation-result node. Used by the `ops` modules;
    /// recording the operand handles has no effect on the operands.
    pub(crate) fn from_op(
        data: f64,
        op: Op,
        operands: Vec<Value>,
        grad_fn: Rc<dyn BackwardOp>,
    ) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::from_op(data, op, operands, grad_fn))),
        }
    }
}

/// Lifts a bare scalar into a leaf node, so numeric literals mix freely
/// with nodes in the binary operators.
impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}
