use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::types::Op;
use crate::value::Value;
use std::rc::Rc;

// --- Forward Operation ---

/// Applies the Rectified Linear Unit activation: `relu(x) = max(0, x)`.
pub fn relu_op(input: &Value) -> Value {
    let x = input.data();
    let grad_fn = ReluBackward {
        input: input.clone(),
    };
    Value::from_op(
        if x > 0.0 { x } else { 0.0 },
        Op::Relu,
        vec![input.clone()],
        Rc::new(grad_fn),
    )
}

// --- Backward Operation ---

/// d relu(x)/dx = 1 for x > 0, else 0.
/// At exactly x == 0 no gradient flows (the non-positive branch), not the
/// sub-gradient average.
#[derive(Debug)]
struct ReluBackward {
    input: Value,
}

impl BackwardOp for ReluBackward {
    fn backward(&self, upstream: f64) -> Result<Vec<f64>, ScalarGradError> {
        let mask = if self.input.data() > 0.0 { 1.0 } else { 0.0 };
        Ok(vec![mask * upstream])
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

// --- Value method ---

impl Value {
    /// See [`relu_op`].
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

// --- Tests ---
