use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::types::Op;
use crate::value::Value;
use std::ops::Neg;
use std::rc::Rc;

// --- Forward Operation ---

/// Negates a node, recording the operation in the graph.
pub fn neg_op(input: &Value) -> Value {
    let grad_fn = NegBackward {
        input: input.clone(),
    };
    Value::from_op(-input.data(), Op::Neg, vec![input.clone()], Rc::new(grad_fn))
}

// --- Backward Operation ---

/// f(a) = -a; df/da = -1.
#[derive(Debug)]
struct NegBackward {
    input: Value,
}

impl BackwardOp for NegBackward {
    fn backward(&self, upstream: f64) -> Result<Vec<f64>, ScalarGradError> {
        Ok(vec![-upstream])
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

// --- Operator sugar ---

impl Neg for &Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(&self)
    }
}

// --- Tests ---
