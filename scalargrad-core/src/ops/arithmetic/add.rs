use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::types::Op;
use crate::value::Value;
use std::ops::Add;
use std::rc::Rc;

// --- Forward Operation ---

/// Adds two nodes, recording the operation in the graph.
/// Neither operand is mutated; the result references both.
pub fn add_op(a: &Value, b: &Value) -> Value {
    let grad_fn = AddBackward {
        lhs: a.clone(),
        rhs: b.clone(),
    };
    Value::from_op(
        a.data() + b.data(),
        Op::Add,
        vec![a.clone(), b.clone()],
        Rc::new(grad_fn),
    )
}

// --- Backward Operation ---

/// f(a, b) = a + b; df/da = 1, df/db = 1.
#[derive(Debug)]
struct AddBackward {
    lhs: Value,
    rhs: Value,
}

impl BackwardOp for AddBackward {
    fn backward(&self, upstream: f64) -> Result<Vec<f64>, ScalarGradError> {
        Ok(vec![upstream, upstream])
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.lhs.clone(), self.rhs.clone()]
    }
}

// --- Operator sugar ---

impl Add for &Value {
    type Output = Value;

    fn add(self, rhs: &Value) -> Value {
        add_op(self, rhs)
    }
}

impl Add for Value {
    type Output = Value;

    fn add(self, rhs: Value) -> Value {
        add_op(&self, &rhs)
    }
}

impl Add<f64> for &Value {
    type Output = Value;

    fn add(self, rhs: f64) -> Value {
        add_op(self, &Value::from(rhs))
    }
}

impl Add<f64> for Value {
    type Output = Value;

    fn add(self, rhs: f64) -> Value {
        add_op(&self, &Value::from(rhs))
    }
}

impl Add<&Value> for f64 {
    type Output = Value;

    fn add(self, rhs: &Value) -> Value {
        add_op(&Value::from(self), rhs)
    }
}

impl Add<Value> for f64 {
    type Output = Value;

    fn add(self, rhs: Value) -> Value {
        add_op(&Value::from(self), &rhs)
    }
}

// --- Tests ---
