use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::types::Op;
use crate::value::Value;
use std::ops::Mul;
use std::rc::Rc;

// --- Forward Operation ---

/// Multiplies two nodes, recording the operation in the graph.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    let grad_fn = MulBackward {
        lhs: a.clone(),
        rhs: b.clone(),
    };
    Value::from_op(
        a.data() * b.data(),
        Op::Mul,
        vec![a.clone(), b.clone()],
        Rc::new(grad_fn),
    )
}

// --- Backward Operation ---

/// f(a, b) = a * b; df/da = b, df/db = a.
///
/// The operand data is read at backward time, which is equivalent to
/// reading it at construction time because `data` is never mutated while a
/// graph is alive.
#[derive(Debug)]
struct MulBackward {
    lhs: Value,
    rhs: Value,
}

impl BackwardOp for MulBackward {
    fn backward(&self, upstream: f64) -> Result<Vec<f64>, ScalarGradError> {
        Ok(vec![
            self.rhs.data() * upstream,
            self.lhs.data() * upstream,
        ])
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.lhs.clone(), self.rhs.clone()]
    }
}

// --- Operator sugar ---

impl Mul for &Value {
    type Output = Value;

    fn mul(self, rhs: &Value) -> Value {
        mul_op(self, rhs)
    }
}

impl Mul for Value {
    type Output = Value;

    fn mul(self, rhs: Value) -> Value {
        mul_op(&self, &rhs)
    }
}

impl Mul<f64> for &Value {
    type Output = Value;

    fn mul(self, rhs: f64) -> Value {
        mul_op(self, &Value::from(rhs))
    }
}

impl Mul<f64> for Value {
    type Output = Value;

    fn mul(self, rhs: f64) -> Value {
        mul_op(&self, &Value::from(rhs))
    }
}

impl Mul<&Value> for f64 {
    type Output = Value;

    fn mul(self, rhs: &Value) -> Value {
        mul_op(&Value::from(self), rhs)
    }
}

impl Mul<Value> for f64 {
    type Output = Value;

    fn mul(self, rhs: Value) -> Value {
        mul_op(&Value::from(self), &rhs)
    }
}

// --- Tests ---
