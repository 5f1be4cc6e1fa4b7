use crate::ops::arithmetic::{add_op, neg_op};
use crate::value::Value;
use std::ops::Sub;

// --- Forward Operation ---

/// Subtracts `b` from `a`, defined as `a + (-b)`.
///
/// There is no dedicated backward node: the result is an addition over `a`
/// and a negation node, and those two propagate the gradient.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    add_op(a, &neg_op(b))
}

// --- Operator sugar ---

impl Sub for &Value {
    type Output = Value;

    fn sub(self, rhs: &Value) -> Value {
        sub_op(self, rhs)
    }
}

impl Sub for Value {
    type Output = Value;

    fn sub(self, rhs: Value) -> Value {
        sub_op(&self, &rhs)
    }
}

impl Sub<f64> for &Value {
    type Output = Value;

    fn sub(self, rhs: f64) -> Value {
        sub_op(self, &Value::from(rhs))
    }
}

impl Sub<f64> for Value {
    type Output = Value;

    fn sub(self, rhs: f64) -> Value {
        sub_op(&self, &Value::from(rhs))
    }
}

impl Sub<&Value> for f64 {
    type Output = Value;

    fn sub(self, rhs: &Value) -> Value {
        sub_op(&Value::from(self), rhs)
    }
}

impl Sub<Value> for f64 {
    type Output = Value;

    fn sub(self, rhs: Value) -> Value {
        sub_op(&Value::from(self), &rhs)
    }
}

// --- Tests ---
