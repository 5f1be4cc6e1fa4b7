use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::types::Op;
use crate::value::Value;
use std::rc::Rc;

// --- Forward Operation ---

/// Raises `base` to the power of `exponent`, recording the operation in the
/// graph.
///
/// The exponent must be a leaf: its own gradient `ln(a) * a^b * g` is not
/// modeled by this engine, and fractional powers of negative bases would
/// produce non-real derivatives. Both conditions fail fast here instead of
/// silently producing a zero or NaN gradient later.
///
/// # Errors
/// * [`ScalarGradError::NonLeafExponent`] if `exponent` was produced by an
///   operation.
/// * [`ScalarGradError::NegativeBasePower`] if `base` is negative and
///   `exponent` is not an integer.
pub fn pow_op(base: &Value, exponent: &Value) -> Result<Value, ScalarGradError> {
    if let Some(op) = exponent.op() {
        return Err(ScalarGradError::NonLeafExponent { op });
    }
    let a = base.data();
    let b = exponent.data();
    if a < 0.0 && b.fract() != 0.0 {
        return Err(ScalarGradError::NegativeBasePower {
            base: a,
            exponent: b,
        });
    }

    let grad_fn = PowBackward {
        base: base.clone(),
        exponent: b,
    };
    // The exponent is recorded as an operand (it is part of the node's
    // provenance) but receives no gradient: it is absent from inputs().
    Ok(Value::from_op(
        a.powf(b),
        Op::Pow,
        vec![base.clone(), exponent.clone()],
        Rc::new(grad_fn),
    ))
}

// --- Backward Operation ---

/// f(a, b) = a^b with b constant; df/da = b * a^(b-1).
#[derive(Debug)]
struct PowBackward {
    base: Value,
    exponent: f64,
}

impl BackwardOp for PowBackward {
    fn backward(&self, upstream: f64) -> Result<Vec<f64>, ScalarGradError> {
        let a = self.base.data();
        Ok(vec![self.exponent * a.powf(self.exponent - 1.0) * upstream])
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.base.clone()]
    }
}

// --- Value methods ---

impl Value {
    /// See [`pow_op`].
    pub fn pow(&self, exponent: &Value) -> Result<Value, ScalarGradError> {
        pow_op(self, exponent)
    }

    /// Raises this node to a constant power, lifting the scalar to a leaf.
    pub fn powf(&self, exponent: f64) -> Result<Value, ScalarGradError> {
        pow_op(self, &Value::from(exponent))
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use crate::error::ScalarGradError;
    use crate::types::Op;
    use crate::value::Value;

    #[test]
    fn test_pow_forward() {
        let a = Value::new(3.0);
        let b = Value::new(2.0);
        let c = a.pow(&b).unwrap();
        assert_eq!(c.data(), 9.0);
        assert_eq!(c.op(), Some(Op::Pow));
        // Exponent shows up in the recorded provenance.
        assert_eq!(c.operands().len(), 2);
        assert!(c.operands()[1].ptr_eq(&b));
    }

    #[test]
    fn test_pow_backward_base_only() {
        let a = Value::new(3.0);
        let b = Value::new(2.0);
        let c = &a.pow(&b).unwrap() * 2.0;
        c.backward().unwrap();
        assert_eq!(c.data(), 18.0);
        // dc/da = 2 * b * a^(b-1) = 2 * 2 * 3 = 12
        assert_eq!(a.grad(), 12.0);
        // No gradient flows into the exponent.
        assert_eq!(b.grad(), 0.0);
    }

    #[test]
    fn test_pow_negative_base_integer_exponent() {
        let a = Value::new(-2.0);
        let c = a.powf(3.0).unwrap();
        c.backward().unwrap();
        assert_eq!(c.data(), -8.0);
        // dc/da = 3 * (-2)^2 = 12
        assert_eq!(a.grad(), 12.0);
    }

    #[test]
    fn test_pow_rejects_non_leaf_exponent() {
        let a = Value::new(3.0);
        let e = &Value::new(1.0) + &Value::new(1.0);
        let error = a.pow(&e).unwrap_err();
        assert_eq!(error, ScalarGradError::NonLeafExponent { op: Op::Add });
    }

    #[test]
    fn test_pow_rejects_fractional_power_of_negative_base() {
        let a = Value::new(-2.0);
        let error = a.powf(0.5).unwrap_err();
        assert_eq!(
            error,
            ScalarGradError::NegativeBasePower {
                base: -2.0,
                exponent: 0.5,
            }
        );
    }
}
