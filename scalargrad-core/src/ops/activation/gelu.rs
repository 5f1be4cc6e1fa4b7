use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::types::Op;
use crate::value::Value;
use std::f64::consts::{PI, SQRT_2};
use std::rc::Rc;

/// Standard-normal cumulative distribution function.
fn normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + libm::erf(x / SQRT_2))
}

/// Standard-normal probability density function.
fn normal_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

// --- Forward Operation ---

/// Applies the Gaussian Error Linear Unit activation: `gelu(x) = x * Phi(x)`
/// with `Phi` the standard-normal CDF. Defined for all reals, never fails.
pub fn gelu_op(input: &Value) -> Value {
    let x = input.data();
    let grad_fn = GeluBackward {
        input: input.clone(),
    };
    Value::from_op(
        x * normal_cdf(x),
        Op::Gelu,
        vec![input.clone()],
        Rc::new(grad_fn),
    )
}

// --- Backward Operation ---

/// d gelu(x)/dx = x * phi(x) + Phi(x), with phi the standard-normal density.
#[derive(Debug)]
struct GeluBackward {
    input: Value,
}

impl BackwardOp for GeluBackward {
    fn backward(&self, upstream: f64) -> Result<Vec<f64>, ScalarGradError> {
        let x = self.input.data();
        let derivative = x * normal_pdf(x) + normal_cdf(x);
        Ok(vec![derivative * upstream])
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

// --- Value method ---

impl Value {
    /// See [`gelu_op`].
    pub fn gelu(&self) -> Value {
        gelu_op(self)
    }
}

// --- Tests ---
