use crate::error::ScalarGradError;
use crate::value::Value;
use approx::{abs_diff_eq, relative_eq};
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("gradient check failed for input {input_index}: analytical grad {analytical} != numerical grad {numerical} (difference {difference})")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("numerical gradient is NaN or infinite for input {input_index}: loss+ {loss_plus}, loss- {loss_minus}")]
    NumericalGradNotFinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("analytical gradient is NaN or infinite for input {input_index}: value {value}")]
    AnalyticalGradNotFinite { input_index: usize, value: f64 },

    #[error("forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),

    #[error("backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),

    #[error("gradient check input {input_index} must be a leaf node")]
    InputNotLeaf { input_index: usize },
}

/// Checks analytical gradients against central finite differences.
///
/// `func` must build a fresh graph from the given leaves on every call; the
/// probes perturb one input at a time by `epsilon` and compare
/// `(f(x+eps) - f(x-eps)) / (2 eps)` against the gradient computed by
/// `backward()` on the unperturbed graph. Gradients match when they agree
/// within `tolerance`, absolutely or relatively.
pub fn check_grad<F>(
    func: F,
    inputs: &[Value],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    for (i, input) in inputs.iter().enumerate() {
        if input.op().is_some() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
    }

    // Analytical pass on the caller's leaves.
    let output = func(inputs).map_err(GradCheckError::ForwardPassError)?;
    output.backward().map_err(GradCheckError::BackwardPassError)?;
    let analytical: Vec<f64> = inputs.iter().map(|v| v.grad()).collect();

    for (i, input) in inputs.iter().enumerate() {
        let base = input.data();

        let probe = |shift: f64| -> Result<f64, GradCheckError> {
            let probed: Vec<Value> = inputs
                .iter()
                .enumerate()
                .map(|(j, v)| {
                    if j == i {
                        Value::new(base + shift)
                    } else {
                        Value::new(v.data())
                    }
                })
                .collect();
            let out = func(&probed).map_err(GradCheckError::ForwardPassError)?;
            Ok(out.data())
        };

        let loss_plus = probe(epsilon)?;
        let loss_minus = probe(-epsilon)?;
        if !loss_plus.is_finite() || !loss_minus.is_finite() {
            return Err(GradCheckError::NumericalGradNotFinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
        let value = analytical[i];
        if !value.is_finite() {
            return Err(GradCheckError::AnalyticalGradNotFinite {
                input_index: i,
                value,
            });
        }

        if !abs_diff_eq!(value, numerical, epsilon = tolerance)
            && !relative_eq!(value, numerical, max_relative = tolerance)
        {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical: value,
                numerical,
                difference: (value - numerical).abs(),
            });
        }
    }

    Ok(())
}
