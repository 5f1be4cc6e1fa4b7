use crate::error::ScalarGradError;
use crate::value::Value;

/// Specifies the reduction to apply to the per-element squared errors:
/// 'mean' | 'sum'
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reduction {
    Mean,
    Sum,
}

impl Reduction {
    pub fn from_str(s: &str) -> Result<Self, ScalarGradError> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(ScalarGradError::UnsupportedReduction(s.to_string())),
        }
    }
}

/// Computes the squared-error loss between prediction and target nodes,
/// reduced to a single scalar node suitable as a backward root.
#[derive(Debug, Clone)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    /// Builds the loss node: `reduce((input_i - target_i)^2)`.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::ArityMismatch`] if the slices differ in
    /// length or are empty.
    pub fn calculate(&self, input: &[Value], target: &[Value]) -> Result<Value, ScalarGradError> {
        if input.len() != target.len() || input.is_empty() {
            return Err(ScalarGradError::ArityMismatch {
                expected: input.len().max(1),
                actual: target.len(),
                operation: "MseLoss calculate".to_string(),
            });
        }

        let mut total: Option<Value> = None;
        for (out, desired) in input.iter().zip(target) {
            let diff = out - desired;
            let squared = diff.powf(2.0)?;
            total = Some(match total {
                Some(sum) => &sum + &squared,
                None => squared,
            });
        }
        // input is non-empty, so the accumulator is set.
        let total = total.ok_or_else(|| {
            ScalarGradError::BackwardError("empty accumulator in MseLoss".to_string())
        })?;

        match self.reduction {
            Reduction::Sum => Ok(total),
            Reduction::Mean => {
                let scale = Value::new(1.0 / input.len() as f64);
                Ok(&total * &scale)
            }
        }
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
