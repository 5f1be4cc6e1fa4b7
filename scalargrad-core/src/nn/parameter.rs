use crate::value::Value;
use std::fmt;
use std::ops::Deref;

/// A wrapper around a leaf [`Value`] indicating it is a learnable parameter
/// of a module. The training loop reads `grad` and writes `data` through
/// this handle between backward passes.
pub struct Parameter(Value);

impl Parameter {
    /// Wraps an existing node as a parameter.
    pub fn new(value: Value) -> Self {
        Parameter(value)
    }

    /// Creates a labelled leaf parameter from a scalar.
    pub fn from_scalar(data: f64, label: &str) -> Self {
        Parameter(Value::with_label(data, label))
    }

    /// Returns the underlying node handle.
    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Consumes the parameter and returns the underlying node.
    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Resets this parameter's gradient to zero.
    pub fn zero_grad(&self) {
        self.0.zero_grad();
    }
}

// Allow accessing the underlying Value immutably via Deref.
impl Deref for Parameter {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter({:?})", self.0)
    }
}

impl Clone for Parameter {
    /// Cloning a Parameter clones the underlying handle (shallow, via Rc).
    fn clone(&self) -> Self {
        Parameter(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::Parameter;
    use crate::value::Value;

    #[test]
    fn test_parameter_shares_node() {
        let v = Value::new(0.5);
        let p = Parameter::new(v.clone());
        p.set_data(0.25);
        assert_eq!(v.data(), 0.25);
    }

    #[test]
    fn test_from_scalar_labels_leaf() {
        let p = Parameter::from_scalar(0.0, "b");
        assert!(p.is_leaf());
        assert_eq!(p.label().as_deref(), Some("b"));
    }

    #[test]
    fn test_zero_grad() {
        let p = Parameter::from_scalar(2.0, "w");
        let y = p.value() * 3.0;
        y.backward().unwrap();
        assert_eq!(p.grad(), 3.0);
        p.zero_grad();
        assert_eq!(p.grad(), 0.0);
    }
}
