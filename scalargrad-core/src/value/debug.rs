use crate::value::Value;
use std::fmt;

/// Shallow debug formatting: prints the node's own fields but not its
/// operands, so dumping a deep graph stays readable.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node_data = self.borrow_data();
        let mut s = f.debug_struct("Value");
        s.field("data", &node_data.data).field("grad", &node_data.grad);
        if let Some(op) = node_data.op {
            s.field("op", &op.symbol());
        }
        if let Some(label) = &node_data.label {
            s.field("label", label);
        }
        s.field("operands", &node_data.operands.len()).finish()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.data())
    }
}

#[cfg(test)]
mod tests {
    use crate::value::Value;

    #[test]
    fn test_display_two_decimals() {
        let v = Value::new(1.0 / 3.0);
        assert_eq!(format!("{}", v), "0.33");
    }

    #[test]
    fn test_debug_is_shallow() {
        let a = Value::new(1.0);
        let b = &a + &a;
        let rendered = format!("{:?}", b);
        assert!(rendered.contains("op"));
        assert!(rendered.contains("operands: 2"));
    }
}
