use std::fmt;

/// Identifies the operation that produced a node in the computation graph.
///
/// The tag exists for diagnostics and visualization only; the backward pass
/// never branches on it (each node carries its own `grad_fn` instead).
/// Leaf nodes have no tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Neg,
    Mul,
    Pow,
    Relu,
    Gelu,
}

impl Op {
    /// Short printable symbol for the operation.
    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Neg => "-",
            Op::Mul => "*",
            Op::Pow => "**",
            Op::Relu => "relu",
            Op::Gelu => "gelu",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
