//! Scalar reverse-mode automatic differentiation.
//!
//! Forward arithmetic over [`Value`] nodes records a DAG of elementary
//! operations; [`Value::backward`] then computes exact gradients of any
//! node with respect to all of its transitive inputs in a single reverse
//! topological sweep. The `nn`, `optim` and `viz` modules build a minimal
//! training stack and a Graphviz exporter on top of that kernel.

pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod types;
pub mod value;
pub mod value_data;
pub mod viz;

pub use error::ScalarGradError;
pub use types::Op;
pub use value::Value;
