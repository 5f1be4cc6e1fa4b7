//! Builds a small expression, runs a backward pass, and prints the graph
//! as a Graphviz DOT document. Pipe the output through `dot -Tsvg` to
//! render it.
//!
//! Run with: `cargo run --example draw_graph`

use scalargrad_core::viz::to_dot;
use scalargrad_core::{ScalarGradError, Value};

fn main() -> Result<(), ScalarGradError> {
    let x = Value::with_label(2.0, "x");
    let w = Value::with_label(-3.0, "w");
    let b = Value::with_label(6.5, "b");

    // y = relu(w * x + b); x is also reused on a second path to show how
    // shared operands render as a single record.
    let wx = &w * &x;
    let sum = &(&wx + &b) + &x;
    let y = sum.relu();
    y.set_label("y");

    y.backward()?;
    print!("{}", to_dot(&y));
    Ok(())
}
