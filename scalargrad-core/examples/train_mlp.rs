//! Trains a small MLP on a toy four-example dataset.
//!
//! Demonstrates the full loop: build the network once, then per step
//! compose fresh loss graphs over the shared parameter leaves, run one
//! backward pass on the summed loss, and let SGD apply
//! `data -= lr * grad` to every parameter.
//!
//! Run with: `cargo run --example train_mlp`

use scalargrad_core::nn::{Mlp, Module};
use scalargrad_core::{ScalarGradError, Value};

fn leaves(data: &[f64]) -> Vec<Value> {
    data.iter().map(|&x| Value::new(x)).collect()
}

fn main() -> Result<(), ScalarGradError> {
    let mlp = Mlp::new(3, &[4, 4, 1])?;
    println!(
        "built MLP with {} trainable parameters",
        mlp.parameters().len()
    );

    let dataset: Vec<(Vec<f64>, f64)> = vec![
        (vec![2.0, 3.0, -1.0], 1.0),
        (vec![3.0, -1.0, 0.5], -1.0),
        (vec![0.5, 1.0, 1.0], -1.0),
        (vec![1.0, 1.0, -1.0], 1.0),
    ];

    let learning_rate = 0.05;
    for epoch in 0..50 {
        let inputs: Vec<Vec<Value>> = dataset.iter().map(|(x, _)| leaves(x)).collect();
        let targets: Vec<Vec<Value>> = dataset.iter().map(|(_, y)| leaves(&[*y])).collect();

        let loss = mlp.train_step(&inputs, &targets, learning_rate)?;
        if epoch % 10 == 0 {
            println!("epoch {:3}: loss {:.6}", epoch, loss);
        }
    }

    println!("\npredictions after training:");
    for (x, y) in &dataset {
        let out = mlp.forward(&leaves(x))?;
        println!("  target {:5.1} -> predicted {:8.4}", y, out[0].data());
    }

    Ok(())
}
