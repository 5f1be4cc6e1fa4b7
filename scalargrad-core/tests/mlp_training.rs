use scalargrad_core::autograd::grad_check::check_grad;
use scalargrad_core::nn::layers::{Activation, Neuron};
use scalargrad_core::nn::losses::{MseLoss, Reduction};
use scalargrad_core::nn::{Mlp, Module, Parameter};
use scalargrad_core::optim::{Optimizer, Sgd};
use scalargrad_core::Value;

fn leaves(data: &[f64]) -> Vec<Value> {
    data.iter().map(|&x| Value::new(x)).collect()
}

#[test]
fn neuron_end_to_end() {
    // Single linear-plus-ReLU unit with fixed weights.
    let weights = vec![
        Parameter::from_scalar(0.5, "w"),
        Parameter::from_scalar(1.0, "w"),
        Parameter::from_scalar(-1.0, "w"),
    ];
    let bias = Parameter::from_scalar(0.0, "b");
    let neuron = Neuron::with_parameters(weights, bias, Activation::Relu);

    let inputs = leaves(&[4.0, -2.0, -1.0]);
    let out = neuron.forward(&inputs).unwrap();
    assert_eq!(out.data(), 1.0);

    out.backward().unwrap();
    let grads: Vec<f64> = neuron.weights().iter().map(|w| w.grad()).collect();
    assert_eq!(grads, vec![4.0, -2.0, -1.0]);
}

#[test]
fn gradient_descent_converges_on_fixed_neuron() {
    // Convex problem: fit a linear unit to a single example.
    let weights = vec![
        Parameter::from_scalar(0.5, "w"),
        Parameter::from_scalar(-0.3, "w"),
    ];
    let bias = Parameter::from_scalar(0.0, "b");
    let neuron = Neuron::with_parameters(weights, bias, Activation::Linear);
    let loss_fn = MseLoss::new(Reduction::Sum);
    let mut optim = Sgd::new(0.01);

    let inputs = leaves(&[1.0, 2.0]);
    let target = leaves(&[10.0]);

    let initial_loss = {
        let out = neuron.forward(&inputs).unwrap();
        loss_fn.calculate(&[out], &target).unwrap().data()
    };

    let mut last_loss = initial_loss;
    for _ in 0..100 {
        let out = neuron.forward(&inputs).unwrap();
        let loss = loss_fn.calculate(&[out], &target).unwrap();
        loss.backward().unwrap();
        optim.step(&neuron.parameters()).unwrap();
        last_loss = loss.data();
    }

    assert!(last_loss < initial_loss);
    assert!(last_loss < 1e-2, "loss did not converge: {}", last_loss);
}

#[test]
fn mlp_train_step_runs_and_reports_batch_loss() {
    let mlp = Mlp::new(3, &[4, 4, 1]).unwrap();
    let inputs = vec![
        leaves(&[2.0, 3.0, -1.0]),
        leaves(&[3.0, -1.0, 0.5]),
        leaves(&[0.5, 1.0, 1.0]),
        leaves(&[1.0, 1.0, -1.0]),
    ];
    let targets = vec![
        leaves(&[1.0]),
        leaves(&[-1.0]),
        leaves(&[-1.0]),
        leaves(&[1.0]),
    ];

    let first = mlp.train_step(&inputs, &targets, 0.01).unwrap();
    assert!(first.is_finite());
    let second = mlp.train_step(&inputs, &targets, 0.01).unwrap();
    assert!(second.is_finite());
}

#[test]
fn mlp_parameters_receive_gradients() {
    let mlp = Mlp::new(2, &[3, 1]).unwrap();
    let loss = mlp
        .loss(&leaves(&[0.7, -0.2]), &leaves(&[0.5]))
        .unwrap();
    loss.backward().unwrap();
    // The output layer bias always sits on an active path.
    let params = mlp.parameters();
    assert!(params.iter().any(|p| p.grad() != 0.0));
}

#[test]
fn analytical_gradients_match_finite_differences() {
    // A composite expression exercising every differentiable op.
    let inputs = vec![Value::new(1.2), Value::new(-0.7), Value::new(0.4)];
    let result = check_grad(
        |xs| {
            let prod = &xs[0] * &xs[1];
            let powed = xs[2].powf(3.0)?;
            let mix = &(&prod - &powed) + &xs[0].gelu();
            Ok((&mix + 0.3).relu())
        },
        &inputs,
        1e-6,
        1e-4,
    );
    assert!(result.is_ok(), "gradient check failed: {:?}", result);
}
