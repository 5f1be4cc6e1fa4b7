use crate::error::ScalarGradError;
use crate::nn::layers::{Activation, Layer};
use crate::nn::losses::{MseLoss, Reduction};
use crate::nn::{Module, Parameter};
use crate::optim::{Optimizer, Sgd};
use crate::value::Value;

/// A multi-layer perceptron over scalar nodes.
///
/// Hidden layers use ReLU, the output layer is linear. Each forward pass
/// composes a fresh graph over the shared parameter leaves, so one backward
/// call per loss is all the bookkeeping a training step needs.
#[derive(Debug)]
pub struct Mlp {
    layers: Vec<Layer>,
    n_inputs: usize,
}

impl Mlp {
    /// Builds an MLP with the given input width and per-layer sizes, e.g.
    /// `Mlp::new(3, &[4, 4, 1])` for two hidden layers of 4 and one output.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::EmptyNetwork`] if `layer_sizes` is empty.
    pub fn new(n_inputs: usize, layer_sizes: &[usize]) -> Result<Self, ScalarGradError> {
        if layer_sizes.is_empty() {
            return Err(ScalarGradError::EmptyNetwork);
        }

        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut fan_in = n_inputs;
        for (i, &size) in layer_sizes.iter().enumerate() {
            let activation = if i == layer_sizes.len() - 1 {
                Activation::Linear
            } else {
                Activation::Relu
            };
            layers.push(Layer::new(fan_in, size, activation));
            fan_in = size;
        }
        Ok(Mlp { layers, n_inputs })
    }

    pub fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    /// Squared-error loss of one example: forward the inputs, compare with
    /// the desired outputs, sum the per-output squared differences.
    pub fn loss(&self, input: &[Value], desired: &[Value]) -> Result<Value, ScalarGradError> {
        let output = self.forward(input)?;
        MseLoss::new(Reduction::Sum).calculate(&output, desired)
    }

    /// One full training step over a batch: sum the per-example losses into
    /// a single root, run `backward()` on it once, and apply
    /// `data -= learning_rate * grad` to every parameter. Returns the batch
    /// loss before the update.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::ArityMismatch`] if the batch is empty or
    /// inputs and targets differ in length.
    pub fn train_step(
        &self,
        inputs: &[Vec<Value>],
        targets: &[Vec<Value>],
        learning_rate: f64,
    ) -> Result<f64, ScalarGradError> {
        if inputs.len() != targets.len() || inputs.is_empty() {
            return Err(ScalarGradError::ArityMismatch {
                expected: inputs.len().max(1),
                actual: targets.len(),
                operation: "Mlp train_step".to_string(),
            });
        }

        let mut total: Option<Value> = None;
        for (input, desired) in inputs.iter().zip(targets) {
            let example_loss = self.loss(input, desired)?;
            total = Some(match total {
                Some(sum) => &sum + &example_loss,
                None => example_loss,
            });
        }
        let total = total.ok_or_else(|| {
            ScalarGradError::BackwardError("empty accumulator in train_step".to_string())
        })?;

        total.backward()?;
        let mut optimizer = Sgd::new(learning_rate);
        optimizer.step(&self.parameters())?;

        log::debug!(
            "train_step: batch of {} examples, loss {}",
            inputs.len(),
            total.data()
        );
        Ok(total.data())
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        if inputs.len() != self.n_inputs {
            return Err(ScalarGradError::ArityMismatch {
                expected: self.n_inputs,
                actual: inputs.len(),
                operation: "Mlp forward".to_string(),
            });
        }
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<Parameter> {
        self.layers
            .iter()
            .flat_map(|layer| layer.parameters())
            .collect()
    }
}
