use crate::error::ScalarGradError;
use crate::nn::init;
use crate::nn::Parameter;
use crate::value::Value;

/// Nonlinearity applied to a neuron's pre-activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Relu,
    Gelu,
    /// No nonlinearity; the pre-activation is returned as-is.
    Linear,
}

impl Activation {
    fn apply(&self, pre_activation: &Value) -> Value {
        match self {
            Activation::Relu => pre_activation.relu(),
            Activation::Gelu => pre_activation.gelu(),
            Activation::Linear => pre_activation.clone(),
        }
    }
}

/// A single scalar neuron: `activation(bias + sum(w_i * x_i))`.
///
/// Weights are initialized uniformly in `[-1, 1)`, the bias at zero.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
    activation: Activation,
}

impl Neuron {
    pub fn new(n_inputs: usize, activation: Activation) -> Self {
        let weights = (0..n_inputs)
            .map(|_| {
                let weight = init::uniform(-1.0, 1.0);
                weight.set_label("w");
                Parameter::new(weight)
            })
            .collect();
        Neuron {
            weights,
            bias: Parameter::from_scalar(0.0, "b"),
            activation,
        }
    }

    /// Builds a neuron from explicit parameters. Useful for tests and for
    /// loading known weights.
    pub fn with_parameters(
        weights: Vec<Parameter>,
        bias: Parameter,
        activation: Activation,
    ) -> Self {
        Neuron {
            weights,
            bias,
            activation,
        }
    }

    /// Composes the neuron's output node over the given inputs.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::ArityMismatch`] if the input count does
    /// not match the fan-in.
    pub fn forward(&self, inputs: &[Value]) -> Result<Value, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::ArityMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron forward".to_string(),
            });
        }

        let mut pre_activation = self.bias.value().clone();
        for (weight, input) in self.weights.iter().zip(inputs) {
            pre_activation = &pre_activation + &(weight.value() * input);
        }
        Ok(self.activation.apply(&pre_activation))
    }

    pub fn parameters(&self) -> Vec<Parameter> {
        let mut params: Vec<Parameter> = self.weights.to_vec();
        params.push(self.bias.clone());
        params
    }

    pub fn weights(&self) -> &[Parameter] {
        &self.weights
    }

    pub fn bias(&self) -> &Parameter {
        &self.bias
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
