use crate::error::ScalarGradError;
use crate::nn::layers::{Activation, Neuron};
use crate::nn::{Module, Parameter};
use crate::value::Value;

/// A fully-connected width of neurons over a shared input slice.
#[derive(Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
    in_features: usize,
}

impl Layer {
    pub fn new(in_features: usize, out_features: usize, activation: Activation) -> Self {
        let neurons = (0..out_features)
            .map(|_| Neuron::new(in_features, activation))
            .collect();
        Layer {
            neurons,
            in_features,
        }
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        if inputs.len() != self.in_features {
            return Err(ScalarGradError::ArityMismatch {
                expected: self.in_features,
                actual: inputs.len(),
                operation: "Layer forward".to_string(),
            });
        }
        self.neurons
            .iter()
            .map(|neuron| neuron.forward(inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<Parameter> {
        self.neurons
            .iter()
            .flat_map(|neuron| neuron.parameters())
            .collect()
    }
}
