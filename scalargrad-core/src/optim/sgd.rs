use crate::error::ScalarGradError;
use crate::nn::Parameter;
use crate::optim::Optimizer;

/// Implements stochastic gradient descent.
///
/// Updates parameters `p` according to the rule: `p = p - lr * grad(p)`.
/// This is the only place in the stack that mutates a node's `data` after
/// construction, and it only ever touches leaf parameters.
#[derive(Debug)]
pub struct Sgd {
    lr: f64,
}

impl Sgd {
    /// Creates a new SGD optimizer instance with the given learning rate.
    pub fn new(lr: f64) -> Self {
        Sgd { lr }
    }
}

impl Optimizer for Sgd {
    fn step(&mut self, params: &[Parameter]) -> Result<(), ScalarGradError> {
        for param in params {
            // grad points in the direction of increasing loss.
            let update = self.lr * param.grad();
            param.set_data(param.data() - update);
        }
        log::trace!("sgd step applied to {} parameters", params.len());
        Ok(())
    }

    fn zero_grad(&self, params: &[Parameter]) {
        for param in params {
            param.zero_grad();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Sgd;
    use crate::nn::Parameter;
    use crate::optim::Optimizer;

    #[test]
    fn test_sgd_step() {
        let p1 = Parameter::from_scalar(1.0, "p1");
        let p2 = Parameter::from_scalar(3.0, "p2");

        // Leave gradients on the parameters via a real backward pass:
        // loss = 10*p1 + 0.5*p2, so dloss/dp1 = 10, dloss/dp2 = 0.5.
        let loss = &(p1.value() * 10.0) + &(p2.value() * 0.5);
        loss.backward().unwrap();

        let mut optim = Sgd::new(0.1);
        optim.step(&[p1.clone(), p2.clone()]).unwrap();

        assert!((p1.data() - 0.0).abs() < 1e-12);
        assert!((p2.data() - 2.95).abs() < 1e-12);
    }

    #[test]
    fn test_sgd_step_without_gradient_is_noop() {
        let p = Parameter::from_scalar(5.0, "p");
        let mut optim = Sgd::new(0.1);
        optim.step(&[p.clone()]).unwrap();
        assert_eq!(p.data(), 5.0);
    }

    #[test]
    fn test_sgd_zero_grad() {
        let p1 = Parameter::from_scalar(1.0, "p1");
        let p2 = Parameter::from_scalar(2.0, "p2");
        let loss = p1.value() * 4.0;
        loss.backward().unwrap();
        assert_eq!(p1.grad(), 4.0);

        let optim = Sgd::new(0.1);
        optim.zero_grad(&[p1.clone(), p2.clone()]);
        assert_eq!(p1.grad(), 0.0);
        assert_eq!(p2.grad(), 0.0);
    }
}
