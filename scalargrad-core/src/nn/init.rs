use crate::value::Value;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Creates a leaf node with data drawn uniformly from `[low, high)`.
pub fn uniform(low: f64, high: f64) -> Value {
    let mut rng = rand::thread_rng();
    Value::new(rng.gen_range(low..high))
}

/// Creates a leaf node with data drawn from the standard normal
/// distribution.
pub fn standard_normal() -> Value {
    let mut rng = rand::thread_rng();
    let sample: f64 = StandardNormal.sample(&mut rng);
    Value::new(sample)
}

#[cfg(test)]
mod tests {
    use super::{standard_normal, uniform};

    #[test]
    fn test_uniform_in_range() {
        for _ in 0..100 {
            let v = uniform(-1.0, 1.0);
            assert!(v.data() >= -1.0 && v.data() < 1.0);
            assert!(v.is_leaf());
        }
    }

    #[test]
    fn test_standard_normal_is_finite_leaf() {
        for _ in 0..100 {
            let v = standard_normal();
            assert!(v.data().is_finite());
            assert!(v.is_leaf());
        }
    }
}
