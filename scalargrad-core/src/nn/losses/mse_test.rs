use super::{MseLoss, Reduction};
use crate::error::ScalarGradError;
use crate::value::Value;
use approx::assert_relative_eq;

fn leaves(data: &[f64]) -> Vec<Value> {
    data.iter().map(|&x| Value::new(x)).collect()
}

#[test]
fn test_reduction_from_str() {
    assert_eq!(Reduction::from_str("mean").unwrap(), Reduction::Mean);
    assert_eq!(Reduction::from_str("SUM").unwrap(), Reduction::Sum);
    assert_eq!(
        Reduction::from_str("median").unwrap_err(),
        ScalarGradError::UnsupportedReduction("median".to_string())
    );
}

#[test]
fn test_mse_sum() {
    let input = leaves(&[1.0, 2.0, 3.0]);
    let target = leaves(&[0.0, 2.0, 5.0]);
    let loss = MseLoss::new(Reduction::Sum)
        .calculate(&input, &target)
        .unwrap();
    // 1 + 0 + 4 = 5
    assert_eq!(loss.data(), 5.0);
}

#[test]
fn test_mse_mean() {
    let input = leaves(&[1.0, 2.0, 3.0]);
    let target = leaves(&[0.0, 2.0, 5.0]);
    let loss = MseLoss::new(Reduction::Mean)
        .calculate(&input, &target)
        .unwrap();
    assert_relative_eq!(loss.data(), 5.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn test_mse_gradient() {
    let input = leaves(&[3.0]);
    let target = leaves(&[1.0]);
    let loss = MseLoss::new(Reduction::Sum)
        .calculate(&input, &target)
        .unwrap();
    loss.backward().unwrap();
    // d (x - t)^2 / dx = 2 (x - t) = 4
    assert_eq!(input[0].grad(), 4.0);
    assert_eq!(target[0].grad(), -4.0);
}

#[test]
fn test_mse_mean_gradient_scales() {
    let input = leaves(&[3.0, 3.0]);
    let target = leaves(&[1.0, 1.0]);
    let loss = MseLoss::new(Reduction::Mean)
        .calculate(&input, &target)
        .unwrap();
    loss.backward().unwrap();
    assert_eq!(input[0].grad(), 2.0);
}

#[test]
fn test_mse_arity_mismatch() {
    let input = leaves(&[1.0, 2.0]);
    let target = leaves(&[1.0]);
    assert!(MseLoss::new(Reduction::Sum)
        .calculate(&input, &target)
        .is_err());
    assert!(MseLoss::new(Reduction::Sum).calculate(&[], &[]).is_err());
}
