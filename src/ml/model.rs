// ============================================================
// Layer 5 — Churn Classifier Model
// ============================================================
// A logistic-regression classifier expressed as a burn Module:
//
//   x: [batch, n_features]
//     → Linear(n_features → 1)
//     → sigmoid
//     → p(churn): [batch]
//
// The config records the feature names the weights were fitted
// on, in order, plus the decision threshold. The inferencer uses
// those names to reject batches laid out differently.
//
// Weights are never learned here. They arrive either from a
// saved checkpoint or from coefficients exported by another
// library (see ml/export.rs).
//
// Reference: Burn Book §3 (Building Blocks), §5 (Records)

use anyhow::{ensure, Result};
use burn::{
    module::Param,
    nn::{Linear, LinearConfig},
    prelude::*,
};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally — do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct ChurnClassifierConfig {
    /// Column names in the order the weights expect them
    pub feature_names: Vec<String>,
    /// p(churn) strictly above this → label 1
    #[config(default = 0.5)]
    pub threshold: f64,
}

impl ChurnClassifierConfig {
    pub fn num_features(&self) -> usize {
        self.feature_names.len()
    }

    /// Fresh model with default-initialised weights.
    pub fn init<B: Backend>(&self, device: &B::Device) -> ChurnClassifier<B> {
        let linear = LinearConfig::new(self.num_features(), 1).init(device);
        ChurnClassifier { linear }
    }

    /// Model with the given coefficients (one per feature) and intercept.
    pub fn init_with_weights<B: Backend>(
        &self,
        coefficients: &[f32],
        intercept:    f32,
        device:       &B::Device,
    ) -> Result<ChurnClassifier<B>> {
        let n = self.num_features();
        ensure!(
            coefficients.len() == n,
            "got {} coefficients for {} features",
            coefficients.len(),
            n
        );

        let mut model = self.init::<B>(device);

        // Linear stores its weight as [d_input, d_output]
        let weight = Tensor::<B, 1>::from_floats(coefficients, device).reshape([n, 1]);
        let bias   = Tensor::<B, 1>::from_floats([intercept], device);

        model.linear.weight = Param::from_tensor(weight);
        model.linear.bias   = Some(Param::from_tensor(bias));
        Ok(model)
    }
}

#[derive(Module, Debug)]
pub struct ChurnClassifier<B: Backend> {
    pub linear: Linear<B>,
}

impl<B: Backend> ChurnClassifier<B> {
    /// features: [batch, n_features] → p(churn): [batch]
    pub fn forward(&self, features: Tensor<B, 2>) -> Tensor<B, 1> {
        let [batch_size, _] = features.dims();
        let logits = self.linear.forward(features); // [batch, 1]
        burn::tensor::activation::sigmoid(logits).reshape([batch_size])
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::{ndarray::NdArrayDevice, NdArray};

    fn config(n: usize) -> ChurnClassifierConfig {
        ChurnClassifierConfig::new((0..n).map(|i| format!("f{i}")).collect())
    }

    #[test]
    fn test_default_threshold() {
        assert_eq!(config(3).threshold, 0.5);
    }

    #[test]
    fn test_forward_applies_weights_and_sigmoid() {
        let device = NdArrayDevice::default();
        let model  = config(2)
            .init_with_weights::<NdArray>(&[1.0, -1.0], 0.0, &device)
            .unwrap();

        // Row 1: 2 - 0 → z = 2; Row 2: 0 - 0 → z = 0
        let x = Tensor::<NdArray, 1>::from_floats([2.0, 0.0, 0.0, 0.0], &device)
            .reshape([2, 2]);
        let p: Vec<f32> = model.forward(x).into_data().to_vec().unwrap();

        assert_eq!(p.len(), 2);
        assert!((p[0] - 0.880_797).abs() < 1e-4);
        assert!((p[1] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_coefficient_count_must_match_features() {
        let device = NdArrayDevice::default();
        let result = config(3).init_with_weights::<NdArray>(&[1.0, 2.0], 0.0, &device);
        assert!(result.is_err());
    }
}
