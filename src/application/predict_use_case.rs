// ============================================================
// Layer 2 — PredictUseCase
// ============================================================
// One prediction, end to end:
//
//   Step 1: Encode the form selections     (Layer 4 - data)
//   Step 2: Wrap the vector as a 1-row batch (Layer 3 - domain)
//   Step 3: Ask the predictor for a label  (Layer 5 - ml)
//
// The vector exists only for the duration of the call.

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::data::encoder::encode;
use crate::domain::customer::CustomerInput;
use crate::domain::features::FeatureBatch;
use crate::domain::prediction::ChurnLabel;
use crate::domain::traits::ChurnPredictor;

#[derive(Clone)]
pub struct PredictUseCase {
    predictor: Arc<dyn ChurnPredictor>,
}

impl PredictUseCase {
    pub fn new(predictor: Arc<dyn ChurnPredictor>) -> Self {
        Self { predictor }
    }

    pub fn predict(&self, input: &CustomerInput) -> Result<ChurnLabel> {
        let vector = encode(input);
        tracing::debug!(
            features = ?vector.named_values().collect::<Vec<_>>(),
            "Encoded customer"
        );

        let labels = self.predictor.predict(&FeatureBatch::from_vectors(&[vector]))?;
        let label  = labels
            .into_iter()
            .next()
            .context("Predictor returned no label for a one-row batch")?;

        tracing::info!("Prediction: {}", label.message());
        Ok(label)
    }
}
