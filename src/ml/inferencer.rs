// ============================================================
// Layer 5 — Inferencer
// ============================================================
// Wraps a loaded ChurnClassifier behind the ChurnPredictor trait.
// Runs on burn's CPU backend (NdArray); a handful of rows per
// request does not justify a GPU.
//
// Before touching the model, the batch layout is checked against
// the feature names stored with the model:
//   - wrong column count → ModelError::ShapeMismatch
//   - wrong column order → ModelError::SchemaMismatch
// Neither is recovered from; the caller gets the error.

use anyhow::{anyhow, Result};
use burn::prelude::*;
use parking_lot::Mutex;
use thiserror::Error;

use crate::domain::features::FeatureBatch;
use crate::domain::prediction::ChurnLabel;
use crate::domain::traits::ChurnPredictor;
use crate::infra::checkpoint::CheckpointManager;
use crate::ml::model::{ChurnClassifier, ChurnClassifierConfig};

pub type InferBackend = burn::backend::NdArray;
pub type InferDevice  = burn::backend::ndarray::NdArrayDevice;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("model expects {expected} features per row but the batch has {found}")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("feature column {index} is '{found}' but the model expects '{expected}'")]
    SchemaMismatch { index: usize, expected: String, found: String },
}

pub struct Inferencer {
    // Modules are Send but not Sync; the lock lets handlers share one model.
    model:  Mutex<ChurnClassifier<InferBackend>>,
    config: ChurnClassifierConfig,
    device: InferDevice,
}

impl Inferencer {
    pub fn new(model: ChurnClassifier<InferBackend>, config: ChurnClassifierConfig) -> Self {
        Self {
            model:  Mutex::new(model),
            config,
            device: InferDevice::default(),
        }
    }

    pub fn from_checkpoint(ckpt_manager: &CheckpointManager) -> Result<Self> {
        let device          = InferDevice::default();
        let (model, config) = ckpt_manager.load_model::<InferBackend>(&device)?;
        tracing::info!(
            "Model loaded: {} features, threshold {}",
            config.num_features(),
            config.threshold
        );
        Ok(Self::new(model, config))
    }

    fn check_layout(&self, batch: &FeatureBatch) -> Result<(), ModelError> {
        let expected = &self.config.feature_names;
        if batch.num_columns() != expected.len() {
            return Err(ModelError::ShapeMismatch {
                expected: expected.len(),
                found:    batch.num_columns(),
            });
        }
        for (index, (want, got)) in expected.iter().zip(batch.columns()).enumerate() {
            if want != got {
                return Err(ModelError::SchemaMismatch {
                    index,
                    expected: want.clone(),
                    found:    got.clone(),
                });
            }
        }
        Ok(())
    }

    /// p(churn) per row.
    pub fn probabilities(&self, batch: &FeatureBatch) -> Result<Vec<f32>> {
        self.check_layout(batch)?;
        if batch.is_empty() {
            return Ok(Vec::new());
        }

        let input = Tensor::<InferBackend, 1>::from_floats(batch.values(), &self.device)
            .reshape([batch.num_rows(), batch.num_columns()]);

        let output = self.model.lock().forward(input);

        output
            .into_data()
            .to_vec::<f32>()
            .map_err(|e| anyhow!("Cannot read model output: {e:?}"))
    }
}

impl ChurnPredictor for Inferencer {
    fn predict(&self, batch: &FeatureBatch) -> Result<Vec<ChurnLabel>> {
        let threshold = self.config.threshold;
        let labels: Vec<ChurnLabel> = self
            .probabilities(batch)?
            .into_iter()
            .map(|p| {
                if f64::from(p) > threshold { ChurnLabel::Churns } else { ChurnLabel::Stays }
            })
            .collect();

        tracing::debug!(
            "Predicted {} rows, {} churn",
            labels.len(),
            labels.iter().filter(|l| l.is_churn()).count()
        );
        Ok(labels)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::encoder::encode;
    use crate::domain::customer::{CustomerInput, Geography};
    use crate::domain::features::{FEATURE_COUNT, FEATURE_NAMES};

    /// Churns exactly when the customer is in Germany.
    fn germany_model() -> Inferencer {
        let config = ChurnClassifierConfig::new(
            FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
        );
        let mut coefficients = [0.0f32; FEATURE_COUNT];
        coefficients[8] = 4.0; // Geography_Germany
        let model = config
            .init_with_weights::<InferBackend>(&coefficients, -2.0, &InferDevice::default())
            .unwrap();
        Inferencer::new(model, config)
    }

    fn customer(geography: Geography) -> FeatureBatch {
        let input = CustomerInput { geography, ..CustomerInput::default() };
        FeatureBatch::from_vectors(&[encode(&input)])
    }

    #[test]
    fn test_predicts_one_label_per_row() {
        let inf    = germany_model();
        let rows   = [
            encode(&CustomerInput { geography: Geography::Germany, ..Default::default() }),
            encode(&CustomerInput { geography: Geography::Spain,   ..Default::default() }),
            encode(&CustomerInput { geography: Geography::Other,   ..Default::default() }),
        ];
        let labels = inf.predict(&FeatureBatch::from_vectors(&rows)).unwrap();
        assert_eq!(labels, vec![ChurnLabel::Churns, ChurnLabel::Stays, ChurnLabel::Stays]);
    }

    #[test]
    fn test_same_input_same_label() {
        let inf   = germany_model();
        let batch = customer(Geography::Germany);
        let first  = inf.predict(&batch).unwrap();
        let second = inf.predict(&batch).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_wrong_column_count_fails() {
        let inf   = germany_model();
        let cols  = FEATURE_NAMES[..10].iter().map(|s| s.to_string()).collect();
        let batch = FeatureBatch::new(cols, vec![vec![0.0; 10]]).unwrap();

        let err = inf.predict(&batch).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ModelError>(),
            Some(&ModelError::ShapeMismatch { expected: 11, found: 10 })
        );
    }

    #[test]
    fn test_wrong_column_order_fails() {
        let inf = germany_model();
        let mut cols: Vec<String> = FEATURE_NAMES.iter().map(|s| s.to_string()).collect();
        cols.swap(0, 1);
        let batch = FeatureBatch::new(cols, vec![vec![0.0; FEATURE_COUNT]]).unwrap();

        let err = inf.predict(&batch).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ModelError>(),
            Some(ModelError::SchemaMismatch { index: 0, .. })
        ));
    }

    #[test]
    fn test_empty_batch_gives_no_labels() {
        let inf = germany_model();
        let labels = inf.predict(&FeatureBatch::from_vectors(&[])).unwrap();
        assert!(labels.is_empty());
    }
}
