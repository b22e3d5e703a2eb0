// ============================================================
// Layer 6 — Checkpoint Manager
// ============================================================
// Saves and restores the churn classifier using burn's
// gzip'd MessagePack recorder at full precision.
//
// What a model directory holds:
//   1. churn_model.mpk.gz — the Linear layer's weight and bias
//   2. model_config.json  — feature names (in order) and threshold
//
// Why save the config separately?
//   The record only holds tensors. To rebuild the module before
//   loading the tensors into it we need the feature count, and
//   to reject mislaid-out batches we need the feature names.
//
// Weights must stay f32: coefficients on raw salaries are
// around 1e-6 and underflow in the half precision CompactRecorder
// uses. Loading fails if the record doesn't fit the module.
//
// Reference: Burn Book §5 (Records and Checkpointing)
//            Rust Book §9 (Error Handling)

use anyhow::{ensure, Context, Result};
use std::{fs, path::PathBuf};
use burn::{
    prelude::*,
    record::{FullPrecisionSettings, NamedMpkGzFileRecorder, Recorder},
};

use crate::ml::model::{ChurnClassifier, ChurnClassifierConfig};

const MODEL_FILE:  &str = "churn_model";
const CONFIG_FILE: &str = "model_config.json";

type ModelRecorder = NamedMpkGzFileRecorder<FullPrecisionSettings>;

/// Manages saving and loading of a model directory.
pub struct CheckpointManager {
    dir: PathBuf,
}

impl CheckpointManager {
    /// Point at a model directory. Nothing is created or read yet.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Write weights and config, creating the directory if needed.
    pub fn save_model<B: Backend>(
        &self,
        model:  &ChurnClassifier<B>,
        config: &ChurnClassifierConfig,
    ) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create model directory '{}'", self.dir.display()))?;

        // Recorder appends the .mpk.gz extension itself
        let path = self.dir.join(MODEL_FILE);
        ModelRecorder::new()
            .record(model.clone().into_record(), path.clone())
            .with_context(|| format!("Failed to save model to '{}'", path.display()))?;

        self.save_config(config)?;

        tracing::info!("Saved model to '{}'", self.dir.display());
        Ok(())
    }

    /// Rebuild the model from its config, then load the saved weights into it.
    pub fn load_model<B: Backend>(
        &self,
        device: &B::Device,
    ) -> Result<(ChurnClassifier<B>, ChurnClassifierConfig)> {
        let config = self.load_config()?;
        ensure!(
            config.num_features() > 0,
            "Model config in '{}' lists no features",
            self.dir.display()
        );

        let path  = self.dir.join(MODEL_FILE);
        let model = config.init::<B>(device);

        let record = ModelRecorder::new()
            .load(path.clone(), device)
            .with_context(|| {
                format!("Cannot load model weights '{}'. Did you run 'import-model'?",
                    path.display())
            })?;

        Ok((model.load_record(record), config))
    }

    fn save_config(&self, config: &ChurnClassifierConfig) -> Result<()> {
        let path = self.dir.join(CONFIG_FILE);
        let json = serde_json::to_string_pretty(config)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved model config to '{}'", path.display());
        Ok(())
    }

    fn load_config(&self) -> Result<ChurnClassifierConfig> {
        let path = self.dir.join(CONFIG_FILE);

        let json = fs::read_to_string(&path)
            .with_context(|| {
                format!(
                    "Cannot read model config from '{}'. \
                     Point --model-dir at a directory written by 'import-model'.",
                    path.display()
                )
            })?;

        serde_json::from_str(&json)
            .with_context(|| format!("Malformed model config '{}'", path.display()))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::{ndarray::NdArrayDevice, NdArray};

    #[test]
    fn test_save_then_load_keeps_weights() {
        let dir    = tempfile::tempdir().unwrap();
        let device = NdArrayDevice::default();
        let config = ChurnClassifierConfig::new(vec!["a".into(), "b".into()])
            .with_threshold(0.7);
        let model  = config
            .init_with_weights::<NdArray>(&[1.5, -2.0], 0.25, &device)
            .unwrap();

        let ckpt = CheckpointManager::new(dir.path().join("model"));
        ckpt.save_model(&model, &config).unwrap();

        let (loaded, loaded_cfg) = ckpt.load_model::<NdArray>(&device).unwrap();
        assert_eq!(loaded_cfg.feature_names, config.feature_names);
        assert_eq!(loaded_cfg.threshold, 0.7);

        let weights: Vec<f32> = loaded.linear.weight.val().into_data().to_vec().unwrap();
        assert_eq!(weights, vec![1.5, -2.0]);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir  = tempfile::tempdir().unwrap();
        let ckpt = CheckpointManager::new(dir.path().join("nothing-here"));
        assert!(ckpt.load_model::<NdArray>(&NdArrayDevice::default()).is_err());
    }
}
