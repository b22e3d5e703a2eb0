// ============================================================
// Layer 2 — ImportUseCase
// ============================================================
// Converts a logistic regression exported from another library
// into a model directory the server can load:
//
//   Step 1: Read and validate the JSON export       (Layer 5 - ml)
//   Step 2: Fold any scaler into raw-input weights  (Layer 5 - ml)
//   Step 3: Build the burn module with those weights (Layer 5 - ml)
//   Step 4: Save weights + config                   (Layer 6 - infra)
//
// No fitting happens here; the numbers are copied, not learned.

use anyhow::Result;
use std::path::PathBuf;

use crate::domain::features::FEATURE_NAMES;
use crate::infra::checkpoint::CheckpointManager;
use crate::ml::export::LogisticExport;
use crate::ml::inferencer::{InferBackend, InferDevice};
use crate::ml::model::ChurnClassifierConfig;

pub struct ImportUseCase {
    export_path: PathBuf,
    model_dir:   PathBuf,
}

impl ImportUseCase {
    pub fn new(export_path: impl Into<PathBuf>, model_dir: impl Into<PathBuf>) -> Self {
        Self { export_path: export_path.into(), model_dir: model_dir.into() }
    }

    pub fn execute(&self) -> Result<ChurnClassifierConfig> {
        // ── Step 1 + 2: Read and fold ─────────────────────────────────────────
        let export = LogisticExport::from_file(&self.export_path)?;
        let folded = export.fold()?;

        // A model with other columns still imports; predictions will
        // be refused until the encoder's layout matches.
        if export.feature_names.iter().map(String::as_str).ne(FEATURE_NAMES) {
            tracing::warn!(
                "Exported features {:?} differ from the encoder's {:?}; predictions will fail",
                export.feature_names,
                FEATURE_NAMES
            );
        }

        // ── Step 3: Build module ──────────────────────────────────────────────
        let mut config = ChurnClassifierConfig::new(export.feature_names.clone());
        if let Some(threshold) = export.threshold {
            config = config.with_threshold(threshold);
        }
        let device = InferDevice::default();
        let model  = config.init_with_weights::<InferBackend>(
            &folded.coefficients,
            folded.intercept,
            &device,
        )?;

        // ── Step 4: Save ──────────────────────────────────────────────────────
        CheckpointManager::new(&self.model_dir).save_model(&model, &config)?;

        tracing::info!(
            "Imported {} coefficients from '{}'",
            folded.coefficients.len(),
            self.export_path.display()
        );
        Ok(config)
    }
}
