// ============================================================
// Layer 2 — EvaluateUseCase
// ============================================================
// Builds the Model Evaluation page's numbers once, at startup:
//
//   Step 1: Generate the seeded synthetic dataset  (Layer 4 - data)
//   Step 2: Predict every row in one batch         (Layer 5 - ml)
//   Step 3: Confusion matrix + report              (Layer 6 - infra)
//
// The synthetic Exited labels are random and unrelated to the
// features, so the resulting metrics describe noise. The page
// shows them anyway and says so.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::data::dataset::ChurnDataset;
use crate::domain::prediction::ChurnLabel;
use crate::domain::traits::ChurnPredictor;
use crate::infra::metrics::{ClassificationReport, ConfusionMatrix};

// ─── Evaluation Configuration ────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// RNG seed for the synthetic dataset
    pub seed:    u64,
    /// Number of synthetic rows
    pub rows:    usize,
    /// How many leading predictions "Display Evaluation Predictions" shows
    pub preview: usize,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self { seed: 42, rows: 1000, preview: 5 }
    }
}

/// Everything the evaluation page displays. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSummary {
    pub rows:      usize,
    pub confusion: ConfusionMatrix,
    pub report:    ClassificationReport,
    /// First `preview` predicted labels, in dataset order
    pub preview:   Vec<ChurnLabel>,
}

impl EvaluationSummary {
    /// "Customer N is (not) likely to churn." for each previewed row.
    pub fn preview_messages(&self) -> Vec<String> {
        self.preview
            .iter()
            .enumerate()
            .map(|(i, label)| label.numbered_message(i + 1))
            .collect()
    }
}

pub struct EvaluateUseCase {
    predictor: Arc<dyn ChurnPredictor>,
    config:    EvaluationConfig,
}

impl EvaluateUseCase {
    pub fn new(predictor: Arc<dyn ChurnPredictor>, config: EvaluationConfig) -> Self {
        Self { predictor, config }
    }

    pub fn execute(&self) -> Result<EvaluationSummary> {
        let cfg = &self.config;

        // ── Step 1: Synthetic dataset ─────────────────────────────────────────
        let dataset = ChurnDataset::synthetic(cfg.seed, cfg.rows);
        if dataset.is_empty() {
            tracing::warn!("Evaluation dataset has no rows; every metric will be 0");
        }

        // ── Step 2: Predict all rows ──────────────────────────────────────────
        let predicted = self.predictor.predict(&dataset.features())?;
        let truth     = dataset.labels();

        // ── Step 3: Metrics ───────────────────────────────────────────────────
        let confusion = ConfusionMatrix::from_labels(&truth, &predicted)?;
        let report    = ClassificationReport::from_confusion(&confusion);

        tracing::info!(
            "Evaluated {} synthetic rows (seed={}): accuracy {:.3}",
            dataset.len(),
            cfg.seed,
            report.accuracy
        );

        let preview = predicted.into_iter().take(cfg.preview).collect();
        Ok(EvaluationSummary { rows: dataset.len(), confusion, report, preview })
    }
}
