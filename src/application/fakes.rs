// In-memory predictors and stores shared by the unit tests.

use anyhow::{bail, Result};
use parking_lot::Mutex;

use crate::domain::features::FeatureBatch;
use crate::domain::prediction::ChurnLabel;
use crate::domain::traits::{ChurnPredictor, SubmissionStore};

/// Churns exactly when Geography_Germany is 1.
pub struct GermanyChurns;

impl ChurnPredictor for GermanyChurns {
    fn predict(&self, batch: &FeatureBatch) -> Result<Vec<ChurnLabel>> {
        let Some(col) = batch.columns().iter().position(|c| c == "Geography_Germany") else {
            bail!("batch has no Geography_Germany column");
        };
        let width = batch.num_columns();
        Ok(batch
            .values()
            .chunks(width)
            .map(|row| if row[col] == 1.0 { ChurnLabel::Churns } else { ChurnLabel::Stays })
            .collect())
    }
}

/// Returns no labels at all.
pub struct EmptyPredictor;

impl ChurnPredictor for EmptyPredictor {
    fn predict(&self, _batch: &FeatureBatch) -> Result<Vec<ChurnLabel>> {
        Ok(Vec::new())
    }
}

/// Always fails, like a model fed the wrong schema.
pub struct BrokenPredictor;

impl ChurnPredictor for BrokenPredictor {
    fn predict(&self, _batch: &FeatureBatch) -> Result<Vec<ChurnLabel>> {
        bail!("model expects 12 features per row but the batch has 11")
    }
}

#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<String>>,
}

impl MemoryStore {
    pub fn records(&self) -> Vec<String> {
        self.records.lock().clone()
    }
}

impl SubmissionStore for MemoryStore {
    fn append(&self, record: &str) -> Result<()> {
        self.records.lock().push(record.to_string());
        Ok(())
    }
}
