// ============================================================
// Layer 3 — Feature Vector and Feature Batch
// ============================================================
// FeatureVector is the fixed-order numeric tuple a classifier
// sees for one customer. The order below is a contract with the
// model artifact: the model stores the column names it was
// fitted on and refuses batches whose columns differ.
//
// FeatureBatch is the rectangular, row-major matrix that is
// actually handed to a predictor. It is only built from whole
// FeatureVectors, so a ragged batch can never reach the model.
//
// Reference: Rust Book §5 (Structs), §8 (Vectors)

use serde::{Deserialize, Serialize};

/// Number of columns in a FeatureVector.
pub const FEATURE_COUNT: usize = 11;

/// Column names in the order the classifier expects them.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "CreditScore",
    "Age",
    "Tenure",
    "Balance",
    "NumOfProducts",
    "HasCrCard",
    "IsActiveMember",
    "EstimatedSalary",
    "Geography_Germany",
    "Geography_Spain",
    "Gender_Male",
];

// ─── FeatureVector ────────────────────────────────────────────────────────────
/// One customer, encoded. Indicator fields hold 0.0 or 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub credit_score:      f64,
    pub age:               f64,
    pub tenure:            f64,
    pub balance:           f64,
    pub num_of_products:   f64,
    pub has_cr_card:       f64,
    pub is_active_member:  f64,
    pub estimated_salary:  f64,
    pub geography_germany: f64,
    pub geography_spain:   f64,
    pub gender_male:       f64,
}

impl FeatureVector {
    /// Values in FEATURE_NAMES order.
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.credit_score,
            self.age,
            self.tenure,
            self.balance,
            self.num_of_products,
            self.has_cr_card,
            self.is_active_member,
            self.estimated_salary,
            self.geography_germany,
            self.geography_spain,
            self.gender_male,
        ]
    }

    /// Field values paired with their column names.
    pub fn named_values(&self) -> impl Iterator<Item = (&'static str, f64)> {
        FEATURE_NAMES.into_iter().zip(self.to_array())
    }

    /// True unless both geography indicators are set.
    pub fn has_valid_geography(&self) -> bool {
        !(self.geography_germany == 1.0 && self.geography_spain == 1.0)
    }
}

// ─── FeatureBatch ─────────────────────────────────────────────────────────────
/// A rectangular batch of rows with named columns.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureBatch {
    columns: Vec<String>,
    /// Row-major: row i occupies values[i * cols .. (i + 1) * cols]
    values:  Vec<f32>,
    rows:    usize,
}

impl FeatureBatch {
    /// Build a batch from arbitrary rows. Fails if any row's length
    /// differs from the number of columns.
    #[cfg(test)]
    pub fn new(columns: Vec<String>, rows: Vec<Vec<f32>>) -> anyhow::Result<Self> {
        let width = columns.len();
        let mut values = Vec::with_capacity(rows.len() * width);

        for (i, row) in rows.iter().enumerate() {
            anyhow::ensure!(
                row.len() == width,
                "row {i} has {} values but the batch has {width} columns",
                row.len()
            );
            values.extend_from_slice(row);
        }

        Ok(Self { columns, values, rows: rows.len() })
    }

    /// Batch of encoded customers using the standard column order.
    pub fn from_vectors(vectors: &[FeatureVector]) -> Self {
        let values: Vec<f32> = vectors
            .iter()
            .flat_map(|v| v.to_array().map(|x| x as f32))
            .collect();

        Self {
            columns: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
            values,
            rows: vectors.len(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn num_rows(&self) -> usize {
        self.rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Flat row-major values, ready to be reshaped into [rows, columns].
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }
}
