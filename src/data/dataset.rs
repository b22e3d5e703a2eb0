// ============================================================
// Layer 4 — Synthetic Evaluation Dataset
// ============================================================
// The Model Evaluation page scores the classifier against a
// dataset generated at startup from a seeded RNG. Column ranges
// (upper bounds exclusive):
//
//   CreditScore      300 .. 850    integer
//   Age               18 .. 100    integer
//   Tenure             0 .. 10     integer
//   Balance            0 .. 200000 uniform float
//   NumOfProducts      1 .. 5      integer
//   HasCrCard          0 .. 2      integer
//   IsActiveMember     0 .. 2      integer
//   EstimatedSalary    0 .. 150000 uniform float
//   Geography          Germany | Spain | Other, one-hot
//   Gender_Male        0 .. 2      integer
//   Exited             0 .. 2      integer  ← the "true" label
//
// Exited is drawn independently of every feature, so any metric
// computed against it measures noise. The evaluation page says
// so next to the numbers.
//
// Same seed + same row count → identical dataset.
//
// Reference: rand crate documentation (SeedableRng, Rng)

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::domain::features::{FeatureBatch, FeatureVector};
use crate::domain::prediction::ChurnLabel;

/// One generated customer and its random label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledRow {
    pub features: FeatureVector,
    pub exited:   ChurnLabel,
}

pub struct ChurnDataset {
    rows: Vec<LabeledRow>,
}

impl ChurnDataset {
    /// Generate `size` rows from `seed`.
    pub fn synthetic(seed: u64, size: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let rows = (0..size).map(|_| random_row(&mut rng)).collect();
        tracing::debug!("Generated {} synthetic rows (seed={})", size, seed);
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Feature matrix with the Exited column dropped.
    pub fn features(&self) -> FeatureBatch {
        let vectors: Vec<FeatureVector> = self.rows.iter().map(|r| r.features).collect();
        FeatureBatch::from_vectors(&vectors)
    }

    pub fn labels(&self) -> Vec<ChurnLabel> {
        self.rows.iter().map(|r| r.exited).collect()
    }
}

fn random_bit(rng: &mut StdRng) -> f64 {
    f64::from(rng.gen_range(0u8..2))
}

fn random_row(rng: &mut StdRng) -> LabeledRow {
    // One draw for both indicators: a row is never Germany and Spain at once.
    // 0 = Germany, 1 = Spain, 2 = neither
    let geography = rng.gen_range(0u8..3);

    let features = FeatureVector {
        credit_score:      f64::from(rng.gen_range(300u32..850)),
        age:               f64::from(rng.gen_range(18u32..100)),
        tenure:            f64::from(rng.gen_range(0u32..10)),
        balance:           rng.gen_range(0.0..200_000.0),
        num_of_products:   f64::from(rng.gen_range(1u32..5)),
        has_cr_card:       random_bit(rng),
        is_active_member:  random_bit(rng),
        estimated_salary:  rng.gen_range(0.0..150_000.0),
        geography_germany: if geography == 0 { 1.0 } else { 0.0 },
        geography_spain:   if geography == 1 { 1.0 } else { 0.0 },
        gender_male:       random_bit(rng),
    };

    let exited = if rng.gen_bool(0.5) { ChurnLabel::Churns } else { ChurnLabel::Stays };

    LabeledRow { features, exited }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::features::FEATURE_COUNT;

    #[test]
    fn test_same_seed_same_data() {
        let a = ChurnDataset::synthetic(42, 50);
        let b = ChurnDataset::synthetic(42, 50);
        assert_eq!(a.rows, b.rows);
    }

    #[test]
    fn test_different_seed_different_data() {
        let a = ChurnDataset::synthetic(1, 50);
        let b = ChurnDataset::synthetic(2, 50);
        assert_ne!(a.rows, b.rows);
    }

    #[test]
    fn test_values_within_ranges() {
        let ds = ChurnDataset::synthetic(7, 500);
        for row in &ds.rows {
            let f = &row.features;
            assert!((300.0..850.0).contains(&f.credit_score));
            assert!((18.0..100.0).contains(&f.age));
            assert!((0.0..10.0).contains(&f.tenure));
            assert!((0.0..200_000.0).contains(&f.balance));
            assert!((1.0..5.0).contains(&f.num_of_products));
            assert!((0.0..150_000.0).contains(&f.estimated_salary));
            assert!(f.has_valid_geography());
        }
    }

    #[test]
    fn test_geography_is_one_of_three() {
        let ds = ChurnDataset::synthetic(42, 300);
        let (mut germany, mut spain, mut neither) = (0, 0, 0);
        for row in &ds.rows {
            let f = &row.features;
            match (f.geography_germany as u8, f.geography_spain as u8) {
                (1, 0) => germany += 1,
                (0, 1) => spain += 1,
                (0, 0) => neither += 1,
                other  => panic!("invalid geography indicators {other:?}"),
            }
        }
        assert!(germany > 0 && spain > 0 && neither > 0);
    }

    #[test]
    fn test_feature_batch_shape() {
        let ds    = ChurnDataset::synthetic(42, 20);
        let batch = ds.features();
        assert_eq!(batch.num_rows(), 20);
        assert_eq!(batch.num_columns(), FEATURE_COUNT);
        assert_eq!(ds.labels().len(), 20);
    }

    #[test]
    fn test_empty_dataset() {
        let ds = ChurnDataset::synthetic(42, 0);
        assert!(ds.is_empty());
        assert!(ds.features().is_empty());
    }
}
