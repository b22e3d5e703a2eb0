// ============================================================
// Layer 6 — Classification Metrics
// ============================================================
// Scores predicted labels against true labels.
//
// Confusion matrix layout (rows = truth, columns = prediction):
//
//                 pred 0   pred 1
//     true 0  [   TN       FP   ]
//     true 1  [   FN       TP   ]
//
// Classification report, per class c:
//   precision = correct c predictions / all c predictions
//   recall    = correct c predictions / all true c
//   f1        = harmonic mean of precision and recall
//   support   = number of true c
// plus accuracy, the unweighted (macro) mean and the
// support-weighted mean of each column.
//
// Any 0/0 is reported as 0.0 rather than NaN.
//
// Example text output:
//                 precision    recall  f1-score   support
//
//              0       0.50      0.52      0.51       503
//              1       0.49      0.47      0.48       497
//
//       accuracy                           0.50      1000
//      macro avg       0.50      0.50      0.50      1000
//   weighted avg       0.50      0.50      0.50      1000

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::prediction::ChurnLabel;

fn ratio(num: f64, den: f64) -> f64 {
    if den == 0.0 { 0.0 } else { num / den }
}

// ─── ConfusionMatrix ──────────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub true_negatives:  usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    pub true_positives:  usize,
}

impl ConfusionMatrix {
    pub fn from_labels(truth: &[ChurnLabel], predicted: &[ChurnLabel]) -> Result<Self> {
        ensure!(
            truth.len() == predicted.len(),
            "{} true labels but {} predictions",
            truth.len(),
            predicted.len()
        );

        let mut cm = Self::default();
        for (t, p) in truth.iter().zip(predicted) {
            match (t, p) {
                (ChurnLabel::Stays,  ChurnLabel::Stays)  => cm.true_negatives  += 1,
                (ChurnLabel::Stays,  ChurnLabel::Churns) => cm.false_positives += 1,
                (ChurnLabel::Churns, ChurnLabel::Stays)  => cm.false_negatives += 1,
                (ChurnLabel::Churns, ChurnLabel::Churns) => cm.true_positives  += 1,
            }
        }
        Ok(cm)
    }

    /// [[TN, FP], [FN, TP]]
    pub fn as_rows(&self) -> [[usize; 2]; 2] {
        [
            [self.true_negatives,  self.false_positives],
            [self.false_negatives, self.true_positives],
        ]
    }

    pub fn total(&self) -> usize {
        self.true_negatives + self.false_positives + self.false_negatives + self.true_positives
    }

    /// Number of rows whose true label is `label`.
    pub fn support(&self, label: ChurnLabel) -> usize {
        let [row0, row1] = self.as_rows();
        let row = if label.is_churn() { row1 } else { row0 };
        row[0] + row[1]
    }

    pub fn class_metrics(&self, label: ChurnLabel) -> ClassMetrics {
        let (correct, predicted_as) = match label {
            ChurnLabel::Stays  => (self.true_negatives, self.true_negatives + self.false_negatives),
            ChurnLabel::Churns => (self.true_positives, self.true_positives + self.false_positives),
        };
        let support   = self.support(label);
        let precision = ratio(correct as f64, predicted_as as f64);
        let recall    = ratio(correct as f64, support as f64);
        let f1        = ratio(2.0 * precision * recall, precision + recall);
        ClassMetrics { precision, recall, f1, support }
    }

    pub fn accuracy(&self) -> f64 {
        ratio(
            (self.true_negatives + self.true_positives) as f64,
            self.total() as f64,
        )
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows  = self.as_rows();
        let width = rows.iter().flatten().map(|n| n.to_string().len()).max().unwrap_or(1);
        writeln!(f, "[[{:>w$} {:>w$}]", rows[0][0], rows[0][1], w = width)?;
        write!(f,   " [{:>w$} {:>w$}]]", rows[1][0], rows[1][1], w = width)
    }
}

// ─── ClassificationReport ─────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall:    f64,
    pub f1:        f64,
    pub support:   usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    /// Indexed by class: [0] = stays, [1] = churns
    pub classes:      [ClassMetrics; 2],
    pub accuracy:     f64,
    pub macro_avg:    ClassMetrics,
    pub weighted_avg: ClassMetrics,
}

impl ClassificationReport {
    pub fn from_confusion(cm: &ConfusionMatrix) -> Self {
        let classes = ChurnLabel::ALL.map(|label| cm.class_metrics(label));
        let total   = cm.total();

        let mean = |pick: fn(&ClassMetrics) -> f64| {
            classes.iter().map(pick).sum::<f64>() / classes.len() as f64
        };
        let weighted = |pick: fn(&ClassMetrics) -> f64| {
            ratio(
                classes.iter().map(|c| pick(c) * c.support as f64).sum(),
                total as f64,
            )
        };

        Self {
            classes,
            accuracy: cm.accuracy(),
            macro_avg: ClassMetrics {
                precision: mean(|c| c.precision),
                recall:    mean(|c| c.recall),
                f1:        mean(|c| c.f1),
                support:   total,
            },
            weighted_avg: ClassMetrics {
                precision: weighted(|c| c.precision),
                recall:    weighted(|c| c.recall),
                f1:        weighted(|c| c.f1),
                support:   total,
            },
        }
    }
}

fn report_row(f: &mut fmt::Formatter<'_>, name: &str, m: &ClassMetrics) -> fmt::Result {
    writeln!(
        f,
        "{:>12} {:>10.2}{:>10.2}{:>10.2}{:>10}",
        name, m.precision, m.recall, m.f1, m.support
    )
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>12} {:>10}{:>10}{:>10}{:>10}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        writeln!(f)?;
        for (label, metrics) in ChurnLabel::ALL.iter().zip(&self.classes) {
            report_row(f, &label.class().to_string(), metrics)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>12} {:>10}{:>10}{:>10.2}{:>10}",
            "accuracy", "", "", self.accuracy, self.macro_avg.support
        )?;
        report_row(f, "macro avg", &self.macro_avg)?;
        report_row(f, "weighted avg", &self.weighted_avg)
    }
}
