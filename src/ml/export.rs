// ============================================================
// Layer 5 — Exported Logistic Regression Coefficients
// ============================================================
// Other ML libraries can dump a fitted logistic regression as
// plain JSON. This module reads that dump and turns it into the
// weights our burn classifier uses.
//
// Expected JSON:
//   {
//     "feature_names": ["CreditScore", "Age", ...],
//     "coefficients":  [0.0012, 0.071, ...],
//     "intercept":     -3.4,
//     "scaler":        { "mean": [...], "scale": [...] },   // optional
//     "threshold":     0.5                                  // optional
//   }
//
// If the model was fitted on standardised inputs, the scaler is
// folded into the linear layer so raw features can be fed in:
//
//   z = Σ wᵢ (xᵢ - mᵢ) / sᵢ + b
//     = Σ (wᵢ / sᵢ) xᵢ + (b - Σ wᵢ mᵢ / sᵢ)

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean:  Vec<f64>,
    pub scale: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticExport {
    pub feature_names: Vec<String>,
    pub coefficients:  Vec<f64>,
    pub intercept:     f64,
    #[serde(default)]
    pub scaler:        Option<StandardScaler>,
    #[serde(default)]
    pub threshold:     Option<f64>,
}

/// Raw-input weights after folding any scaler in.
#[derive(Debug, Clone, PartialEq)]
pub struct FoldedWeights {
    pub coefficients: Vec<f32>,
    pub intercept:    f32,
}

impl LogisticExport {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read exported model '{}'", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("'{}' is not a valid logistic-regression export", path.display()))
    }

    /// Check the dump is self-consistent and fold the scaler into the weights.
    pub fn fold(&self) -> Result<FoldedWeights> {
        let n = self.feature_names.len();
        ensure!(n > 0, "export lists no features");
        ensure!(
            self.coefficients.len() == n,
            "export has {} coefficients for {} features",
            self.coefficients.len(),
            n
        );
        if let Some(t) = self.threshold {
            ensure!((0.0..=1.0).contains(&t), "threshold {t} is outside [0, 1]");
        }

        let Some(scaler) = &self.scaler else {
            return Ok(FoldedWeights {
                coefficients: self.coefficients.iter().map(|&w| w as f32).collect(),
                intercept:    self.intercept as f32,
            });
        };

        ensure!(
            scaler.mean.len() == n && scaler.scale.len() == n,
            "scaler has {} means and {} scales for {} features",
            scaler.mean.len(),
            scaler.scale.len(),
            n
        );

        let mut coefficients = Vec::with_capacity(n);
        let mut intercept    = self.intercept;

        for ((name, &w), (&m, &s)) in self
            .feature_names
            .iter()
            .zip(&self.coefficients)
            .zip(scaler.mean.iter().zip(&scaler.scale))
        {
            ensure!(s != 0.0, "scaler scale for '{name}' is zero");
            coefficients.push((w / s) as f32);
            intercept -= w * m / s;
        }

        Ok(FoldedWeights { coefficients, intercept: intercept as f32 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn export(scaler: Option<StandardScaler>) -> LogisticExport {
        LogisticExport {
            feature_names: vec!["a".into(), "b".into()],
            coefficients:  vec![2.0, -1.0],
            intercept:     0.5,
            scaler,
            threshold:     None,
        }
    }

    #[test]
    fn test_unscaled_weights_pass_through() {
        let folded = export(None).fold().unwrap();
        assert_eq!(folded.coefficients, vec![2.0, -1.0]);
        assert_eq!(folded.intercept, 0.5);
    }

    #[test]
    fn test_scaler_is_folded_into_weights() {
        let scaler = StandardScaler { mean: vec![10.0, 0.0], scale: vec![2.0, 4.0] };
        let folded = export(Some(scaler)).fold().unwrap();
        // a: 2/2 = 1, b: -1/4 = -0.25; intercept: 0.5 - 2*10/2 = -9.5
        assert_eq!(folded.coefficients, vec![1.0, -0.25]);
        assert_eq!(folded.intercept, -9.5);
    }

    #[test]
    fn test_mismatched_lengths_are_rejected() {
        let mut bad = export(None);
        bad.coefficients.push(3.0);
        assert!(bad.fold().is_err());

        let scaler = StandardScaler { mean: vec![0.0], scale: vec![1.0, 1.0] };
        assert!(export(Some(scaler)).fold().is_err());
    }

    #[test]
    fn test_zero_scale_is_rejected() {
        let scaler = StandardScaler { mean: vec![0.0, 0.0], scale: vec![1.0, 0.0] };
        assert!(export(Some(scaler)).fold().is_err());
    }

    #[test]
    fn test_parses_minimal_json() {
        let json = r#"{"feature_names":["a"],"coefficients":[0.1],"intercept":-1.0}"#;
        let parsed: LogisticExport = serde_json::from_str(json).unwrap();
        assert!(parsed.scaler.is_none());
        assert!(parsed.threshold.is_none());
    }
}
