// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the four subcommands and their flags:
//   serve, predict, evaluate, import-model
//
// Every Args struct converts into a plain config or domain
// type at the boundary, so nothing below this layer sees clap.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::application::evaluate_use_case::EvaluationConfig;
use crate::domain::customer::{CustomerInput, Gender, Geography, YesNo};
use crate::web::ServeConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the web app
    Serve(ServeArgs),

    /// Predict churn for one customer and print the result
    Predict(PredictArgs),

    /// Score the synthetic evaluation set and print the metrics
    Evaluate(EvaluateArgs),

    /// Convert exported logistic regression coefficients into a model directory
    ImportModel(ImportModelArgs),
}

// ─── Shared Flags ─────────────────────────────────────────────────────────────
#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
    /// Directory holding churn_model.mpk.gz and model_config.json
    #[arg(long, default_value = "checkpoints")]
    pub model_dir: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct EvaluationArgs {
    /// Seed for the synthetic evaluation dataset
    #[arg(long, default_value_t = 42)]
    pub eval_seed: u64,

    /// Number of synthetic rows to score
    #[arg(long, default_value_t = 1000)]
    pub eval_rows: usize,

    /// How many leading predictions to list
    #[arg(long, default_value_t = 5)]
    pub eval_preview: usize,
}

impl From<EvaluationArgs> for EvaluationConfig {
    fn from(a: EvaluationArgs) -> Self {
        EvaluationConfig {
            seed:    a.eval_seed,
            rows:    a.eval_rows,
            preview: a.eval_preview,
        }
    }
}

// ─── serve ────────────────────────────────────────────────────────────────────
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8501")]
    pub bind: SocketAddr,

    #[command(flatten)]
    pub model: ModelArgs,

    /// File that feedback entries are appended to
    #[arg(long, default_value = "feedback.txt")]
    pub feedback_file: PathBuf,

    /// File that contact messages are appended to
    #[arg(long, default_value = "contact_messages.txt")]
    pub contact_file: PathBuf,

    #[command(flatten)]
    pub evaluation: EvaluationArgs,
}

impl From<ServeArgs> for ServeConfig {
    fn from(a: ServeArgs) -> Self {
        ServeConfig {
            bind:          a.bind,
            model_dir:     a.model.model_dir,
            feedback_file: a.feedback_file,
            contact_file:  a.contact_file,
            evaluation:    a.evaluation.into(),
        }
    }
}

// ─── predict ──────────────────────────────────────────────────────────────────
#[derive(Args, Debug)]
pub struct PredictArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(300..=850))]
    pub credit_score: u32,

    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(18..=100))]
    pub age: u32,

    /// Years with the bank
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(0..=10))]
    pub tenure: u32,

    #[arg(long, default_value_t = 50_000.0, value_parser = parse_salary)]
    pub salary: f64,

    /// Germany, Spain or Other
    #[arg(long, default_value = "Germany")]
    pub geography: Geography,

    /// Male or Female
    #[arg(long, default_value = "Male")]
    pub gender: Gender,

    /// Yes or No
    #[arg(long, default_value = "Yes")]
    pub has_cr_card: YesNo,

    /// Yes or No
    #[arg(long, default_value = "Yes")]
    pub is_active_member: YesNo,
}

impl From<&PredictArgs> for CustomerInput {
    fn from(a: &PredictArgs) -> Self {
        CustomerInput {
            credit_score:     a.credit_score,
            age:              a.age,
            tenure:           a.tenure,
            estimated_salary: a.salary,
            geography:        a.geography,
            gender:           a.gender,
            has_cr_card:      a.has_cr_card,
            is_active_member: a.is_active_member,
        }
    }
}

fn parse_salary(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if v.is_finite() && v >= 0.0 {
        Ok(v)
    } else {
        Err(format!("salary must be a non-negative number, got {s}"))
    }
}

// ─── evaluate ─────────────────────────────────────────────────────────────────
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    #[command(flatten)]
    pub evaluation: EvaluationArgs,

    /// Also print "Customer N is ..." for the first predictions
    #[arg(long)]
    pub show_predictions: bool,
}

// ─── import-model ─────────────────────────────────────────────────────────────
#[derive(Args, Debug)]
pub struct ImportModelArgs {
    /// JSON file with feature_names, coefficients, intercept and optional scaler/threshold
    #[arg(long)]
    pub coefficients: PathBuf,

    /// Where to write the model
    #[arg(long, default_value = "checkpoints")]
    pub model_dir: PathBuf,
}
