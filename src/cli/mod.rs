// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. clap parses the
// arguments; all business logic is delegated to Layer 2.
//
//   1. `serve`        — start the web app
//   2. `predict`      — one prediction on the terminal
//   3. `evaluate`     — print the evaluation metrics
//   4. `import-model` — turn exported coefficients into a model
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;

use commands::{Commands, EvaluateArgs, ImportModelArgs, PredictArgs, ServeArgs};
use crate::domain::customer::CustomerInput;
use crate::domain::traits::ChurnPredictor;
use crate::infra::checkpoint::CheckpointManager;
use crate::ml::inferencer::Inferencer;
use crate::web::{AppState, ServeConfig};

#[derive(Parser, Debug)]
#[command(
    name = "churn-predict",
    version,
    about = "Bank customer churn prediction: web app, CLI predictions and evaluation."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching handler. Routing only.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve(args)       => run_serve(args),
            Commands::Predict(args)     => run_predict(args),
            Commands::Evaluate(args)    => run_evaluate(args),
            Commands::ImportModel(args) => run_import(args),
        }
    }
}

fn load_predictor(model_dir: &std::path::Path) -> Result<Arc<dyn ChurnPredictor>> {
    let inf = Inferencer::from_checkpoint(&CheckpointManager::new(model_dir))?;
    Ok(Arc::new(inf))
}

fn run_serve(args: ServeArgs) -> Result<()> {
    let cfg: ServeConfig = args.into();
    tracing::info!("Serve config: {}", serde_json::to_string(&cfg)?);

    // Model + evaluation load before the listener opens
    let state = AppState::build(&cfg)?;

    let runtime = tokio::runtime::Runtime::new().context("Cannot start async runtime")?;
    runtime.block_on(crate::web::serve(state, cfg.bind))
}

fn run_predict(args: PredictArgs) -> Result<()> {
    use crate::application::predict_use_case::PredictUseCase;

    let input    = CustomerInput::from(&args);
    let use_case = PredictUseCase::new(load_predictor(&args.model.model_dir)?);
    let label    = use_case.predict(&input)?;

    println!("{}", label.message());
    Ok(())
}

fn run_evaluate(args: EvaluateArgs) -> Result<()> {
    use crate::application::evaluate_use_case::EvaluateUseCase;

    let predictor = load_predictor(&args.model.model_dir)?;
    let summary   = EvaluateUseCase::new(predictor, args.evaluation.into()).execute()?;

    println!("Confusion Matrix:\n{}\n", summary.confusion);
    println!("Classification Report:\n{}", summary.report);

    if args.show_predictions {
        println!();
        for line in summary.preview_messages() {
            println!("{line}");
        }
    }
    Ok(())
}

fn run_import(args: ImportModelArgs) -> Result<()> {
    use crate::application::import_use_case::ImportUseCase;

    let config = ImportUseCase::new(&args.coefficients, &args.model_dir).execute()?;
    println!(
        "Model with {} features (threshold {}) written to {}",
        config.num_features(),
        config.threshold,
        args.model_dir.display()
    );
    Ok(())
}
