// ============================================================
// Layer 1 — Web Presentation Layer
// ============================================================
// An axum server rendering the four sections as plain HTML:
//
//   GET  /                    Predict (or ?section=<slug>)
//   GET  /predict   POST      form / run one prediction
//   GET  /evaluate  POST      metrics / show first predictions
//   GET  /feedback  POST      form / append feedback
//   GET  /contact   POST      form / append contact message
//   GET  /health              liveness probe
//
// All state lives in AppState, built once before the server
// starts and shared read-only by every handler. There is no
// global model.

pub mod handlers;
pub mod pages;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tower_http::trace::TraceLayer;

use crate::application::evaluate_use_case::{EvaluateUseCase, EvaluationConfig, EvaluationSummary};
use crate::application::predict_use_case::PredictUseCase;
use crate::application::submit_use_case::SubmitUseCase;
use crate::domain::traits::ChurnPredictor;
use crate::infra::{checkpoint::CheckpointManager, submissions::SubmissionLog};
use crate::ml::inferencer::Inferencer;

// ─── Server Configuration ────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServeConfig {
    pub bind:          SocketAddr,
    pub model_dir:     PathBuf,
    pub feedback_file: PathBuf,
    pub contact_file:  PathBuf,
    pub evaluation:    EvaluationConfig,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            bind:          SocketAddr::from(([127, 0, 0, 1], 8501)),
            model_dir:     PathBuf::from("checkpoints"),
            feedback_file: PathBuf::from("feedback.txt"),
            contact_file:  PathBuf::from("contact_messages.txt"),
            evaluation:    EvaluationConfig::default(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub predict:    PredictUseCase,
    pub submit:     SubmitUseCase,
    pub evaluation: Arc<EvaluationSummary>,
}

impl AppState {
    /// Load the model, score the evaluation set and open the logs.
    /// Any failure here stops startup.
    pub fn build(cfg: &ServeConfig) -> Result<Self> {
        let ckpt = CheckpointManager::new(&cfg.model_dir);
        let predictor: Arc<dyn ChurnPredictor> = Arc::new(Inferencer::from_checkpoint(&ckpt)?);

        let evaluation = EvaluateUseCase::new(predictor.clone(), cfg.evaluation.clone())
            .execute()
            .context("Model evaluation failed at startup")?;

        let submit = SubmitUseCase::new(
            Arc::new(SubmissionLog::new(&cfg.feedback_file)),
            Arc::new(SubmissionLog::new(&cfg.contact_file)),
        );

        Ok(Self {
            predict:    PredictUseCase::new(predictor),
            submit,
            evaluation: Arc::new(evaluation),
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/",         get(handlers::index))
        .route("/health",   get(handlers::health))
        .route("/predict",  get(handlers::show_predict).post(handlers::predict))
        .route("/evaluate", get(handlers::show_evaluate).post(handlers::evaluate))
        .route("/feedback", get(handlers::show_feedback).post(handlers::feedback))
        .route("/contact",  get(handlers::show_contact).post(handlers::contact))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until Ctrl-C.
pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Cannot bind {addr}"))?;

    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Cannot listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
