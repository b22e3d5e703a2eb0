// ============================================================
// Layer 1 — HTTP Handlers
// ============================================================
// Thin adapters between axum and the use cases. A handler:
//   1. extracts the form / query
//   2. calls one use case (on the blocking pool if it does I/O
//      or runs the model)
//   3. renders the page for the section it belongs to
//
// Any error from a use case becomes a 500 for that request and
// is logged; nothing is retried.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use crate::domain::customer::CustomerInput;
use crate::domain::submission::{ContactMessage, Feedback};
use crate::web::pages::{self, Notice, Page};
use crate::web::AppState;

// ─── Errors ───────────────────────────────────────────────────────────────────
/// Fatal-for-this-request error.
pub struct AppError {
    page:  Page,
    error: anyhow::Error,
}

impl AppError {
    fn on(page: Page) -> impl FnOnce(anyhow::Error) -> AppError {
        move |error| AppError { page, error }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(section = self.page.slug(), "Request failed: {:#}", self.error);
        (StatusCode::INTERNAL_SERVER_ERROR, Html(pages::error_page(self.page))).into_response()
    }
}

/// Run blocking work off the async executor.
async fn blocking<T, F>(work: F) -> anyhow::Result<T>
where
    F: FnOnce() -> anyhow::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work).await?
}

// ─── Navigation ───────────────────────────────────────────────────────────────
#[derive(Debug, Deserialize)]
pub struct SectionQuery {
    pub section: Option<String>,
}

/// `GET /` and `GET /?section=...` from the section picker.
pub async fn index(State(state): State<AppState>, Query(query): Query<SectionQuery>) -> Response {
    let Some(slug) = query.section else {
        return show(&state, Page::Predict);
    };
    match slug.parse::<Page>() {
        Ok(page) => show(&state, page),
        Err(_)   => (StatusCode::NOT_FOUND, Html(pages::not_found_page(&slug))).into_response(),
    }
}

/// Render a section in its initial state.
fn show(state: &AppState, page: Page) -> Response {
    tracing::debug!(section = page.slug(), "Rendering section");
    let html = match page {
        Page::Predict  => pages::predict_page(&CustomerInput::default(), None),
        Page::Evaluate => pages::evaluate_page(&state.evaluation, false),
        Page::Feedback => pages::feedback_page(&Feedback::default(), None),
        Page::Contact  => pages::contact_page(&ContactMessage::default(), None),
    };
    Html(html).into_response()
}

pub async fn show_predict(State(state): State<AppState>) -> Response {
    show(&state, Page::Predict)
}

pub async fn show_evaluate(State(state): State<AppState>) -> Response {
    show(&state, Page::Evaluate)
}

pub async fn show_feedback(State(state): State<AppState>) -> Response {
    show(&state, Page::Feedback)
}

pub async fn show_contact(State(state): State<AppState>) -> Response {
    show(&state, Page::Contact)
}

pub async fn health() -> &'static str {
    "ok"
}

// ─── Actions ──────────────────────────────────────────────────────────────────
pub async fn predict(
    State(state): State<AppState>,
    Form(input): Form<CustomerInput>,
) -> Result<Html<String>, AppError> {
    let use_case = state.predict.clone();
    let request  = input.clone();
    let label    = blocking(move || use_case.predict(&request))
        .await
        .map_err(AppError::on(Page::Predict))?;

    Ok(Html(pages::predict_page(&input, Some(label))))
}

/// "Display Evaluation Predictions"
pub async fn evaluate(State(state): State<AppState>) -> Html<String> {
    Html(pages::evaluate_page(&state.evaluation, true))
}

pub async fn feedback(
    State(state): State<AppState>,
    Form(entry): Form<Feedback>,
) -> Result<Html<String>, AppError> {
    let use_case = state.submit.clone();
    let record   = entry.clone();
    let outcome  = blocking(move || use_case.submit_feedback(&record))
        .await
        .map_err(AppError::on(Page::Feedback))?;

    let notice = Notice::for_feedback(outcome);
    // Keep the text in the box only if it still needs submitting
    let draft  = if notice.success { Feedback::default() } else { entry };
    Ok(Html(pages::feedback_page(&draft, Some(&notice))))
}

pub async fn contact(
    State(state): State<AppState>,
    Form(msg): Form<ContactMessage>,
) -> Result<Html<String>, AppError> {
    let use_case = state.submit.clone();
    let record   = msg.clone();
    let outcome  = blocking(move || use_case.submit_contact(&record))
        .await
        .map_err(AppError::on(Page::Contact))?;

    let notice = Notice::for_contact(outcome);
    let draft  = if notice.success { ContactMessage::default() } else { msg };
    Ok(Html(pages::contact_page(&draft, Some(&notice))))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request},
        Router,
    };
    use tower::ServiceExt;

    use super::*;
    use crate::application::evaluate_use_case::{EvaluateUseCase, EvaluationConfig};
    use crate::application::fakes::{BrokenPredictor, GermanyChurns, MemoryStore};
    use crate::application::predict_use_case::PredictUseCase;
    use crate::application::submit_use_case::SubmitUseCase;
    use crate::domain::traits::ChurnPredictor;
    use crate::web::router;

    struct Harness {
        app:      Router,
        feedback: Arc<MemoryStore>,
        contact:  Arc<MemoryStore>,
    }

    fn harness_with(predictor: Arc<dyn ChurnPredictor>) -> Harness {
        let feedback = Arc::new(MemoryStore::default());
        let contact  = Arc::new(MemoryStore::default());
        let evaluation = EvaluateUseCase::new(
            Arc::new(GermanyChurns),
            EvaluationConfig { seed: 42, rows: 50, preview: 5 },
        )
        .execute()
        .unwrap();

        let state = AppState {
            predict:    PredictUseCase::new(predictor),
            submit:     SubmitUseCase::new(feedback.clone(), contact.clone()),
            evaluation: Arc::new(evaluation),
        };
        Harness { app: router(state), feedback, contact }
    }

    fn harness() -> Harness {
        harness_with(Arc::new(GermanyChurns))
    }

    async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        send(app, req).await
    }

    async fn post(app: &Router, uri: &str, form: &str) -> (StatusCode, String) {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        send(app, req).await
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, String) {
        let resp   = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes  = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    const GERMAN_CUSTOMER: &str = "credit_score=600&age=30&tenure=2&estimated_salary=50000.0\
        &geography=Germany&gender=Male&has_cr_card=Yes&is_active_member=No";

    #[tokio::test]
    async fn test_root_shows_predict_form() {
        let h = harness();
        let (status, body) = get(&h.app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<button type=\"submit\">Predict</button>"));
    }

    #[tokio::test]
    async fn test_section_picker_dispatches() {
        let h = harness();
        let (status, body) = get(&h.app, "/?section=evaluate").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Model Evaluation Metrics"));

        let (status, _) = get(&h.app, "/?section=nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health() {
        let h = harness();
        assert_eq!(get(&h.app, "/health").await, (StatusCode::OK, "ok".to_string()));
    }

    #[tokio::test]
    async fn test_predict_renders_result() {
        let h = harness();
        let (status, body) = post(&h.app, "/predict", GERMAN_CUSTOMER).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Customer is likely to churn."));

        let spanish = GERMAN_CUSTOMER.replace("Germany", "Spain");
        let (_, body) = post(&h.app, "/predict", &spanish).await;
        assert!(body.contains("Customer is not likely to churn."));
    }

    #[tokio::test]
    async fn test_predict_failure_is_a_server_error() {
        let h = harness_with(Arc::new(BrokenPredictor));
        let (status, body) = post(&h.app, "/predict", GERMAN_CUSTOMER).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("Something went wrong"));
    }

    #[tokio::test]
    async fn test_evaluation_predictions_on_demand() {
        let h = harness();
        let (_, before) = get(&h.app, "/evaluate").await;
        assert!(!before.contains("Customer 1 is"));

        let (status, after) = post(&h.app, "/evaluate", "").await;
        assert_eq!(status, StatusCode::OK);
        assert!(after.contains("Customer 1 is"));
        assert!(after.contains("Customer 5 is"));
        assert!(!after.contains("Customer 6 is"));
    }

    #[tokio::test]
    async fn test_empty_feedback_warns_without_writing() {
        let h = harness();
        let (status, body) = post(&h.app, "/feedback", "feedback=").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(Feedback::WARNING));
        assert!(h.feedback.records().is_empty());
    }

    #[tokio::test]
    async fn test_feedback_is_stored_once() {
        let h = harness();
        let (_, body) = post(&h.app, "/feedback", "feedback=Works+well").await;
        assert!(body.contains(Feedback::SUCCESS));
        assert_eq!(h.feedback.records(), vec!["Works well\n".to_string()]);
        assert!(h.contact.records().is_empty());
    }

    #[tokio::test]
    async fn test_contact_requires_every_field() {
        let h = harness();
        let (_, body) = post(&h.app, "/contact", "name=Ana&email=&message=Hi").await;
        assert!(body.contains(ContactMessage::WARNING));
        // The half-filled form is kept
        assert!(body.contains(r#"value="Ana""#));
        assert!(h.contact.records().is_empty());

        let (_, body) = post(&h.app, "/contact", "name=Ana&email=ana%40example.com&message=Hi").await;
        assert!(body.contains(ContactMessage::SUCCESS));
        assert_eq!(
            h.contact.records(),
            vec!["Name: Ana\nEmail: ana@example.com\nMessage: Hi\n\n".to_string()]
        );
    }

    #[tokio::test]
    async fn test_submitted_markup_is_not_rendered() {
        let h = harness();
        let (_, body) = post(&h.app, "/contact", "name=%3Cscript%3E&email=&message=").await;
        assert!(!body.contains("<script>"));
        assert!(body.contains("&lt;script&gt;"));
    }
}
