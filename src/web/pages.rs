// ============================================================
// Layer 1 — HTML Pages
// ============================================================
// Server-rendered HTML for the four sections. Every page is the
// same shell (title banner, section picker, footer) around a
// section body.
//
// Anything that came from a user, including numbers echoed back
// into form fields, goes through escape_html before it is placed
// in the document. Only the literal markup in this file is ever
// emitted unescaped.

use std::str::FromStr;

use anyhow::bail;

use crate::application::evaluate_use_case::EvaluationSummary;
use crate::domain::customer::{
    CustomerInput, Gender, Geography, YesNo, AGE_RANGE, CREDIT_SCORE_RANGE, MIN_SALARY,
    TENURE_RANGE,
};
use crate::domain::prediction::ChurnLabel;
use crate::domain::submission::{ContactMessage, Feedback, SubmissionOutcome};

// ─── Page ─────────────────────────────────────────────────────────────────────
/// The navigable sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Predict,
    Evaluate,
    Feedback,
    Contact,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Predict, Page::Evaluate, Page::Feedback, Page::Contact];

    pub fn slug(&self) -> &'static str {
        match self {
            Page::Predict  => "predict",
            Page::Evaluate => "evaluate",
            Page::Feedback => "feedback",
            Page::Contact  => "contact",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Predict  => "Predict Customer Churn",
            Page::Evaluate => "Model Evaluation",
            Page::Feedback => "Feedback",
            Page::Contact  => "Contact Us",
        }
    }

    pub fn path(&self) -> String {
        format!("/{}", self.slug())
    }
}

impl FromStr for Page {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match Page::ALL.into_iter().find(|p| p.slug() == s) {
            Some(page) => Ok(page),
            None       => bail!("no such section '{s}'"),
        }
    }
}

// ─── Notices ──────────────────────────────────────────────────────────────────
/// A success or warning banner under a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub success: bool,
    pub text:    &'static str,
}

impl Notice {
    pub fn for_feedback(outcome: SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Accepted      => Notice { success: true,  text: Feedback::SUCCESS },
            SubmissionOutcome::MissingFields => Notice { success: false, text: Feedback::WARNING },
        }
    }

    pub fn for_contact(outcome: SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Accepted      => Notice { success: true,  text: ContactMessage::SUCCESS },
            SubmissionOutcome::MissingFields => Notice { success: false, text: ContactMessage::WARNING },
        }
    }

    fn render(&self) -> String {
        let class = if self.success { "notice success" } else { "notice warning" };
        format!(r#"<div class="{class}">{}</div>"#, escape_html(self.text))
    }
}

// ─── Escaping ─────────────────────────────────────────────────────────────────
/// Make arbitrary text safe to place in element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&'  => out.push_str("&amp;"),
            '<'  => out.push_str("&lt;"),
            '>'  => out.push_str("&gt;"),
            '"'  => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c    => out.push(c),
        }
    }
    out
}

// ─── Shell ────────────────────────────────────────────────────────────────────
const STYLE: &str = r#"
body { font-family: sans-serif; margin: 0; padding-bottom: 60px; }
.title { background-color: #4CAF50; padding: 10px; border-radius: 5px; text-align: center; margin: 10px; }
.title h1 { font-weight: bold; color: white; margin: 0; }
.layout { display: flex; }
nav { min-width: 200px; padding: 10px; background: #f0f2f6; }
main { flex: 1; padding: 10px 20px; }
.columns { display: flex; gap: 20px; }
.columns > div { flex: 1; }
label { display: block; margin-top: 8px; }
.churn { color: red; font-weight: bold; }
.no-churn { color: green; font-weight: bold; }
.notice { padding: 8px; border-radius: 5px; margin-top: 10px; }
.success { background: #d4edda; }
.warning { background: #fff3cd; }
.caveat { color: #8a6d3b; }
.footer { position: fixed; left: 0; bottom: 0; width: 100%; background-color: #4CAF50;
          text-align: center; padding: 10px; font-size: 14px; font-weight: bold; }
.footer p { color: black; font-weight: bold; margin: 0; }
@media (max-width: 600px) { .title { font-size: 20px; } .layout { display: block; } }
"#;

fn nav(current: Page) -> String {
    let options: String = Page::ALL
        .into_iter()
        .map(|page| {
            let selected = if page == current { " selected" } else { "" };
            format!(
                r#"<option value="{}"{selected}>{}</option>"#,
                page.slug(),
                page.title()
            )
        })
        .collect();
    format!(
        r#"<nav><h2>Navigation</h2>
<form method="get" action="/">
<label for="section">Choose a section:</label>
<select id="section" name="section">{options}</select>
<button type="submit">Go</button>
</form></nav>"#
    )
}

fn layout(page: Page, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} · Customer Churn Prediction</title>
<style>{STYLE}</style>
</head>
<body>
<div class="title"><h1>Customer Churn Prediction App</h1></div>
<div class="layout">
{nav}
<main>
{body}
</main>
</div>
<div class="footer"><p>Customer Churn Prediction App | <a href="{contact}">Contact Us</a></p></div>
</body>
</html>
"#,
        title   = page.title(),
        nav     = nav(page),
        contact = Page::Contact.path(),
    )
}

fn select<T: Copy + PartialEq>(
    name:    &str,
    label:   &str,
    choices: &[T],
    current: T,
    text:    fn(&T) -> &'static str,
) -> String {
    let options: String = choices
        .iter()
        .map(|choice| {
            let selected = if *choice == current { " selected" } else { "" };
            let value    = text(choice);
            format!(r#"<option value="{value}"{selected}>{value}</option>"#)
        })
        .collect();
    format!(r#"<label for="{name}">{label}</label><select id="{name}" name="{name}">{options}</select>"#)
}

fn churn_result(label: ChurnLabel, text: &str) -> String {
    let class = if label.is_churn() { "churn" } else { "no-churn" };
    format!(r#"<h3 class="{class}">{}</h3>"#, escape_html(text))
}

// ─── Predict ──────────────────────────────────────────────────────────────────
pub fn predict_page(input: &CustomerInput, result: Option<ChurnLabel>) -> String {
    let (score_min, score_max)   = CREDIT_SCORE_RANGE;
    let (age_min, age_max)       = AGE_RANGE;
    let (tenure_min, tenure_max) = TENURE_RANGE;

    let geography_choices = if Geography::FORM_CHOICES.contains(&input.geography) {
        Geography::FORM_CHOICES.to_vec()
    } else {
        // Keep a CLI-only choice selectable if it was posted
        vec![Geography::Germany, Geography::Spain, input.geography]
    };

    let mut body = format!(
        r#"<form method="post" action="{action}">
<div class="columns">
<div>
<label for="credit_score">Credit Score</label>
<input type="number" id="credit_score" name="credit_score" min="{score_min}" max="{score_max}" step="1" value="{score}">
<label for="tenure">Tenure (years): <output id="tenure_value">{tenure}</output></label>
<input type="range" id="tenure" name="tenure" min="{tenure_min}" max="{tenure_max}" step="1" value="{tenure}"
       oninput="document.getElementById('tenure_value').value = this.value">
</div>
<div>
<label for="age">Age</label>
<input type="number" id="age" name="age" min="{age_min}" max="{age_max}" step="1" value="{age}">
<label for="estimated_salary">Estimated Salary</label>
<input type="number" id="estimated_salary" name="estimated_salary" min="{MIN_SALARY}" step="any" value="{salary}">
</div>
</div>
{geography}
{gender}
{card}
{active}
<p><button type="submit">Predict</button></p>
</form>
"#,
        action    = Page::Predict.path(),
        score     = input.credit_score,
        tenure    = input.tenure,
        age       = input.age,
        salary    = escape_html(&input.estimated_salary.to_string()),
        geography = select("geography", "Geography", &geography_choices, input.geography, Geography::as_str),
        gender    = select("gender", "Gender", &Gender::FORM_CHOICES, input.gender, Gender::as_str),
        card      = select("has_cr_card", "Has Credit Card", &YesNo::FORM_CHOICES, input.has_cr_card, YesNo::as_str),
        active    = select("is_active_member", "Is Active Member", &YesNo::FORM_CHOICES, input.is_active_member, YesNo::as_str),
    );

    if let Some(label) = result {
        body.push_str(&churn_result(label, label.message()));
    }

    layout(Page::Predict, &body)
}

// ─── Evaluate ─────────────────────────────────────────────────────────────────
pub fn evaluate_page(summary: &EvaluationSummary, show_predictions: bool) -> String {
    let mut body = format!(
        r#"<h2>Model Evaluation Metrics</h2>
<p class="caveat">Scored against {rows} synthetic customers whose churn labels are random,
so these numbers do not reflect real model quality.</p>
<p>Confusion Matrix:</p>
<pre>{confusion}</pre>
<p>Classification Report:</p>
<pre>{report}</pre>
<form method="post" action="{action}"><button type="submit">Display Evaluation Predictions</button></form>
"#,
        rows      = summary.rows,
        confusion = escape_html(&summary.confusion.to_string()),
        report    = escape_html(&summary.report.to_string()),
        action    = Page::Evaluate.path(),
    );

    if show_predictions {
        for (label, message) in summary.preview.iter().zip(summary.preview_messages()) {
            body.push_str(&churn_result(*label, &message));
            body.push('\n');
        }
    }

    layout(Page::Evaluate, &body)
}

// ─── Feedback ─────────────────────────────────────────────────────────────────
pub fn feedback_page(draft: &Feedback, notice: Option<&Notice>) -> String {
    let mut body = format!(
        r#"<h2>Feedback</h2>
<form method="post" action="{action}">
<label for="feedback">Please provide your feedback:</label>
<textarea id="feedback" name="feedback" rows="6" cols="60">{text}</textarea>
<p><button type="submit">Submit Feedback</button></p>
</form>
"#,
        action = Page::Feedback.path(),
        text   = escape_html(&draft.feedback),
    );
    if let Some(notice) = notice {
        body.push_str(&notice.render());
    }
    layout(Page::Feedback, &body)
}

// ─── Contact ──────────────────────────────────────────────────────────────────
pub fn contact_page(draft: &ContactMessage, notice: Option<&Notice>) -> String {
    let mut body = format!(
        r#"<h2>Contact Us</h2>
<form method="post" action="{action}">
<label for="name">Your Name</label>
<input type="text" id="name" name="name" value="{name}">
<label for="email">Your Email</label>
<input type="text" id="email" name="email" value="{email}">
<label for="message">Your Message</label>
<textarea id="message" name="message" rows="6" cols="60">{message}</textarea>
<p><button type="submit">Send Message</button></p>
</form>
"#,
        action  = Page::Contact.path(),
        name    = escape_html(&draft.name),
        email   = escape_html(&draft.email),
        message = escape_html(&draft.message),
    );
    if let Some(notice) = notice {
        body.push_str(&notice.render());
    }
    layout(Page::Contact, &body)
}

// ─── Errors ───────────────────────────────────────────────────────────────────
pub fn error_page(page: Page) -> String {
    layout(
        page,
        "<h2>Something went wrong</h2>\n<p>The request could not be completed. The error has been logged.</p>",
    )
}

pub fn not_found_page(section: &str) -> String {
    let body = format!(
        "<h2>Unknown section</h2>\n<p>There is no section called '{}'.</p>",
        escape_html(section)
    );
    layout(Page::Predict, &body)
}
