//! Server-side HTML rendering
//!
//! Rendering is a pure function of the selected [`Page`] and, for the
//! assessment page, the submission being answered. Nothing is remembered
//! between requests, so navigating away from the assessment page and back
//! always shows a fresh form.

mod about;
mod assessment;
mod overview;
mod page;

use bilharzia_core::{Answers, AssessmentRecord, RiskAssessment};

pub use page::{Page, PageQuery};

/// Dashboard title shown in the browser tab and page header
pub const DASHBOARD_TITLE: &str = "Schistosoma haematobium Risk Prediction Dashboard";

const DISCLAIMER: &str = "This tool is for educational purposes only and should not replace professional medical advice.";

/// A submitted assessment and the classifier's answer
#[derive(Debug, Clone, Copy)]
pub struct Submission {
    pub record: AssessmentRecord,
    pub result: RiskAssessment,
}

/// Callout colour, mirroring the banner styles in the stylesheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tone {
    Error,
    Success,
    Warning,
    Info,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Error => "callout callout-error",
            Tone::Success => "callout callout-success",
            Tone::Warning => "callout callout-warning",
            Tone::Info => "callout callout-info",
        }
    }
}

/// Render a full page
pub fn render(page: Page, submission: Option<&Submission>) -> String {
    let body = match page {
        Page::Overview => overview::render(),
        // A submitted form keeps showing what was submitted
        Page::Assessment => match submission {
            Some(s) => assessment::render(&s.record, Some(&s.result)),
            None => assessment::render(&AssessmentRecord::default(), None),
        },
        Page::About => about::render(),
    };
    layout(page, &body)
}

/// Render the assessment page with an error callout in place of a result
///
/// Any valid answers from the rejected submission stay selected.
pub fn render_error(message: &str, answers: Option<&Answers>) -> String {
    let selected = answers
        .map(AssessmentRecord::from_valid_answers)
        .unwrap_or_default();
    let mut body = callout(Tone::Error, &format!("<p>{}</p>", escape(message)));
    body.push_str(&assessment::render(&selected, None));
    layout(Page::Assessment, &body)
}

fn layout(page: Page, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + 2048);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    html.push_str(&format!("<title>{}</title>\n", DASHBOARD_TITLE));
    html.push_str("<link rel=\"stylesheet\" href=\"/static/dashboard.css\">\n");
    html.push_str("</head>\n<body>\n");
    html.push_str(&sidebar(page));
    html.push_str("<main class=\"content\">\n");
    html.push_str(&format!("<h1>🩺 {}</h1>\n<hr>\n", DASHBOARD_TITLE));
    html.push_str(body);
    html.push_str("<hr>\n");
    html.push_str(&format!(
        "<div class=\"disclaimer\"><b>Disclaimer:</b> {}</div>\n",
        DISCLAIMER
    ));
    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn sidebar(current: Page) -> String {
    let mut html = String::from("<aside class=\"sidebar\">\n<h2>Navigation</h2>\n");
    html.push_str("<form method=\"get\" action=\"/\">\n");
    html.push_str("<label for=\"page\">Choose a page</label>\n");
    html.push_str("<select id=\"page\" name=\"page\" onchange=\"this.form.submit()\">\n");
    for page in Page::ALL {
        html.push_str(&option(page.slug(), page.title(), page == current));
    }
    html.push_str("</select>\n");
    html.push_str("<noscript><button type=\"submit\">Go</button></noscript>\n");
    html.push_str("</form>\n</aside>\n");
    html
}

pub(crate) fn option(value: &str, label: &str, selected: bool) -> String {
    format!(
        "<option value=\"{}\"{}>{}</option>\n",
        escape(value),
        if selected { " selected" } else { "" },
        escape(label)
    )
}

pub(crate) fn callout(tone: Tone, inner: &str) -> String {
    format!("<div class=\"{}\">{}</div>\n", tone.class(), inner)
}

/// Escape text for use in HTML content and double-quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
