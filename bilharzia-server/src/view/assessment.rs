//! Risk Assessment page: the form and, after a submit, its result

use bilharzia_core::{AssessmentRecord, Field, RiskAssessment};

use super::{Tone, callout, escape, option};

pub(super) fn render(selected: &AssessmentRecord, result: Option<&RiskAssessment>) -> String {
    let mut html = String::from("<h2>🎯 Personal Risk Assessment</h2>\n");
    html.push_str(
        "<p>Please fill out the form below to assess your risk of Schistosoma haematobium infection:</p>\n",
    );

    html.push_str(&form(selected));

    if let Some(outcome) = result {
        html.push_str(&result_block(outcome));
    }
    html
}

fn form(record: &AssessmentRecord) -> String {
    let mut html = String::from(
        "<form class=\"assessment-form\" method=\"post\" action=\"/assess\">\n<div class=\"columns columns-2\">\n",
    );
    for left in [true, false] {
        html.push_str("<div>\n");
        for field in Field::ALL.into_iter().filter(|f| f.in_left_column() == left) {
            html.push_str(&selector(field, record.get(field)));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n<button type=\"submit\">Assess Risk</button>\n</form>\n");
    html
}

fn selector(field: Field, current: &str) -> String {
    let mut html = format!(
        "<label for=\"{key}\">{label}</label>\n<select id=\"{key}\" name=\"{key}\">\n",
        key = field.key(),
        label = escape(field.label()),
    );
    for choice in field.choices() {
        html.push_str(&option(choice, choice, *choice == current));
    }
    html.push_str("</select>\n");
    html
}

fn result_block(result: &RiskAssessment) -> String {
    let mut html = String::from("<hr>\n<h3>🎯 Risk Assessment Results</h3>\n");
    html.push_str("<div class=\"columns columns-1-2\">\n<div>\n");

    let (tone, icon) = if result.is_high_risk() {
        (Tone::Error, "⚠️")
    } else {
        (Tone::Success, "✅")
    };
    html.push_str(&callout(
        tone,
        &format!("<h3>{} {}</h3>", icon, result.banner()),
    ));
    html.push_str(&format!(
        "<div class=\"metric\">\n<div class=\"metric-label\">Probability of Infection</div>\n<div class=\"metric-value\">{}</div>\n</div>\n",
        result.probability_display()
    ));
    html.push_str("</div>\n<div>\n");

    let guidance = result.guidance();
    let tone = if result.is_high_risk() {
        Tone::Warning
    } else {
        Tone::Info
    };
    html.push_str(&callout(
        tone,
        &format!("<b>{}</b>", escape(guidance.heading)),
    ));
    html.push_str("<ul>\n");
    for item in guidance.items {
        if item.detail.is_empty() {
            html.push_str(&format!("<li><b>{}</b></li>\n", escape(item.lead)));
        } else {
            html.push_str(&format!(
                "<li><b>{}</b> {}</li>\n",
                escape(item.lead),
                escape(item.detail)
            ));
        }
    }
    html.push_str("</ul>\n</div>\n</div>\n");
    html
}
