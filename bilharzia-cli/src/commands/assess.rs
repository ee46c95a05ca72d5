//! One-shot assessment from the command line

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bilharzia_core::{Answers, AssessmentRecord, RiskAssessment, load_classifier};
use clap::Args;
use serde::Serialize;

use crate::config::ConfigLoader;

/// Arguments for the assess command
#[derive(Debug, Args)]
pub struct AssessArgs {
    /// Answer as key=value (repeatable), e.g. --answer haematuria=Yes
    #[arg(short, long = "answer", value_name = "KEY=VALUE")]
    pub answers: Vec<String>,

    /// Require an answer for every field instead of using form defaults
    #[arg(long)]
    pub strict: bool,

    /// Path to the classifier artifact (overrides config)
    #[arg(short, long)]
    pub model: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct AssessOutput<'a> {
    risk_level: &'static str,
    probability_display: String,
    #[serde(flatten)]
    assessment: &'a RiskAssessment,
    answers: &'a AssessmentRecord,
}

/// Run the assess command
pub fn run(args: AssessArgs) -> Result<()> {
    let record = build_record(&args.answers, args.strict)?;

    let model_path = match args.model {
        Some(path) => path,
        None => ConfigLoader::load()?.data.model_path,
    };
    let classifier = load_classifier(&model_path)
        .with_context(|| format!("Failed to load model from {}", model_path.display()))?;

    let assessment = RiskAssessment::evaluate(classifier.as_ref(), &record);

    if args.json {
        let output = AssessOutput {
            risk_level: assessment.banner(),
            probability_display: assessment.probability_display(),
            assessment: &assessment,
            answers: &record,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", format_report(&assessment, &record));
    }
    Ok(())
}

fn build_record(pairs: &[String], strict: bool) -> Result<AssessmentRecord> {
    let mut answers = Answers::new();
    for pair in pairs {
        answers.insert_pair(pair)?;
    }
    let record = if strict {
        AssessmentRecord::from_answers(&answers)?
    } else {
        AssessmentRecord::from_partial(&answers)?
    };
    Ok(record)
}

fn format_report(assessment: &RiskAssessment, record: &AssessmentRecord) -> String {
    let mut out = String::new();
    for (field, value) in record.iter() {
        let _ = writeln!(out, "  {:<58} {}", field.label(), value);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", assessment.banner());
    let _ = writeln!(
        out,
        "Probability of Infection: {}",
        assessment.probability_display()
    );

    let guidance = assessment.guidance();
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", guidance.heading);
    for item in guidance.items {
        if item.detail.is_empty() {
            let _ = writeln!(out, "  - {}", item.lead);
        } else {
            let _ = writeln!(out, "  - {} {}", item.lead, item.detail);
        }
    }
    out
}
