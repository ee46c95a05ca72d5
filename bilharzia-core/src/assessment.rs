//! Risk assessment outcome and the fixed guidance shown with it

use serde::Serialize;

use crate::classifier::{Classifier, Probabilities, RiskLabel};
use crate::record::AssessmentRecord;

/// One bullet of guidance: a bold lead followed by plain detail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub lead: &'static str,
    pub detail: &'static str,
}

/// The recommendation block displayed beside a result banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Guidance {
    pub heading: &'static str,
    pub items: &'static [Recommendation],
}

const HIGH_RISK_GUIDANCE: Guidance = Guidance {
    heading: "Important Recommendations:",
    items: &[
        Recommendation {
            lead: "Consult a healthcare provider immediately.",
            detail: "Professional medical advice is crucial.",
        },
        Recommendation {
            lead: "Get tested for schistosomiasis",
            detail: "to confirm the diagnosis.",
        },
        Recommendation {
            lead: "Avoid all contact with freshwater sources",
            detail: "like rivers, lakes, and ponds.",
        },
        Recommendation {
            lead: "Follow prescribed treatment",
            detail: "diligently if you are diagnosed.",
        },
    ],
};

const LOW_RISK_GUIDANCE: Guidance = Guidance {
    heading: "Preventative Measures:",
    items: &[
        Recommendation {
            lead: "Continue avoiding contact with potentially contaminated freshwater.",
            detail: "",
        },
        Recommendation {
            lead: "Maintain good hygiene practices,",
            detail: "especially after being near water sources.",
        },
        Recommendation {
            lead: "Stay informed",
            detail: "about schistosomiasis risks in your area.",
        },
        Recommendation {
            lead: "Consider regular health check-ups",
            detail: "if you live in an endemic region.",
        },
    ],
};

/// Result of running the classifier on one record
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub label: RiskLabel,
    pub probabilities: Probabilities,
}

impl RiskAssessment {
    /// Ask the classifier for both the label and the class probabilities
    pub fn evaluate(classifier: &dyn Classifier, record: &AssessmentRecord) -> Self {
        Self {
            label: classifier.predict(record),
            probabilities: classifier.predict_proba(record),
        }
    }

    /// Whether the high-risk banner applies
    pub fn is_high_risk(&self) -> bool {
        self.label == RiskLabel::High
    }

    /// Banner text, `HIGH RISK` or `LOW RISK`
    pub fn banner(&self) -> &'static str {
        if self.is_high_risk() {
            "HIGH RISK"
        } else {
            "LOW RISK"
        }
    }

    /// Probability of infection, formatted like `73.4%`
    pub fn probability_display(&self) -> String {
        self.probabilities.positive_percent()
    }

    /// Recommendation block for this outcome
    pub fn guidance(&self) -> Guidance {
        if self.is_high_risk() {
            HIGH_RISK_GUIDANCE
        } else {
            LOW_RISK_GUIDANCE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::LogisticModel;

    fn constant(intercept: f64) -> LogisticModel {
        LogisticModel {
            intercept,
            ..Default::default()
        }
    }

    #[test]
    fn high_label_selects_high_banner_and_guidance() {
        let result = RiskAssessment::evaluate(&constant(2.0), &AssessmentRecord::default());
        assert!(result.is_high_risk());
        assert_eq!(result.banner(), "HIGH RISK");
        assert_eq!(result.probability_display(), "88.1%");
        assert_eq!(result.guidance().heading, "Important Recommendations:");
    }

    #[test]
    fn low_label_selects_low_banner_and_guidance() {
        let result = RiskAssessment::evaluate(&constant(-2.0), &AssessmentRecord::default());
        assert!(!result.is_high_risk());
        assert_eq!(result.banner(), "LOW RISK");
        assert_eq!(result.probability_display(), "11.9%");
        assert_eq!(result.guidance().heading, "Preventative Measures:");
    }

    #[test]
    fn banner_depends_only_on_label() {
        let result = RiskAssessment {
            label: RiskLabel::High,
            probabilities: Probabilities::from_positive(0.2),
        };
        assert_eq!(result.banner(), "HIGH RISK");
        assert_eq!(result.probability_display(), "20.0%");
    }

    #[test]
    fn both_guidance_blocks_have_four_items() {
        assert_eq!(HIGH_RISK_GUIDANCE.items.len(), 4);
        assert_eq!(LOW_RISK_GUIDANCE.items.len(), 4);
    }
}
