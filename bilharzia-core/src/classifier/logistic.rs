//! Logistic regression over one-hot encoded answers

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Classifier, Probabilities};
use crate::error::ModelError;
use crate::record::AssessmentRecord;
use crate::schema::Field;

/// Linear model with one weight per (column, category) indicator
///
/// Categories without a weight contribute nothing, the same as an
/// indicator column the encoder dropped or never saw.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub intercept: f64,
    #[serde(default)]
    pub weights: BTreeMap<String, BTreeMap<String, f64>>,
}

impl LogisticModel {
    pub(crate) fn validate(&self) -> Result<(), ModelError> {
        if !self.intercept.is_finite() {
            return Err(ModelError::Invalid("intercept is not finite".to_string()));
        }
        for (column, categories) in &self.weights {
            let field = Field::from_column(column)
                .ok_or_else(|| ModelError::UnknownColumn(column.clone()))?;
            for (category, weight) in categories {
                field
                    .choice(category)
                    .map_err(|_| ModelError::UnknownCategory {
                        field,
                        category: category.clone(),
                    })?;
                if !weight.is_finite() {
                    return Err(ModelError::Invalid(format!(
                        "weight for {column:?} = {category:?} is not finite"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Linear score before the sigmoid
    pub fn decision_function(&self, record: &AssessmentRecord) -> f64 {
        self.weights
            .iter()
            .filter_map(|(column, categories)| {
                let value = record.get_column(column)?;
                categories.get(value)
            })
            .fold(self.intercept, |acc, w| acc + w)
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl Classifier for LogisticModel {
    fn kind(&self) -> &'static str {
        "one_hot_logistic"
    }

    fn feature_count(&self) -> usize {
        self.weights.len()
    }

    fn predict_proba(&self, record: &AssessmentRecord) -> Probabilities {
        Probabilities::from_positive(sigmoid(self.decision_function(record)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::RiskLabel;

    fn haematuria_model() -> LogisticModel {
        let mut weights = BTreeMap::new();
        weights.insert(
            "Haematuria".to_string(),
            BTreeMap::from([("Yes".to_string(), 3.0), ("No".to_string(), -1.0)]),
        );
        weights.insert(
            "urination pain".to_string(),
            BTreeMap::from([("Severe".to_string(), 1.5)]),
        );
        LogisticModel {
            intercept: -0.5,
            weights,
        }
    }

    #[test]
    fn sigmoid_is_symmetric() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
        assert!((sigmoid(2.0) + sigmoid(-2.0) - 1.0).abs() < 1e-12);
        assert!(sigmoid(-800.0) >= 0.0);
        assert!(sigmoid(800.0) <= 1.0);
    }

    #[test]
    fn sums_matching_indicator_weights() {
        let model = haematuria_model();
        let mut record = AssessmentRecord::default();
        assert!((model.decision_function(&record) - -1.5).abs() < 1e-12);

        record.set(Field::Haematuria, "Yes").unwrap();
        record.set(Field::UrinationPain, "Severe").unwrap();
        assert!((model.decision_function(&record) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn predict_follows_probability() {
        let model = haematuria_model();
        let mut record = AssessmentRecord::default();
        assert_eq!(model.predict(&record), RiskLabel::Low);

        record.set(Field::Haematuria, "Yes").unwrap();
        assert_eq!(model.predict(&record), RiskLabel::High);
        let p = model.predict_proba(&record);
        assert!((p.low + p.high - 1.0).abs() < 1e-12);
        assert!(p.high > 0.9);
    }

    #[test]
    fn validate_rejects_unknown_column() {
        let mut model = haematuria_model();
        model.weights.insert("Shoe size".to_string(), BTreeMap::new());
        assert!(matches!(
            model.validate(),
            Err(ModelError::UnknownColumn(c)) if c == "Shoe size"
        ));
    }

    #[test]
    fn validate_rejects_unknown_category() {
        let mut model = haematuria_model();
        model
            .weights
            .get_mut("Haematuria")
            .unwrap()
            .insert("Haematuria".to_string(), 0.2);
        assert!(matches!(
            model.validate(),
            Err(ModelError::UnknownCategory {
                field: Field::Haematuria,
                ..
            })
        ));
    }

    #[test]
    fn validate_rejects_non_finite_weights() {
        let mut model = haematuria_model();
        model.intercept = f64::NAN;
        assert!(matches!(model.validate(), Err(ModelError::Invalid(_))));
    }
}
