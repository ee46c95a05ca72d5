//! Decision tree with categorical splits

use serde::{Deserialize, Serialize};

use super::{Classifier, Probabilities};
use crate::error::ModelError;
use crate::record::AssessmentRecord;
use crate::schema::Field;

/// A node of a categorical decision tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeNode {
    /// Records whose `column` value is in `categories` go left, all others right
    Split {
        column: String,
        categories: Vec<String>,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
    /// Class weights `[w0, w1]`, normalized into probabilities
    Leaf([f64; 2]),
}

/// A single decision tree artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeModel {
    pub root: TreeNode,
}

impl TreeModel {
    pub(crate) fn validate(&self) -> Result<(), ModelError> {
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                TreeNode::Split {
                    column,
                    categories,
                    left,
                    right,
                } => {
                    let field = Field::from_column(column)
                        .ok_or_else(|| ModelError::UnknownColumn(column.clone()))?;
                    for category in categories {
                        field
                            .choice(category)
                            .map_err(|_| ModelError::UnknownCategory {
                                field,
                                category: category.clone(),
                            })?;
                    }
                    stack.push(left);
                    stack.push(right);
                }
                TreeNode::Leaf([w0, w1]) => {
                    let valid = w0.is_finite() && w1.is_finite() && *w0 >= 0.0 && *w1 >= 0.0;
                    if !valid || w0 + w1 <= 0.0 {
                        return Err(ModelError::Invalid(format!(
                            "leaf weights [{w0}, {w1}] must be non-negative with a positive sum"
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    fn leaf_for(&self, record: &AssessmentRecord) -> [f64; 2] {
        let mut node = &self.root;
        loop {
            match node {
                TreeNode::Split {
                    column,
                    categories,
                    left,
                    right,
                } => {
                    let goes_left = record
                        .get_column(column)
                        .is_some_and(|value| categories.iter().any(|c| c == value));
                    node = if goes_left { &**left } else { &**right };
                }
                TreeNode::Leaf(weights) => return *weights,
            }
        }
    }

    fn columns(&self) -> Vec<&str> {
        let mut columns = Vec::new();
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if let TreeNode::Split {
                column,
                left,
                right,
                ..
            } = node
            {
                if !columns.contains(&column.as_str()) {
                    columns.push(column.as_str());
                }
                stack.push(left);
                stack.push(right);
            }
        }
        columns
    }
}

impl Classifier for TreeModel {
    fn kind(&self) -> &'static str {
        "decision_tree"
    }

    fn feature_count(&self) -> usize {
        self.columns().len()
    }

    fn predict_proba(&self, record: &AssessmentRecord) -> Probabilities {
        let [w0, w1] = self.leaf_for(record);
        Probabilities::from_positive(w1 / (w0 + w1))
    }
}
