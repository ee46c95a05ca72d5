//! Assessment records built from form answers

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::RecordError;
use crate::schema::Field;

/// Raw answers as submitted, keyed by [`Field::key`]
///
/// Unknown keys are ignored when building a record so that extra form
/// controls (the submit button, the page selector) pass through harmlessly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(pub BTreeMap<String, String>);

impl Answers {
    /// Create an empty answer set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an answer
    pub fn insert(&mut self, field: Field, value: impl Into<String>) {
        self.0.insert(field.key().to_string(), value.into());
    }

    /// Builder-style [`Answers::insert`]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    /// Parse a `key=value` pair, as given on the command line
    pub fn insert_pair(&mut self, pair: &str) -> Result<(), RecordError> {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| RecordError::Malformed(pair.to_string()))?;
        let field: Field = key.trim().parse()?;
        self.insert(field, value.trim());
        Ok(())
    }

    /// Answer for a field, if present
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(field.key()).map(String::as_str)
    }
}

/// One row of classifier input: an answer for every field
///
/// Values are always members of their field's choice set, so a record can
/// only be constructed through validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssessmentRecord {
    values: [&'static str; Field::COUNT],
}

impl Default for AssessmentRecord {
    /// The record an untouched form would submit
    fn default() -> Self {
        Self {
            values: Field::ALL.map(Field::default_choice),
        }
    }
}

impl AssessmentRecord {
    /// Build a record from complete answers
    pub fn from_answers(answers: &Answers) -> Result<Self, RecordError> {
        let mut values = [""; Field::COUNT];
        for field in Field::ALL {
            let raw = answers
                .get(field)
                .ok_or(RecordError::MissingAnswer(field))?;
            values[field.index()] = field.choice(raw)?;
        }
        Ok(Self { values })
    }

    /// Build a record starting from the defaults, overriding with any answers given
    pub fn from_partial(answers: &Answers) -> Result<Self, RecordError> {
        let mut record = Self::default();
        for field in Field::ALL {
            if let Some(raw) = answers.get(field) {
                record.values[field.index()] = field.choice(raw)?;
            }
        }
        Ok(record)
    }

    /// Keep every valid answer and fall back to the default for the rest
    ///
    /// Used to redisplay a rejected submission without losing what was chosen.
    pub fn from_valid_answers(answers: &Answers) -> Self {
        let mut record = Self::default();
        for field in Field::ALL {
            if let Some(choice) = answers.get(field).and_then(|raw| field.choice(raw).ok()) {
                record.values[field.index()] = choice;
            }
        }
        record
    }

    /// Replace one answer
    pub fn set(&mut self, field: Field, value: &str) -> Result<(), RecordError> {
        self.values[field.index()] = field.choice(value)?;
        Ok(())
    }

    /// The answer for a field
    pub fn get(&self, field: Field) -> &'static str {
        self.values[field.index()]
    }

    /// Answer for a model column, if the column belongs to the schema
    pub fn get_column(&self, column: &str) -> Option<&'static str> {
        Field::from_column(column).map(|f| self.get(f))
    }

    /// Iterate `(field, answer)` in form order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        Field::ALL.into_iter().map(|f| (f, self.get(f)))
    }
}

impl Serialize for AssessmentRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Field::COUNT))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.key(), value)?;
        }
        map.end()
    }
}

impl From<&AssessmentRecord> for Answers {
    fn from(record: &AssessmentRecord) -> Self {
        record
            .iter()
            .fold(Answers::new(), |answers, (field, value)| {
                answers.with(field, value)
            })
    }
}
