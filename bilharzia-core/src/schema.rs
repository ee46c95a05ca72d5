//! The fourteen closed-choice questions of the risk assessment form
//!
//! Each [`Field`] knows the model column it feeds, the label shown on the
//! form and the closed set of answers it accepts. The first choice is the
//! default selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// One question of the assessment form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Sex,
    Age,
    Haematuria,
    FemaleGs,
    WaterSchool,
    WaterHome,
    DrinkingWater,
    VisitWaterbodies,
    DirectContact,
    AbdominalPain,
    UrinationPain,
    FamilyHistory,
    GenitalItching,
    GenitalDischarge,
}

const YES_NO: &[&str] = &["No", "Yes"];
const SEVERITY: &[&str] = &["No", "Mild", "Moderate", "Severe"];

impl Field {
    /// Number of fields in an assessment record
    pub const COUNT: usize = 14;

    /// All fields in form order
    pub const ALL: [Field; Field::COUNT] = [
        Field::Sex,
        Field::Age,
        Field::Haematuria,
        Field::FemaleGs,
        Field::WaterSchool,
        Field::WaterHome,
        Field::DrinkingWater,
        Field::VisitWaterbodies,
        Field::DirectContact,
        Field::AbdominalPain,
        Field::UrinationPain,
        Field::FamilyHistory,
        Field::GenitalItching,
        Field::GenitalDischarge,
    ];

    /// Position of this field in [`Field::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Form key used in HTML forms, JSON bodies and `--answer key=value`
    pub fn key(self) -> &'static str {
        match self {
            Field::Sex => "sex",
            Field::Age => "age",
            Field::Haematuria => "haematuria",
            Field::FemaleGs => "female_gs",
            Field::WaterSchool => "water_school",
            Field::WaterHome => "water_home",
            Field::DrinkingWater => "drinking_water",
            Field::VisitWaterbodies => "visit_waterbodies",
            Field::DirectContact => "direct_contact",
            Field::AbdominalPain => "abdominal_pain",
            Field::UrinationPain => "urination_pain",
            Field::FamilyHistory => "family_history",
            Field::GenitalItching => "genital_itching",
            Field::GenitalDischarge => "genital_discharge",
        }
    }

    /// Column name the classifier was trained on
    pub fn column(self) -> &'static str {
        match self {
            Field::Sex => "Sex",
            Field::Age => "Age",
            Field::Haematuria => "Haematuria",
            Field::FemaleGs => "Female GS(Knowledge)",
            Field::WaterSchool => "Water facility in the school",
            Field::WaterHome => "Water facility in the home",
            Field::DrinkingWater => "source of drinking water",
            Field::VisitWaterbodies => "Visit to Waterbodies",
            Field::DirectContact => "Direct contact with freshwater body",
            Field::AbdominalPain => "lower abdominal pain",
            Field::UrinationPain => "urination pain",
            Field::FamilyHistory => "family history",
            Field::GenitalItching => "Have you experienced itching or burning in your genitals?",
            Field::GenitalDischarge => "Do you experience genital discharge?",
        }
    }

    /// Label displayed next to the selector
    pub fn label(self) -> &'static str {
        match self {
            Field::Sex => "Sex",
            Field::Age => "Age",
            Field::Haematuria => "Haematuria (Blood in urine)",
            Field::FemaleGs => "Female GS (Knowledge)",
            Field::WaterSchool => "Water facility in the school",
            Field::WaterHome => "Water facility in the home",
            Field::DrinkingWater => "Source of drinking water",
            Field::VisitWaterbodies => "Visit to Waterbodies",
            Field::DirectContact => "Direct contact with freshwater body",
            Field::AbdominalPain => "Lower abdominal pain",
            Field::UrinationPain => "Urination pain",
            Field::FamilyHistory => "Family history",
            Field::GenitalItching => "Have you experienced itching or burning in your genitals?",
            Field::GenitalDischarge => "Do you experience genital discharge?",
        }
    }

    /// Closed set of accepted answers, default first
    pub fn choices(self) -> &'static [&'static str] {
        match self {
            Field::Sex => &["Female", "Male"],
            Field::Age => &["10 - 14 Years", "15 - 19 Years"],
            Field::Haematuria
            | Field::FemaleGs
            | Field::WaterSchool
            | Field::VisitWaterbodies
            | Field::DirectContact => YES_NO,
            Field::WaterHome => &["Available", "Fairly", "Poor", "Not available"],
            Field::DrinkingWater => &[
                "Borehole",
                "Borehole/Freshwater body",
                "Satchet/bottled water",
                "All water sources",
                "Borehole/Satchet/bottled water",
                "Freshwater body",
            ],
            Field::AbdominalPain | Field::UrinationPain | Field::GenitalItching => SEVERITY,
            Field::FamilyHistory => &["No", "Yes", "Not sure"],
            Field::GenitalDischarge => &["No", "Yes", "Sometimes"],
        }
    }

    /// The default (first) answer
    pub fn default_choice(self) -> &'static str {
        self.choices()[0]
    }

    /// Resolve an answer to its interned choice, rejecting anything outside the set
    pub fn choice(self, value: &str) -> Result<&'static str, RecordError> {
        self.choices()
            .iter()
            .copied()
            .find(|choice| *choice == value)
            .ok_or_else(|| RecordError::InvalidChoice {
                field: self,
                value: value.to_string(),
            })
    }

    /// Look a field up by its model column name
    pub fn from_column(column: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.column() == column)
    }

    /// Whether the field renders in the left-hand form column
    pub fn in_left_column(self) -> bool {
        self.index() < 7
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.key() == s || f.column() == s)
            .ok_or_else(|| RecordError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_is_in_index_order() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn keys_and_columns_are_unique() {
        let keys: HashSet<_> = Field::ALL.iter().map(|f| f.key()).collect();
        let columns: HashSet<_> = Field::ALL.iter().map(|f| f.column()).collect();
        assert_eq!(keys.len(), Field::COUNT);
        assert_eq!(columns.len(), Field::COUNT);
    }

    #[test]
    fn every_field_has_choices() {
        for field in Field::ALL {
            assert!(field.choices().len() >= 2, "{field} has too few choices");
        }
    }

    #[test]
    fn choice_rejects_values_outside_the_set() {
        assert_eq!(Field::Sex.choice("Male").unwrap(), "Male");
        let err = Field::Sex.choice("male").unwrap_err();
        assert!(matches!(err, RecordError::InvalidChoice { field: Field::Sex, .. }));
        assert!(Field::Age.choice("10 -14 Years").is_err());
    }

    #[test]
    fn parses_key_or_column() {
        assert_eq!("female_gs".parse::<Field>().unwrap(), Field::FemaleGs);
        assert_eq!(
            "Female GS(Knowledge)".parse::<Field>().unwrap(),
            Field::FemaleGs
        );
        assert!("nope".parse::<Field>().is_err());
    }

    #[test]
    fn form_is_split_seven_and_seven() {
        let left = Field::ALL.iter().filter(|f| f.in_left_column()).count();
        assert_eq!(left, 7);
        assert!(Field::DrinkingWater.in_left_column());
        assert!(!Field::VisitWaterbodies.in_left_column());
    }
}
