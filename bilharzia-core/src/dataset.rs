//! Reference dataset loading and label normalization
//!
//! The survey table shipped with the dashboard is loaded once at startup.
//! A few category labels in it were typed inconsistently and are rewritten
//! to the spelling the form and the model use.

use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::DatasetError;

/// Whole-cell replacements for the `Age` column
const AGE_FIXUPS: &[(&str, &str)] = &[
    ("10 -14 Years", "10 - 14 Years"),
    ("15- 19 Years", "15 - 19 Years"),
];

/// Whole-cell replacements for the `Haematuria` column
///
/// Known discrepancy: a cell holding the column name itself is recoded to
/// "No". This may be a mislabelled sentinel, but the rule is kept verbatim
/// until the survey owners confirm the intended value.
const HAEMATURIA_FIXUPS: &[(&str, &str)] = &[("Haematuria", "No")];

/// A loaded CSV table of string cells
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReferenceDataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ReferenceDataset {
    /// Build a table from headers and rows (rows shorter than the header are padded)
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// Read a CSV file without normalizing it
    pub fn read_csv(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let read_err = |source: csv::Error| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = csv::Reader::from_path(path).map_err(read_err)?;
        let headers = reader
            .headers()
            .map_err(read_err)?
            .iter()
            .map(str::to_string)
            .collect();
        let rows = reader
            .records()
            .map(|record| {
                record
                    .map(|r| r.iter().map(str::to_string).collect())
                    .map_err(read_err)
            })
            .collect::<Result<Vec<Vec<String>>, _>>()?;

        Ok(Self::new(headers, rows))
    }

    /// Column names in file order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by exact name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// All values of a column, top to bottom
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &str> + '_> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| row[idx].as_str()))
    }

    /// Replace whole cells of `column` that exactly match a `from` value
    ///
    /// Returns the number of cells rewritten.
    pub fn replace(
        &mut self,
        column: &'static str,
        replacements: &[(&str, &str)],
    ) -> Result<usize, DatasetError> {
        let idx = self
            .column_index(column)
            .ok_or(DatasetError::MissingColumn(column))?;

        let mut rewritten = 0;
        for row in &mut self.rows {
            let cell = &mut row[idx];
            if let Some((_, to)) = replacements.iter().find(|(from, _)| cell.as_str() == *from) {
                *cell = (*to).to_string();
                rewritten += 1;
            }
        }
        Ok(rewritten)
    }

    /// Apply the fixed label corrections, returning how many cells changed
    pub fn normalize(&mut self) -> Result<usize, DatasetError> {
        let age = self.replace("Age", AGE_FIXUPS)?;
        let haematuria = self.replace("Haematuria", HAEMATURIA_FIXUPS)?;
        if haematuria > 0 {
            warn!(
                cells = haematuria,
                "Recoded literal \"Haematuria\" cells to \"No\""
            );
        }
        Ok(age + haematuria)
    }
}

/// Load and normalize the reference dataset at `path`
///
/// Called once at startup; the result is shared read-only.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<ReferenceDataset, DatasetError> {
    let path = path.as_ref();
    let mut dataset = ReferenceDataset::read_csv(path)?;
    let rewritten = dataset.normalize()?;
    info!(
        path = %path.display(),
        rows = dataset.len(),
        rewritten,
        "Loaded reference dataset"
    );
    Ok(dataset)
}
