//! # Articulation Catalog
//!
//! Validated, immutable view over the articulations dataset.
//!
//! The catalog is built once from the raw JSON. Entries missing any of the six required
//! fields are dropped on the way in (the dataset is maintained by hand and incomplete rows
//! are expected), so every query only ever sees usable records.
//!
//! All filters are exact, case-sensitive string comparisons against the trimmed values
//! stored at load time. Option lists come back deduplicated in first-occurrence order.

use crate::error::{ConsultError, ConsultErrorExt};
use crate::normalize::normalize;
use articula_kernel::domain::articulation::{ArticulationRecord, ArticulationResult};
use fxhash::FxHashSet;
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Counts gathered while building a catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Entries found in the source array.
    pub total: usize,
    /// Entries that passed validation.
    pub kept: usize,
    /// Entries silently left out.
    pub dropped: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<ArticulationRecord>,
    report: LoadReport,
}

impl Catalog {
    /// Builds the catalog from an already-parsed dataset.
    ///
    /// A top-level `null` is an empty dataset.
    ///
    /// # Errors
    /// [`ConsultError::Data`] when the top level is neither an array nor `null`.
    pub fn build(raw: &Value) -> Result<Self, ConsultError> {
        let entries: &[Value] = match raw {
            Value::Array(entries) => entries.as_slice(),
            Value::Null => &[],
            other => {
                return Err(ConsultError::Data {
                    message: format!("expected an array of records, found {}", kind(other)).into(),
                    context: None,
                });
            },
        };

        let mut records = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            match normalize(entry) {
                Ok(record) => records.push(record),
                Err(reason) => debug!(index, %reason, "Dropping dataset entry"),
            }
        }

        let report = LoadReport {
            total: entries.len(),
            kept: records.len(),
            dropped: entries.len() - records.len(),
        };
        info!(total = report.total, kept = report.kept, dropped = report.dropped, "Catalog built");

        Ok(Self { records, report })
    }

    /// # Errors
    /// [`ConsultError::Json`] for text that is not JSON, [`ConsultError::Data`] for JSON of
    /// the wrong shape.
    pub fn from_json_str(text: &str) -> Result<Self, ConsultError> {
        let raw: Value = serde_json::from_str(text).context("Parsing dataset")?;
        Self::build(&raw)
    }

    /// # Errors
    /// Same as [`Catalog::from_json_str`], plus [`ConsultError::Json`] wrapping read failures.
    pub fn from_reader(reader: impl Read) -> Result<Self, ConsultError> {
        let raw: Value = serde_json::from_reader(reader).context("Reading dataset")?;
        Self::build(&raw)
    }

    /// Loads the dataset file at `path`.
    ///
    /// # Errors
    /// [`ConsultError::Io`] when the file cannot be opened, otherwise as
    /// [`Catalog::from_reader`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConsultError> {
        let path = path.as_ref();
        let file =
            File::open(path).context(format!("Opening dataset {}", path.display()))?;
        Self::from_reader(BufReader::new(file)).context(format!("Dataset {}", path.display()))
    }

    #[must_use]
    pub fn records(&self) -> &[ArticulationRecord] {
        &self.records
    }

    #[must_use]
    pub const fn report(&self) -> LoadReport {
        self.report
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct regions, in dataset order.
    #[must_use]
    pub fn regions(&self) -> Vec<&str> {
        distinct(self.records.iter().map(|r| r.region.as_str()))
    }

    #[must_use]
    pub fn departments(&self, region: &str) -> Vec<&str> {
        distinct(
            self.records.iter().filter(|r| r.region == region).map(|r| r.department.as_str()),
        )
    }

    #[must_use]
    pub fn schools(&self, region: &str, department: &str) -> Vec<&str> {
        distinct(
            self.records
                .iter()
                .filter(|r| r.region == region && r.department == department)
                .map(|r| r.school.as_str()),
        )
    }

    #[must_use]
    pub fn orientations(&self, region: &str, department: &str, school: &str) -> Vec<&str> {
        distinct(
            self.records
                .iter()
                .filter(|r| r.region == region && r.department == department && r.school == school)
                .map(|r| r.orientation.as_str()),
        )
    }

    /// Every destination for the exact four-tuple, in dataset order.
    ///
    /// Several records may share the tuple; each one is a distinct destination and all of
    /// them are returned.
    #[must_use]
    pub fn resolve(
        &self,
        region: &str,
        department: &str,
        school: &str,
        orientation: &str,
    ) -> Vec<&ArticulationResult> {
        self.records
            .iter()
            .filter(|r| r.matches(region, department, school, orientation))
            .map(|r| &r.result)
            .collect()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = FxHashSet::default();
    values.filter(|value| seen.insert(*value)).collect()
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
