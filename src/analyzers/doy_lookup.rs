use crate::error::{ClimateError, Result};
use crate::models::CleanedRecord;
use crate::utils::constants::{CLEAN_SUFFIX, LOOKUP_VARIABLES};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Mean daily values for one location on one day of the year, across all years on file
#[derive(Debug, Clone, Serialize)]
pub struct DayAverages {
    pub location: String,
    pub date: NaiveDate,
    pub day_of_year: u32,
    pub records: usize,
    pub averages: BTreeMap<String, Option<f64>>,
    pub source: PathBuf,
}

/// Looks up cleaned per-location files by name and averages a calendar day
pub struct DoyLookup {
    data_dir: PathBuf,
}

impl DoyLookup {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }

    /// Find the cleaned file for a location name
    ///
    /// Tried in order: exact `{NAME}_LIMPIO` file, a file starting with the name, a file
    /// containing the name, a file containing any word of the name. Comparison ignores case,
    /// accents and punctuation.
    pub fn find_file(&self, location: &str) -> Result<PathBuf> {
        let mut candidates: Vec<(String, PathBuf)> = Vec::new();
        for entry in fs::read_dir(&self.data_dir)? {
            let path = entry?.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if path.is_file() && name.ends_with(CLEAN_SUFFIX) {
                candidates.push((match_key(name), path.clone()));
            }
        }
        candidates.sort_by(|a, b| a.1.cmp(&b.1));

        let target = match_key(location);
        if target.is_empty() {
            return Err(ClimateError::LocationNotFound(location.to_string()));
        }

        let exact = format!("{}{}", target, match_key(CLEAN_SUFFIX));
        let prefix = format!("{}_", target);
        let words: Vec<&str> = target.split('_').filter(|w| !w.is_empty()).collect();

        candidates
            .iter()
            .find(|(key, _)| *key == exact || key.starts_with(&prefix))
            .or_else(|| candidates.iter().find(|(key, _)| key.contains(&target)))
            .or_else(|| {
                words
                    .iter()
                    .find_map(|word| candidates.iter().find(|(key, _)| key.contains(word)))
            })
            .map(|(_, path)| path.clone())
            .ok_or_else(|| ClimateError::LocationNotFound(location.to_string()))
    }

    /// Average every lookup variable over the rows for `date`'s day of year
    ///
    /// Missing cells are left out of each mean; a variable with no values is `None`.
    pub fn lookup(&self, location: &str, date: NaiveDate) -> Result<DayAverages> {
        let source = self.find_file(location)?;
        let doy = date.ordinal();
        debug!("Reading {} for day {}", source.display(), doy);

        let mut reader = csv::Reader::from_path(&source)?;
        let mut matching = Vec::new();
        for record in reader.deserialize::<CleanedRecord>() {
            let record = record?;
            if record.day_of_year() == Some(doy) {
                matching.push(record);
            }
        }

        if matching.is_empty() {
            return Err(ClimateError::NoDataForDay {
                location: location.to_string(),
                doy,
            });
        }

        let averages = LOOKUP_VARIABLES
            .iter()
            .map(|column| {
                let values: Vec<f64> = matching.iter().filter_map(|r| r.value(column)).collect();
                let mean = if values.is_empty() {
                    None
                } else {
                    Some(values.iter().sum::<f64>() / values.len() as f64)
                };
                (column.to_string(), mean)
            })
            .collect();

        Ok(DayAverages {
            location: location.to_string(),
            date,
            day_of_year: doy,
            records: matching.len(),
            averages,
            source,
        })
    }
}

/// Uppercase ASCII key: accents folded, whitespace to `_`, other punctuation dropped
///
/// Accents are removed by canonical decomposition followed by dropping combining marks.
pub fn match_key(text: &str) -> String {
    let mut key = String::with_capacity(text.len());
    for c in text.nfd().filter(|c| !is_combining_mark(*c)) {
        if c.is_whitespace() {
            key.push('_');
        } else if c.is_ascii_alphanumeric() || c == '_' {
            key.push(c.to_ascii_uppercase());
        }
    }
    key
}
