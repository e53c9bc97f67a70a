use crate::config::NormalizeSettings;
use crate::error::{ClimateError, Result};
use crate::models::{Cell, ClimateTable};
use crate::utils::constants::{LATITUDE_LABEL, LONGITUDE_LABEL, UNKNOWN_COORDINATE};
use crate::utils::coordinates::{extract_labeled_pair, is_location_marker};
use crate::utils::filename::location_label;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Metadata and data block extracted from one raw provider response
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub file_name: String,
    pub label: String,
    pub latitude: String,
    pub longitude: String,
    /// False when no location line was present and the coordinates are placeholders
    pub coordinates_found: bool,
    pub table: ClimateTable,
}

/// Reader for the provider's semi-structured CSV responses
///
/// A response is a free-form metadata header followed by a data block whose first line starts
/// with the header prefix (`YEAR,DOY`). Data values are assumed to be separated by commas or
/// runs of spaces and never to contain whitespace themselves.
pub struct RawReader {
    header_prefix: String,
    end_sentinel: String,
    start_date: String,
}

impl RawReader {
    pub fn new(header_prefix: &str, end_sentinel: &str, start_date: &str) -> Self {
        Self {
            header_prefix: header_prefix.to_string(),
            end_sentinel: end_sentinel.to_string(),
            start_date: start_date.to_string(),
        }
    }

    pub fn from_settings(settings: &NormalizeSettings) -> Self {
        Self::new(
            &settings.header_prefix,
            &settings.end_sentinel,
            settings.label_start_date(),
        )
    }

    /// Read and parse a raw file from disk
    pub fn read_file(&self, path: &Path) -> Result<RawDocument> {
        let file_name = path
            .file_name()
            .and_then(|f| f.to_str())
            .ok_or_else(|| {
                ClimateError::InvalidFormat(format!("Invalid file path: {}", path.display()))
            })?
            .to_string();

        let bytes = fs::read(path)?;
        let (text, _, had_errors) = encoding_rs::UTF_8.decode(&bytes);
        if had_errors {
            warn!(file = %file_name, "Invalid UTF-8 replaced while decoding");
        }

        self.parse_text(&file_name, &text)
    }

    /// Parse raw response text; `file_name` supplies the location label
    pub fn parse_text(&self, file_name: &str, text: &str) -> Result<RawDocument> {
        let lines: Vec<&str> = text.lines().collect();

        let mut coordinates = None;
        let mut header_index = None;

        for (index, line) in lines.iter().enumerate() {
            if is_location_marker(line) {
                coordinates = Some(extract_labeled_pair(line, LATITUDE_LABEL, LONGITUDE_LABEL)?);
            }

            if line.starts_with(&self.header_prefix) {
                header_index = Some(index);
                break;
            }
        }

        let header_index = header_index.ok_or_else(|| ClimateError::MissingDataHeader {
            header: self.header_prefix.clone(),
        })?;

        let coordinates_found = coordinates.is_some();
        let (latitude, longitude) = coordinates.unwrap_or_else(|| {
            warn!(
                file = %file_name,
                "No location line found, coordinates set to {}", UNKNOWN_COORDINATE
            );
            (UNKNOWN_COORDINATE.to_string(), UNKNOWN_COORDINATE.to_string())
        });

        let delimited = self.to_delimited(&lines[header_index..]);
        let table = parse_delimited(&delimited)?;
        debug!(file = %file_name, rows = table.row_count(), "Parsed data block");

        Ok(RawDocument {
            file_name: file_name.to_string(),
            label: location_label(file_name, &self.start_date),
            latitude,
            longitude,
            coordinates_found,
            table,
        })
    }

    /// Turn the data block into comma-delimited text
    ///
    /// The header line is kept as written; every other line is trimmed and has its space runs
    /// collapsed into single commas. Blank lines and end-sentinel lines are dropped.
    pub fn to_delimited(&self, block: &[&str]) -> String {
        let mut cleaned = Vec::with_capacity(block.len());

        for line in block {
            let line = line.trim();
            if line.is_empty() || line.starts_with(&self.end_sentinel) {
                continue;
            }

            if line.starts_with(&self.header_prefix) {
                cleaned.push(line.to_string());
            } else {
                cleaned.push(collapse_spaces(line));
            }
        }

        cleaned.join("\n")
    }
}

/// Replace each run of spaces with a single comma
pub fn collapse_spaces(line: &str) -> String {
    line.split(' ')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse comma-delimited text whose first line names the columns
///
/// Short records are padded with missing cells; a record wider than the header is an error.
pub fn parse_delimited(text: &str) -> Result<ClimateTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    let width = columns.len();
    let mut table = ClimateTable::new(columns);

    for (line, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() > width {
            return Err(ClimateError::InvalidFormat(format!(
                "Data row {} has {} fields, header has {}",
                line + 1,
                record.len(),
                width
            )));
        }

        table.push_row(
            record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        Cell::Missing
                    } else {
                        Cell::Text(field.to_string())
                    }
                })
                .collect(),
        );
    }

    Ok(table)
}
