use crate::error::{ClimateError, Result};
use crate::models::ClimateTable;
use std::fs;
use std::path::Path;

/// Writes tables as comma-delimited text with a single header row
pub struct CsvTableWriter {
    builder: csv::WriterBuilder,
}

impl CsvTableWriter {
    pub fn new() -> Self {
        let mut builder = csv::WriterBuilder::new();
        builder.terminator(csv::Terminator::Any(b'\n'));
        Self { builder }
    }

    /// Render a table into an in-memory buffer
    pub fn to_bytes(&self, table: &ClimateTable) -> Result<Vec<u8>> {
        let mut writer = self.builder.from_writer(Vec::new());

        writer.write_record(table.columns())?;
        for row in table.rows() {
            writer.write_record(row.iter().map(|cell| cell.to_string()))?;
        }

        writer
            .into_inner()
            .map_err(|e| ClimateError::Io(e.into_error()))
    }

    /// Write a table to `path` in one buffer, replacing any existing file
    pub fn write_table(&self, table: &ClimateTable, path: &Path) -> Result<()> {
        let bytes = self.to_bytes(table)?;
        fs::write(path, bytes)?;
        Ok(())
    }
}

impl Default for CsvTableWriter {
    fn default() -> Self {
        Self::new()
    }
}
