use crate::config::NormalizeSettings;
use crate::error::{ClimateError, Result};
use crate::models::{Cell, ClimateTable};
use crate::processors::consolidator::consolidate;
use crate::processors::report::{ConsolidationSummary, FileSummary, NormalizeReport, SkippedFile};
use crate::readers::{RawDocument, RawReader};
use crate::utils::constants::{
    COLUMN_RENAMES, COL_LATITUDE, COL_LOCATION, COL_LONGITUDE, FINAL_SCHEMA, NUMERIC_COLUMNS,
    RAW_EXTENSION,
};
use crate::utils::filename::{cleaned_file_name, consolidated_file_name};
use crate::utils::progress::ProgressReporter;
use crate::writers::CsvTableWriter;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// A cleaned table plus the per-column missing counts produced while cleaning it
#[derive(Debug, Clone)]
pub struct CleanedTable {
    pub label: String,
    pub table: ClimateTable,
    pub missing: Vec<(String, usize)>,
    /// False when the raw file had no location line
    pub coordinates_found: bool,
}

pub struct Normalizer {
    settings: NormalizeSettings,
    reader: RawReader,
    writer: CsvTableWriter,
}

impl Normalizer {
    pub fn new(settings: NormalizeSettings) -> Self {
        let reader = RawReader::from_settings(&settings);
        Self {
            settings,
            reader,
            writer: CsvTableWriter::new(),
        }
    }

    /// Raw `.csv` files in the input directory, sorted by file name
    pub fn discover_files(&self) -> Result<Vec<PathBuf>> {
        let input_dir = &self.settings.input_dir;
        if !input_dir.is_dir() {
            return Err(ClimateError::Config(format!(
                "Input directory not found: {}",
                input_dir.display()
            )));
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(input_dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == RAW_EXTENSION) {
                files.push(path);
            }
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }

    /// Rename, coerce, add context columns and project onto the output schema
    pub fn clean_document(&self, document: RawDocument) -> CleanedTable {
        let RawDocument {
            label,
            latitude,
            longitude,
            coordinates_found,
            mut table,
            ..
        } = document;

        for (from, to) in COLUMN_RENAMES {
            table.rename_column(from, to);
        }

        let mut missing = Vec::new();
        for column in NUMERIC_COLUMNS {
            if table.column_index(column).is_some() {
                let count = table.coerce_numeric(column, self.settings.missing_sentinel);
                missing.push((column.to_string(), count));
            }
        }

        table.insert_constant_column(0, COL_LOCATION, Cell::Text(label.clone()));
        table.insert_constant_column(1, COL_LATITUDE, Cell::Text(latitude));
        table.insert_constant_column(2, COL_LONGITUDE, Cell::Text(longitude));

        CleanedTable {
            label,
            table: table.select_columns(&FINAL_SCHEMA),
            missing,
            coordinates_found,
        }
    }

    /// Read, clean and write one raw file
    pub fn process_file(&self, path: &Path) -> Result<(CleanedTable, PathBuf)> {
        let document = self.reader.read_file(path)?;
        let cleaned = self.clean_document(document);

        let output = self
            .settings
            .output_dir
            .join(cleaned_file_name(&cleaned.label));
        self.writer.write_table(&cleaned.table, &output)?;

        Ok((cleaned, output))
    }

    /// Clean every raw file, then write the consolidated table
    ///
    /// A file that fails at any step is logged and skipped. Invalid settings or missing input
    /// or output directories abort the run.
    pub fn run(&self, progress: Option<&ProgressReporter>) -> Result<NormalizeReport> {
        self.settings.check()?;

        let output_dir = &self.settings.output_dir;
        fs::create_dir_all(output_dir).map_err(|e| ClimateError::DirectoryCreation {
            path: output_dir.clone(),
            source: e,
        })?;

        let files = self.discover_files()?;
        let mut report = NormalizeReport {
            files_found: files.len(),
            ..NormalizeReport::default()
        };

        if files.is_empty() {
            warn!(
                "No .{} files found in {}",
                RAW_EXTENSION,
                self.settings.input_dir.display()
            );
            return Ok(report);
        }
        info!("Found {} raw files to clean", files.len());

        let mut tables = Vec::with_capacity(files.len());

        for (index, path) in files.iter().enumerate() {
            let file_name = path
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_default();
            emit(
                progress,
                &format!("[{}/{}] Cleaning {}", index + 1, files.len(), file_name),
            );

            match self.process_file(path) {
                Ok((cleaned, output)) => {
                    emit(
                        progress,
                        &format!(
                            " -> {} rows, {} columns written to {}",
                            cleaned.table.row_count(),
                            cleaned.table.columns().len(),
                            output.display()
                        ),
                    );
                    for (column, count) in &cleaned.missing {
                        report.record_missing(column, *count);
                    }
                    report.processed.push(FileSummary {
                        source: path.clone(),
                        output,
                        label: cleaned.label,
                        rows: cleaned.table.row_count(),
                        columns: cleaned.table.columns().len(),
                        coordinates_found: cleaned.coordinates_found,
                    });
                    tables.push(cleaned.table);
                }
                Err(e) => {
                    warn!(file = %file_name, error = %e, "Skipping file");
                    report.skipped.push(SkippedFile {
                        file: file_name,
                        reason: e.to_string(),
                    });
                }
            }

            if let Some(p) = progress {
                p.increment(1);
            }
        }

        match consolidate(&tables) {
            Some(merged) => {
                let path = output_dir.join(consolidated_file_name(&self.settings.region));
                self.writer.write_table(&merged, &path)?;
                info!("Consolidated {} rows into {}", merged.row_count(), path.display());
                report.consolidated = Some(ConsolidationSummary {
                    path,
                    rows: merged.row_count(),
                });
            }
            None => {
                warn!("No data consolidated: no file could be processed");
            }
        }

        Ok(report)
    }
}

fn emit(progress: Option<&ProgressReporter>, line: &str) {
    match progress {
        Some(p) => p.println(line),
        None => info!("{}", line),
    }
}
