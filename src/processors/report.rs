use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileSummary {
    pub source: PathBuf,
    pub output: PathBuf,
    pub label: String,
    pub rows: usize,
    pub columns: usize,
    pub coordinates_found: bool,
}

#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub file: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct ConsolidationSummary {
    pub path: PathBuf,
    pub rows: usize,
}

/// Outcome of one normalization run
#[derive(Debug, Clone, Default)]
pub struct NormalizeReport {
    pub files_found: usize,
    pub processed: Vec<FileSummary>,
    pub skipped: Vec<SkippedFile>,
    /// Cells that ended up missing after numeric coercion, per output column
    pub missing_by_column: BTreeMap<String, usize>,
    pub consolidated: Option<ConsolidationSummary>,
}

impl NormalizeReport {
    pub fn total_rows(&self) -> usize {
        self.processed.iter().map(|f| f.rows).sum()
    }

    pub fn record_missing(&mut self, column: &str, count: usize) {
        *self.missing_by_column.entry(column.to_string()).or_default() += count;
    }

    pub fn summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("=== Normalization Report ===\n");
        summary.push_str(&format!("Files found: {}\n", self.files_found));
        summary.push_str(&format!("Files cleaned: {}\n", self.processed.len()));
        summary.push_str(&format!("Files skipped: {}\n", self.skipped.len()));
        summary.push_str(&format!("Rows cleaned: {}\n", self.total_rows()));

        let missing: Vec<String> = self
            .missing_by_column
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(column, count)| format!("{}={}", column, count))
            .collect();
        if !missing.is_empty() {
            summary.push_str(&format!("Missing values: {}\n", missing.join(", ")));
        }

        for file in self.processed.iter().filter(|f| !f.coordinates_found) {
            let name = file.source.file_name().unwrap_or_default().to_string_lossy();
            summary.push_str(&format!(
                "  ? {}: no location line, coordinates N/A\n",
                name
            ));
        }

        for skipped in &self.skipped {
            summary.push_str(&format!("  ✗ {}: {}\n", skipped.file, skipped.reason));
        }

        match &self.consolidated {
            Some(c) => summary.push_str(&format!(
                "Consolidated {} rows into {}",
                c.rows,
                c.path.display()
            )),
            None => summary.push_str(
                "No consolidated file written: no input file could be processed",
            ),
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_without_consolidation() {
        let mut report = NormalizeReport {
            files_found: 1,
            ..NormalizeReport::default()
        };
        report.skipped.push(SkippedFile {
            file: "Ica_20231001_to_20241001.csv".to_string(),
            reason: "No data header starting with 'YEAR,DOY' found".to_string(),
        });

        let summary = report.summary();
        assert!(summary.contains("Files skipped: 1"));
        assert!(summary.contains("✗ Ica_20231001_to_20241001.csv"));
        assert!(summary.ends_with("no input file could be processed"));
    }

    #[test]
    fn test_missing_counts_accumulate() {
        let mut report = NormalizeReport::default();
        report.record_missing("RH2M", 2);
        report.record_missing("RH2M", 3);
        report.record_missing("DOY", 0);

        assert_eq!(report.missing_by_column["RH2M"], 5);
        assert!(report.summary().contains("Missing values: RH2M=5\n"));
    }
}
