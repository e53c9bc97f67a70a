pub mod consolidator;
pub mod normalizer;
pub mod report;

pub use consolidator::consolidate;
pub use normalizer::{CleanedTable, Normalizer};
pub use report::{ConsolidationSummary, FileSummary, NormalizeReport, SkippedFile};
