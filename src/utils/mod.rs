pub mod constants;
pub mod coordinates;
pub mod filename;
pub mod logging;
pub mod progress;

pub use constants::*;
pub use coordinates::{extract_labeled_pair, is_location_marker, round_coordinate};
pub use filename::{cleaned_file_name, consolidated_file_name, location_label, raw_file_name};
pub use logging::init_logging;
pub use progress::ProgressReporter;
