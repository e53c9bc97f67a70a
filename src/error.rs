use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClimateError>;

#[derive(Error, Debug)]
pub enum ClimateError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Date parsing error: {0}")]
    DateParse(#[from] chrono::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Network request failed for {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Server returned {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration source error: {0}")]
    ConfigSource(#[from] ::config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("No data header starting with '{header}' found")]
    MissingDataHeader { header: String },

    #[error("Malformed metadata line '{line}': {reason}")]
    MalformedMetadata { line: String, reason: String },

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Could not create directory {path}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No cleaned file found for location '{0}'")]
    LocationNotFound(String),

    #[error("No records for day of year {doy} in {location}")]
    NoDataForDay { location: String, doy: u32 },
}
