//! Run configuration.
//!
//! Every stage receives an explicit [`Settings`] value. Defaults are compiled in; a config
//! file and `POWER_CLIMATE__SECTION__KEY` environment variables may override them.

pub mod locations;

pub use locations::default_locations;

use crate::error::{ClimateError, Result};
use crate::models::{Location, RequestWindow};
use crate::utils::constants::*;
use ::config::{Config, Environment, File};
use chrono::NaiveDate;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub fetch: FetchSettings,
    pub normalize: NormalizeSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchSettings {
    pub base_url: String,
    pub window: RequestWindow,
    pub locations: Vec<Location>,
    pub output_dir: PathBuf,
    pub timeout_secs: u64,
    pub pause_ms: u64,
    pub error_pause_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeSettings {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub region: String,
    /// Start date whose year cuts location labels out of raw file names
    pub start_date: Option<String>,
    pub header_prefix: String,
    pub end_sentinel: String,
    pub missing_sentinel: f64,
}

impl Settings {
    /// Compiled-in defaults, overridden by an optional file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        );

        let mut settings: Settings = builder.build()?.try_deserialize()?;
        settings.link_start_date();
        settings.check()?;
        Ok(settings)
    }

    /// Keep label extraction in step with the requested window unless set explicitly
    fn link_start_date(&mut self) {
        if self.normalize.start_date.is_none() {
            self.normalize.start_date = Some(self.fetch.window.start_date.clone());
        }
    }

    pub fn check(&self) -> Result<()> {
        self.fetch.check()?;
        self.normalize.check()
    }
}

impl FetchSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    pub fn error_pause(&self) -> Duration {
        Duration::from_millis(self.error_pause_ms)
    }

    pub fn check(&self) -> Result<()> {
        Url::parse(&self.base_url).map_err(|e| {
            ClimateError::Config(format!("Invalid base URL '{}': {}", self.base_url, e))
        })?;
        self.window.check()?;

        if self.locations.is_empty() {
            return Err(ClimateError::Config("No locations configured".to_string()));
        }
        for location in &self.locations {
            location.validate()?;
        }
        if self.timeout_secs == 0 {
            return Err(ClimateError::Config(
                "Request timeout must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: POWER_BASE_URL.to_string(),
            window: RequestWindow::default(),
            locations: default_locations(),
            output_dir: PathBuf::from(DEFAULT_RAW_DIR),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            pause_ms: DEFAULT_PAUSE_MS,
            error_pause_ms: DEFAULT_ERROR_PAUSE_MS,
        }
    }
}

impl NormalizeSettings {
    pub fn label_start_date(&self) -> &str {
        self.start_date.as_deref().unwrap_or(DEFAULT_START_DATE)
    }

    pub fn check(&self) -> Result<()> {
        if self.header_prefix.trim().is_empty() {
            return Err(ClimateError::Config(
                "Data header prefix must not be empty".to_string(),
            ));
        }
        if self.region.trim().is_empty() {
            return Err(ClimateError::Config("Region must not be empty".to_string()));
        }
        if let Some(date) = &self.start_date {
            let well_formed = date.len() == 8 && date.bytes().all(|b| b.is_ascii_digit());
            if !well_formed || NaiveDate::parse_from_str(date, REQUEST_DATE_FORMAT).is_err() {
                return Err(ClimateError::Config(format!(
                    "Label start date '{}' is not a YYYYMMDD date",
                    date
                )));
            }
        }
        Ok(())
    }
}

impl Default for NormalizeSettings {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_RAW_DIR),
            output_dir: PathBuf::from(DEFAULT_CLEAN_DIR),
            region: DEFAULT_REGION.to_string(),
            start_date: None,
            header_prefix: DATA_HEADER_PREFIX.to_string(),
            end_sentinel: END_HEADER_SENTINEL.to_string(),
            missing_sentinel: MISSING_SENTINEL,
        }
    }
}
