pub mod client;

pub use client::{build_request_url, PointSource, PowerClient};

use crate::config::FetchSettings;
use crate::error::{ClimateError, Result};
use crate::models::Location;
use crate::utils::filename::raw_file_name;
use crate::utils::progress::ProgressReporter;
use std::fs;
use std::path::PathBuf;
use tokio::time::sleep;
use tracing::{error, info};

#[derive(Debug, Clone)]
pub struct FetchFailure {
    pub location: String,
    pub reason: String,
}

/// Outcome of one fetch run
#[derive(Debug, Clone, Default)]
pub struct FetchReport {
    pub total_locations: usize,
    pub written: Vec<PathBuf>,
    pub failed: Vec<FetchFailure>,
}

impl FetchReport {
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Fetch complete: {}/{} locations saved, {} failed",
            self.written.len(),
            self.total_locations,
            self.failed.len()
        );

        for failure in &self.failed {
            summary.push_str(&format!("\n  • {}: {}", failure.location, failure.reason));
        }

        summary
    }
}

/// Sequential per-location download of raw provider responses
pub struct Fetcher<S> {
    source: S,
    settings: FetchSettings,
}

impl Fetcher<PowerClient> {
    pub fn from_settings(settings: FetchSettings) -> Result<Self> {
        let client = PowerClient::new(settings.timeout())?;
        Ok(Self::with_source(client, settings))
    }
}

impl<S: PointSource> Fetcher<S> {
    pub fn with_source(source: S, settings: FetchSettings) -> Self {
        Self { source, settings }
    }

    /// Fetch every configured location
    ///
    /// Invalid settings or failing to create the output directory abort the run. A location
    /// whose request or write fails is logged, recorded in the report and skipped, with no
    /// file written.
    pub async fn run(&self, progress: Option<&ProgressReporter>) -> Result<FetchReport> {
        self.settings.check()?;

        let output_dir = &self.settings.output_dir;
        fs::create_dir_all(output_dir).map_err(|e| ClimateError::DirectoryCreation {
            path: output_dir.clone(),
            source: e,
        })?;
        info!("Download directory: {}", output_dir.display());

        let total = self.settings.locations.len();
        let mut report = FetchReport {
            total_locations: total,
            ..FetchReport::default()
        };

        for (index, location) in self.settings.locations.iter().enumerate() {
            let (latitude, longitude) = location.rounded();
            let line = format!(
                "[{}/{}] {} (Lat: {}, Lon: {})",
                index + 1,
                total,
                location.name,
                latitude,
                longitude
            );
            match progress {
                Some(p) => {
                    p.set_message(&location.name);
                    p.println(&line);
                }
                None => info!("{}", line),
            }

            match self.fetch_location(location).await {
                Ok(path) => {
                    info!(location = %location.name, "Saved {}", path.display());
                    report.written.push(path);
                    sleep(self.settings.pause()).await;
                }
                Err(e) => {
                    log_failure(&location.name, &e);
                    report.failed.push(FetchFailure {
                        location: location.name.clone(),
                        reason: e.to_string(),
                    });
                    sleep(self.settings.error_pause()).await;
                }
            }

            if let Some(p) = progress {
                p.increment(1);
            }
        }

        Ok(report)
    }

    /// Request one location and persist the body verbatim
    pub async fn fetch_location(&self, location: &Location) -> Result<PathBuf> {
        let window = &self.settings.window;
        let url = build_request_url(&self.settings.base_url, location, window)?;

        let body = self.source.fetch_text(&url).await?;

        let path = self.settings.output_dir.join(raw_file_name(
            &location.name,
            &window.start_date,
            &window.end_date,
        ));
        fs::write(&path, body)?;

        Ok(path)
    }
}

fn log_failure(location: &str, err: &ClimateError) {
    match err {
        ClimateError::HttpStatus { status, body } => {
            error!(
                location,
                %status,
                body = body.trim(),
                "Request rejected by server, skipping location"
            );
        }
        ClimateError::Network { source, .. } => {
            error!(location, error = %source, "Connection failed, skipping location");
        }
        other => {
            error!(location, error = %other, "Fetch failed, skipping location");
        }
    }
}
