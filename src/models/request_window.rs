use crate::error::{ClimateError, Result};
use crate::utils::constants::{
    DEFAULT_END_DATE, DEFAULT_START_DATE, POWER_COMMUNITY, POWER_PARAMETERS, REQUEST_DATE_FORMAT,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Date range and parameter set shared by every request in a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RequestWindow {
    #[validate(length(equal = 8))]
    pub start_date: String,

    #[validate(length(equal = 8))]
    pub end_date: String,

    #[validate(length(min = 1))]
    pub parameters: Vec<String>,

    #[validate(length(min = 1))]
    pub community: String,
}

impl RequestWindow {
    pub fn new(start_date: &str, end_date: &str) -> Self {
        Self {
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
            ..Self::default()
        }
    }

    /// Comma-joined parameter codes for the query string
    pub fn parameter_list(&self) -> String {
        self.parameters.join(",")
    }

    pub fn start(&self) -> Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(&self.start_date, REQUEST_DATE_FORMAT)?)
    }

    pub fn end(&self) -> Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(&self.end_date, REQUEST_DATE_FORMAT)?)
    }

    /// Field validation plus date parsing and ordering
    pub fn check(&self) -> Result<()> {
        self.validate()?;

        let (start, end) = (self.start()?, self.end()?);
        if start > end {
            return Err(ClimateError::Config(format!(
                "Start date {} is after end date {}",
                self.start_date, self.end_date
            )));
        }

        Ok(())
    }
}

impl Default for RequestWindow {
    fn default() -> Self {
        Self {
            start_date: DEFAULT_START_DATE.to_string(),
            end_date: DEFAULT_END_DATE.to_string(),
            parameters: POWER_PARAMETERS.iter().map(|p| p.to_string()).collect(),
            community: POWER_COMMUNITY.to_string(),
        }
    }
}
