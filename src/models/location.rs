use crate::utils::coordinates::round_coordinate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A named point the daily series is requested for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Location {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// Coordinates as sent to the provider, `(latitude, longitude)`
    pub fn rounded(&self) -> (f64, f64) {
        (round_coordinate(self.latitude), round_coordinate(self.longitude))
    }
}
