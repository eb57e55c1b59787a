use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic point picked on the map (WGS84 degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Parse a `lat,lng` pair as typed on the command line or in the config.
    pub fn parse(s: &str) -> AppResult<Self> {
        let (lat_raw, lng_raw) = s
            .split_once(',')
            .ok_or_else(|| AppError::InvalidLocation(format!("expected 'lat,lng', got '{s}'")))?;

        let lat = parse_coordinate(lat_raw, s)?;
        let lng = parse_coordinate(lng_raw, s)?;
        let loc = Location::new(lat, lng);

        if !loc.is_valid() {
            return Err(AppError::InvalidLocation(format!(
                "'{s}' is outside the valid latitude/longitude range"
            )));
        }

        Ok(loc)
    }

    /// Latitude within ±90 and longitude within ±180, both finite.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

fn parse_coordinate(raw: &str, whole: &str) -> AppResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| AppError::InvalidLocation(format!("'{}' in '{whole}' is not a number", raw.trim())))
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}
