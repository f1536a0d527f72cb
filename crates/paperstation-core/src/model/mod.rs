//! Weather data model and data-source abstraction
//!
//! Two independent remote sources feed the dashboard: the home weather
//! station (indoor/outdoor readings) and a generic forecast service
//! (sunrise/sunset, condition codes). Either may fail on any tick; the
//! renderer receives `Option`s and falls back per source. The wire
//! protocols of the concrete services are out of scope — implementations of
//! [`DataSource`] adapt whatever transport they like.

pub mod demo;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a snapshot could not be fetched this tick.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("source unavailable: {0}")]
    Unavailable(String),

    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// A pollable source of one snapshot type.
///
/// `fetch` is synchronous with an implementation-chosen timeout; a failure
/// degrades that source to absent for the current tick only.
pub trait DataSource {
    type Snapshot;

    fn fetch(&mut self) -> Result<Self::Snapshot, FetchError>;
}

/// Readings from the indoor station module.
///
/// Absent fields render as their display sentinels rather than stale or
/// zero values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndoorReadings {
    pub temperature: Option<f32>,
    pub humidity: Option<u8>,
    pub co2: Option<u16>,
}

/// Readings from the outdoor station module.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutdoorReadings {
    pub temperature: Option<f32>,
    pub humidity: Option<u8>,
}

/// One tick's worth of weather-station data (Source A).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StationSnapshot {
    pub indoor: IndoorReadings,
    pub outdoor: OutdoorReadings,
}

/// A single forward-forecast slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Condition code as reported by the forecast service.
    pub code: u16,
    pub at: DateTime<Local>,
}

/// One tick's worth of forecast data (Source B).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastSnapshot {
    pub sunrise: DateTime<Local>,
    pub sunset: DateTime<Local>,
    /// Current condition code.
    pub code: u16,
    /// Three forward slots, nearest first.
    pub entries: [ForecastEntry; 3],
}

impl ForecastSnapshot {
    /// Whether `now` falls in the daylight span of this snapshot.
    pub fn is_day(&self, now: DateTime<Local>) -> bool {
        self.sunrise <= now && now < self.sunset
    }
}

/// Display sentinel for an absent temperature.
pub const NONE_TEMPERATURE: &str = "--.-";

/// Display sentinel for an absent humidity.
pub const NONE_HUMIDITY: &str = "--";

/// Display sentinel for an absent CO₂ reading.
pub const NONE_CO2: &str = "---";

/// Temperature formatted to one decimal, or its sentinel.
pub fn format_temperature(value: Option<f32>) -> String {
    match value {
        Some(t) => format!("{t:.1}"),
        None => NONE_TEMPERATURE.to_string(),
    }
}

/// Humidity as `NN%`, or `--%`.
pub fn format_humidity(value: Option<u8>) -> String {
    match value {
        Some(h) => format!("{h}%"),
        None => format!("{NONE_HUMIDITY}%"),
    }
}

/// CO₂ concentration digits, or its sentinel.
pub fn format_co2(value: Option<u16>) -> String {
    match value {
        Some(ppm) => ppm.to_string(),
        None => NONE_CO2.to_string(),
    }
}
