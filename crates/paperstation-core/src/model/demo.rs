//! Canned snapshots and data sources for demos and bring-up.
//!
//! The demo dataset doubles as the canonical reference content: a cold
//! winter day outside, a slightly stuffy room inside.

use chrono::{DateTime, Duration, Local};

use super::{
    DataSource, FetchError, ForecastEntry, ForecastSnapshot, IndoorReadings, OutdoorReadings,
    StationSnapshot,
};

/// Reference station data used by the `demo` subcommand and tests.
pub fn demo_station() -> StationSnapshot {
    StationSnapshot {
        indoor: IndoorReadings {
            temperature: Some(24.3),
            humidity: Some(65),
            co2: Some(1223),
        },
        outdoor: OutdoorReadings {
            temperature: Some(-28.1),
            humidity: Some(56),
        },
    }
}

/// A station snapshot whose every reading is absent; renders all sentinels.
pub fn empty_station() -> StationSnapshot {
    StationSnapshot {
        indoor: IndoorReadings {
            temperature: None,
            humidity: None,
            co2: None,
        },
        outdoor: OutdoorReadings {
            temperature: None,
            humidity: None,
        },
    }
}

/// Reference forecast: clearing weather over the next nine hours.
pub fn demo_forecast(now: DateTime<Local>) -> ForecastSnapshot {
    ForecastSnapshot {
        sunrise: now - Duration::hours(2),
        sunset: now + Duration::hours(10),
        code: 803,
        entries: [
            ForecastEntry {
                code: 802,
                at: now + Duration::hours(3),
            },
            ForecastEntry {
                code: 801,
                at: now + Duration::hours(6),
            },
            ForecastEntry {
                code: 615,
                at: now + Duration::hours(9),
            },
        ],
    }
}

/// Station source that always returns the demo readings.
#[derive(Debug, Default)]
pub struct DemoStationSource;

impl DataSource for DemoStationSource {
    type Snapshot = StationSnapshot;

    fn fetch(&mut self) -> Result<StationSnapshot, FetchError> {
        Ok(demo_station())
    }
}

/// Forecast source that always returns the demo forecast relative to now.
#[derive(Debug, Default)]
pub struct DemoForecastSource;

impl DataSource for DemoForecastSource {
    type Snapshot = ForecastSnapshot;

    fn fetch(&mut self) -> Result<ForecastSnapshot, FetchError> {
        Ok(demo_forecast(Local::now()))
    }
}
