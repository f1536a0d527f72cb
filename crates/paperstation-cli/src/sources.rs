//! File-backed data sources.
//!
//! The concrete weather services live outside this program; anything able
//! to drop a JSON snapshot into a file (a cron job, an MQTT bridge, a shell
//! script) can feed the dashboard. The file is re-read on every tick, so a
//! stale-but-present file keeps its last values on screen and a missing or
//! broken file degrades that source for the tick.

use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::de::DeserializeOwned;

use paperstation_core::model::{DataSource, FetchError};

/// Data source that deserializes its snapshot from a JSON file.
#[derive(Debug)]
pub struct JsonFileSource<T> {
    path: PathBuf,
    _snapshot: PhantomData<T>,
}

impl<T> JsonFileSource<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _snapshot: PhantomData,
        }
    }
}

impl<T: DeserializeOwned> DataSource for JsonFileSource<T> {
    type Snapshot = T;

    fn fetch(&mut self) -> Result<T, FetchError> {
        let raw = fs::read_to_string(&self.path)
            .map_err(|e| FetchError::Unavailable(format!("{}: {e}", self.path.display())))?;
        serde_json::from_str(&raw).map_err(|e| FetchError::Malformed(e.to_string()))
    }
}
