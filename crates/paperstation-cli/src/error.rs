use std::path::PathBuf;

use paperstation_core::display::DriverError;
use thiserror::Error;

/// Operator-facing failures of the binary.
///
/// Driver-selection problems are fatal configuration errors: they are
/// reported before the loop starts and the process exits nonzero.
#[derive(Debug, Error)]
pub enum StationError {
    #[error("no display driver selected, choose one of:\n{listing}")]
    NoDriver { listing: String },

    #[error("unknown display driver {name:?}, choose one of:\n{listing}")]
    UnknownDriver { name: String, listing: String },

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to install signal handler: {0}")]
    Signal(String),

    #[error(transparent)]
    Driver(#[from] DriverError),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
