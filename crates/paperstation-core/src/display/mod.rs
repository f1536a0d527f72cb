//! Display driver abstraction and registry
//!
//! The core is indifferent to the concrete panel hardware; everything it
//! needs from a display is `init` and `draw`. Drivers are selected by name
//! from a [`DriverRegistry`] so the binary can list them and bind one at
//! startup.

pub mod dummy;

pub use dummy::DummyDriver;

use embedded_graphics::pixelcolor::{Gray8, GrayColor};
use thiserror::Error;

use crate::render::Frame;

/// Failure while talking to a display.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("display I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encoding failed: {0}")]
    Encode(String),
}

/// A pluggable e-paper display.
///
/// `draw` pushes a patch of pixels whose top-left corner lands at `(x, y)`
/// in panel coordinates; a full refresh is simply a draw of the whole frame
/// at the origin.
pub trait DisplayDriver {
    /// Prepare the panel. `partial` requests the partial-update waveform
    /// where the hardware supports one.
    fn init(&mut self, partial: bool) -> Result<(), DriverError>;

    /// Push `patch` to the panel at `(x, y)`.
    fn draw(&mut self, x: u32, y: u32, patch: &Frame) -> Result<(), DriverError>;

    /// Blank color of the panel.
    fn white(&self) -> Gray8 {
        Gray8::WHITE
    }

    /// Ink color of the panel.
    fn black(&self) -> Gray8 {
        Gray8::BLACK
    }
}

type DriverBuilder = Box<dyn Fn() -> Box<dyn DisplayDriver>>;

struct DriverEntry {
    name: &'static str,
    description: &'static str,
    build: DriverBuilder,
}

/// Name-indexed collection of available display drivers.
#[derive(Default)]
pub struct DriverRegistry {
    entries: Vec<DriverEntry>,
}

impl DriverRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the built-in drivers.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register("dummy", "Discards output, logs draw calls", || {
            Box::new(DummyDriver::default())
        });
        registry
    }

    pub fn register<F>(&mut self, name: &'static str, description: &'static str, build: F)
    where
        F: Fn() -> Box<dyn DisplayDriver> + 'static,
    {
        self.entries.push(DriverEntry {
            name,
            description,
            build: Box::new(build),
        });
    }

    /// Instantiate a driver by name (case-insensitive).
    pub fn build(&self, name: &str) -> Option<Box<dyn DisplayDriver>> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
            .map(|entry| (entry.build)())
    }

    /// Printable, sorted `name  description` table.
    pub fn listing(&self) -> String {
        let mut names: Vec<_> = self
            .entries
            .iter()
            .map(|entry| (entry.name, entry.description))
            .collect();
        names.sort_by_key(|(name, _)| *name);
        names
            .into_iter()
            .map(|(name, description)| format!("{name:<15}{description}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
