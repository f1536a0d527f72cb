//! No-output driver for bring-up and headless runs.

use log::{debug, info};

use super::{DisplayDriver, DriverError};
use crate::render::Frame;

/// Accepts every draw call and throws the pixels away.
#[derive(Debug, Default)]
pub struct DummyDriver {
    partial: bool,
}

impl DisplayDriver for DummyDriver {
    fn init(&mut self, partial: bool) -> Result<(), DriverError> {
        self.partial = partial;
        info!("Dummy display initialized (partial={partial})");
        Ok(())
    }

    fn draw(&mut self, x: u32, y: u32, patch: &Frame) -> Result<(), DriverError> {
        debug!(
            "Dummy draw {}x{} at ({x}, {y})",
            patch.width(),
            patch.height()
        );
        Ok(())
    }
}
