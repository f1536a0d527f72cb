//! Host-side display drivers and raster conversions.

use std::fs;
use std::path::PathBuf;

use embedded_graphics::pixelcolor::Gray8;
use embedded_graphics::prelude::*;
use image::GrayImage;
use log::info;

use paperstation_core::display::{DisplayDriver, DriverError};
use paperstation_core::render::Frame;

/// Driver that materializes every draw call as a PNG file.
///
/// Full refreshes and partial patches alike land as numbered files in the
/// output directory, which makes the redraw behavior inspectable without
/// panel hardware.
#[derive(Debug)]
pub struct BitmapDriver {
    dir: PathBuf,
    sequence: u32,
}

impl BitmapDriver {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir, sequence: 0 }
    }
}

impl DisplayDriver for BitmapDriver {
    fn init(&mut self, partial: bool) -> Result<(), DriverError> {
        fs::create_dir_all(&self.dir)?;
        info!(
            "Bitmap display writing to {} (partial={partial})",
            self.dir.display()
        );
        Ok(())
    }

    fn draw(&mut self, x: u32, y: u32, patch: &Frame) -> Result<(), DriverError> {
        self.sequence += 1;
        let path = self
            .dir
            .join(format!("draw_{:04}_{x}x{y}.png", self.sequence));
        frame_to_image(patch)
            .save(&path)
            .map_err(|e| DriverError::Encode(e.to_string()))?;
        info!("Draw call written to {}", path.display());
        Ok(())
    }
}

/// Copy a frame into an 8-bit greyscale image buffer.
pub fn frame_to_image(frame: &Frame) -> GrayImage {
    GrayImage::from_fn(frame.width(), frame.height(), |x, y| {
        image::Luma([frame.pixel(x, y).unwrap_or(0xFF)])
    })
}

/// Copy an 8-bit greyscale image into a frame.
pub fn frame_from_image(img: &GrayImage) -> Frame {
    let mut frame = Frame::new(Size::new(img.width(), img.height()));
    let pixels = img.enumerate_pixels().map(|(x, y, luma)| {
        Pixel(Point::new(x as i32, y as i32), Gray8::new(luma.0[0]))
    });
    // Drawing into RAM cannot fail.
    let _ = frame.draw_iter(pixels);
    frame
}
