//! Frame rendering pipeline
//!
//! - [`frame`] — the greyscale raster the widget tree draws into, plus the
//!   per-tick [`frame::RenderResult`] carrying the declared regions of
//!   interest
//! - [`desktop`] — the dashboard renderer with its fixed layout
//! - [`diff`] — change detection between consecutive frames, aligned to the
//!   display's 8-pixel line-buffer granularity

pub mod desktop;
pub mod diff;
pub mod frame;

pub use desktop::Desktop;
pub use diff::{Patch, diff_regions, pixel_diff};
pub use frame::{CANVAS_HEIGHT, CANVAS_WIDTH, Frame, RenderResult};
