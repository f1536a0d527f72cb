//! Widget system for the dashboard layout
//!
//! This module provides the small retained-mode UI the renderer composes
//! each tick:
//! - A tagged [`Widget`] tree of panels and text nodes with eager
//!   absolute-offset propagation
//! - Paint styling (border, background, foreground) for greyscale output
//! - Monospace font handles in three preset sizes
//! - Weather-condition label lookup with day/night selection

pub mod fonts;
pub mod icons;
pub mod style;
pub mod widget;

pub use fonts::FontSize;
pub use style::Style;
pub use widget::{Alignment, Panel, Text, Widget};
