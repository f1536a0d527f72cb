//! Display-independent core library for paperstation
//!
//! This crate contains all logic of the e-paper weather dashboard that does
//! not depend on a concrete display or data service: the widget tree and its
//! layout model, the greyscale frame raster, the pixel-diff engine with its
//! byte-alignment rules, the full/partial redraw scheduler, the display
//! driver trait and registry, and the weather data model.
//!
//! The `paperstation` binary wires these pieces to a real driver, the CLI
//! surface, and file-backed data sources.

pub mod config;
pub mod display;
pub mod model;
pub mod render;
pub mod schedule;
pub mod ui;
