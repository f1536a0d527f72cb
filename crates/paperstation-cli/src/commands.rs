//! Subcommand handlers.

use std::fs;
use std::path::Path;

use chrono::Local;
use log::info;

use paperstation_core::config::Config;
use paperstation_core::display::{DisplayDriver, DriverRegistry};
use paperstation_core::model::demo::{
    DemoForecastSource, DemoStationSource, demo_forecast, demo_station, empty_station,
};
use paperstation_core::model::{DataSource, ForecastSnapshot, StationSnapshot};
use paperstation_core::render::frame::RenderResult;
use paperstation_core::render::Desktop;
use paperstation_core::schedule::{CancelToken, run_loop};

use crate::cli::{BitmapArgs, RunArgs};
use crate::drivers::{BitmapDriver, frame_from_image, frame_to_image};
use crate::error::StationError;
use crate::sources::JsonFileSource;

/// All drivers this binary can bind: the core built-ins plus the
/// PNG-writing bitmap driver.
pub fn registry(config: &Config) -> DriverRegistry {
    let mut registry = DriverRegistry::with_builtin();
    let dir = config.output_dir.clone();
    registry.register("bitmap", "Writes each draw call as a PNG file", move || {
        Box::new(BitmapDriver::new(dir.clone()))
    });
    registry
}

/// Resolve the configured driver name, or fail with the driver table.
fn bind_driver(
    config: &Config,
    registry: &DriverRegistry,
) -> Result<Box<dyn DisplayDriver>, StationError> {
    let name = config.driver.as_deref().ok_or_else(|| StationError::NoDriver {
        listing: registry.listing(),
    })?;
    registry.build(name).ok_or_else(|| StationError::UnknownDriver {
        name: name.to_string(),
        listing: registry.listing(),
    })
}

/// `run`: the main poll loop.
pub fn run(config: &Config, args: &RunArgs) -> Result<(), StationError> {
    let registry = registry(config);
    let mut driver = bind_driver(config, &registry)?;
    driver.init(config.partial)?;
    info!("Display initialized");

    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || handler_token.cancel())
        .map_err(|e| StationError::Signal(e.to_string()))?;

    let mut station: Box<dyn DataSource<Snapshot = StationSnapshot>> = match &args.station_file {
        Some(path) => Box::new(JsonFileSource::new(path.clone())),
        None => Box::new(DemoStationSource),
    };
    let mut forecast: Box<dyn DataSource<Snapshot = ForecastSnapshot>> = match &args.forecast_file {
        Some(path) => Box::new(JsonFileSource::new(path.clone())),
        None => Box::new(DemoForecastSource),
    };

    let desktop = Desktop::new(&config.locale);
    run_loop(
        config,
        &desktop,
        station.as_mut(),
        forecast.as_mut(),
        driver.as_mut(),
        &cancel,
    )?;
    Ok(())
}

/// `demo`: render the canonical image set without a display.
pub fn demo(config: &Config) -> Result<(), StationError> {
    fs::create_dir_all(&config.output_dir)?;
    let desktop = Desktop::new(&config.locale);
    let now = Local::now();

    save_demo(
        &desktop.render(now, None, None),
        &config.output_dir,
        "demo_nodata",
    )?;

    let empty = empty_station();
    let forecast = demo_forecast(now);
    save_demo(
        &desktop.render(now, Some(&empty), Some(&forecast)),
        &config.output_dir,
        "demo_empty",
    )?;

    let full = demo_station();
    save_demo(
        &desktop.render(now, Some(&full), Some(&forecast)),
        &config.output_dir,
        "demo_data",
    )?;

    info!("Demo pictures printed");
    Ok(())
}

fn save_demo(result: &RenderResult, dir: &Path, name: &str) -> Result<(), StationError> {
    let path = dir.join(format!("{name}.png"));
    frame_to_image(result.frame()).save(&path)?;
    info!("Demo image generated: {}", path.display());
    Ok(())
}

/// `bitmap`: print an image file through the selected driver.
pub fn bitmap(config: &Config, args: &BitmapArgs) -> Result<(), StationError> {
    let registry = registry(config);
    let mut driver = bind_driver(config, &registry)?;
    driver.init(config.partial)?;

    let img = image::open(&args.file)?.to_luma8();
    let frame = frame_from_image(&img);
    driver.draw(0, 0, &frame)?;
    info!("Bitmap {} printed", args.file.display());
    Ok(())
}

/// `list`: print the driver table.
pub fn list(config: &Config) -> Result<(), StationError> {
    println!("{}", registry(config).listing());
    Ok(())
}
