//! Redraw scheduling
//!
//! Decides, tick by tick, whether the display gets a full refresh or a set
//! of partial draws, and runs the poll loop that ties data sources,
//! renderer, diff engine and driver together.
//!
//! E-ink panels ghost under repeated partial updates, so a rolling counter
//! forces a full refresh at least every N *counted* ticks regardless of
//! content. Ticks where nothing changed do not consume that budget.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use chrono::Local;
use log::{debug, info, warn};

use crate::config::Config;
use crate::display::{DisplayDriver, DriverError};
use crate::model::{DataSource, ForecastSnapshot, StationSnapshot};
use crate::render::frame::{Frame, RenderResult};
use crate::render::{Desktop, diff_regions};

/// Granularity at which the inter-tick sleep re-checks for cancellation.
const SLEEP_SLICE: Duration = Duration::from_millis(250);

/// Cooperative shutdown flag.
///
/// The signal handler only trips the flag; the loop observes it at the top
/// of each tick, so in-flight driver writes always complete.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// What a scheduler tick did to the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Whole frame pushed at the origin.
    Full,
    /// This many changed rectangles pushed.
    Partial(usize),
    /// Nothing differed; no driver calls were made.
    Unchanged,
}

/// Counter-driven full/partial redraw state machine.
///
/// The counter `c` lives in `[0, period)`. `c == 0` forces a full draw and
/// always advances; otherwise changed regions are pushed individually and
/// the counter advances only when at least one region changed. The
/// previous frame is replaced unconditionally after every tick, even a
/// pixel-identical one, to guard against drift from any upstream render
/// nondeterminism.
pub struct RedrawScheduler {
    period: u32,
    counter: u32,
    previous: Option<Frame>,
}

impl RedrawScheduler {
    /// `period` is the full-refresh period N; it is clamped to at least 1.
    pub fn new(period: u32) -> Self {
        Self {
            period: period.max(1),
            counter: 0,
            previous: None,
        }
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    fn advance(&mut self) {
        self.counter = (self.counter + 1) % self.period;
    }

    /// Push one rendered tick to the display.
    pub fn tick(
        &mut self,
        result: RenderResult,
        driver: &mut dyn DisplayDriver,
    ) -> Result<TickOutcome, DriverError> {
        let outcome = match &self.previous {
            Some(previous) if self.counter != 0 => {
                let patches = diff_regions(&result, previous);
                for patch in &patches {
                    driver.draw(
                        patch.area.top_left.x as u32,
                        patch.area.top_left.y as u32,
                        &patch.image,
                    )?;
                }
                if patches.is_empty() {
                    TickOutcome::Unchanged
                } else {
                    self.advance();
                    TickOutcome::Partial(patches.len())
                }
            }
            _ => {
                driver.draw(0, 0, result.frame())?;
                self.advance();
                TickOutcome::Full
            }
        };

        self.previous = Some(result.into_frame());
        Ok(outcome)
    }
}

/// Run the poll loop until the token is cancelled.
///
/// Either source may fail on any tick; the failure is logged at warning
/// level and that source contributes nothing for the tick. A driver
/// failure is fatal and propagates.
pub fn run_loop(
    config: &Config,
    desktop: &Desktop,
    station_source: &mut dyn DataSource<Snapshot = StationSnapshot>,
    forecast_source: &mut dyn DataSource<Snapshot = ForecastSnapshot>,
    driver: &mut dyn DisplayDriver,
    cancel: &CancelToken,
) -> Result<(), DriverError> {
    let mut scheduler = RedrawScheduler::new(config.full_refresh_every);
    let interval = Duration::from_secs(config.poll_interval_secs);
    info!("Starting data loop");

    while !cancel.is_cancelled() {
        let station = match station_source.fetch() {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!("Station fetch failed: {e}");
                None
            }
        };
        let forecast = match forecast_source.fetch() {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!("Forecast fetch failed: {e}");
                None
            }
        };

        let result = desktop.render(Local::now(), station.as_ref(), forecast.as_ref());
        match scheduler.tick(result, driver)? {
            TickOutcome::Full => debug!("Full redraw"),
            TickOutcome::Partial(count) => debug!("Partial redraw, {count} region(s)"),
            TickOutcome::Unchanged => debug!("No change"),
        }

        sleep_cancellable(cancel, interval);
    }

    info!("Redraw loop exiting");
    Ok(())
}

/// Sleep for `duration`, waking early if the token is cancelled.
fn sleep_cancellable(cancel: &CancelToken, duration: Duration) {
    let deadline = Instant::now() + duration;
    while !cancel.is_cancelled() {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            break;
        }
        thread::sleep(remaining.min(SLEEP_SLICE));
    }
}
