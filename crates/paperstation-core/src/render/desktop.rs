//! Dashboard renderer
//!
//! Builds the full-canvas widget tree for one tick from the current wall
//! clock and whatever snapshots the data sources produced, draws it into a
//! fresh [`Frame`] and declares the regions of interest for the diff
//! engine.
//!
//! The layout is a fixed, hand-tuned 800×600 grid:
//!
//! ```text
//! +--------------------------------------+
//! | date            clock                |  header   0..200
//! | sunrise  sunset                      |
//! +------------------+-------------------+
//! | indoor           | outdoor           |  bands  200..400
//! | temp hum co2     | temp hum          |
//! +----+--------+----+----+--------------+
//! | now| +3h    | +6h     | +9h          |  forecast 400..600
//! +----+--------+---------+--------------+
//! ```
//!
//! The four band rectangles double as the regions of interest; they are
//! declared by design (all on 8-pixel boundaries), never derived from
//! content. When the station snapshot is absent the whole dashboard is
//! replaced by a single centered placeholder and the region list degrades
//! to one full-canvas rectangle.

use chrono::{DateTime, Local, Locale};
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Gray8;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text as EgText;
use embedded_layout::align::{Align, horizontal, vertical};
use log::warn;

use super::frame::{CANVAS_HEIGHT, CANVAS_WIDTH, Frame, RenderResult};
use crate::model::{
    ForecastSnapshot, StationSnapshot, format_co2, format_humidity, format_temperature,
};
use crate::ui::icons::condition_label;
use crate::ui::widget::Alignment;
use crate::ui::{FontSize, Panel, Style, Text};

/// Header band: date, clock, sunrise/sunset.
pub const HEADER_REGION: Rectangle = Rectangle::new(Point::zero(), Size::new(CANVAS_WIDTH, 200));

/// Indoor readings quadrant.
pub const INDOOR_REGION: Rectangle = Rectangle::new(Point::new(0, 200), Size::new(400, 200));

/// Outdoor readings quadrant.
pub const OUTDOOR_REGION: Rectangle = Rectangle::new(Point::new(400, 200), Size::new(400, 200));

/// Forecast band: current conditions plus three forward slots.
pub const FORECAST_REGION: Rectangle =
    Rectangle::new(Point::new(0, 400), Size::new(CANVAS_WIDTH, 200));

/// Message shown when the station source produced nothing this tick.
const PLACEHOLDER_MESSAGE: &str = "No data available";

/// Sentinel for sunrise/sunset when the forecast source is absent.
const NONE_CLOCK: &str = "--:--";

/// Width of one forecast cell; four cells tile the forecast band.
const FORECAST_CELL_WIDTH: u32 = 200;

pub struct Desktop {
    locale: Locale,
}

impl Desktop {
    /// Create a renderer formatting dates under `locale_tag` (e.g.
    /// `cs_CZ`). Unknown tags fall back to POSIX formatting.
    pub fn new(locale_tag: &str) -> Self {
        let locale = Locale::try_from(locale_tag).unwrap_or_else(|_| {
            warn!("Unknown locale {locale_tag:?}, falling back to POSIX");
            Locale::POSIX
        });
        Self { locale }
    }

    /// Render one tick.
    ///
    /// Total over all presence combinations: an absent station snapshot
    /// yields the placeholder frame regardless of the forecast; an absent
    /// forecast only degrades the sunrise/sunset readouts and the forecast
    /// band.
    pub fn render(
        &self,
        now: DateTime<Local>,
        station: Option<&StationSnapshot>,
        forecast: Option<&ForecastSnapshot>,
    ) -> RenderResult {
        match station {
            Some(station) => self.render_dashboard(now, station, forecast),
            None => self.render_placeholder(),
        }
    }

    fn render_dashboard(
        &self,
        now: DateTime<Local>,
        station: &StationSnapshot,
        forecast: Option<&ForecastSnapshot>,
    ) -> RenderResult {
        let mut root = Panel::new(Size::new(CANVAS_WIDTH, CANVAS_HEIGHT));
        root.add_child(self.build_header(now, forecast));
        root.add_child(build_indoor(station));
        root.add_child(build_outdoor(station));
        root.add_child(self.build_forecast(now, forecast));

        let mut frame = Frame::canvas();
        // Frame drawing is infallible; the tree only writes RAM.
        let _ = root.draw(&mut frame);

        let mut result = RenderResult::new(frame);
        result.add_region(HEADER_REGION);
        result.add_region(INDOOR_REGION);
        result.add_region(OUTDOOR_REGION);
        result.add_region(FORECAST_REGION);
        result
    }

    fn render_placeholder(&self) -> RenderResult {
        let mut frame = Frame::canvas();
        let style = MonoTextStyle::new(FontSize::Large.font(), Gray8::BLACK);
        let bounds = frame.bounds();
        let message = EgText::new(PLACEHOLDER_MESSAGE, Point::zero(), style).align_to(
            &bounds,
            horizontal::Center,
            vertical::Center,
        );
        let _ = message.draw(&mut frame);

        let mut result = RenderResult::new(frame);
        result.add_region(bounds);
        result
    }

    fn build_header(&self, now: DateTime<Local>, forecast: Option<&ForecastSnapshot>) -> Panel {
        let mut header = band(HEADER_REGION, false);

        let date_line = now.format_localized("%A, %d %B %Y", self.locale).to_string();
        header.add_child(
            Text::new(Size::new(500, 40), FontSize::Medium)
                .with_offset(50, 20)
                .with_text(date_line)
                .with_alignment(Alignment::Start, Alignment::Start),
        );
        header.add_child(
            Text::new(Size::new(200, 60), FontSize::Large)
                .with_offset(550, 50)
                .with_text(now.format("%H:%M").to_string())
                .with_alignment(Alignment::Start, Alignment::Start),
        );

        let sunrise = forecast
            .map(|f| f.sunrise.format("%H:%M").to_string())
            .unwrap_or_else(|| NONE_CLOCK.to_string());
        let sunset = forecast
            .map(|f| f.sunset.format("%H:%M").to_string())
            .unwrap_or_else(|| NONE_CLOCK.to_string());

        header.add_child(caption(100, 150, "sunrise"));
        header.add_child(
            Text::new(Size::new(80, 24), FontSize::Medium)
                .with_offset(180, 148)
                .with_text(sunrise)
                .with_alignment(Alignment::Start, Alignment::Start),
        );
        header.add_child(caption(350, 150, "sunset"));
        header.add_child(
            Text::new(Size::new(80, 24), FontSize::Medium)
                .with_offset(420, 148)
                .with_text(sunset)
                .with_alignment(Alignment::Start, Alignment::Start),
        );

        header
    }

    fn build_forecast(&self, now: DateTime<Local>, forecast: Option<&ForecastSnapshot>) -> Panel {
        let mut panel = band(FORECAST_REGION, true);

        let Some(forecast) = forecast else {
            panel.add_child(
                Text::new(Size::new(780, 180), FontSize::Medium)
                    .with_offset(10, 10)
                    .with_text("No forecast")
                    .with_alignment(Alignment::Center, Alignment::Center),
            );
            return panel;
        };

        panel.add_child(forecast_cell(
            0,
            "now",
            condition_label(forecast.code, forecast.is_day(now)),
        ));
        for (slot, entry) in forecast.entries.iter().enumerate() {
            panel.add_child(forecast_cell(
                (slot as i32 + 1) * FORECAST_CELL_WIDTH as i32,
                &entry.at.format("%H:%M").to_string(),
                condition_label(entry.code, forecast.is_day(entry.at)),
            ));
        }

        panel
    }
}

/// Panel spanning `region`, positioned absolutely on the canvas.
fn band(region: Rectangle, border: bool) -> Panel {
    Panel::new(region.size)
        .with_offset(region.top_left.x, region.top_left.y)
        .with_style(Style::new().with_border(border))
}

/// Small static label, top-left anchored.
fn caption(left: i32, top: i32, label: &str) -> Text {
    Text::new(Size::new(90, 20), FontSize::Small)
        .with_offset(left, top)
        .with_text(label)
        .with_alignment(Alignment::Start, Alignment::Start)
}

fn build_indoor(station: &StationSnapshot) -> Panel {
    let mut panel = band(INDOOR_REGION, true);

    panel.add_child(
        Text::new(Size::new(120, 40), FontSize::Large)
            .with_offset(150, 30)
            .with_text(format_temperature(station.indoor.temperature))
            .with_alignment(Alignment::Start, Alignment::Start),
    );
    panel.add_child(
        Text::new(Size::new(60, 30), FontSize::Medium)
            .with_offset(320, 30)
            .with_text("°C")
            .with_alignment(Alignment::Start, Alignment::Start),
    );
    panel.add_child(
        Text::new(Size::new(100, 24), FontSize::Medium)
            .with_offset(150, 112)
            .with_text(format_humidity(station.indoor.humidity))
            .with_alignment(Alignment::Start, Alignment::Start),
    );
    panel.add_child(
        Text::new(Size::new(70, 24), FontSize::Medium)
            .with_offset(260, 112)
            .with_text(format_co2(station.indoor.co2))
            .with_alignment(Alignment::Start, Alignment::Start),
    );
    panel.add_child(caption(330, 114, "ppm"));

    panel
}

fn build_outdoor(station: &StationSnapshot) -> Panel {
    let mut panel = band(OUTDOOR_REGION, true);

    panel.add_child(
        Text::new(Size::new(120, 40), FontSize::Large)
            .with_offset(110, 30)
            .with_text(format_temperature(station.outdoor.temperature))
            .with_alignment(Alignment::Start, Alignment::Start),
    );
    panel.add_child(
        Text::new(Size::new(60, 30), FontSize::Medium)
            .with_offset(280, 30)
            .with_text("°C")
            .with_alignment(Alignment::Start, Alignment::Start),
    );
    panel.add_child(
        Text::new(Size::new(100, 24), FontSize::Medium)
            .with_offset(110, 112)
            .with_text(format_humidity(station.outdoor.humidity))
            .with_alignment(Alignment::Start, Alignment::Start),
    );

    panel
}

/// One forecast cell: caption on top, condition label centered beneath.
fn forecast_cell(left: i32, label: &str, condition: &str) -> Panel {
    let mut cell = Panel::new(Size::new(FORECAST_CELL_WIDTH, 200))
        .with_offset(left, 0)
        .with_style(Style::new().with_border(true));
    cell.add_child(caption(20, 10, label));
    cell.add_child(
        Text::new(Size::new(180, 40), FontSize::Medium)
            .with_offset(10, 80)
            .with_text(condition)
            .with_alignment(Alignment::Center, Alignment::Center),
    );
    cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::demo::{demo_forecast, demo_station, empty_station};
    use crate::render::diff::{diff_regions, pixel_diff};
    use chrono::TimeZone;

    fn noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 2, 10, 12, 0, 0).unwrap()
    }

    fn desktop() -> Desktop {
        Desktop::new("cs_CZ")
    }

    #[test]
    fn test_dashboard_declares_four_tiling_regions() {
        let now = noon();
        let station = demo_station();
        let forecast = demo_forecast(now);
        let result = desktop().render(now, Some(&station), Some(&forecast));

        let regions = result.regions();
        assert_eq!(regions.len(), 4);

        let area: u32 = regions.iter().map(|r| r.size.width * r.size.height).sum();
        assert_eq!(area, CANVAS_WIDTH * CANVAS_HEIGHT, "regions cover the canvas");

        for (i, a) in regions.iter().enumerate() {
            assert_eq!(a.top_left.x % 8, 0, "region left edge byte-aligned");
            assert_eq!(a.size.width % 8, 0, "region width byte-aligned");
            for b in &regions[i + 1..] {
                assert!(
                    a.intersection(b).is_zero_sized(),
                    "regions must not overlap: {a:?} vs {b:?}"
                );
            }
        }
    }

    #[test]
    fn test_healthy_render_is_not_the_placeholder() {
        let now = noon();
        let station = demo_station();
        let forecast = demo_forecast(now);
        let dashboard = desktop().render(now, Some(&station), Some(&forecast));
        let placeholder = desktop().render(now, None, Some(&forecast));

        assert!(
            pixel_diff(dashboard.frame(), placeholder.frame()).is_some(),
            "dashboard must not show the no-data placeholder"
        );
    }

    #[test]
    fn test_absent_station_degrades_to_full_canvas_placeholder() {
        let result = desktop().render(noon(), None, None);
        assert_eq!(result.regions(), &[result.frame().bounds()]);

        // The message is centered, so ink must straddle the canvas center.
        let ink = pixel_diff(&Frame::canvas(), result.frame()).expect("placeholder drawn");
        let center = Point::new(CANVAS_WIDTH as i32 / 2, CANVAS_HEIGHT as i32 / 2);
        assert!(ink.top_left.x < center.x && ink.top_left.y < center.y);
        assert!(ink.bottom_right().expect("non-empty").x > center.x);
    }

    #[test]
    fn test_absent_forecast_keeps_dashboard_up() {
        let now = noon();
        let station = demo_station();
        let result = desktop().render(now, Some(&station), None);
        assert_eq!(result.regions().len(), 4, "only the forecast degrades");

        let with_forecast = desktop().render(now, Some(&station), Some(&demo_forecast(now)));
        assert!(
            pixel_diff(result.frame(), with_forecast.frame()).is_some(),
            "sunrise/sunset sentinels and forecast band must differ"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let now = noon();
        let station = demo_station();
        let forecast = demo_forecast(now);
        let a = desktop().render(now, Some(&station), Some(&forecast));
        let b = desktop().render(now, Some(&station), Some(&forecast));
        assert_eq!(pixel_diff(a.frame(), b.frame()), None);
    }

    #[test]
    fn test_identical_ticks_produce_no_patches() {
        let now = noon();
        let station = demo_station();
        let forecast = demo_forecast(now);
        let first = desktop().render(now, Some(&station), Some(&forecast));
        let second = desktop().render(now, Some(&station), Some(&forecast));

        let previous = first.into_frame();
        assert!(diff_regions(&second, &previous).is_empty());
    }

    #[test]
    fn test_sentinel_readings_render_differently_from_values() {
        let now = noon();
        let forecast = demo_forecast(now);
        let full = demo_station();
        let empty = empty_station();
        let a = desktop().render(now, Some(&full), Some(&forecast));
        let b = desktop().render(now, Some(&empty), Some(&forecast));
        let diff = pixel_diff(a.frame(), b.frame()).expect("sentinels change pixels");
        assert!(
            diff.top_left.y >= INDOOR_REGION.top_left.y,
            "only the reading bands change, not the header"
        );
    }

    #[test]
    fn test_recovery_after_placeholder_produces_large_diff() {
        let now = noon();
        let station = demo_station();
        let forecast = demo_forecast(now);
        let d = desktop();

        let placeholder = d.render(now, None, Some(&forecast)).into_frame();
        let recovered = d.render(now, Some(&station), Some(&forecast));

        let patches = diff_regions(&recovered, &placeholder);
        assert!(
            !patches.is_empty(),
            "a healthy tick after the placeholder must redraw"
        );
        let covered: u32 = patches
            .iter()
            .map(|p| p.area.size.width * p.area.size.height)
            .sum();
        assert!(
            covered > CANVAS_WIDTH * CANVAS_HEIGHT / 4,
            "recovering from the placeholder touches a large area"
        );
    }
}
