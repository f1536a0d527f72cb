//! Text widget
//!
//! Draws a single string inside its box with independent horizontal and
//! vertical alignment. The placement policy is fits-or-nothing: if the
//! measured ink box exceeds the declared box in either dimension the widget
//! draws nothing at all. There is no clipping and no truncation, and the
//! skip is deliberately not logged; the dashboard's layout constants are
//! hand-tuned around this behavior.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Gray8;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text as EgText, TextStyleBuilder};

use super::{Alignment, NodeBase};
use crate::ui::fonts::FontSize;
use crate::ui::style::Style;

#[derive(Debug, Clone)]
pub struct Text {
    pub(crate) base: NodeBase,
    text: String,
    font: FontSize,
    horizontal: Alignment,
    vertical: Alignment,
}

impl Text {
    /// Create an empty text widget. Both alignments default to centered.
    pub fn new(size: Size, font: FontSize) -> Self {
        Self {
            base: NodeBase::new(size),
            text: String::new(),
            font,
            horizontal: Alignment::Center,
            vertical: Alignment::Center,
        }
    }

    /// Set the local offset at construction time (see [`super::Panel::with_offset`]).
    pub fn with_offset(mut self, left: i32, top: i32) -> Self {
        self.base.local = Point::new(left, top);
        self.base.abs = self.base.local;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_alignment(mut self, horizontal: Alignment, vertical: Alignment) -> Self {
        self.horizontal = horizontal;
        self.vertical = vertical;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.base.style = style;
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn draw<D: DrawTarget<Color = Gray8>>(&self, target: &mut D) -> Result<(), D::Error> {
        self.base.draw_decoration(target)?;

        let ink = self.font.measure(&self.text);
        if ink.width == 0 {
            return Ok(());
        }
        // Fits-or-nothing: an oversized string is skipped entirely.
        if ink.width > self.base.size.width || ink.height > self.base.size.height {
            return Ok(());
        }

        let x = self.base.abs.x
            + match self.horizontal {
                Alignment::Start => 0,
                Alignment::Center => ((self.base.size.width - ink.width) / 2) as i32,
                Alignment::End => (self.base.size.width - ink.width) as i32,
            };
        let y = self.base.abs.y
            + match self.vertical {
                Alignment::Start => 0,
                // One-pixel upward correction: monospace glyphs carry more
                // headroom than descender room, so true centering sits a
                // pixel high.
                Alignment::Center => ((self.base.size.height - ink.height) / 2) as i32 - 1,
                Alignment::End => (self.base.size.height - ink.height) as i32,
            };

        let character_style = MonoTextStyle::new(self.font.font(), self.base.style.foreground);
        let text_style = TextStyleBuilder::new().baseline(Baseline::Top).build();
        EgText::with_text_style(&self.text, Point::new(x, y), character_style, text_style)
            .draw(target)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::diff::pixel_diff;
    use crate::render::frame::Frame;
    use embedded_graphics::primitives::{ContainsPoint, Rectangle};

    const BOX: Size = Size::new(100, 50);

    fn draw_aligned(horizontal: Alignment, vertical: Alignment) -> Option<Rectangle> {
        let widget = Text::new(BOX, FontSize::Small)
            .with_text("AB")
            .with_alignment(horizontal, vertical);
        let mut frame = Frame::new(BOX);
        widget.draw(&mut frame).unwrap();
        pixel_diff(&Frame::new(BOX), &frame)
    }

    #[test]
    fn test_oversized_text_draws_nothing() {
        let widget = Text::new(Size::new(20, 10), FontSize::Large)
            .with_text("much too long for this box");
        let mut frame = Frame::new(Size::new(20, 10));
        widget.draw(&mut frame).unwrap();
        assert_eq!(
            pixel_diff(&Frame::new(Size::new(20, 10)), &frame),
            None,
            "ink exceeding the box must skip drawing entirely"
        );
    }

    #[test]
    fn test_exact_fit_still_draws() {
        // "AB" in 6x13 measures exactly 12x13.
        let widget = Text::new(Size::new(12, 13), FontSize::Small)
            .with_text("AB")
            .with_alignment(Alignment::Start, Alignment::Start);
        let mut frame = Frame::new(Size::new(12, 13));
        widget.draw(&mut frame).unwrap();
        assert!(pixel_diff(&Frame::new(Size::new(12, 13)), &frame).is_some());
    }

    #[test]
    fn test_start_alignment_anchors_top_left() {
        let ink = draw_aligned(Alignment::Start, Alignment::Start).expect("ink drawn");
        let expected = Rectangle::new(Point::zero(), Size::new(12, 13));
        assert!(
            expected.contains(ink.top_left),
            "ink {ink:?} must start inside the glyph cell at the origin"
        );
        let bottom_right = ink.top_left + Point::new(ink.size.width as i32, ink.size.height as i32);
        assert!(bottom_right.x <= 12 && bottom_right.y <= 13);
    }

    #[test]
    fn test_center_alignment_offsets_by_half_slack() {
        let start = draw_aligned(Alignment::Start, Alignment::Start).expect("ink drawn");
        let center = draw_aligned(Alignment::Center, Alignment::Center).expect("ink drawn");
        // Box 100x50, ink 12x13: horizontal slack/2 = 44, vertical
        // slack/2 - 1 = 17.
        assert_eq!(center.top_left - start.top_left, Point::new(44, 17));
        assert_eq!(center.size, start.size, "alignment must not reshape ink");
    }

    #[test]
    fn test_end_alignment_offsets_by_full_slack() {
        let start = draw_aligned(Alignment::Start, Alignment::Start).expect("ink drawn");
        let end = draw_aligned(Alignment::End, Alignment::End).expect("ink drawn");
        assert_eq!(end.top_left - start.top_left, Point::new(88, 37));
    }

    #[test]
    fn test_text_anchors_at_absolute_offset() {
        let mut panel = crate::ui::Panel::new(Size::new(400, 200)).with_offset(100, 200);
        panel.add_child(
            Text::new(Size::new(60, 20), FontSize::Small)
                .with_offset(10, 20)
                .with_text("X")
                .with_alignment(Alignment::Start, Alignment::Start),
        );

        let mut frame = Frame::new(Size::new(800, 600));
        panel.draw(&mut frame).unwrap();
        let ink = pixel_diff(&Frame::new(Size::new(800, 600)), &frame).expect("ink drawn");
        let cell = Rectangle::new(Point::new(110, 220), Size::new(6, 13));
        assert!(
            cell.contains(ink.top_left),
            "glyph at {ink:?} must sit in the cell anchored at (110, 220)"
        );
    }
}
