//! Paint style configuration for widgets
//!
//! A reduced style model for a single-channel greyscale panel: a border
//! switch plus background and foreground luma values. Use the builder
//! methods to configure styles incrementally.

use embedded_graphics::pixelcolor::{Gray8, GrayColor};

/// Visual style of a widget.
///
/// # Examples
///
/// ```ignore
/// let bordered = Style::new().with_border(true);
/// let inverted = Style::new()
///     .with_background(Gray8::BLACK)
///     .with_foreground(Gray8::WHITE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Stroke the widget's absolute rectangle when drawing.
    pub draw_border: bool,

    /// Fill color behind bordered widgets.
    pub background: Gray8,

    /// Color used for border strokes and text ink.
    pub foreground: Gray8,
}

impl Default for Style {
    /// White background, black ink, no border.
    fn default() -> Self {
        Self {
            draw_border: false,
            background: Gray8::WHITE,
            foreground: Gray8::BLACK,
        }
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_border(mut self, draw_border: bool) -> Self {
        self.draw_border = draw_border;
        self
    }

    pub fn with_background(mut self, background: Gray8) -> Self {
        self.background = background;
        self
    }

    pub fn with_foreground(mut self, foreground: Gray8) -> Self {
        self.foreground = foreground;
        self
    }
}
