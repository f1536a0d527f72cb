//! Monospace font handles for text widgets
//!
//! Three preset sizes backed by the embedded-graphics ISO 8859-2 fonts,
//! which cover the diacritics of the Central European locale used for the
//! date line. Monospace metrics make ink measurement exact: the ink box of a
//! string is `chars × advance` wide and one glyph tall.

use embedded_graphics::geometry::Size;
use embedded_graphics::mono_font::{MonoFont, iso_8859_2};

/// Font size variants used across the dashboard.
///
/// - `Small`: 6×13, unit suffixes and cell captions
/// - `Medium`: 9×18, date line, humidity and forecast rows
/// - `Large`: 10×20, clock and temperature readouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Small,
    Medium,
    Large,
}

impl FontSize {
    pub fn font(&self) -> &'static MonoFont<'static> {
        match self {
            FontSize::Small => &iso_8859_2::FONT_6X13,
            FontSize::Medium => &iso_8859_2::FONT_9X18,
            FontSize::Large => &iso_8859_2::FONT_10X20,
        }
    }

    /// Ink bounding box of `text` under this font.
    ///
    /// Trailing inter-character spacing is not part of the ink box. The
    /// empty string measures zero by zero.
    pub fn measure(&self, text: &str) -> Size {
        let font = self.font();
        let count = text.chars().count() as u32;
        if count == 0 {
            return Size::zero();
        }

        let advance = font.character_size.width + font.character_spacing;
        let width = count * advance - font.character_spacing;
        Size::new(width, font.character_size.height)
    }
}
