//! Widget tree primitives
//!
//! The dashboard is composed from a small tree of concrete widgets. Because
//! `DrawTarget` is generic, a `Drawable`-style trait would not be object
//! safe; [`Widget`] is the enum alternative that lets panels own
//! heterogeneous children without trait objects.
//!
//! # Coordinate model
//!
//! Every widget stores a fixed size, a *local* offset relative to its parent
//! and a cached *absolute* offset in canvas coordinates. The cache satisfies
//! `abs == parent.abs + local` for every node of the tree at all times:
//! [`Panel::add_child`] derives the child subtree's absolute offsets
//! immediately, and [`Widget::set_offset`] eagerly recomputes the whole
//! subtree. There is no lazy invalidation.
//!
//! Trees are write-once-then-drawn: there is no child removal, and insertion
//! order is paint order (later children paint on top).

pub mod panel;
pub mod text;

pub use panel::Panel;
pub use text::Text;

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Gray8;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, Rectangle, StrokeAlignment};

use super::style::Style;

/// Placement of content along one axis of a widget's box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Left or top edge.
    Start,
    /// Centered.
    Center,
    /// Right or bottom edge.
    End,
}

/// Size, offsets and paint style shared by every widget kind.
#[derive(Debug, Clone)]
pub(crate) struct NodeBase {
    pub(crate) size: Size,
    pub(crate) local: Point,
    pub(crate) abs: Point,
    pub(crate) style: Style,
}

impl NodeBase {
    pub(crate) fn new(size: Size) -> Self {
        Self {
            size,
            local: Point::zero(),
            abs: Point::zero(),
            style: Style::default(),
        }
    }

    pub(crate) fn absolute_rect(&self) -> Rectangle {
        Rectangle::new(self.abs, self.size)
    }

    /// Stroke the widget's rectangle over a background fill, if enabled.
    pub(crate) fn draw_decoration<D: DrawTarget<Color = Gray8>>(
        &self,
        target: &mut D,
    ) -> Result<(), D::Error> {
        if !self.style.draw_border {
            return Ok(());
        }

        let style = PrimitiveStyleBuilder::new()
            .fill_color(self.style.background)
            .stroke_color(self.style.foreground)
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        self.absolute_rect().into_styled(style).draw(target)
    }
}

/// A node of the widget tree.
#[derive(Debug, Clone)]
pub enum Widget {
    Panel(Panel),
    Text(Text),
}

impl Widget {
    fn base(&self) -> &NodeBase {
        match self {
            Widget::Panel(panel) => &panel.base,
            Widget::Text(text) => &text.base,
        }
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        match self {
            Widget::Panel(panel) => &mut panel.base,
            Widget::Text(text) => &mut text.base,
        }
    }

    pub fn size(&self) -> Size {
        self.base().size
    }

    pub fn local_offset(&self) -> Point {
        self.base().local
    }

    pub fn absolute_offset(&self) -> Point {
        self.base().abs
    }

    /// Absolute rectangle of this widget in canvas coordinates.
    pub fn absolute_rect(&self) -> Rectangle {
        self.base().absolute_rect()
    }

    /// Move this widget to a new local offset.
    ///
    /// The absolute-offset cache of the entire subtree is recomputed
    /// immediately; the parent's position is recovered from the current
    /// cache, so the invariant holds without a back-pointer.
    pub fn set_offset(&mut self, left: i32, top: i32) {
        let parent_abs = self.base().abs - self.base().local;
        self.base_mut().local = Point::new(left, top);
        self.attach_at(parent_abs);
    }

    /// Recompute absolute offsets for this widget and all descendants,
    /// assuming the parent sits at `parent_abs`.
    pub(crate) fn attach_at(&mut self, parent_abs: Point) {
        let abs = parent_abs + self.base().local;
        self.base_mut().abs = abs;
        if let Widget::Panel(panel) = self {
            for child in &mut panel.children {
                child.attach_at(abs);
            }
        }
    }

    /// Toggle the border of this widget only.
    pub fn set_border(&mut self, draw_border: bool) {
        self.base_mut().style.draw_border = draw_border;
    }

    /// Draw this widget and, for panels, its children in insertion order.
    pub fn draw<D: DrawTarget<Color = Gray8>>(&self, target: &mut D) -> Result<(), D::Error> {
        match self {
            Widget::Panel(panel) => panel.draw(target),
            Widget::Text(text) => text.draw(target),
        }
    }
}

impl From<Panel> for Widget {
    fn from(panel: Panel) -> Self {
        Widget::Panel(panel)
    }
}

impl From<Text> for Widget {
    fn from(text: Text) -> Self {
        Widget::Text(text)
    }
}
