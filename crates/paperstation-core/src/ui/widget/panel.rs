//! Container widget
//!
//! A panel is a pure container: it draws its own decoration, then its
//! children in insertion order. Panels exclusively own their children.

use embedded_graphics::pixelcolor::Gray8;
use embedded_graphics::prelude::*;

use super::{NodeBase, Widget};
use crate::ui::style::Style;

#[derive(Debug, Clone)]
pub struct Panel {
    pub(crate) base: NodeBase,
    pub(crate) children: Vec<Widget>,
}

impl Panel {
    pub fn new(size: Size) -> Self {
        Self {
            base: NodeBase::new(size),
            children: Vec::new(),
        }
    }

    /// Set the local offset at construction time.
    ///
    /// The absolute offset is seeded with the same value so an orphan panel
    /// is positioned as if its parent sat at the canvas origin; attaching it
    /// to a parent recomputes the subtree.
    pub fn with_offset(mut self, left: i32, top: i32) -> Self {
        self.base.local = Point::new(left, top);
        self.base.abs = self.base.local;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.base.style = style;
        self
    }

    /// Append a child, immediately deriving its subtree's absolute offsets
    /// from this panel's current absolute offset. Insertion order is paint
    /// order.
    pub fn add_child(&mut self, child: impl Into<Widget>) {
        let mut child = child.into();
        child.attach_at(self.base.abs);
        self.children.push(child);
    }

    pub fn children(&self) -> &[Widget] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Widget] {
        &mut self.children
    }

    /// Toggle borders on every descendant (not this panel itself).
    pub fn set_children_border(&mut self, draw_border: bool) {
        for child in &mut self.children {
            child.set_border(draw_border);
            if let Widget::Panel(panel) = child {
                panel.set_children_border(draw_border);
            }
        }
    }

    pub fn draw<D: DrawTarget<Color = Gray8>>(&self, target: &mut D) -> Result<(), D::Error> {
        self.base.draw_decoration(target)?;
        for child in &self.children {
            child.draw(target)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::frame::Frame;
    use crate::ui::{FontSize, Style, Text};

    #[test]
    fn test_children_paint_in_insertion_order() {
        // Two coincident bordered panels with opposite colors: the later
        // child must win on shared pixels.
        let mut root = Panel::new(Size::new(32, 32));
        root.add_child(
            Panel::new(Size::new(16, 16)).with_style(
                Style::new()
                    .with_border(true)
                    .with_background(Gray8::BLACK)
                    .with_foreground(Gray8::BLACK),
            ),
        );
        root.add_child(
            Panel::new(Size::new(16, 16)).with_style(
                Style::new()
                    .with_border(true)
                    .with_background(Gray8::WHITE)
                    .with_foreground(Gray8::WHITE),
            ),
        );

        let mut frame = Frame::new(Size::new(32, 32));
        root.draw(&mut frame).unwrap();
        assert_eq!(frame.pixel(8, 8), Some(255), "later sibling paints on top");
    }

    #[test]
    fn test_border_strokes_absolute_rect() {
        let mut root = Panel::new(Size::new(64, 64));
        root.add_child(
            Panel::new(Size::new(10, 10))
                .with_offset(20, 30)
                .with_style(Style::new().with_border(true)),
        );

        let mut frame = Frame::new(Size::new(64, 64));
        root.draw(&mut frame).unwrap();

        assert_eq!(frame.pixel(20, 30), Some(0), "top-left corner stroked");
        assert_eq!(frame.pixel(29, 39), Some(0), "bottom-right corner stroked");
        assert_eq!(frame.pixel(25, 35), Some(255), "interior filled white");
        assert_eq!(frame.pixel(19, 30), Some(255), "outside stays blank");
    }

    #[test]
    fn test_set_children_border_is_recursive() {
        let mut inner = Panel::new(Size::new(20, 20));
        inner.add_child(Text::new(Size::new(10, 10), FontSize::Small));
        let mut root = Panel::new(Size::new(40, 40));
        root.add_child(inner);

        root.set_children_border(true);

        let Widget::Panel(inner) = &root.children()[0] else {
            unreachable!()
        };
        let grandchild = &inner.children()[0];
        let rect = grandchild.absolute_rect();
        let mut frame = Frame::new(Size::new(40, 40));
        root.draw(&mut frame).unwrap();
        assert_eq!(
            frame.pixel(rect.top_left.x as u32, rect.top_left.y as u32),
            Some(0),
            "grandchild border enabled"
        );
    }
}
