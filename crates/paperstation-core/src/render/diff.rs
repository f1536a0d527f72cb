//! Per-region change detection between consecutive frames.
//!
//! The e-paper bus is slow, so unchanged screen zones are never re-sent.
//! For every region of interest declared by the renderer, both frames are
//! cropped, compared pixel by pixel, and the tight difference rectangle is
//! stretched outward to the display's 8-pixel line-buffer granularity
//! before the matching patch of new pixels is emitted.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::frame::{Frame, RenderResult};

/// Horizontal update granularity of the display line buffer, in pixels.
pub const BYTE_ALIGN_PX: i32 = 8;

/// A changed rectangle in canvas coordinates plus the new pixels for it.
#[derive(Debug, Clone)]
pub struct Patch {
    pub area: Rectangle,
    pub image: Frame,
}

/// Stretch the horizontal span of `rect` outward to byte boundaries.
///
/// The left edge moves down to the nearest multiple of 8, the right edge up
/// to the next multiple of 8 at or above it. Vertical bounds are untouched.
/// Zero-sized rectangles pass through unchanged.
pub fn align_to_byte_boundary(rect: &Rectangle) -> Rectangle {
    if rect.size.width == 0 || rect.size.height == 0 {
        return *rect;
    }

    let left = rect.top_left.x.div_euclid(BYTE_ALIGN_PX) * BYTE_ALIGN_PX;
    let right = rect.top_left.x + rect.size.width as i32;
    let right = right.div_euclid(BYTE_ALIGN_PX) * BYTE_ALIGN_PX
        + if right.rem_euclid(BYTE_ALIGN_PX) == 0 {
            0
        } else {
            BYTE_ALIGN_PX
        };

    Rectangle::new(
        Point::new(left, rect.top_left.y),
        Size::new((right - left) as u32, rect.size.height),
    )
}

/// Tight bounding box of the pixels where `a` and `b` differ.
///
/// Returns `None` when the frames are pixel-identical. Frames of different
/// sizes are treated as entirely changed.
pub fn pixel_diff(a: &Frame, b: &Frame) -> Option<Rectangle> {
    if a.size() != b.size() {
        return Some(b.bounds());
    }

    let width = a.width() as usize;
    let (mut min_x, mut min_y) = (usize::MAX, usize::MAX);
    let (mut max_x, mut max_y) = (0usize, 0usize);
    let mut changed = false;

    for (idx, (pa, pb)) in a.as_bytes().iter().zip(b.as_bytes()).enumerate() {
        if pa != pb {
            let x = idx % width;
            let y = idx / width;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
            changed = true;
        }
    }

    changed.then(|| {
        Rectangle::new(
            Point::new(min_x as i32, min_y as i32),
            Size::new((max_x - min_x + 1) as u32, (max_y - min_y + 1) as u32),
        )
    })
}

/// Compare the new frame against the previous one region by region.
///
/// Each declared region is byte-aligned, cropped out of both frames and
/// pixel-diffed. Regions with a difference emit the aligned difference
/// rectangle translated back to canvas coordinates, together with the
/// corresponding pixels cropped from the new frame. Unchanged regions emit
/// nothing.
pub fn diff_regions(new: &RenderResult, previous: &Frame) -> Vec<Patch> {
    let mut patches = Vec::new();
    let canvas = new.frame().bounds();

    for region in new.regions() {
        let banded = align_to_byte_boundary(region).intersection(&canvas);
        let new_crop = new.frame().crop(&banded);
        let prev_crop = previous.crop(&banded);

        let Some(diff) = pixel_diff(&new_crop, &prev_crop) else {
            continue;
        };

        // Align in region-local coordinates, then clamp back inside the
        // (already aligned) region so the patch stays croppable.
        let aligned = align_to_byte_boundary(&diff).intersection(&new_crop.bounds());
        let image = new_crop.crop(&aligned);
        let area = Rectangle::new(banded.top_left + aligned.top_left, aligned.size);
        patches.push(Patch { area, image });
    }

    patches
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::pixelcolor::Gray8;

    fn blacken(frame: &mut Frame, x: i32, y: i32, w: u32, h: u32) {
        frame
            .fill_solid(
                &Rectangle::new(Point::new(x, y), Size::new(w, h)),
                Gray8::BLACK,
            )
            .unwrap();
    }

    #[test]
    fn test_align_stretches_outward_to_multiples_of_eight() {
        let rect = Rectangle::new(Point::new(10, 3), Size::new(3, 7));
        let aligned = align_to_byte_boundary(&rect);
        assert_eq!(aligned.top_left, Point::new(8, 3));
        assert_eq!(aligned.size, Size::new(8, 7), "13 rounds up to 16");
    }

    #[test]
    fn test_align_preserves_aligned_rects() {
        let rect = Rectangle::new(Point::new(16, 5), Size::new(24, 9));
        assert_eq!(align_to_byte_boundary(&rect), rect);
    }

    #[test]
    fn test_align_properties_hold_across_offsets() {
        for left in 0..40 {
            for width in 1..40u32 {
                let rect = Rectangle::new(Point::new(left, 2), Size::new(width, 5));
                let aligned = align_to_byte_boundary(&rect);
                let right = aligned.top_left.x + aligned.size.width as i32;

                assert_eq!(aligned.top_left.x % 8, 0);
                assert!(aligned.top_left.x <= rect.top_left.x);
                assert_eq!(right % 8, 0);
                assert!(right >= rect.top_left.x + rect.size.width as i32);
                assert_eq!(aligned.top_left.y, rect.top_left.y);
                assert_eq!(aligned.size.height, rect.size.height);
            }
        }
    }

    #[test]
    fn test_align_passes_empty_through() {
        let empty = Rectangle::new(Point::new(11, 4), Size::zero());
        assert_eq!(align_to_byte_boundary(&empty), empty);
        assert_eq!(None.map(|r| align_to_byte_boundary(&r)), None::<Rectangle>);
    }

    #[test]
    fn test_pixel_diff_identity_is_none() {
        let frame = Frame::new(Size::new(32, 32));
        assert_eq!(pixel_diff(&frame, &frame.clone()), None);
    }

    #[test]
    fn test_pixel_diff_single_pixel_is_tight() {
        let a = Frame::new(Size::new(32, 32));
        let mut b = a.clone();
        blacken(&mut b, 13, 21, 1, 1);

        let diff = pixel_diff(&a, &b).expect("one pixel differs");
        assert_eq!(
            diff,
            Rectangle::new(Point::new(13, 21), Size::new(1, 1)),
            "smallest rectangle containing the changed pixel"
        );
    }

    #[test]
    fn test_pixel_diff_spans_scattered_changes() {
        let a = Frame::new(Size::new(64, 64));
        let mut b = a.clone();
        blacken(&mut b, 2, 50, 1, 1);
        blacken(&mut b, 40, 10, 1, 1);

        let diff = pixel_diff(&a, &b).expect("pixels differ");
        assert_eq!(diff.top_left, Point::new(2, 10));
        assert_eq!(diff.size, Size::new(39, 41));
    }

    fn result_with_regions(frame: Frame) -> RenderResult {
        let mut result = RenderResult::new(frame);
        result.add_region(Rectangle::new(Point::zero(), Size::new(32, 64)));
        result.add_region(Rectangle::new(Point::new(32, 0), Size::new(32, 64)));
        result
    }

    #[test]
    fn test_diff_regions_unchanged_emits_nothing() {
        let frame = Frame::new(Size::new(64, 64));
        let result = result_with_regions(frame.clone());
        assert!(diff_regions(&result, &frame).is_empty());
    }

    #[test]
    fn test_diff_regions_translates_to_canvas_coordinates() {
        let previous = Frame::new(Size::new(64, 64));
        let mut frame = previous.clone();
        // Change confined to the second region.
        blacken(&mut frame, 42, 20, 3, 4);

        let patches = diff_regions(&result_with_regions(frame), &previous);
        assert_eq!(patches.len(), 1, "only the changed region may emit");

        let patch = &patches[0];
        assert_eq!(patch.area.top_left, Point::new(40, 20), "42 aligns to 40");
        assert_eq!(patch.area.size, Size::new(8, 4), "45 aligns to 48");
        assert_eq!(patch.image.width(), 8);
        assert_eq!(patch.image.height(), 4);
        assert_eq!(patch.image.pixel(2, 0), Some(0), "canvas x=42 is ink");
        assert_eq!(patch.image.pixel(0, 0), Some(255), "canvas x=40 is blank");
    }

    #[test]
    fn test_diff_regions_emits_one_patch_per_changed_region() {
        let previous = Frame::new(Size::new(64, 64));
        let mut frame = previous.clone();
        blacken(&mut frame, 1, 1, 2, 2);
        blacken(&mut frame, 50, 50, 2, 2);

        let patches = diff_regions(&result_with_regions(frame), &previous);
        assert_eq!(patches.len(), 2);
        assert!(patches[0].area.top_left.x < 32);
        assert!(patches[1].area.top_left.x >= 32);
    }
}
