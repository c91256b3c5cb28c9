// SPDX-License-Identifier: GPL-3.0-or-later
// src/geometry.rs
//
// Display-space rectangles, source-space pixel regions, and the
// per-axis scale factors that relate the two.

// ============================================================================
// Crop Rectangle (display space)
// ============================================================================

/// Crop rectangle in display-space units.
///
/// Floating point because the preview canvas is a scaled-down view of the
/// source image; sub-pixel positions are meaningful until extraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl CropRect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge coordinate.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge coordinate.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Check whether a point lies strictly inside the rectangle.
    ///
    /// Strict so that points on the border belong to the handles, not to
    /// the move area.
    #[must_use]
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px > self.x && px < self.right() && py > self.y && py < self.bottom()
    }

    /// Width over height.
    #[must_use]
    pub fn ratio(&self) -> f32 {
        self.w / self.h
    }
}

// ============================================================================
// Pixel Region (source space)
// ============================================================================

/// Crop region in source-image pixel coordinates.
///
/// Pure domain model - represents a rectangular region to extract.
/// No display concerns, just data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn as_tuple(&self) -> (u32, u32, u32, u32) {
        (self.x, self.y, self.width, self.height)
    }

    /// Check if region has valid dimensions.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

// ============================================================================
// Scale
// ============================================================================

/// Per-axis scale factors from display space to source space.
///
/// Computed once when an image is loaded against a display canvas and held
/// fixed for the session, so mapped coordinates never drift mid-drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub sx: f32,
    pub sy: f32,
}

impl Scale {
    /// Scale factors for a source image shown on a display canvas.
    #[must_use]
    pub fn new(img_w: u32, img_h: u32, canvas_w: f32, canvas_h: f32) -> Self {
        Self {
            sx: img_w as f32 / canvas_w,
            sy: img_h as f32 / canvas_h,
        }
    }

    /// Map a display-space rectangle to source space.
    #[must_use]
    pub fn to_source(&self, rect: &CropRect) -> (f32, f32, f32, f32) {
        (
            rect.x * self.sx,
            rect.y * self.sy,
            rect.w * self.sx,
            rect.h * self.sy,
        )
    }

    /// Map a source-space rectangle back to display space.
    #[must_use]
    pub fn to_display(&self, x: f32, y: f32, w: f32, h: f32) -> CropRect {
        CropRect::new(x / self.sx, y / self.sy, w / self.sx, h / self.sy)
    }

    /// Map a display-space rectangle to whole source pixels.
    ///
    /// Each component rounds to the nearest pixel, so the extracted bitmap
    /// is exactly `round(w*sx) x round(h*sy)`.
    #[must_use]
    pub fn to_region(&self, rect: &CropRect) -> PixelRegion {
        let (x, y, w, h) = self.to_source(rect);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        PixelRegion::new(
            x.round() as u32,
            y.round() as u32,
            w.round() as u32,
            h.round() as u32,
        )
    }
}

/// Canvas dimensions for a source image under a display-width constraint.
///
/// The canvas never exceeds the image's native width, and its height keeps
/// the image's aspect.
#[must_use]
pub fn fit_canvas(img_w: u32, img_h: u32, display_w: f32) -> (f32, f32) {
    let canvas_w = display_w.min(img_w as f32);
    let canvas_h = canvas_w * img_h as f32 / img_w as f32;
    (canvas_w, canvas_h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::COORD_EPSILON;

    // ── CropRect ────────────────────────────────────────────────────────

    #[test]
    fn contains_is_strict() {
        let r = CropRect::new(10.0, 10.0, 100.0, 100.0);
        assert!(r.contains(50.0, 50.0));
        assert!(!r.contains(10.0, 50.0)); // left border
        assert!(!r.contains(110.0, 50.0)); // right border
        assert!(!r.contains(50.0, 10.0)); // top border
        assert!(!r.contains(5.0, 50.0));
    }

    #[test]
    fn center_of_rect() {
        let r = CropRect::new(10.0, 20.0, 100.0, 60.0);
        assert_eq!(r.center(), (60.0, 50.0));
    }

    // ── Scale ───────────────────────────────────────────────────────────

    #[test]
    fn to_source_doubles_on_half_scale_preview() {
        // 1000x1000 source on a 500x500 canvas: sx = sy = 2.
        let scale = Scale::new(1000, 1000, 500.0, 500.0);
        let rect = CropRect::new(100.0, 100.0, 450.0, 450.0);
        assert_eq!(scale.to_source(&rect), (200.0, 200.0, 900.0, 900.0));
    }

    #[test]
    fn to_region_rounds_to_nearest_pixel() {
        let scale = Scale::new(999, 999, 500.0, 500.0);
        let rect = CropRect::new(50.0, 50.0, 400.0, 400.0);
        let region = scale.to_region(&rect);
        // 50 * 1.998 = 99.9 -> 100, 400 * 1.998 = 799.2 -> 799.
        assert_eq!(region.as_tuple(), (100, 100, 799, 799));
    }

    #[test]
    fn display_source_round_trip() {
        let scale = Scale::new(1600, 1200, 640.0, 480.0);
        let rect = CropRect::new(37.5, 12.25, 301.0, 222.75);
        let (x, y, w, h) = scale.to_source(&rect);
        let back = scale.to_display(x, y, w, h);
        assert!((back.x - rect.x).abs() < COORD_EPSILON);
        assert!((back.y - rect.y).abs() < COORD_EPSILON);
        assert!((back.w - rect.w).abs() < COORD_EPSILON);
        assert!((back.h - rect.h).abs() < COORD_EPSILON);
    }

    // ── fit_canvas ──────────────────────────────────────────────────────

    #[test]
    fn fit_canvas_respects_display_width() {
        assert_eq!(fit_canvas(1000, 1000, 500.0), (500.0, 500.0));
        assert_eq!(fit_canvas(1600, 800, 640.0), (640.0, 320.0));
    }

    #[test]
    fn fit_canvas_never_upsizes_past_native_width() {
        assert_eq!(fit_canvas(300, 150, 500.0), (300.0, 150.0));
    }

    // ── PixelRegion ─────────────────────────────────────────────────────

    #[test]
    fn degenerate_region_is_invalid() {
        assert!(!PixelRegion::new(0, 0, 0, 10).is_valid());
        assert!(!PixelRegion::new(0, 0, 10, 0).is_valid());
        assert!(PixelRegion::new(0, 0, 1, 1).is_valid());
    }
}
