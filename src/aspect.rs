// SPDX-License-Identifier: GPL-3.0-or-later
// src/aspect.rs
//
// Aspect-ratio presets and the re-derivation applied when the preset
// changes while a rectangle exists.

use crate::geometry::CropRect;

/// Aspect-ratio constraint for resize operations.
///
/// `Free` places no constraint; the fixed presets force width/height to a
/// given ratio for every accepted resize until the preset changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AspectRatio {
    #[default]
    Free,
    Square,
    FourThree,
    ThreeFour,
    SixteenNine,
    NineSixteen,
}

impl AspectRatio {
    /// All presets in menu order.
    pub const ALL: [AspectRatio; 6] = [
        AspectRatio::Free,
        AspectRatio::Square,
        AspectRatio::FourThree,
        AspectRatio::ThreeFour,
        AspectRatio::SixteenNine,
        AspectRatio::NineSixteen,
    ];

    /// The width/height ratio, or `None` when unconstrained.
    #[must_use]
    pub fn ratio(&self) -> Option<f32> {
        match self {
            AspectRatio::Free => None,
            AspectRatio::Square => Some(1.0),
            AspectRatio::FourThree => Some(4.0 / 3.0),
            AspectRatio::ThreeFour => Some(3.0 / 4.0),
            AspectRatio::SixteenNine => Some(16.0 / 9.0),
            AspectRatio::NineSixteen => Some(9.0 / 16.0),
        }
    }

    /// Parse a preset label such as `"1:1"` or `"16:9"`.
    ///
    /// Unrecognized labels fall back to `Free`; the caller keeps working
    /// with an unconstrained rectangle rather than failing.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "Free" => AspectRatio::Free,
            "1:1" => AspectRatio::Square,
            "4:3" => AspectRatio::FourThree,
            "3:4" => AspectRatio::ThreeFour,
            "16:9" => AspectRatio::SixteenNine,
            "9:16" => AspectRatio::NineSixteen,
            other => {
                log::warn!("Unrecognized aspect ratio '{other}', using Free");
                AspectRatio::Free
            }
        }
    }

    /// The preset's label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::Free => "Free",
            AspectRatio::Square => "1:1",
            AspectRatio::FourThree => "4:3",
            AspectRatio::ThreeFour => "3:4",
            AspectRatio::SixteenNine => "16:9",
            AspectRatio::NineSixteen => "9:16",
        }
    }
}

/// Re-derive a rectangle after a preset change.
///
/// Keeps the old center and shrinks the non-driving dimension to the
/// largest rectangle with the new ratio that fits in the old bounding box.
/// The caller applies the boundary clamp afterwards.
#[must_use]
pub fn rederive_rect(rect: &CropRect, ratio: f32) -> CropRect {
    let (cx, cy) = rect.center();

    let (w, h) = if rect.ratio() > ratio {
        (rect.h * ratio, rect.h)
    } else {
        (rect.w, rect.w / ratio)
    };

    CropRect::new(cx - w / 2.0, cy - h / 2.0, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::{COORD_EPSILON, RATIO_EPSILON};

    // ── parsing ─────────────────────────────────────────────────────────

    #[test]
    fn label_round_trip() {
        for preset in AspectRatio::ALL {
            assert_eq!(AspectRatio::from_label(preset.label()), preset);
        }
    }

    #[test]
    fn unknown_label_falls_back_to_free() {
        assert_eq!(AspectRatio::from_label("2:35"), AspectRatio::Free);
        assert_eq!(AspectRatio::from_label(""), AspectRatio::Free);
    }

    // ── rederive_rect ───────────────────────────────────────────────────

    #[test]
    fn wide_rect_to_square_shrinks_width() {
        let rect = CropRect::new(0.0, 0.0, 200.0, 100.0);
        let out = rederive_rect(&rect, 1.0);
        assert_eq!((out.w, out.h), (100.0, 100.0));
        // Center preserved.
        assert_eq!(out.center(), rect.center());
    }

    #[test]
    fn tall_rect_to_landscape_shrinks_height() {
        let rect = CropRect::new(10.0, 10.0, 120.0, 300.0);
        let out = rederive_rect(&rect, 16.0 / 9.0);
        assert_eq!(out.w, 120.0);
        assert!((out.ratio() - 16.0 / 9.0).abs() < RATIO_EPSILON);
        let (cx, cy) = rect.center();
        let (ox, oy) = out.center();
        assert!((cx - ox).abs() < COORD_EPSILON);
        assert!((cy - oy).abs() < COORD_EPSILON);
    }

    #[test]
    fn rect_already_at_ratio_is_unchanged() {
        let rect = CropRect::new(20.0, 20.0, 160.0, 90.0);
        let out = rederive_rect(&rect, 16.0 / 9.0);
        assert!((out.w - rect.w).abs() < COORD_EPSILON);
        assert!((out.h - rect.h).abs() < COORD_EPSILON);
    }
}
