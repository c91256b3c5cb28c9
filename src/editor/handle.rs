// SPDX-License-Identifier: GPL-3.0-or-later
// src/editor/handle.rs
//
// Resize handles, pointer hit testing, and cursor hint classification.

use crate::constant::HANDLE_SIZE;
use crate::geometry::CropRect;

/// One of the eight fixed grab points on the rectangle's border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragHandle {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
}

impl DragHandle {
    /// Handles in hit-test priority order, corners before edge midpoints.
    pub const ALL: [DragHandle; 8] = [
        DragHandle::TopLeft,
        DragHandle::TopRight,
        DragHandle::BottomLeft,
        DragHandle::BottomRight,
        DragHandle::Top,
        DragHandle::Bottom,
        DragHandle::Left,
        DragHandle::Right,
    ];

    /// The handle's anchor point on a rectangle.
    #[must_use]
    pub fn anchor(&self, rect: &CropRect) -> (f32, f32) {
        match self {
            DragHandle::TopLeft => (rect.x, rect.y),
            DragHandle::TopRight => (rect.right(), rect.y),
            DragHandle::BottomLeft => (rect.x, rect.bottom()),
            DragHandle::BottomRight => (rect.right(), rect.bottom()),
            DragHandle::Top => (rect.x + rect.w / 2.0, rect.y),
            DragHandle::Bottom => (rect.x + rect.w / 2.0, rect.bottom()),
            DragHandle::Left => (rect.x, rect.y + rect.h / 2.0),
            DragHandle::Right => (rect.right(), rect.y + rect.h / 2.0),
        }
    }
}

/// Classification of a pointer position against the rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Pointer is within a handle's square.
    Handle(DragHandle),
    /// Pointer is strictly inside the rectangle (move area).
    Inside,
    /// Pointer hits neither a handle nor the interior.
    Outside,
}

/// Classify a pointer position against the rectangle and its handles.
///
/// Handles are squares of side `HANDLE_SIZE` centered on their anchors,
/// tested in declared order. For any rectangle with sides >= `HANDLE_SIZE`
/// the squares cannot overlap, so the order is only a tie-break.
#[must_use]
pub fn hit_test(rect: &CropRect, mx: f32, my: f32) -> HitTarget {
    let half = HANDLE_SIZE / 2.0;

    for handle in DragHandle::ALL {
        let (hx, hy) = handle.anchor(rect);
        if (mx - hx).abs() <= half && (my - hy).abs() <= half {
            return HitTarget::Handle(handle);
        }
    }

    if rect.contains(mx, my) {
        return HitTarget::Inside;
    }

    HitTarget::Outside
}

/// Cursor shape to display for a hover position. Cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    ResizeDiagonalDown,
    ResizeDiagonalUp,
    ResizeVertical,
    ResizeHorizontal,
    Grab,
    #[default]
    Default,
}

impl CursorHint {
    /// The hint for a hit-test result.
    #[must_use]
    pub fn for_target(target: HitTarget) -> Self {
        match target {
            HitTarget::Handle(DragHandle::TopLeft | DragHandle::BottomRight) => {
                CursorHint::ResizeDiagonalDown
            }
            HitTarget::Handle(DragHandle::TopRight | DragHandle::BottomLeft) => {
                CursorHint::ResizeDiagonalUp
            }
            HitTarget::Handle(DragHandle::Top | DragHandle::Bottom) => CursorHint::ResizeVertical,
            HitTarget::Handle(DragHandle::Left | DragHandle::Right) => {
                CursorHint::ResizeHorizontal
            }
            HitTarget::Inside => CursorHint::Grab,
            HitTarget::Outside => CursorHint::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> CropRect {
        CropRect::new(100.0, 100.0, 200.0, 100.0)
    }

    // ── hit_test ────────────────────────────────────────────────────────

    #[test]
    fn corner_handles_hit() {
        let r = rect();
        assert_eq!(hit_test(&r, 100.0, 100.0), HitTarget::Handle(DragHandle::TopLeft));
        assert_eq!(hit_test(&r, 300.0, 100.0), HitTarget::Handle(DragHandle::TopRight));
        assert_eq!(hit_test(&r, 100.0, 200.0), HitTarget::Handle(DragHandle::BottomLeft));
        assert_eq!(hit_test(&r, 300.0, 200.0), HitTarget::Handle(DragHandle::BottomRight));
    }

    #[test]
    fn edge_handles_hit_at_midpoints() {
        let r = rect();
        assert_eq!(hit_test(&r, 200.0, 100.0), HitTarget::Handle(DragHandle::Top));
        assert_eq!(hit_test(&r, 200.0, 200.0), HitTarget::Handle(DragHandle::Bottom));
        assert_eq!(hit_test(&r, 100.0, 150.0), HitTarget::Handle(DragHandle::Left));
        assert_eq!(hit_test(&r, 300.0, 150.0), HitTarget::Handle(DragHandle::Right));
    }

    #[test]
    fn handle_square_extends_half_size_around_anchor() {
        let r = rect();
        // Within half of HANDLE_SIZE (5.0) of the top-left anchor.
        assert_eq!(hit_test(&r, 104.9, 95.1), HitTarget::Handle(DragHandle::TopLeft));
        // Just beyond it, still inside the rectangle interior.
        assert_eq!(hit_test(&r, 106.0, 106.0), HitTarget::Inside);
    }

    #[test]
    fn interior_is_move_area() {
        assert_eq!(hit_test(&rect(), 200.0, 150.0), HitTarget::Inside);
    }

    #[test]
    fn outside_misses_everything() {
        let r = rect();
        assert_eq!(hit_test(&r, 50.0, 50.0), HitTarget::Outside);
        assert_eq!(hit_test(&r, 400.0, 150.0), HitTarget::Outside);
    }

    // ── cursor hints ────────────────────────────────────────────────────

    #[test]
    fn cursor_hint_matches_handle_axis() {
        assert_eq!(
            CursorHint::for_target(HitTarget::Handle(DragHandle::Right)),
            CursorHint::ResizeHorizontal
        );
        assert_eq!(
            CursorHint::for_target(HitTarget::Handle(DragHandle::BottomRight)),
            CursorHint::ResizeDiagonalDown
        );
        assert_eq!(CursorHint::for_target(HitTarget::Inside), CursorHint::Grab);
        assert_eq!(CursorHint::for_target(HitTarget::Outside), CursorHint::Default);
    }
}
