// SPDX-License-Identifier: GPL-3.0-or-later
// src/editor/drag.rs
//
// Drag state machine: move/resize math, aspect reconciliation, and
// boundary clamping for the crop rectangle.

use crate::aspect::{AspectRatio, rederive_rect};
use crate::constant::{INITIAL_RECT_FRACTION, MIN_CROP_SIZE};
use crate::editor::handle::{DragHandle, HitTarget, hit_test};
use crate::geometry::CropRect;

// ============================================================================
// Drag Session
// ============================================================================

/// What a pointer-down grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    /// Translate the whole rectangle.
    Move,
    /// Resize from one handle.
    Resize(DragHandle),
}

/// Bookkeeping for one active drag, pointer-down to pointer-up.
///
/// Every candidate rectangle derives from this snapshot and the current
/// pointer position, never from incremental deltas, so replaying a pointer
/// position always yields the same candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub mode: DragMode,
    pub anchor: (f32, f32),
    pub start_rect: CropRect,
}

// ============================================================================
// Crop Editor
// ============================================================================

/// The rectangle-manipulation state machine.
///
/// Owns the current rectangle, the aspect constraint, and at most one
/// active drag. All pointer handlers are synchronous and O(1); an invalid
/// candidate is simply not applied.
#[derive(Debug, Clone)]
pub struct CropEditor {
    canvas_w: f32,
    canvas_h: f32,
    rect: CropRect,
    aspect: AspectRatio,
    drag: Option<DragSession>,
}

impl CropEditor {
    /// Editor for a display canvas, with the initial rectangle sized to
    /// a fraction of the canvas and centered.
    #[must_use]
    pub fn new(canvas_w: f32, canvas_h: f32) -> Self {
        let w = canvas_w * INITIAL_RECT_FRACTION;
        let h = canvas_h * INITIAL_RECT_FRACTION;
        Self {
            canvas_w,
            canvas_h,
            rect: CropRect::new((canvas_w - w) / 2.0, (canvas_h - h) / 2.0, w, h),
            aspect: AspectRatio::Free,
            drag: None,
        }
    }

    #[must_use]
    pub fn rect(&self) -> CropRect {
        self.rect
    }

    #[must_use]
    pub fn aspect(&self) -> AspectRatio {
        self.aspect
    }

    #[must_use]
    pub fn canvas(&self) -> (f32, f32) {
        (self.canvas_w, self.canvas_h)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Classify a hover position. Cosmetic helper, no state change.
    #[must_use]
    pub fn hit_target(&self, x: f32, y: f32) -> HitTarget {
        hit_test(&self.rect, x, y)
    }

    /// Start a drag if the pointer grabs a handle or the interior.
    ///
    /// Returns whether a drag started.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        let mode = match hit_test(&self.rect, x, y) {
            HitTarget::Handle(handle) => DragMode::Resize(handle),
            HitTarget::Inside => DragMode::Move,
            HitTarget::Outside => return false,
        };

        self.drag = Some(DragSession {
            mode,
            anchor: (x, y),
            start_rect: self.rect,
        });
        true
    }

    /// Advance an active drag to a new pointer position.
    ///
    /// Returns whether the rectangle changed. A resize candidate below the
    /// minimum size rejects the entire update; the rectangle keeps its last
    /// accepted value. Idle pointer moves are no-ops.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        let Some(session) = self.drag else {
            return false;
        };

        let dx = x - session.anchor.0;
        let dy = y - session.anchor.1;
        let ratio = self.aspect.ratio();
        let candidate = candidate_rect(session.mode, &session.start_rect, dx, dy, ratio);

        if matches!(session.mode, DragMode::Resize(_))
            && (candidate.w < MIN_CROP_SIZE || candidate.h < MIN_CROP_SIZE)
        {
            return false;
        }

        self.rect = match session.mode {
            DragMode::Move => clamp_position(candidate, self.canvas_w, self.canvas_h),
            DragMode::Resize(handle) => clamp_resize(
                candidate,
                self.canvas_w,
                self.canvas_h,
                ratio,
                Some((handle, &session.start_rect)),
            ),
        };
        true
    }

    /// End the active drag. The accepted rectangle persists.
    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    /// Switch the aspect-ratio preset, re-deriving the rectangle once.
    ///
    /// The new rectangle keeps the old center and shrinks the non-driving
    /// dimension; the boundary clamp may still shift it. Any in-progress
    /// drag is discarded, since its snapshot predates the constraint.
    /// Returns whether the rectangle changed.
    pub fn set_aspect_ratio(&mut self, aspect: AspectRatio) -> bool {
        self.aspect = aspect;
        self.drag = None;

        let Some(ratio) = aspect.ratio() else {
            return false;
        };

        let rederived = rederive_rect(&self.rect, ratio);
        let clamped = clamp_resize(rederived, self.canvas_w, self.canvas_h, Some(ratio), None);
        let changed = clamped != self.rect;
        self.rect = clamped;
        changed
    }
}

// ============================================================================
// Candidate Math
// ============================================================================

/// Candidate rectangle for a drag snapshot and pointer delta.
///
/// Pure: the result depends only on the arguments. Neither minimum-size
/// rejection nor boundary clamping happens here.
#[must_use]
pub fn candidate_rect(
    mode: DragMode,
    start: &CropRect,
    dx: f32,
    dy: f32,
    ratio: Option<f32>,
) -> CropRect {
    match mode {
        DragMode::Move => CropRect::new(start.x + dx, start.y + dy, start.w, start.h),
        DragMode::Resize(handle) => match ratio {
            None => resize_free(handle, start, dx, dy),
            Some(ratio) => resize_locked(handle, start, dx, dy, ratio),
        },
    }
}

/// Unconstrained resize: each axis follows its handle independently.
fn resize_free(handle: DragHandle, start: &CropRect, dx: f32, dy: f32) -> CropRect {
    let mut rect = *start;

    match handle {
        DragHandle::Right | DragHandle::TopRight | DragHandle::BottomRight => {
            rect.w = start.w + dx;
        }
        DragHandle::Left | DragHandle::TopLeft | DragHandle::BottomLeft => {
            rect.w = start.w - dx;
            rect.x = start.x + dx;
        }
        _ => {}
    }

    match handle {
        DragHandle::Bottom | DragHandle::BottomLeft | DragHandle::BottomRight => {
            rect.h = start.h + dy;
        }
        DragHandle::Top | DragHandle::TopLeft | DragHandle::TopRight => {
            rect.h = start.h - dy;
            rect.y = start.y + dy;
        }
        _ => {}
    }

    rect
}

/// Aspect-locked resize.
///
/// Width drives for left/right and corner handles, height for top/bottom;
/// the other dimension is derived from the ratio and the rectangle is
/// re-anchored for the handle.
fn resize_locked(handle: DragHandle, start: &CropRect, dx: f32, dy: f32, ratio: f32) -> CropRect {
    let (w, h) = match handle {
        DragHandle::Top => {
            let h = start.h - dy;
            (h * ratio, h)
        }
        DragHandle::Bottom => {
            let h = start.h + dy;
            (h * ratio, h)
        }
        DragHandle::Left | DragHandle::TopLeft | DragHandle::BottomLeft => {
            let w = start.w - dx;
            (w, w / ratio)
        }
        DragHandle::Right | DragHandle::TopRight | DragHandle::BottomRight => {
            let w = start.w + dx;
            (w, w / ratio)
        }
    };

    let (x, y) = anchor_locked(handle, start, w, h);
    CropRect::new(x, y, w, h)
}

/// Position for a locked resize so the handle's fixed point stays fixed.
///
/// Corners pin the diagonally opposite corner of the start rectangle; edge
/// midpoints preserve its center along the perpendicular axis.
fn anchor_locked(handle: DragHandle, start: &CropRect, w: f32, h: f32) -> (f32, f32) {
    let (cx, cy) = start.center();

    match handle {
        DragHandle::Right => (start.x, cy - h / 2.0),
        DragHandle::Left => (start.right() - w, cy - h / 2.0),
        DragHandle::Bottom => (cx - w / 2.0, start.y),
        DragHandle::Top => (cx - w / 2.0, start.bottom() - h),
        DragHandle::BottomRight => (start.x, start.y),
        DragHandle::BottomLeft => (start.right() - w, start.y),
        DragHandle::TopRight => (start.x, start.bottom() - h),
        DragHandle::TopLeft => (start.right() - w, start.bottom() - h),
    }
}

// ============================================================================
// Boundary Clamp
// ============================================================================

/// Clamp a moved rectangle into the canvas without changing its size.
fn clamp_position(mut rect: CropRect, canvas_w: f32, canvas_h: f32) -> CropRect {
    rect.x = rect.x.clamp(0.0, canvas_w - rect.w);
    rect.y = rect.y.clamp(0.0, canvas_h - rect.h);
    rect
}

/// Clamp a resized rectangle into the canvas, shrinking overflow.
///
/// Under a fixed ratio an overflowing dimension drives a re-derivation of
/// the other, so the rectangle shrinks proportionally instead of
/// distorting; with a handle present the handle's anchor rule is
/// re-applied after each shrink. The final position clamp never changes
/// the size.
fn clamp_resize(
    mut rect: CropRect,
    canvas_w: f32,
    canvas_h: f32,
    ratio: Option<f32>,
    anchor: Option<(DragHandle, &CropRect)>,
) -> CropRect {
    if rect.x < 0.0 {
        rect.x = 0.0;
    }
    if rect.y < 0.0 {
        rect.y = 0.0;
    }

    if rect.right() > canvas_w {
        rect.w = canvas_w - rect.x;
        if let Some(ratio) = ratio {
            rect.h = rect.w / ratio;
            if let Some((handle, start)) = anchor {
                (rect.x, rect.y) = anchor_locked(handle, start, rect.w, rect.h);
                // Re-anchoring must not push the origin back out.
                rect.x = rect.x.max(0.0);
                rect.y = rect.y.max(0.0);
            }
        }
    }

    if rect.bottom() > canvas_h {
        rect.h = canvas_h - rect.y;
        if let Some(ratio) = ratio {
            rect.w = rect.h * ratio;
            if let Some((handle, start)) = anchor {
                (rect.x, rect.y) = anchor_locked(handle, start, rect.w, rect.h);
                rect.x = rect.x.max(0.0);
                rect.y = rect.y.max(0.0);
            }
        }
    }

    clamp_position(rect, canvas_w, canvas_h)
}
