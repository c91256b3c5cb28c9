// SPDX-License-Identifier: GPL-3.0-or-later
// src/editor/mod.rs
//
// Rectangle editor module: handles, hit testing, and the drag state machine.

mod drag;
mod handle;

pub use drag::{CropEditor, DragMode, DragSession, candidate_rect};
pub use handle::{CursorHint, DragHandle, HitTarget, hit_test};
