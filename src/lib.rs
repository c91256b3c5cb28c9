// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// cropframe: interactive crop-rectangle editing engine.

//! Interactive crop-rectangle editing engine.
//!
//! Callers feed a decoded source image and display-space pointer events
//! into a [`CropSession`]; the engine runs the move/resize state machine
//! with aspect locking and boundary clamping, and extracts the final
//! rectangle at source resolution. Decoding input files and rendering the
//! rectangle are the caller's concern; the engine performs no I/O.

pub mod aspect;
pub mod constant;
pub mod editor;
pub mod extract;
pub mod geometry;
pub mod session;

pub use aspect::AspectRatio;
pub use editor::{CropEditor, CursorHint, DragHandle, DragMode, HitTarget, hit_test};
pub use geometry::{CropRect, PixelRegion, Scale};
pub use session::CropSession;
