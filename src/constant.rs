// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Engine constants that should not be changed by the caller.

/// Minimum crop rectangle side length in display units.
pub const MIN_CROP_SIZE: f32 = 50.0;

/// Side length of a handle's square hit area, centered on its anchor.
pub const HANDLE_SIZE: f32 = 10.0;

/// Fraction of the canvas covered by the initial rectangle.
pub const INITIAL_RECT_FRACTION: f32 = 0.8;

/// Tolerance for aspect-ratio comparisons (float precision after clamping).
pub const RATIO_EPSILON: f32 = 0.001;

/// Tolerance for coordinate comparisons (float precision in round trips).
pub const COORD_EPSILON: f32 = 0.01;
