// SPDX-License-Identifier: GPL-3.0-or-later
// src/session.rs
//
// One crop editing interaction, from image load to apply/cancel.

use std::fmt;

use anyhow::Result;
use image::{DynamicImage, GenericImageView};

use crate::aspect::AspectRatio;
use crate::editor::{CropEditor, HitTarget};
use crate::extract::extract_region;
use crate::geometry::{CropRect, PixelRegion, Scale, fit_canvas};

/// Callback invoked after every accepted rectangle change.
pub type RectObserver = Box<dyn FnMut(&CropRect)>;

/// One crop editing session.
///
/// Owns the decoded source image, the display scale, the rectangle editor,
/// and an optional observer notified on every accepted rectangle change.
/// The session is consumed by `apply` or `cancel`; no state survives it.
pub struct CropSession {
    image: DynamicImage,
    scale: Scale,
    editor: CropEditor,
    on_change: Option<RectObserver>,
}

impl CropSession {
    /// Start a session for a decoded image under a display-width constraint.
    ///
    /// The canvas takes the constraint width (capped at the image's native
    /// width) and the image's aspect; the initial rectangle covers 80% of
    /// it, centered.
    #[must_use]
    pub fn new(image: DynamicImage, display_width: f32) -> Self {
        let (img_w, img_h) = image.dimensions();
        let (canvas_w, canvas_h) = fit_canvas(img_w, img_h, display_width);

        log::debug!(
            "Crop session started: {img_w}x{img_h} source on {canvas_w}x{canvas_h} canvas"
        );

        Self {
            image,
            scale: Scale::new(img_w, img_h, canvas_w, canvas_h),
            editor: CropEditor::new(canvas_w, canvas_h),
            on_change: None,
        }
    }

    /// Register the observer called after every accepted rectangle change.
    pub fn on_rect_change(&mut self, observer: impl FnMut(&CropRect) + 'static) {
        self.on_change = Some(Box::new(observer));
    }

    /// The current rectangle, display space.
    #[must_use]
    pub fn rect(&self) -> CropRect {
        self.editor.rect()
    }

    /// The active aspect-ratio preset.
    #[must_use]
    pub fn aspect(&self) -> AspectRatio {
        self.editor.aspect()
    }

    /// Display canvas dimensions.
    #[must_use]
    pub fn canvas(&self) -> (f32, f32) {
        self.editor.canvas()
    }

    /// Display-to-source scale factors for this session.
    #[must_use]
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Native pixel dimensions of the source image.
    #[must_use]
    pub fn image_dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.editor.is_dragging()
    }

    /// Classify a hover position for cursor feedback. No state change.
    #[must_use]
    pub fn hit_target(&self, x: f32, y: f32) -> HitTarget {
        self.editor.hit_target(x, y)
    }

    /// Pointer pressed at a display-space position.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.editor.pointer_down(x, y)
    }

    /// Pointer moved to a display-space position.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        let accepted = self.editor.pointer_move(x, y);
        if accepted {
            self.notify();
        }
        accepted
    }

    /// Pointer released.
    pub fn pointer_up(&mut self) {
        self.editor.pointer_up();
    }

    /// Switch the aspect-ratio preset.
    pub fn set_aspect_ratio(&mut self, aspect: AspectRatio) {
        if self.editor.set_aspect_ratio(aspect) {
            self.notify();
        }
    }

    /// Switch the preset by label; unrecognized labels mean `Free`.
    pub fn set_aspect_label(&mut self, label: &str) {
        self.set_aspect_ratio(AspectRatio::from_label(label));
    }

    /// The source-space pixel region the current rectangle maps to.
    #[must_use]
    pub fn source_region(&self) -> PixelRegion {
        self.scale.to_region(&self.editor.rect())
    }

    /// Extract the cropped bitmap at source resolution, ending the session.
    pub fn apply(self) -> Result<DynamicImage> {
        let region = self.source_region();
        log::debug!("Applying crop: {:?}", region.as_tuple());
        extract_region(&self.image, region)
    }

    /// Discard the session. No output is produced.
    pub fn cancel(self) {
        log::debug!("Crop session cancelled");
    }

    fn notify(&mut self) {
        if let Some(observer) = &mut self.on_change {
            let rect = self.editor.rect();
            observer(&rect);
        }
    }
}

impl fmt::Debug for CropSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.image.dimensions();
        f.debug_struct("CropSession")
            .field("image", &format_args!("{w}x{h}"))
            .field("scale", &self.scale)
            .field("rect", &self.editor.rect())
            .field("aspect", &self.editor.aspect())
            .field("dragging", &self.editor.is_dragging())
            .finish()
    }
}
