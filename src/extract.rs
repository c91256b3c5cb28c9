// SPDX-License-Identifier: GPL-3.0-or-later
// src/extract.rs
//
// Sub-image extraction at source resolution.

use anyhow::{Result, bail};
use image::{DynamicImage, GenericImageView};

use crate::geometry::PixelRegion;

/// Extract a pixel region from a decoded source image.
///
/// Rounding in the display-to-source mapping can land the region one pixel
/// past the image edge; the extracted span is trimmed to the image bounds.
pub fn extract_region(image: &DynamicImage, region: PixelRegion) -> Result<DynamicImage> {
    if !region.is_valid() {
        bail!("Crop region is empty: {:?}", region.as_tuple());
    }

    let (img_w, img_h) = image.dimensions();
    if region.x >= img_w || region.y >= img_h {
        bail!(
            "Crop region origin ({}, {}) outside image {}x{}",
            region.x,
            region.y,
            img_w,
            img_h
        );
    }

    let width = region.width.min(img_w - region.x);
    let height = region.height.min(img_h - region.y);

    Ok(image.crop_imm(region.x, region.y, width, height))
}
