//! Affine intensity rescaling.
//!
//! `remap_range` maps the observed `[min, max]` of a grid onto a target
//! `[low, high]` interval: `low + (v − min) / (max − min) · (high − low)`.
//! A grid whose samples are all equal has no range to stretch; that case is
//! reported as [`EdgeError::DegenerateInput`] instead of dividing by zero.
use super::{ImageF32, ImageView, ImageViewMut};
use crate::error::{EdgeError, Result};

pub fn remap_range(image: &ImageF32, low: f32, high: f32) -> Result<ImageF32> {
    if !(low.is_finite() && high.is_finite()) || low >= high {
        return Err(EdgeError::invalid(format!(
            "remap target range must satisfy low < high, got [{low}, {high}]"
        )));
    }
    let (min, max) = image
        .min_max()
        .ok_or_else(|| EdgeError::degenerate("cannot remap an empty image"))?;
    let span = max - min;
    if !span.is_finite() {
        return Err(EdgeError::degenerate(format!(
            "non-finite dynamic range [{min}, {max}]"
        )));
    }
    if span == 0.0 {
        return Err(EdgeError::degenerate(format!(
            "flat image, every sample equals {min}"
        )));
    }

    let scale = high - low;
    let mut out = ImageF32::new(image.w, image.h);
    for y in 0..image.h {
        let src = image.row(y);
        for (dst, &v) in out.row_mut(y).iter_mut().zip(src) {
            *dst = low + (v - min) / span * scale;
        }
    }
    Ok(out)
}
