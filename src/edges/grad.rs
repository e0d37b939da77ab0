//! Image gradients with Euclidean magnitude and continuous orientation.
//!
//! - Correlates the (already smoothed) image with a horizontal derivative
//!   kernel and its transpose, zero padding at the border.
//! - `magnitude = hypot(gx, gy)`, `orientation = atan2(gy, gx)` in (−π, π].
//! - The magnitude is stretched onto `[0, 255]` so that thresholds are
//!   independent of the input contrast.
//!
//! A gradient field with zero dynamic range cannot be stretched. It is
//! reported through the `degenerate` flag and an all-zero magnitude rather
//! than NaNs.
use super::convolve::convolve;
use super::kernel::GradientKernel;
use crate::error::{EdgeError, Result};
use crate::image::{remap_range, ImageF32, ImageView, ImageViewMut};
use log::{debug, warn};
use std::f32::consts::PI;

/// Upper end of the rescaled magnitude range.
pub const MAGNITUDE_MAX: f32 = 255.0;

/// Per‑pixel gradient buffers.
#[derive(Clone, Debug)]
pub struct GradientField {
    /// Horizontal derivative (correlation with the X kernel)
    pub gx: ImageF32,
    /// Vertical derivative (correlation with the transposed kernel)
    pub gy: ImageF32,
    /// Gradient magnitude; raw `hypot(gx, gy)` until rescaled, `[0, 255]` after
    pub magnitude: ImageF32,
    /// Gradient direction in radians, range (−π, π]
    pub orientation: ImageF32,
    /// Set when the magnitude had no dynamic range and was zeroed
    pub degenerate: bool,
}

impl GradientField {
    pub fn width(&self) -> usize {
        self.magnitude.w
    }

    pub fn height(&self) -> usize {
        self.magnitude.h
    }

    /// All-zero field flagged as degenerate, for inputs without contrast.
    pub fn flat(width: usize, height: usize) -> Self {
        Self {
            gx: ImageF32::new(width, height),
            gy: ImageF32::new(width, height),
            magnitude: ImageF32::new(width, height),
            orientation: ImageF32::new(width, height),
            degenerate: true,
        }
    }

    /// Stretch the magnitude onto `[0, 255]`.
    ///
    /// A flat magnitude is replaced by zeros and flagged as degenerate.
    pub fn rescaled(mut self) -> Self {
        match remap_range(&self.magnitude, 0.0, MAGNITUDE_MAX) {
            Ok(scaled) => {
                self.magnitude = scaled;
                self.degenerate = false;
            }
            // The target range is constant, so the only failure left is a
            // flat or empty magnitude.
            Err(err) => {
                warn!(
                    "zeroing {}x{} gradient magnitude: {err}",
                    self.width(),
                    self.height()
                );
                self.magnitude = ImageF32::new(self.magnitude.w, self.magnitude.h);
                self.degenerate = true;
            }
        }
        self
    }
}

/// Fold `atan2`'s `−π` onto `π` so the range is (−π, π].
#[inline]
fn orientation(gx: f32, gy: f32) -> f32 {
    let angle = gy.atan2(gx);
    if angle <= -PI {
        PI
    } else {
        angle
    }
}

fn polar(gx: ImageF32, gy: ImageF32) -> GradientField {
    let mut magnitude = ImageF32::new(gx.w, gx.h);
    let mut ori = ImageF32::new(gx.w, gx.h);
    for y in 0..gx.h {
        let gx_row = gx.row(y);
        let gy_row = gy.row(y);
        let mag_row = magnitude.row_mut(y);
        for ((m, &dx), &dy) in mag_row.iter_mut().zip(gx_row).zip(gy_row) {
            *m = dx.hypot(dy);
        }
        let ori_row = ori.row_mut(y);
        for ((o, &dx), &dy) in ori_row.iter_mut().zip(gx_row).zip(gy_row) {
            *o = orientation(dx, dy);
        }
    }
    GradientField {
        gx,
        gy,
        magnitude,
        orientation: ori,
        degenerate: false,
    }
}

/// Combine precomputed derivatives into magnitude and orientation.
///
/// The returned magnitude is the raw Euclidean norm; call
/// [`GradientField::rescaled`] to bring it onto `[0, 255]`.
pub fn gradient_from_derivatives(gx: ImageF32, gy: ImageF32) -> Result<GradientField> {
    if !gx.same_shape(&gy) {
        return Err(EdgeError::invalid(format!(
            "derivative grids differ in size: {}x{} vs {}x{}",
            gx.w, gx.h, gy.w, gy.h
        )));
    }
    Ok(polar(gx, gy))
}

/// Compute the rescaled gradient field of a smoothed image.
pub fn estimate_gradients(smoothed: &ImageF32, kernel: GradientKernel) -> GradientField {
    let gx = convolve(smoothed, &kernel.horizontal(), false);
    let gy = convolve(smoothed, &kernel.vertical(), false);
    let field = polar(gx, gy).rescaled();
    debug!(
        "gradients {:?} on {}x{} (degenerate={})",
        kernel, smoothed.w, smoothed.h, field.degenerate
    );
    field
}
