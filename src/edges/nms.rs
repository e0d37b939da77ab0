//! Non‑maximum suppression on gradient magnitude with direction alignment.
//!
//! Each interior pixel compares its magnitude against the two neighbours the
//! quantized gradient direction points at. It survives when it is greater
//! than or equal to both (plateaus keep every pixel), otherwise it is zeroed.
//! The outermost 1‑pixel frame is always zero so neighbour lookups never leave
//! the grid.
//!
//! Quantization takes the absolute orientation in degrees, floors it to a
//! multiple of 45° and folds 180° back onto 0°. Because of the absolute value
//! `+θ` and `−θ` share a bin.
use super::grad::GradientField;
use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Quantized gradient direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AngleBin {
    Deg0,
    Deg45,
    Deg90,
    Deg135,
}

impl AngleBin {
    /// Quantize an orientation in radians.
    pub fn from_radians(angle: f32) -> Self {
        let deg = angle.to_degrees().abs();
        match ((deg / 45.0).floor() as i64).rem_euclid(4) {
            0 => AngleBin::Deg0,
            1 => AngleBin::Deg45,
            2 => AngleBin::Deg90,
            _ => AngleBin::Deg135,
        }
    }

    /// `(d_row, d_col)` offsets of the two comparison neighbours.
    pub fn neighbor_offsets(self) -> [(isize, isize); 2] {
        match self {
            AngleBin::Deg0 => [(0, -1), (0, 1)],
            AngleBin::Deg45 => [(-1, 1), (1, -1)],
            AngleBin::Deg90 => [(-1, 0), (1, 0)],
            AngleBin::Deg135 => [(-1, -1), (1, 1)],
        }
    }
}

#[inline]
fn offset(base: usize, delta: isize) -> usize {
    base.wrapping_add_signed(delta)
}

/// Thin the rescaled magnitude of `grad` to its ridges along the gradient.
pub fn suppress_non_maxima(grad: &GradientField) -> ImageF32 {
    let w = grad.width();
    let h = grad.height();
    let mut out = ImageF32::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }

    let mag = &grad.magnitude;
    for y in 1..h - 1 {
        let ori_row = grad.orientation.row(y);
        let mag_row = mag.row(y);
        let out_row = out.row_mut(y);
        for x in 1..w - 1 {
            let center = mag_row[x];
            let [(dr1, dc1), (dr2, dc2)] = AngleBin::from_radians(ori_row[x]).neighbor_offsets();
            let n1 = mag.get(offset(x, dc1), offset(y, dr1));
            let n2 = mag.get(offset(x, dc2), offset(y, dr2));
            if center >= n1 && center >= n2 {
                out_row[x] = center;
            }
        }
    }
    out
}
