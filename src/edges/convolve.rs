//! Zero-padded 2D filtering with a square odd kernel.
//!
//! `out[i, j] = Σ_{a,b} padded[i + a, j + b] · k′[a, b]` where `padded` is the
//! input surrounded by `k / 2` rows/columns of zeros and `k′` is either the
//! kernel itself (correlation) or the kernel rotated by 180° (convolution).
//! Directional derivative kernels are antisymmetric, so picking the wrong one
//! flips the sign of the response.
use super::kernel::Kernel;
use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Surround `image` with `radius` rows and columns of zeros.
pub fn zero_pad(image: &ImageF32, radius: usize) -> ImageF32 {
    let mut padded = ImageF32::new(image.w + 2 * radius, image.h + 2 * radius);
    for (y, src) in image.rows().enumerate() {
        padded.row_mut(y + radius)[radius..radius + image.w].copy_from_slice(src);
    }
    padded
}

/// Filter `image` with `kernel`; `flip == true` applies true convolution,
/// `flip == false` applies correlation.
pub fn convolve(image: &ImageF32, kernel: &Kernel, flip: bool) -> ImageF32 {
    let k = kernel.size();
    let taps = if flip {
        kernel.rotated_180()
    } else {
        kernel.clone()
    };
    // Row-major copy so the inner loop walks contiguous memory.
    let taps: Vec<f32> = (0..k * k).map(|i| taps.weight(i / k, i % k)).collect();

    let padded = zero_pad(image, kernel.radius());
    let mut out = ImageF32::new(image.w, image.h);
    for y in 0..image.h {
        let out_row = out.row_mut(y);
        for (x, dst) in out_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for a in 0..k {
                let src = &padded.row(y + a)[x..x + k];
                let tap_row = &taps[a * k..(a + 1) * k];
                for (&v, &t) in src.iter().zip(tap_row) {
                    acc += v * t;
                }
            }
            *dst = acc;
        }
    }
    out
}
