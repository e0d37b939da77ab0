//! Edge detector chaining the stages of [`crate::edges`].
//!
//! Overview
//! - Smooths the input with a normalised Gaussian (true convolution).
//! - Correlates the result with a derivative kernel pair and rescales the
//!   gradient magnitude onto `[0, 255]`.
//! - Thins the magnitude to ridges with direction-aligned non-maximum
//!   suppression.
//! - Labels ridges strong / weak / none with two thresholds and promotes weak
//!   pixels that touch a strong one in a single linking pass.
//!
//! Modules
//! - [`params`] – parameters and their validation.
//! - `pipeline` – the [`CannyDetector`] implementation.
//! - [`report`] – serializable run summary and stage timings.

pub mod params;
mod pipeline;
pub mod report;

pub use params::EdgeParams;
pub use pipeline::{CannyDetector, EdgeTrace};
pub use report::{EdgeReport, StageTiming, TimingBreakdown};

use crate::edges::EdgeMap;
use crate::error::Result;
use crate::image::ImageF32;

/// Detect edges of `image` with thresholds `t0 < t1`, a `blur_size × blur_size`
/// Gaussian of standard deviation `sigma`, and Sobel derivatives.
///
/// All parameters are validated before any pixel is read.
pub fn detect_edges(
    image: &ImageF32,
    t0: f32,
    t1: f32,
    blur_size: usize,
    sigma: f32,
) -> Result<EdgeMap> {
    let params = EdgeParams::with_thresholds(t0, t1).with_blur(blur_size, sigma);
    Ok(CannyDetector::new(params)?.process(image))
}
