//! Detector pipeline running the edge stages end-to-end.
//!
//! ```no_run
//! use canny_edges::{CannyDetector, EdgeParams};
//! use canny_edges::image::ImageF32;
//!
//! # fn example(image: ImageF32) -> Result<(), canny_edges::EdgeError> {
//! let detector = CannyDetector::new(EdgeParams::with_thresholds(20.0, 100.0))?;
//! let edges = detector.process(&image);
//! println!("{} edge pixels", edges.edge_count());
//! # Ok(())
//! # }
//! ```
use super::params::{EdgeParams, ResolvedParams};
use super::report::{EdgeReport, TimingBreakdown};
use crate::edges::{
    classify, convolve, estimate_gradients, link_edges, suppress_non_maxima, EdgeMap,
    GradientField, LabelGrid,
};
use crate::error::Result;
use crate::image::{ImageF32, ImageU8};
use log::{debug, warn};
use std::time::Instant;

/// Every intermediate grid of one run, for tooling and debugging.
#[derive(Clone, Debug)]
pub struct EdgeTrace {
    pub smoothed: ImageF32,
    pub gradient: GradientField,
    pub suppressed: ImageF32,
    pub labels: LabelGrid,
    pub edges: EdgeMap,
    pub report: EdgeReport,
}

/// Edge detector with validated parameters.
///
/// Construction performs all parameter checks, so processing an image is
/// infallible.
#[derive(Clone, Debug)]
pub struct CannyDetector {
    params: EdgeParams,
    resolved: ResolvedParams,
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// True when the input holds at least two distinct intensities.
///
/// Zero padding darkens the border of a constant image during smoothing, so
/// contrast has to be judged on the input rather than on the gradient.
fn has_contrast(image: &ImageF32) -> bool {
    matches!(image.min_max(), Some((lo, hi)) if lo < hi)
}

impl CannyDetector {
    /// Validate `params` and build the smoothing kernel.
    pub fn new(params: EdgeParams) -> Result<Self> {
        let resolved = params.resolve()?;
        Ok(Self { params, resolved })
    }

    pub fn params(&self) -> &EdgeParams {
        &self.params
    }

    /// Binary edge map of `image`.
    pub fn process(&self, image: &ImageF32) -> EdgeMap {
        self.process_with_trace(image).edges
    }

    /// Binary edge map of an 8-bit image, intensities kept on `[0, 255]`.
    pub fn process_u8(&self, image: &ImageU8<'_>) -> EdgeMap {
        self.process(&ImageF32::from_u8(image))
    }

    /// Run every stage and keep the intermediate grids.
    pub fn process_with_trace(&self, image: &ImageF32) -> EdgeTrace {
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let start = Instant::now();
        let smoothed = convolve(image, &self.resolved.smoothing, true);
        timings.push("smoothing", elapsed_ms(start));

        let start = Instant::now();
        let gradient = if has_contrast(image) {
            estimate_gradients(&smoothed, self.params.gradient_kernel)
        } else {
            warn!(
                "input {}x{} has no dynamic range, skipping gradients",
                image.w, image.h
            );
            GradientField::flat(image.w, image.h)
        };
        timings.push("gradient", elapsed_ms(start));

        let start = Instant::now();
        let suppressed = suppress_non_maxima(&gradient);
        timings.push("nms", elapsed_ms(start));

        let start = Instant::now();
        let labels = classify(&suppressed, &self.resolved.thresholds);
        timings.push("threshold", elapsed_ms(start));

        let start = Instant::now();
        let edges = link_edges(&labels);
        timings.push("hysteresis", elapsed_ms(start));

        timings.total_ms = elapsed_ms(total_start);
        let report = EdgeReport {
            width: image.w,
            height: image.h,
            params: self.params.clone(),
            strong_pixels: labels.strong_count(),
            weak_pixels: labels.weak_count(),
            edge_pixels: edges.edge_count(),
            degenerate: gradient.degenerate,
            timings,
        };
        debug!(
            "CannyDetector::process {}x{} strong={} weak={} edges={} latency_ms={:.3}",
            report.width,
            report.height,
            report.strong_pixels,
            report.weak_pixels,
            report.edge_pixels,
            report.timings.total_ms
        );

        EdgeTrace {
            smoothed,
            gradient,
            suppressed,
            labels,
            edges,
            report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contrast_needs_two_distinct_values() {
        assert!(!has_contrast(&ImageF32::new(0, 0)));
        assert!(!has_contrast(&ImageF32::from_vec(2, 2, vec![37.0; 4]).unwrap()));
        assert!(has_contrast(&ImageF32::from_fn(3, 3, |x, _| x as f32)));
    }

    #[test]
    fn constant_input_short_circuits_with_wide_blur() {
        let image = ImageF32::from_vec(10, 10, vec![37.0; 100]).unwrap();
        let params = EdgeParams::with_thresholds(0.0, 0.5).with_blur(9, 5.0);
        let trace = CannyDetector::new(params).unwrap().process_with_trace(&image);
        assert!(trace.gradient.degenerate);
        assert!(trace.report.degenerate);
        assert_eq!(trace.report.strong_pixels, 0);
        assert_eq!(trace.edges.edge_count(), 0);
        assert!(trace.suppressed.data.iter().all(|&v| v == 0.0));
    }
}
