#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod error;
pub mod image;

// Stage-level building blocks, usable on their own.
pub mod edges;

// Tool configuration (JSON) for the binaries.
pub mod config;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{detect_edges, CannyDetector, EdgeParams, EdgeReport, EdgeTrace};
pub use crate::edges::EdgeMap;
pub use crate::error::EdgeError;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use canny_edges::prelude::*;
///
/// # fn main() -> Result<(), EdgeError> {
/// let (w, h) = (640usize, 480usize);
/// let gray = vec![0u8; w * h];
/// let img = ImageU8 { w, h, stride: w, data: &gray };
///
/// let detector = CannyDetector::new(EdgeParams::with_thresholds(20.0, 100.0))?;
/// let edges = detector.process_u8(&img);
/// println!("edges={}", edges.edge_count());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageF32, ImageU8};
    pub use crate::{detect_edges, CannyDetector, EdgeError, EdgeMap, EdgeParams};
}
