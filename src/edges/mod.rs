//! Edge processing stages: filtering, gradients, non‑maximum suppression,
//! double thresholding and hysteresis linking.
//!
//! Each stage is a pure function from one grid to a freshly allocated grid;
//! [`crate::detector`] chains them into the full detector.
//!
//! - [`convolve`]: zero‑padded correlation / convolution with a square kernel.
//! - [`kernel`]: Gaussian smoothing kernels and the derivative tables.
//! - [`grad`]: `gx`, `gy`, Euclidean magnitude rescaled to `[0, 255]`, and
//!   orientation in (−π, π].
//! - [`nms`]: ridge thinning along the quantized gradient direction.
//! - [`threshold`]: strong / weak / non‑edge labels.
//! - [`hysteresis`]: weak labels touching a strong one become edges.

pub mod convolve;
pub mod grad;
pub mod hysteresis;
pub mod kernel;
pub mod nms;
pub mod threshold;

pub use convolve::{convolve, zero_pad};
pub use grad::{estimate_gradients, gradient_from_derivatives, GradientField};
pub use hysteresis::{link_edges, EdgeMap};
pub use kernel::{GradientKernel, Kernel};
pub use nms::{suppress_non_maxima, AngleBin};
pub use threshold::{classify, LabelGrid, ThresholdPair};
