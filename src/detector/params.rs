//! Parameters of the edge detector.
//!
//! Defaults follow the classic setup: a 3×3 Gaussian with σ = 5, Sobel
//! derivatives, and thresholds 20 / 100 on the rescaled `[0, 255]` magnitude.
use crate::edges::kernel::MAX_KERNEL_SIZE;
use crate::edges::{GradientKernel, Kernel, ThresholdPair};
use crate::error::{EdgeError, Result};
use serde::{Deserialize, Serialize};

/// Detector-wide parameters. Every field may be omitted in JSON configs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EdgeParams {
    /// Low hysteresis threshold `t0` on the rescaled magnitude.
    pub low_threshold: f32,
    /// High hysteresis threshold `t1`, strictly above `t0`.
    pub high_threshold: f32,
    /// Side length of the Gaussian smoothing kernel (odd, ≥ 1).
    pub blur_size: usize,
    /// Standard deviation of the smoothing Gaussian (> 0).
    pub sigma: f32,
    /// Derivative kernel family.
    pub gradient_kernel: GradientKernel,
}

impl Default for EdgeParams {
    fn default() -> Self {
        Self {
            low_threshold: 20.0,
            high_threshold: 100.0,
            blur_size: 3,
            sigma: 5.0,
            gradient_kernel: GradientKernel::Sobel,
        }
    }
}

/// Parameters after validation, ready to drive the stages.
#[derive(Clone, Debug)]
pub(crate) struct ResolvedParams {
    pub thresholds: ThresholdPair,
    pub smoothing: Kernel,
}

impl EdgeParams {
    /// Default blur with the given thresholds.
    pub fn with_thresholds(low_threshold: f32, high_threshold: f32) -> Self {
        Self {
            low_threshold,
            high_threshold,
            ..Self::default()
        }
    }

    pub fn with_blur(mut self, blur_size: usize, sigma: f32) -> Self {
        self.blur_size = blur_size;
        self.sigma = sigma;
        self
    }

    pub fn with_gradient_kernel(mut self, kernel: GradientKernel) -> Self {
        self.gradient_kernel = kernel;
        self
    }

    /// Check every precondition without touching any pixel.
    pub fn validate(&self) -> Result<()> {
        self.resolve().map(|_| ())
    }

    pub(crate) fn resolve(&self) -> Result<ResolvedParams> {
        if self.blur_size % 2 == 0 || self.blur_size > MAX_KERNEL_SIZE {
            return Err(EdgeError::invalid(format!(
                "blur size must be odd and within 1..={MAX_KERNEL_SIZE}, got {}",
                self.blur_size
            )));
        }
        if !self.sigma.is_finite() || self.sigma <= 0.0 {
            return Err(EdgeError::invalid(format!(
                "sigma must be positive, got {}",
                self.sigma
            )));
        }
        let thresholds = ThresholdPair::new(self.low_threshold, self.high_threshold)?;
        let smoothing = Kernel::gaussian(self.sigma, self.blur_size)?;
        Ok(ResolvedParams {
            thresholds,
            smoothing,
        })
    }
}
