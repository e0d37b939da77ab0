//! Square filter kernels and the fixed coefficient tables used by the
//! gradient stage.
//!
//! A [`Kernel`] is always square with an odd side length so that it has a
//! well-defined centre tap; the constructors reject anything else. Weights are
//! stored as a `nalgebra::DMatrix` indexed `(row, col)`.
use crate::error::{EdgeError, Result};
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

pub type Kernel3 = [[f32; 3]; 3];

/// Largest side length accepted for a generated smoothing kernel.
pub const MAX_KERNEL_SIZE: usize = 255;

/// Horizontal Sobel derivative, responds positively to intensity increasing
/// with the column index when applied as a correlation.
pub const SOBEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];

/// Horizontal Scharr derivative (better rotational symmetry than Sobel).
pub const SCHARR_X: Kernel3 = [[-3.0, 0.0, 3.0], [-10.0, 0.0, 10.0], [-3.0, 0.0, 3.0]];

#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    weights: DMatrix<f32>,
}

impl Kernel {
    /// Wrap a weight matrix, checking that it is square with odd side length.
    pub fn new(weights: DMatrix<f32>) -> Result<Self> {
        let (rows, cols) = weights.shape();
        if rows != cols {
            return Err(EdgeError::invalid(format!(
                "kernel must be square, got {rows}×{cols}"
            )));
        }
        if rows % 2 == 0 {
            return Err(EdgeError::invalid(format!(
                "kernel size must be odd, got {rows}"
            )));
        }
        Ok(Self { weights })
    }

    /// Build a kernel from a fixed-size coefficient table.
    pub fn from_rows<const N: usize>(rows: &[[f32; N]; N]) -> Result<Self> {
        Self::new(DMatrix::from_fn(N, N, |r, c| rows[r][c]))
    }

    /// `size × size` kernel with a single unit tap at the centre.
    pub fn identity(size: usize) -> Result<Self> {
        let c = size / 2;
        Self::new(DMatrix::from_fn(size, size, |r, col| {
            if r == c && col == c {
                1.0
            } else {
                0.0
            }
        }))
    }

    /// Normalised 2D Gaussian, the outer product of the sampled 1D profile
    /// `exp(−x²/2σ²)` over `x ∈ [−(size−1)/2, (size−1)/2]` with itself.
    pub fn gaussian(sigma: f32, size: usize) -> Result<Self> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(EdgeError::invalid(format!(
                "gaussian sigma must be positive, got {sigma}"
            )));
        }
        if size % 2 == 0 || size > MAX_KERNEL_SIZE {
            return Err(EdgeError::invalid(format!(
                "gaussian kernel size must be odd and at most {MAX_KERNEL_SIZE}, got {size}"
            )));
        }
        let half = (size - 1) as f32 / 2.0;
        let denom = 2.0 * sigma * sigma;
        let profile = DVector::from_fn(size, |i, _| {
            let x = i as f32 - half;
            (-(x * x) / denom).exp()
        });
        let outer = &profile * profile.transpose();
        let total = outer.sum();
        Self::new(outer / total)
    }

    /// Side length `k` of the `k × k` kernel.
    #[inline]
    pub fn size(&self) -> usize {
        self.weights.nrows()
    }

    /// Distance from the centre tap to the edge, `k / 2`.
    #[inline]
    pub fn radius(&self) -> usize {
        self.size() / 2
    }

    #[inline]
    pub fn weight(&self, row: usize, col: usize) -> f32 {
        self.weights[(row, col)]
    }

    pub fn sum(&self) -> f32 {
        self.weights.sum()
    }

    /// The kernel rotated by 180°, turning a correlation into a convolution.
    pub fn rotated_180(&self) -> Self {
        let k = self.size();
        Self {
            weights: DMatrix::from_fn(k, k, |r, c| self.weights[(k - 1 - r, k - 1 - c)]),
        }
    }

    pub fn transposed(&self) -> Self {
        Self {
            weights: self.weights.transpose(),
        }
    }
}

/// Derivative kernel family used by the gradient stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKernel {
    #[default]
    Sobel,
    Scharr,
}

impl GradientKernel {
    fn table(self) -> &'static Kernel3 {
        match self {
            GradientKernel::Sobel => &SOBEL_X,
            GradientKernel::Scharr => &SCHARR_X,
        }
    }

    /// Horizontal derivative kernel (d/dx along columns).
    pub fn horizontal(self) -> Kernel {
        Kernel {
            weights: DMatrix::from_fn(3, 3, |r, c| self.table()[r][c]),
        }
    }

    /// Vertical derivative kernel, the transpose of [`Self::horizontal`].
    pub fn vertical(self) -> Kernel {
        self.horizontal().transposed()
    }
}
