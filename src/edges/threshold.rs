//! Double-threshold classification of the suppressed magnitude.
//!
//! Every pixel gets one of three labels: strong (above the high threshold),
//! weak (between the two thresholds, inclusive) or none (below the low one).
use crate::error::{EdgeError, Result};
use crate::image::{GrayImageU8, ImageF32, ImageView, ImageViewMut};

/// Label of a pixel below the low threshold.
pub const NON_EDGE: u8 = 0;
/// Sentinel for pixels between the thresholds; distinct from both outputs.
pub const WEAK: u8 = 75;
/// Label of a pixel above the high threshold.
pub const STRONG: u8 = 255;

/// Validated `(low, high)` threshold pair with `0 ≤ low < high ≤ 255`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdPair {
    low: f32,
    high: f32,
}

impl ThresholdPair {
    pub fn new(low: f32, high: f32) -> Result<Self> {
        let in_range = |t: f32| (0.0..=255.0).contains(&t);
        if !(in_range(low) && in_range(high) && low < high) {
            return Err(EdgeError::invalid(format!(
                "thresholds must satisfy 0 <= t0 < t1 <= 255, got t0={low} t1={high}"
            )));
        }
        Ok(Self { low, high })
    }

    #[inline]
    pub fn low(&self) -> f32 {
        self.low
    }

    #[inline]
    pub fn high(&self) -> f32 {
        self.high
    }

    /// Label a single magnitude value.
    #[inline]
    pub fn classify(&self, value: f32) -> u8 {
        if value > self.high {
            STRONG
        } else if value < self.low {
            NON_EDGE
        } else {
            WEAK
        }
    }
}

/// Three-valued label grid (`NON_EDGE`, `WEAK`, `STRONG`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelGrid(GrayImageU8);

impl LabelGrid {
    pub fn grid(&self) -> &GrayImageU8 {
        &self.0
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.0.get(x, y)
    }

    pub fn width(&self) -> usize {
        self.0.width()
    }

    pub fn height(&self) -> usize {
        self.0.height()
    }

    pub fn strong_count(&self) -> usize {
        self.0.count(STRONG)
    }

    pub fn weak_count(&self) -> usize {
        self.0.count(WEAK)
    }
}

/// Classify every pixel of `suppressed` against `thresholds`.
pub fn classify(suppressed: &ImageF32, thresholds: &ThresholdPair) -> LabelGrid {
    let mut labels = GrayImageU8::zeros(suppressed.w, suppressed.h);
    labels.fill_from(suppressed, |v| thresholds.classify(v));
    LabelGrid(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_ordering_is_validated() {
        assert!(ThresholdPair::new(0.0, 255.0).is_ok());
        assert!(ThresholdPair::new(20.0, 100.0).is_ok());
        for (lo, hi) in [(100.0, 100.0), (120.0, 100.0), (-1.0, 10.0), (10.0, 256.0), (f32::NAN, 10.0)] {
            let err = ThresholdPair::new(lo, hi).unwrap_err();
            assert!(matches!(err, EdgeError::InvalidParameter(_)), "t0={lo} t1={hi}");
        }
    }

    #[test]
    fn boundaries_are_weak() {
        let t = ThresholdPair::new(20.0, 100.0).unwrap();
        assert_eq!(t.classify(19.9), NON_EDGE);
        assert_eq!(t.classify(20.0), WEAK);
        assert_eq!(t.classify(60.0), WEAK);
        assert_eq!(t.classify(100.0), WEAK);
        assert_eq!(t.classify(100.1), STRONG);
    }

    #[test]
    fn classifies_whole_grid() {
        let img = ImageF32::from_vec(4, 1, vec![0.0, 30.0, 150.0, 100.0]).unwrap();
        let labels = classify(&img, &ThresholdPair::new(20.0, 100.0).unwrap());
        assert_eq!(labels.grid().data(), &[NON_EDGE, WEAK, STRONG, WEAK]);
        assert_eq!(labels.strong_count(), 1);
        assert_eq!(labels.weak_count(), 2);
    }
}
