//! Row access shared by the float intensity grids and the 8-bit label grids.
//!
//! Every stage reads its input row by row and writes a freshly allocated
//! output of the same shape, so the traits only expose rows plus a few
//! whole-grid helpers built on top of them.

/// Read-only row access.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// The `width()` pixels of row `y`, without stride padding.
    fn row(&self, y: usize) -> &[Self::Pixel];

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, y: 0 }
    }

    /// Every pixel in row-major order.
    fn pixels(&self) -> std::iter::Flatten<Rows<'_, Self>>
    where
        Self: Sized,
    {
        self.rows().flatten()
    }

    fn same_shape<O: ImageView>(&self, other: &O) -> bool {
        self.width() == other.width() && self.height() == other.height()
    }
}

/// Row access for grids written by a stage.
pub trait ImageViewMut: ImageView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel];

    /// Overwrite each pixel with `f` applied to the pixel of `src` at the same
    /// position. Both grids must have the same shape.
    fn fill_from<S, F>(&mut self, src: &S, mut f: F)
    where
        Self: Sized,
        S: ImageView,
        F: FnMut(S::Pixel) -> Self::Pixel,
    {
        debug_assert!(self.same_shape(src));
        for (y, src_row) in src.rows().enumerate() {
            for (dst, &v) in self.row_mut(y).iter_mut().zip(src_row) {
                *dst = f(v);
            }
        }
    }
}

pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        (self.y < self.image.height()).then(|| {
            self.y += 1;
            self.image.row(self.y - 1)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{GrayImageU8, ImageF32};

    #[test]
    fn pixels_skip_stride_padding() {
        let raw = [1u8, 2, 99, 3, 4, 99];
        let view = crate::image::ImageU8 {
            w: 2,
            h: 2,
            stride: 3,
            data: &raw,
        };
        assert_eq!(view.pixels().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(view.rows().count(), 2);
    }

    #[test]
    fn fill_from_maps_across_pixel_types() {
        let src = ImageF32::from_fn(3, 2, |x, y| (x + 10 * y) as f32);
        let mut dst = GrayImageU8::zeros(3, 2);
        dst.fill_from(&src, |v| if v > 5.0 { 1 } else { 0 });
        assert_eq!(dst.data(), &[0, 0, 0, 1, 1, 1]);
        assert!(dst.same_shape(&src));
        assert!(!dst.same_shape(&ImageF32::new(2, 3)));
    }
}
