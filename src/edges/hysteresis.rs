//! Single-pass hysteresis linking.
//!
//! Strong labels are kept as edges unconditionally. A weak label becomes an
//! edge when at least one of its 8 neighbours is strong in the input grid;
//! the grid is read once and never updated in place, so a weak pixel that only
//! touches other weak pixels stays off even if the chain eventually reaches a
//! strong one. Out-of-grid neighbours count as non-edges (zero padding).
use super::threshold::{LabelGrid, STRONG, WEAK};
use crate::image::{GrayImageU8, ImageView, ImageViewMut};

/// Output value of an edge pixel.
pub const EDGE: u8 = 255;

/// Binary edge map with values in `{0, 255}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeMap(GrayImageU8);

impl EdgeMap {
    pub fn grid(&self) -> &GrayImageU8 {
        &self.0
    }

    #[inline]
    pub fn is_edge(&self, x: usize, y: usize) -> bool {
        self.0.get(x, y) == EDGE
    }

    pub fn width(&self) -> usize {
        self.0.width()
    }

    pub fn height(&self) -> usize {
        self.0.height()
    }

    pub fn edge_count(&self) -> usize {
        self.0.count(EDGE)
    }
}

/// Labels surrounded by a one-pixel frame of `NON_EDGE`.
fn pad_labels(labels: &LabelGrid) -> GrayImageU8 {
    let (w, h) = (labels.width(), labels.height());
    let mut padded = GrayImageU8::zeros(w + 2, h + 2);
    for (y, src) in labels.grid().rows().enumerate() {
        padded.row_mut(y + 1)[1..=w].copy_from_slice(src);
    }
    padded
}

fn has_strong_neighbor(padded: &GrayImageU8, px: usize, py: usize) -> bool {
    (py - 1..=py + 1).any(|y| {
        (px - 1..=px + 1).any(|x| (x, y) != (px, py) && padded.get(x, y) == STRONG)
    })
}

/// Resolve weak labels against their strong neighbours.
pub fn link_edges(labels: &LabelGrid) -> EdgeMap {
    let (w, h) = (labels.width(), labels.height());
    let padded = pad_labels(labels);
    let mut out = GrayImageU8::zeros(w, h);
    for y in 0..h {
        let src = labels.grid().row(y);
        for (x, (dst, &label)) in out.row_mut(y).iter_mut().zip(src).enumerate() {
            *dst = match label {
                STRONG => EDGE,
                WEAK if has_strong_neighbor(&padded, x + 1, y + 1) => EDGE,
                _ => 0,
            };
        }
    }
    EdgeMap(out)
}
