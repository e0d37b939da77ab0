use canny_edges::image::ImageF32;

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let cx = (x / cell) as i32;
            let cy = (y / cell) as i32;
            let sum = cx + cy;
            let val = if sum & 1 == 0 { 32u8 } else { 220u8 };
            img[y * width + x] = val;
        }
    }
    img
}

/// Vertical step: columns `< split` are `low`, the rest `high`.
pub fn vertical_step(width: usize, height: usize, split: usize, low: f32, high: f32) -> ImageF32 {
    ImageF32::from_fn(width, height, |x, _| if x < split { low } else { high })
}

pub fn flat(width: usize, height: usize, value: f32) -> ImageF32 {
    ImageF32::from_fn(width, height, |_, _| value)
}

/// Bright disc on a sloped background, giving edges of every orientation
/// plus a range of gradient strengths.
pub fn disc_on_ramp(size: usize) -> ImageF32 {
    let c = size as f32 / 2.0;
    let r = size as f32 / 4.0;
    ImageF32::from_fn(size, size, |x, y| {
        let dx = x as f32 - c;
        let dy = y as f32 - c;
        let base = 2.0 * x as f32 + y as f32;
        if dx * dx + dy * dy <= r * r {
            base + 120.0
        } else {
            base
        }
    })
}
