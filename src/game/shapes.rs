// game/shapes.rs

//! Rasterized shapes for UI images the font cannot draw.

/// Edge length of the generated heart texture
pub const HEART_TEXTURE_SIZE: usize = 64;

/// Samples per pixel along each axis
const SUPERSAMPLE: usize = 4;

/// Classic implicit heart `(x² + y² - 1)³ - x²y³ <= 0`, y pointing up
pub fn inside_heart(x: f32, y: f32) -> bool {
    let a = x * x + y * y - 1.0;
    a * a * a - x * x * y * y * y <= 0.0
}

/// Center of sample `k` out of `n` across the heart's 2.4-unit bounds.
/// Mirrored samples map to exactly negated values.
fn sample_offset(k: usize, n: usize) -> f32 {
    let centered = (2 * k + 1) as f32 - n as f32;
    centered * (1.2 / n as f32)
}

/// Fraction of pixel `(px, py)` covered by the heart
pub fn heart_coverage(px: usize, py: usize, size: usize) -> f32 {
    let n = size * SUPERSAMPLE;
    let mut hits = 0;
    for sy in 0..SUPERSAMPLE {
        for sx in 0..SUPERSAMPLE {
            let x = sample_offset(px * SUPERSAMPLE + sx, n);
            // Shifted up a little so the lobes and the tip both fit
            let y = 0.05 - sample_offset(py * SUPERSAMPLE + sy, n);
            if inside_heart(x, y) {
                hits += 1;
            }
        }
    }
    hits as f32 / (SUPERSAMPLE * SUPERSAMPLE) as f32
}

/// White RGBA8 heart with antialiased alpha; tint it when drawing
pub fn heart_mask(size: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(size * size * 4);
    for py in 0..size {
        for px in 0..size {
            let alpha = (heart_coverage(px, py, size) * 255.0).round() as u8;
            pixels.extend_from_slice(&[255, 255, 255, alpha]);
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha(mask: &[u8], size: usize, px: usize, py: usize) -> u8 {
        mask[(py * size + px) * 4 + 3]
    }

    #[test]
    fn test_heart_outline() {
        assert!(inside_heart(0.0, 0.0));
        assert!(inside_heart(0.0, -0.95));
        assert!(inside_heart(0.6, 0.8));

        // Notch between the lobes, below the tip, beside the lobes
        assert!(!inside_heart(0.0, 1.1));
        assert!(!inside_heart(0.0, -1.1));
        assert!(!inside_heart(1.2, 0.0));
    }

    #[test]
    fn test_mask_shape() {
        let size = HEART_TEXTURE_SIZE;
        let mask = heart_mask(size);
        assert_eq!(mask.len(), size * size * 4);

        assert_eq!(alpha(&mask, size, size / 2, size / 2), 255);
        assert_eq!(alpha(&mask, size, 0, 0), 0);
        assert_eq!(alpha(&mask, size, size - 1, size - 1), 0);
        assert_eq!(alpha(&mask, size, 0, size - 1), 0);
    }

    #[test]
    fn test_mask_is_mirror_symmetric() {
        let size = 32;
        let mask = heart_mask(size);
        for py in 0..size {
            for px in 0..size / 2 {
                assert_eq!(
                    alpha(&mask, size, px, py),
                    alpha(&mask, size, size - 1 - px, py),
                    "row {} col {}",
                    py,
                    px
                );
            }
        }
    }

    #[test]
    fn test_mask_is_white() {
        let mask = heart_mask(8);
        assert!(mask.chunks(4).all(|px| px[..3] == [255, 255, 255]));
    }
}
