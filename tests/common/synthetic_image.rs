//! Synthetic RGBA battlemaps for end-to-end tests.

pub const PARCHMENT: [u8; 3] = [222, 205, 170];
pub const INK: [u8; 3] = [40, 36, 30];

/// Square grid of `line_width`-pixel lines every `period` pixels, first line
/// at (`phase`, `phase`), drawn over a flat background.
pub fn grid_rgba(
    width: usize,
    height: usize,
    period: usize,
    phase: usize,
    line_width: usize,
    background: [u8; 3],
    line: [u8; 3],
) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(period > 0, "period must be positive");
    let on_line = |v: usize| (v + period - phase % period) % period < line_width;
    let mut img = vec![0u8; width * height * 4];
    for y in 0..height {
        for x in 0..width {
            let rgb = if on_line(x) || on_line(y) {
                line
            } else {
                background
            };
            let i = (y * width + x) * 4;
            img[i..i + 3].copy_from_slice(&rgb);
            img[i + 3] = 255;
        }
    }
    img
}

/// Dark 1 px grid lines on parchment.
pub fn ink_grid(width: usize, height: usize, period: usize, phase: usize) -> Vec<u8> {
    grid_rgba(width, height, period, phase, 1, PARCHMENT, INK)
}

pub fn flat_rgba(width: usize, height: usize, rgb: [u8; 3]) -> Vec<u8> {
    let mut img = Vec::with_capacity(width * height * 4);
    for _ in 0..width * height {
        img.extend_from_slice(&rgb);
        img.push(255);
    }
    img
}

/// Nearest-neighbour upscale by an integer factor.
pub fn upscale_nearest(data: &[u8], width: usize, height: usize, factor: usize) -> Vec<u8> {
    let (w2, h2) = (width * factor, height * factor);
    let mut out = vec![0u8; w2 * h2 * 4];
    for y in 0..h2 {
        for x in 0..w2 {
            let src = ((y / factor) * width + x / factor) * 4;
            let dst = (y * w2 + x) * 4;
            out[dst..dst + 4].copy_from_slice(&data[src..src + 4]);
        }
    }
    out
}

/// Add deterministic pseudo-random noise in `[-amplitude, amplitude]` to the
/// colour channels.
pub fn add_noise(data: &mut [u8], amplitude: i32, seed: u64) {
    let mut state = seed;
    for px in data.chunks_exact_mut(4) {
        for c in &mut px[..3] {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let r = ((state >> 33) % (2 * amplitude as u64 + 1)) as i32 - amplitude;
            *c = (*c as i32 + r).clamp(0, 255) as u8;
        }
    }
}

/// Distance between two phases on a circle of circumference `period`.
pub fn circular_distance(a: f32, b: f32, period: f32) -> f32 {
    let d = (a - b).rem_euclid(period);
    d.min(period - d)
}
