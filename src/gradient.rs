// Ring palettes: maps ring index -> color.
// Visual: rings fade from the inside out along one of three fixed gradients.

use image::Rgb;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GradientMode {
    /// Blue -> cyan -> green -> yellow -> red.
    #[default]
    Rainbow,
    /// Blue -> green -> yellow.
    Ocean,
    /// Purple -> pink -> white.
    Blossom,
}

impl GradientMode {
    pub fn next(self) -> Self {
        match self {
            GradientMode::Rainbow => GradientMode::Ocean,
            GradientMode::Ocean => GradientMode::Blossom,
            GradientMode::Blossom => GradientMode::Rainbow,
        }
    }

    /// Palette number as shown to the user (0, 1, 2).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Linear RGB in [0,1] at position `t`. Ocean's red can overshoot 1.
    fn channels(self, t: f32) -> [f32; 3] {
        match self {
            GradientMode::Rainbow => [t, 1.0 - (0.5 - t).abs() * 2.0, 1.0 - t],
            GradientMode::Ocean => [t * 1.2, t, 1.0 - t],
            GradientMode::Blossom => [0.6 + t * 0.4, 0.3 + t * 0.5, 0.8 + t * 0.2],
        }
    }
}

/// Color of ring `i` out of `count`, sampled at t = i / count.
pub fn ring_color(i: usize, count: usize, mode: GradientMode) -> Rgb<u8> {
    let t = if count == 0 { 0.0 } else { i as f32 / count as f32 };
    let [r, g, b] = mode.channels(t);
    Rgb([quantize(r), quantize(g), quantize(b)])
}

#[inline]
fn quantize(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}
