// Core types shared by the kernels, the scenes and the window.
// Coordinates are device pixels with the origin at the bottom-left corner.

use image::Rgb;

/// Integer pixel position. Kernels take and return these.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

/// Sub-pixel position used by the clipping demo.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Nearest pixel.
    pub fn round(self) -> Point {
        Point::new(self.x.round() as i32, self.y.round() as i32)
    }
}

impl From<Point> for PointF {
    fn from(p: Point) -> Self {
        Self::new(p.x as f32, p.y as f32)
    }
}

/// Pack an RGB triplet as 0x00RRGGBB, the layout minifb expects.
#[inline]
pub fn pack_rgb(c: Rgb<u8>) -> u32 {
    let [r, g, b] = c.0;
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

pub const BLACK: u32 = 0x00_00_00_00;
pub const WHITE: u32 = 0x00_FF_FF_FF;
pub const RED: u32 = 0x00_FF_00_00;
pub const GREEN: u32 = 0x00_00_FF_00;
/// Marker and preview tints of the line demo (1.0/0.2/0.2 and 0.2/1.0/0.2).
pub const SOFT_RED: u32 = 0x00_FF_33_33;
pub const SOFT_GREEN: u32 = 0x00_33_FF_33;

/// Anything that can light a pixel. Scenes draw through this; kernels never see it.
pub trait PixelSink {
    fn plot(&mut self, p: Point, color: u32);

    fn plot_all(&mut self, points: &[Point], color: u32) {
        for &p in points {
            self.plot(p, color);
        }
    }
}

/// Records every plot call in order. Handy for headless rendering.
impl PixelSink for Vec<(Point, u32)> {
    fn plot(&mut self, p: Point, color: u32) {
        self.push((p, color));
    }
}

/// The only raster memory we own: rebuilt from scratch on every redraw.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,     // window width in pixels
    pub height: usize,    // window height in pixels
    pub pixels: Vec<u32>, // row-major from the TOP row, each 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![BLACK; width * height] }
    }

    /// Reallocate for a new window size. Contents are dropped; the next redraw refills them.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(width * height, BLACK);
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Buffer index for a device point, or None when it falls outside the window.
    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        // device y grows upward, buffer rows grow downward
        Some((self.height - 1 - y) * self.width + x)
    }

    #[cfg(test)]
    pub fn pixel_at(&self, p: Point) -> Option<u32> {
        self.index(p).map(|i| self.pixels[i])
    }
}

impl PixelSink for FrameBuffer {
    #[inline]
    fn plot(&mut self, p: Point, color: u32) {
        if let Some(idx) = self.index(p) {
            self.pixels[idx] = color;
        }
    }
}
