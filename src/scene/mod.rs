// One scene per demo. A scene owns all of its demo's state, mutates it in
// response to inputs, and replots everything from scratch on request.

pub mod clipping;
pub mod lines;
pub mod rings;

use crate::input::{Input, Response};
use crate::types::{BLACK, PixelSink, Point};

pub trait Scene {
    /// Window title.
    fn title(&self) -> &'static str;

    /// Control summary printed to the console at startup.
    fn help(&self) -> &'static [&'static str];

    fn handle(&mut self, input: Input) -> Response;

    /// Plot the whole scene for a `width x height` window.
    fn render<P: PixelSink>(&self, sink: &mut P, width: i32, height: i32);

    fn background(&self) -> u32 {
        BLACK
    }
}

/// Plot each point as a `size x size` dot anchored at its lower-left corner.
/// Stands in for a fat point / line width on a plain pixel sink.
pub fn plot_dots<P: PixelSink>(sink: &mut P, points: &[Point], size: i32, color: u32) {
    if size <= 1 {
        sink.plot_all(points, color);
        return;
    }
    for &p in points {
        for dy in 0..size {
            for dx in 0..size {
                sink.plot(p.offset(dx, dy), color);
            }
        }
    }
}
