// Concentric rings demo.
// What you SEE: rings centered in the window, each a little wider than the
// last, colored along the active gradient from the inside out.

use log::info;

use super::{Scene, plot_dots};
use crate::circle::{concentric_rings, step_ring};
use crate::gradient::{GradientMode, ring_color};
use crate::input::{Input, Key, Response};
use crate::types::{PixelSink, Point, pack_rgb};

pub const MIN_RINGS: usize = 1;
pub const MAX_RINGS: usize = 100;
const POINT_SIZE: i32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RingSettings {
    pub count: usize,
    pub start_radius: i32,
    pub gap: i32,
    pub mode: GradientMode,
}

impl Default for RingSettings {
    fn default() -> Self {
        Self { count: 20, start_radius: 30, gap: 10, mode: GradientMode::Rainbow }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RingScene {
    settings: RingSettings,
}

impl RingScene {
    pub fn settings(&self) -> RingSettings {
        self.settings
    }

    fn set_count(&mut self, count: usize) {
        self.settings.count = count.clamp(MIN_RINGS, MAX_RINGS);
        info!("Rings: {}", self.settings.count);
    }
}

impl Scene for RingScene {
    fn title(&self) -> &'static str {
        "Interactive Concentric Circles with Color Gradient"
    }

    fn help(&self) -> &'static [&'static str] {
        &[
            "+ : Increase number of circles",
            "- : Decrease number of circles",
            "c : Change color gradient style",
            "r : Reset to default",
            "ESC : Exit program",
        ]
    }

    fn handle(&mut self, input: Input) -> Response {
        match input {
            Input::Key(Key::Plus) => self.set_count(self.settings.count + 1),
            Input::Key(Key::Minus) => self.set_count(self.settings.count.saturating_sub(1)),
            Input::Key(Key::C) => {
                self.settings.mode = self.settings.mode.next();
                info!("Gradient mode changed to {}", self.settings.mode.index());
            }
            Input::Key(Key::R) => {
                self.settings = RingSettings::default();
                info!("Reset to default.");
            }
            Input::Key(Key::Escape) => return Response::Quit,
            _ => return Response::Ignored,
        }
        Response::Redraw
    }

    fn render<P: PixelSink>(&self, sink: &mut P, width: i32, height: i32) {
        let RingSettings { count, start_radius, gap, mode } = self.settings;
        let center = Point::new(width / 2, height / 2);
        for ring in concentric_rings(count, start_radius, gap) {
            let color = pack_rgb(ring_color(ring.index, count, mode));
            plot_dots(sink, &step_ring(center, ring.radius, ring.thickness), POINT_SIZE, color);
        }
    }
}
