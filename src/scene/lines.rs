// Thick-line demo.
// What you SEE: click twice to lay down a white stroke. After the first click a
// red square marks P1; dragging shows a green preview with the current brush.

use log::{debug, info};

use super::Scene;
use crate::brush::{Brush, stamp_square};
use crate::input::{Input, Key, Response};
use crate::line::thick_line;
use crate::types::{PixelSink, Point, SOFT_GREEN, SOFT_RED, WHITE};

pub const MIN_WIDTH: i32 = 1;
pub const MAX_WIDTH: i32 = 100;
const MARKER_SIZE: i32 = 5;

/// A committed stroke keeps the width and brush that were active when it was drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stroke {
    pub start: Point,
    pub end: Point,
    pub width: i32,
    pub brush: Brush,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineScene {
    strokes: Vec<Stroke>,
    p1: Option<Point>,
    p2: Option<Point>, // live preview end, only while p1 is set
    width: i32,
    brush: Brush,
}

impl Default for LineScene {
    fn default() -> Self {
        Self { strokes: Vec::new(), p1: None, p2: None, width: MIN_WIDTH, brush: Brush::Square }
    }
}

impl LineScene {
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn brush(&self) -> Brush {
        self.brush
    }

    fn click(&mut self, p: Point) {
        match self.p1.take() {
            None => {
                self.p1 = Some(p);
                self.p2 = None;
            }
            Some(start) => {
                let stroke = Stroke { start, end: p, width: self.width, brush: self.brush };
                debug!("stroke committed: {stroke:?}");
                self.strokes.push(stroke);
                self.p2 = None;
            }
        }
    }

    fn set_width(&mut self, width: i32) {
        self.width = width.clamp(MIN_WIDTH, MAX_WIDTH);
        info!("Width: {}", self.width);
    }

    fn clear(&mut self) {
        self.strokes.clear();
        self.p1 = None;
        self.p2 = None;
        info!("Cleared.");
    }
}

impl Scene for LineScene {
    fn title(&self) -> &'static str {
        "Bresenham Line Drawing - Thick Lines Demo"
    }

    fn help(&self) -> &'static [&'static str] {
        &[
            "Left-click to set P1 and P2.",
            "+ / = : increase thickness",
            "-     : decrease thickness",
            "r     : toggle rounded brush",
            "c     : clear",
        ]
    }

    fn handle(&mut self, input: Input) -> Response {
        match input {
            Input::Click(p) => self.click(p),
            Input::Drag(p) => {
                if self.p1.is_none() {
                    return Response::Ignored;
                }
                self.p2 = Some(p);
            }
            Input::Key(Key::Plus) => self.set_width(self.width + 1),
            Input::Key(Key::Minus) => self.set_width(self.width - 1),
            Input::Key(Key::R) => {
                self.brush = self.brush.toggled();
                let on = if self.brush == Brush::Round { "ON" } else { "OFF" };
                info!("Round brush: {on}");
            }
            Input::Key(Key::C) => self.clear(),
            Input::Key(_) => return Response::Ignored,
        }
        Response::Redraw
    }

    fn render<P: PixelSink>(&self, sink: &mut P, _width: i32, _height: i32) {
        for s in &self.strokes {
            sink.plot_all(&thick_line(s.start, s.end, s.width, s.brush), WHITE);
        }
        if let Some(p1) = self.p1 {
            sink.plot_all(&stamp_square(p1, MARKER_SIZE), SOFT_RED);
            if let Some(p2) = self.p2 {
                sink.plot_all(&thick_line(p1, p2, self.width, self.brush), SOFT_GREEN);
            }
        }
    }
}
