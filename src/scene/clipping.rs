// Liang-Barsky demo.
// What you SEE: a white clip window; every line you click in is drawn red,
// and the part of it inside the window is drawn again in green on top.

use log::{debug, info, warn};

use super::{Scene, plot_dots};
use crate::clip::{ClipRect, Segment, clip};
use crate::input::{Input, Key, Response};
use crate::line::step_line;
use crate::types::{GREEN, PixelSink, Point, PointF, RED, WHITE};

pub const DEFAULT_RECT: ClipRect = ClipRect { xmin: 200.0, ymin: 150.0, xmax: 600.0, ymax: 450.0 };
pub const MOVE_STEP: f32 = 10.0;
pub const RESIZE_STEP: f32 = 10.0;
const LINE_WIDTH: i32 = 2;

#[derive(Clone, Debug, PartialEq)]
pub struct ClipScene {
    rect: ClipRect,
    segments: Vec<Segment>,
    first_click: Option<PointF>,
}

impl Default for ClipScene {
    fn default() -> Self {
        Self { rect: DEFAULT_RECT, segments: Vec::new(), first_click: None }
    }
}

impl ClipScene {
    pub fn rect(&self) -> ClipRect {
        self.rect
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    fn click(&mut self, p: Point) {
        let p = PointF::from(p);
        match self.first_click.take() {
            None => self.first_click = Some(p),
            Some(start) => {
                let seg = Segment::new(start, p);
                debug!("segment added: {seg:?}");
                self.segments.push(seg);
            }
        }
    }

    fn move_rect(&mut self, dx: f32, dy: f32) {
        self.rect.translate(dx, dy);
        debug!("clip window moved to {:?}", self.rect);
    }
}

fn draw_segment<P: PixelSink>(sink: &mut P, seg: Segment, color: u32) {
    plot_dots(sink, &step_line(seg.start.round(), seg.end.round()), LINE_WIDTH, color);
}

impl Scene for ClipScene {
    fn title(&self) -> &'static str {
        "Interactive Liang-Barsky Line Clipping"
    }

    fn help(&self) -> &'static [&'static str] {
        &[
            "Left click twice -> draw line",
            "Arrow keys -> move window",
            "[ / ] -> resize window",
            "C -> clear lines, R -> reset window",
            "ESC -> exit",
            "Red = original lines, Green = clipped segments",
        ]
    }

    fn handle(&mut self, input: Input) -> Response {
        match input {
            Input::Click(p) => self.click(p),
            Input::Key(Key::Up) => self.move_rect(0.0, MOVE_STEP),
            Input::Key(Key::Down) => self.move_rect(0.0, -MOVE_STEP),
            Input::Key(Key::Left) => self.move_rect(-MOVE_STEP, 0.0),
            Input::Key(Key::Right) => self.move_rect(MOVE_STEP, 0.0),
            Input::Key(Key::LeftBracket) => {
                if !self.rect.shrink(RESIZE_STEP) {
                    warn!(
                        "clip window is {}x{}, cannot shrink further",
                        self.rect.width(),
                        self.rect.height()
                    );
                    return Response::Ignored;
                }
            }
            Input::Key(Key::RightBracket) => self.rect.grow(RESIZE_STEP),
            Input::Key(Key::C) => {
                self.segments.clear();
                info!("Cleared all lines.");
            }
            Input::Key(Key::R) => {
                self.rect = DEFAULT_RECT;
                info!("Window reset.");
            }
            Input::Key(Key::Escape) => return Response::Quit,
            Input::Drag(_) | Input::Key(_) => return Response::Ignored,
        }
        Response::Redraw
    }

    fn render<P: PixelSink>(&self, sink: &mut P, _width: i32, _height: i32) {
        let r = self.rect;
        let corners = [
            PointF::new(r.xmin, r.ymin),
            PointF::new(r.xmax, r.ymin),
            PointF::new(r.xmax, r.ymax),
            PointF::new(r.xmin, r.ymax),
        ];
        for i in 0..corners.len() {
            let edge = Segment::new(corners[i], corners[(i + 1) % corners.len()]);
            draw_segment(sink, edge, WHITE);
        }

        for &seg in &self.segments {
            draw_segment(sink, seg, RED);
            if let Some(visible) = clip(seg, &self.rect) {
                draw_segment(sink, visible, GREEN);
            }
        }
    }
}
