// Liang-Barsky clipping of a segment against an axis-aligned rectangle.
// Visual: the part of each red line inside the white box is redrawn in green.

use crate::types::PointF;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: PointF,
    pub end: PointF,
}

impl Segment {
    pub const fn new(start: PointF, end: PointF) -> Self {
        Self { start, end }
    }
}

/// Closed clip window. Invariant: `xmin < xmax` and `ymin < ymax`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipRect {
    pub xmin: f32,
    pub ymin: f32,
    pub xmax: f32,
    pub ymax: f32,
}

impl ClipRect {
    /// None unless the bounds describe a rectangle with positive area.
    pub fn new(xmin: f32, ymin: f32, xmax: f32, ymax: f32) -> Option<Self> {
        (xmin < xmax && ymin < ymax).then_some(Self { xmin, ymin, xmax, ymax })
    }

    pub fn width(&self) -> f32 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f32 {
        self.ymax - self.ymin
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.xmin += dx;
        self.xmax += dx;
        self.ymin += dy;
        self.ymax += dy;
    }

    /// Push every edge outward by `step`.
    pub fn grow(&mut self, step: f32) {
        self.xmin -= step;
        self.ymin -= step;
        self.xmax += step;
        self.ymax += step;
    }

    /// Pull every edge inward by `step`. Refused (returns false, rect untouched)
    /// when the width or height would drop to zero or below.
    pub fn shrink(&mut self, step: f32) -> bool {
        match Self::new(self.xmin + step, self.ymin + step, self.xmax - step, self.ymax - step) {
            Some(smaller) => {
                *self = smaller;
                true
            }
            None => false,
        }
    }
}

/// The part of `seg` inside `rect`, or None when they do not meet.
pub fn clip(seg: Segment, rect: &ClipRect) -> Option<Segment> {
    let Segment { start: PointF { x: x1, y: y1 }, .. } = seg;
    let dx = seg.end.x - x1;
    let dy = seg.end.y - y1;

    // left, right, bottom, top
    let p = [-dx, dx, -dy, dy];
    let q = [x1 - rect.xmin, rect.xmax - x1, y1 - rect.ymin, rect.ymax - y1];

    let mut t_enter = 0.0_f32;
    let mut t_leave = 1.0_f32;
    for (&p, &q) in p.iter().zip(q.iter()) {
        if p == 0.0 {
            // parallel to this edge: either fully outside it or no constraint
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            t_enter = t_enter.max(t);
        } else {
            t_leave = t_leave.min(t);
        }
    }

    if t_enter > t_leave {
        return None;
    }
    Some(Segment::new(
        PointF::new(x1 + t_enter * dx, y1 + t_enter * dy),
        PointF::new(x1 + t_leave * dx, y1 + t_leave * dy),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rect10() -> ClipRect {
        ClipRect::new(0.0, 0.0, 10.0, 10.0).expect("valid rect")
    }

    fn seg(x1: f32, y1: f32, x2: f32, y2: f32) -> Segment {
        Segment::new(PointF::new(x1, y1), PointF::new(x2, y2))
    }

    #[test]
    fn inside_segment_is_unchanged() {
        let s = seg(1.0, 2.0, 8.0, 9.0);
        assert_eq!(clip(s, &rect10()), Some(s));
    }

    #[test]
    fn far_outside_segment_is_rejected() {
        assert_eq!(clip(seg(20.0, 20.0, 30.0, 30.0), &rect10()), None);
    }

    #[test]
    fn horizontal_segment_through_both_sides() {
        let got = clip(seg(-5.0, 5.0, 15.0, 5.0), &rect10()).expect("visible");
        assert_relative_eq!(got.start.x, 0.0);
        assert_relative_eq!(got.start.y, 5.0);
        assert_relative_eq!(got.end.x, 10.0);
        assert_relative_eq!(got.end.y, 5.0);
    }

    #[test]
    fn vertical_segment_parallel_and_outside() {
        assert_eq!(clip(seg(20.0, 0.0, 20.0, 10.0), &rect10()), None);
    }

    #[test]
    fn crossing_one_edge_lands_on_that_edge() {
        let got = clip(seg(5.0, 5.0, 5.0, 25.0), &rect10()).expect("visible");
        assert_eq!(got.start, PointF::new(5.0, 5.0));
        assert_relative_eq!(got.end.y, 10.0, epsilon = 1e-5);
        assert_relative_eq!(got.end.x, 5.0);
    }

    #[test]
    fn diagonal_corner_to_corner_outside() {
        let got = clip(seg(-10.0, -10.0, 20.0, 20.0), &rect10()).expect("visible");
        assert_relative_eq!(got.start.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(got.start.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(got.end.x, 10.0, epsilon = 1e-5);
        assert_relative_eq!(got.end.y, 10.0, epsilon = 1e-5);
    }

    #[test]
    fn segment_missing_the_corner_is_rejected() {
        // passes below-right of (10,0)
        assert_eq!(clip(seg(8.0, -5.0, 15.0, 2.0), &rect10()), None);
    }

    #[test]
    fn degenerate_point_inside_and_outside() {
        let inside = seg(3.0, 3.0, 3.0, 3.0);
        assert_eq!(clip(inside, &rect10()), Some(inside));
        assert_eq!(clip(seg(-1.0, 3.0, -1.0, 3.0), &rect10()), None);
    }

    #[test]
    fn rect_rejects_inverted_bounds() {
        assert!(ClipRect::new(5.0, 0.0, 5.0, 10.0).is_none());
        assert!(ClipRect::new(0.0, 9.0, 10.0, 1.0).is_none());
    }

    #[test]
    fn shrink_stops_before_inverting() {
        let mut r = ClipRect::new(0.0, 0.0, 40.0, 30.0).expect("valid rect");
        assert!(r.shrink(10.0));
        assert_eq!(r, ClipRect { xmin: 10.0, ymin: 10.0, xmax: 30.0, ymax: 20.0 });
        // height would become 0
        assert!(!r.shrink(5.0));
        assert_eq!(r.height(), 10.0);
        r.grow(10.0);
        assert_eq!((r.width(), r.height()), (40.0, 30.0));
    }

    #[test]
    fn translate_moves_all_edges() {
        let mut r = rect10();
        r.translate(-10.0, 5.0);
        assert_eq!(r, ClipRect { xmin: -10.0, ymin: 5.0, xmax: 0.0, ymax: 15.0 });
    }
}
