// Midpoint circle stepping and the concentric ring layout.
// Visual: each ring is a 1-px circle; thicker rings are several circles
// stacked at consecutive radii.

use crate::types::Point;

/// One ring of the concentric layout: where to step it and how thick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ring {
    pub index: usize,
    pub radius: i32,
    pub thickness: i32,
}

/// Boundary pixels of a circle, eight symmetric points per step.
/// Integer-only. Points on the diagonal (x == y) and the axes (x == 0)
/// are emitted more than once.
pub fn step_circle(center: Point, radius: i32) -> Vec<Point> {
    let mut out = Vec::new();
    let (mut x, mut y) = (0, radius);
    let mut d = 1 - y;

    while x <= y {
        push_octants(&mut out, center, x, y);
        if d < 0 {
            d += 2 * x + 3;
        } else {
            d += 2 * (x - y) + 5;
            y -= 1;
        }
        x += 1;
    }
    out
}

#[inline]
fn push_octants(out: &mut Vec<Point>, c: Point, x: i32, y: i32) {
    out.extend_from_slice(&[
        c.offset(x, y),
        c.offset(-x, y),
        c.offset(x, -y),
        c.offset(-x, -y),
        c.offset(y, x),
        c.offset(-y, x),
        c.offset(y, -x),
        c.offset(-y, -x),
    ]);
}

/// `thickness` 1-px circles at radius, radius+1, ... stacked into a ring.
/// Not a filled annulus: large radii can show pinholes between the circles.
pub fn step_ring(center: Point, radius: i32, thickness: i32) -> Vec<Point> {
    (0..thickness.max(0))
        .flat_map(|t| step_circle(center, radius + t))
        .collect()
}

/// Ring `i` sits at `start + i*gap` and gets one pixel thicker every third ring.
pub fn concentric_rings(count: usize, start: i32, gap: i32) -> impl Iterator<Item = Ring> {
    (0..count).map(move |i| Ring {
        index: i,
        radius: start + i as i32 * gap,
        thickness: 1 + i as i32 / 3,
    })
}
