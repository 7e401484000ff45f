// Bresenham line stepping and the thick-line composition built on it.
// Visual: a 1-pixel staircase between two clicks; stamping a brush on every
// step turns it into a thick stroke.

use crate::brush::{Brush, stamp_disk, stamp_square};
use crate::types::Point;

/// Grid points from `from` to `to`, both included, in drawing order.
/// Integer-only and valid in every octant; a zero-length line yields one point.
pub fn step_line(from: Point, to: Point) -> Vec<Point> {
    let dx = (to.x - from.x).abs();
    let dy = (to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx - dy;
    let (mut x, mut y) = (from.x, from.y);

    let mut out = Vec::with_capacity((dx.max(dy) + 1) as usize);
    loop {
        out.push(Point::new(x, y));
        if x == to.x && y == to.y {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
    out
}

/// Every pixel of a `width`-thick line drawn with `brush`.
///
/// Square brushes are stamped with side `width`, round ones with radius
/// `width / 2`. Round strokes also get an explicit stamp at both ends so short
/// strokes still show round caps; square strokes get no extra cap.
/// Overlapping stamps repeat pixels; plotting them twice is harmless.
pub fn thick_line(from: Point, to: Point, width: i32, brush: Brush) -> Vec<Point> {
    let stamp = |p: Point| match brush {
        Brush::Square => stamp_square(p, width),
        Brush::Round => stamp_disk(p, width / 2),
    };

    let mut out: Vec<Point> = step_line(from, to).into_iter().flat_map(stamp).collect();
    if brush == Brush::Round {
        out.extend(stamp(from));
        out.extend(stamp(to));
    }
    out
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn prop_line_is_eight_connected_between_endpoints(
            x1 in -300i32..300, y1 in -300i32..300,
            x2 in -300i32..300, y2 in -300i32..300
        ) {
            let a = Point::new(x1, y1);
            let b = Point::new(x2, y2);
            let line = step_line(a, b);
            prop_assert_eq!(line.first(), Some(&a));
            prop_assert_eq!(line.last(), Some(&b));
            prop_assert_eq!(line.len() as i32, (x2 - x1).abs().max((y2 - y1).abs()) + 1);
            for w in line.windows(2) {
                let (ddx, ddy) = ((w[1].x - w[0].x).abs(), (w[1].y - w[0].y).abs());
                prop_assert!(ddx <= 1 && ddy <= 1);
                prop_assert!(ddx + ddy >= 1);
            }
        }
    }
}
