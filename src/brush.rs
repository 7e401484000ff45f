// Brush footprints stamped along a stepped line to fake thickness.
// Visual: a square brush gives hard corners, a round brush gives soft blobs.

use crate::types::Point;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Brush {
    #[default]
    Square,
    Round,
}

impl Brush {
    pub fn toggled(self) -> Self {
        match self {
            Brush::Square => Brush::Round,
            Brush::Round => Brush::Square,
        }
    }
}

/// Filled square centered at `center` with side `2*(w/2)+1`.
/// A width of 0 or less still gives the single center pixel.
pub fn stamp_square(center: Point, w: i32) -> Vec<Point> {
    let half = (w / 2).max(0);
    let side = (2 * half + 1) as usize;
    let mut out = Vec::with_capacity(side * side);
    for dy in -half..=half {
        for dx in -half..=half {
            out.push(center.offset(dx, dy));
        }
    }
    out
}

/// Filled disk of radius `r`, built row by row from `floor(sqrt(r² - dy²))`.
pub fn stamp_disk(center: Point, r: i32) -> Vec<Point> {
    let r = r.max(0);
    let mut out = Vec::new();
    for dy in -r..=r {
        let hh = (((r * r - dy * dy) as f64).sqrt()).floor() as i32;
        for dx in -hh..=hh {
            out.push(center.offset(dx, dy));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn square_side_follows_integer_half_width() {
        let c = Point::new(10, 10);
        assert_eq!(stamp_square(c, 1).len(), 1);
        assert_eq!(stamp_square(c, 2).len(), 9); // half = 1
        assert_eq!(stamp_square(c, 3).len(), 9);
        assert_eq!(stamp_square(c, 5).len(), 25);
    }

    #[test]
    fn square_degenerate_width_is_one_pixel() {
        let c = Point::new(-3, 4);
        assert_eq!(stamp_square(c, 0), vec![c]);
        assert_eq!(stamp_square(c, -7), vec![c]);
    }

    #[test]
    fn disk_radius_zero_is_center_only() {
        let c = Point::new(5, 5);
        assert_eq!(stamp_disk(c, 0), vec![c]);
        assert_eq!(stamp_disk(c, -2), vec![c]);
    }

    #[test]
    fn disk_radius_one_is_a_plus() {
        let got: HashSet<_> = stamp_disk(Point::new(0, 0), 1).into_iter().collect();
        let want: HashSet<_> = [(0, -1), (-1, 0), (0, 0), (1, 0), (0, 1)]
            .into_iter()
            .map(|(x, y)| Point::new(x, y))
            .collect();
        assert_eq!(got, want);
    }

    #[test]
    fn toggle_flips_between_styles() {
        assert_eq!(Brush::Square.toggled(), Brush::Round);
        assert_eq!(Brush::Round.toggled().toggled(), Brush::Round);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_square_count_and_chebyshev_bound(
            cx in -500i32..500, cy in -500i32..500, w in 1i32..60
        ) {
            let half = w / 2;
            let pts = stamp_square(Point::new(cx, cy), w);
            prop_assert_eq!(pts.len() as i32, (2 * half + 1) * (2 * half + 1));
            for p in &pts {
                prop_assert!((p.x - cx).abs() <= half && (p.y - cy).abs() <= half);
            }
            let unique: HashSet<_> = pts.iter().collect();
            prop_assert_eq!(unique.len(), pts.len());
        }

        #[test]
        fn prop_disk_inside_radius_and_mirror_symmetric(
            cx in -500i32..500, cy in -500i32..500, r in 0i32..50
        ) {
            let c = Point::new(cx, cy);
            let pts: HashSet<_> = stamp_disk(c, r).into_iter().collect();
            for p in &pts {
                let (dx, dy) = (p.x - cx, p.y - cy);
                prop_assert!(((dx * dx + dy * dy) as f64).sqrt() <= r as f64 + 0.5);
                prop_assert!(pts.contains(&c.offset(-dx, dy)));
                prop_assert!(pts.contains(&c.offset(dx, -dy)));
            }
        }
    }
}
