// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Polar coordinates and circular arcs.
//!
//! All angles are in degrees and grow clockwise in a Y-down coordinate system.

use std::f64::consts::PI;

use crate::geom::Point;

/// Converts polar coordinates around `center` to a cartesian point.
#[inline]
pub fn polar_to_cartesian(center: Point, radius: f64, angle: f64) -> Point {
    let (sin, cos) = angle.to_radians().sin_cos();
    Point::new(center.x + radius * cos, center.y + radius * sin)
}

/// Converts a cartesian point to `(radius, angle)` around `center`.
///
/// The angle is in the `[-180, 180]` range.
#[inline]
pub fn cartesian_to_polar(center: Point, p: Point) -> (f64, f64) {
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    (dx.hypot(dy), dy.atan2(dx).to_degrees())
}

/// Arc drawing direction, aka the `sweep-flag`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Sweep {
    /// Decreasing angles. `sweep-flag=0`.
    Negative,
    /// Increasing angles. `sweep-flag=1`.
    Positive,
}

impl Default for Sweep {
    fn default() -> Self {
        Sweep::Positive
    }
}

impl Sweep {
    #[inline]
    fn flag(self) -> u8 {
        match self {
            Sweep::Negative => 0,
            Sweep::Positive => 1,
        }
    }
}

/// Builds a `M x1 y1 A r r 0 large-arc sweep x2 y2` path data string
/// for a circular arc from `start_angle` to `end_angle`.
///
/// The `large-arc-flag` is derived from the angular distance
/// traveled in the `sweep` direction.
///
/// # Examples
///
/// ```
/// use svgfns::{arc_path, Point, Sweep};
///
/// let d = arc_path(Point::new(0.0, 0.0), 10.0, 0.0, 180.0, Sweep::Positive);
/// assert!(d.starts_with("M 10 0 A 10 10 0 0 1 -10 "));
/// ```
pub fn arc_path(center: Point, radius: f64, start_angle: f64, end_angle: f64, sweep: Sweep) -> String {
    let start = polar_to_cartesian(center, radius, start_angle);
    let end = polar_to_cartesian(center, radius, end_angle);

    let full = 2.0 * PI;
    let mut diff = (end_angle - start_angle).to_radians() % full;
    match sweep {
        Sweep::Positive if diff < 0.0 => diff += full,
        Sweep::Negative if diff > 0.0 => diff -= full,
        _ => {}
    }

    let large_arc = if diff.abs() > PI { 1 } else { 0 };

    format!(
        "M {} {} A {} {} 0 {} {} {} {}",
        start.x, start.y, radius, radius, large_arc, sweep.flag(), end.x, end.y
    )
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{almost_equal, almost_equal_points};

    #[test]
    fn polar_round_trip() {
        let center = Point::new(5.0, 5.0);
        let p = polar_to_cartesian(center, 2.0, 90.0);
        assert!(almost_equal_points(p, Point::new(5.0, 7.0), 1e-9));

        let (r, angle) = cartesian_to_polar(center, p);
        assert!(almost_equal(r, 2.0, 1e-9));
        assert!(almost_equal(angle, 90.0, 1e-9));
    }

    #[test]
    fn cartesian_to_polar_range() {
        let (_, angle) = cartesian_to_polar(Point::default(), Point::new(-1.0, 0.0));
        assert!(almost_equal(angle, 180.0, 1e-9));

        let (_, angle) = cartesian_to_polar(Point::default(), Point::new(0.0, -1.0));
        assert!(almost_equal(angle, -90.0, 1e-9));
    }

    fn large_arc_flag(d: &str) -> &str {
        d.split(' ').nth(7).unwrap()
    }

    #[test]
    fn arc_small() {
        let d = arc_path(Point::default(), 10.0, 0.0, 90.0, Sweep::Positive);
        assert_eq!(large_arc_flag(&d), "0");
        assert!(d.starts_with("M 10 0 A 10 10 0 0 1 "));
    }

    #[test]
    fn arc_large() {
        let d = arc_path(Point::default(), 10.0, 0.0, 270.0, Sweep::Positive);
        assert_eq!(large_arc_flag(&d), "1");
    }

    #[test]
    fn arc_wraps_positive() {
        // 270 -> 0 clockwise is a quarter turn.
        let d = arc_path(Point::default(), 10.0, 270.0, 0.0, Sweep::Positive);
        assert_eq!(large_arc_flag(&d), "0");
    }

    #[test]
    fn arc_negative_sweep() {
        // 0 -> 90 counter-clockwise is three quarters.
        let d = arc_path(Point::default(), 10.0, 0.0, 90.0, Sweep::Negative);
        assert_eq!(large_arc_flag(&d), "1");
        assert!(d.contains(" 1 0 "));
    }
}
