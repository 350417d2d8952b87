// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! 2D geometric primitives.

use std::fmt;

use float_cmp::ApproxEqUlps;

use crate::Matrix;


/// Default absolute tolerance used by the `almost_equal*` helpers.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;


/// A trait for fuzzy/approximate equality comparisons of float numbers.
pub trait FuzzyEq<Rhs: ?Sized = Self> {
    /// Returns `true` if values are approximately equal.
    fn fuzzy_eq(&self, other: &Rhs) -> bool;
}

/// A trait for fuzzy/approximate comparisons of float numbers with zero.
pub trait FuzzyZero: FuzzyEq {
    /// Returns `true` if the number is approximately zero.
    fn is_fuzzy_zero(&self) -> bool;
}

impl FuzzyEq for f64 {
    #[inline]
    fn fuzzy_eq(&self, other: &f64) -> bool {
        self.approx_eq_ulps(other, 4)
    }
}

impl FuzzyZero for f64 {
    #[inline]
    fn is_fuzzy_zero(&self) -> bool {
        self.fuzzy_eq(&0.0)
    }
}


/// Checks that two numbers differ by less than `tolerance`.
///
/// Unlike [`FuzzyEq`], this is an absolute comparison, which is what you want
/// for values produced by trigonometry, like `cos(90deg)`.
#[inline]
pub fn almost_equal(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

/// Checks that two points are within `tolerance` on both axes.
#[inline]
pub fn almost_equal_points(a: Point, b: Point, tolerance: f64) -> bool {
    almost_equal(a.x, b.x, tolerance) && almost_equal(a.y, b.y, tolerance)
}

/// Calculates the Euclidean distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Returns the point halfway between `a` and `b`.
#[inline]
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Calculates the slope of the line through `a` and `b`.
///
/// Returns `f64::INFINITY` for a vertical line and `NaN` when both points
/// are the same within `tolerance`.
pub fn slope(a: Point, b: Point, tolerance: f64) -> f64 {
    if almost_equal(a.x, b.x, tolerance) {
        return if almost_equal(a.y, b.y, tolerance) { f64::NAN } else { f64::INFINITY };
    }

    (b.y - a.y) / (b.x - a.x)
}

/// Rotates a point around `pivot` by `angle` degrees.
///
/// Positive angles rotate clockwise in a Y-down coordinate system.
pub fn rotate_point(p: Point, angle: f64, pivot: Point) -> Point {
    let (sin, cos) = angle.to_radians().sin_cos();
    let dx = p.x - pivot.x;
    let dy = p.y - pivot.y;
    Point::new(
        pivot.x + dx * cos - dy * sin,
        pivot.y + dx * sin + dy * cos,
    )
}


/// A 2D point representation.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new `Point` from values.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Maps the point through a matrix.
    #[inline]
    pub fn transform(self, ts: &Matrix) -> Self {
        ts.apply(self)
    }
}

impl From<(f64, f64)> for Point {
    fn from(v: (f64, f64)) -> Self {
        Point::new(v.0, v.1)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Point({} {})", self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FuzzyEq for Point {
    fn fuzzy_eq(&self, other: &Self) -> bool {
           self.x.fuzzy_eq(&other.x)
        && self.y.fuzzy_eq(&other.y)
    }
}


/// A 2D size representation.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Creates a new `Size` from values.
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }

    /// Returns `width / height`.
    #[inline]
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

impl From<(f64, f64)> for Size {
    fn from(v: (f64, f64)) -> Self {
        Size::new(v.0, v.1)
    }
}

impl fmt::Debug for Size {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Size({} {})", self.width, self.height)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FuzzyEq for Size {
    fn fuzzy_eq(&self, other: &Self) -> bool {
           self.width.fuzzy_eq(&other.width)
        && self.height.fuzzy_eq(&other.height)
    }
}


/// An integer size, used for raster output.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    /// Creates a new `ScreenSize`.
    ///
    /// Returns `None` when any of the sides is zero.
    #[inline]
    pub fn new(width: u32, height: u32) -> Option<Self> {
        if width > 0 && height > 0 {
            Some(ScreenSize { width, height })
        } else {
            None
        }
    }

    /// Converts the size into `Size`.
    #[inline]
    pub fn to_size(&self) -> Size {
        Size::new(self.width as f64, self.height as f64)
    }
}


/// A rect representation.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a new `Rect` from values.
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect { x, y, width, height }
    }

    /// Creates a new `Rect` from edge positions.
    #[inline]
    pub fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Rect::new(left, top, right - left, bottom - top)
    }

    /// Returns rect's size.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns rect's left edge position.
    #[inline]
    pub fn left(&self) -> f64 {
        self.x
    }

    /// Returns rect's right edge position.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Returns rect's top edge position.
    #[inline]
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Returns rect's bottom edge position.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Returns rect's center.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns the four corners, clockwise from the top-left one.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left(), self.top()),
            Point::new(self.right(), self.top()),
            Point::new(self.right(), self.bottom()),
            Point::new(self.left(), self.bottom()),
        ]
    }

    /// Checks that all components are finite numbers.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Checks that the rect has a valid size.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Returns the smallest rect that contains both rects.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::from_ltrb(
            self.left().min(other.left()),
            self.top().min(other.top()),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }

    /// Returns the axis-aligned bounding box of this rect mapped through `ts`.
    ///
    /// The result is exact for translate/scale matrices and a conservative
    /// box for rotation and skew.
    pub fn bbox_transform(&self, ts: &Matrix) -> Rect {
        let corners = self.corners();
        let first = ts.apply(corners[0]);
        let (mut left, mut top, mut right, mut bottom) = (first.x, first.y, first.x, first.y);

        for p in corners.iter().skip(1) {
            let p = ts.apply(*p);
            left = left.min(p.x);
            top = top.min(p.y);
            right = right.max(p.x);
            bottom = bottom.max(p.y);
        }

        Rect::from_ltrb(left, top, right, bottom)
    }
}

impl FuzzyEq for Rect {
    fn fuzzy_eq(&self, other: &Self) -> bool {
           self.x.fuzzy_eq(&other.x)
        && self.y.fuzzy_eq(&other.y)
        && self.width.fuzzy_eq(&other.width)
        && self.height.fuzzy_eq(&other.height)
    }
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Rect({} {} {} {})", self.x, self.y, self.width, self.height)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl From<(f64, f64, f64, f64)> for Rect {
    fn from(v: (f64, f64, f64, f64)) -> Self {
        Rect::new(v.0, v.1, v.2, v.3)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_345() {
        assert_eq!(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn midpoint_1() {
        assert_eq!(midpoint(Point::new(0.0, 0.0), Point::new(2.0, 2.0)), Point::new(1.0, 1.0));
    }

    #[test]
    fn slope_diagonal() {
        assert_eq!(slope(Point::new(0.0, 0.0), Point::new(2.0, 2.0), DEFAULT_TOLERANCE), 1.0);
    }

    #[test]
    fn slope_vertical() {
        let s = slope(Point::new(0.0, 0.0), Point::new(0.0, 5.0), DEFAULT_TOLERANCE);
        assert_eq!(s, f64::INFINITY);
    }

    #[test]
    fn slope_same_point() {
        assert!(slope(Point::new(1.0, 1.0), Point::new(1.0, 1.0), DEFAULT_TOLERANCE).is_nan());
    }

    #[test]
    fn rotate_point_origin() {
        let p = rotate_point(Point::new(1.0, 0.0), 90.0, Point::default());
        assert!(almost_equal_points(p, Point::new(0.0, 1.0), 1e-9));
    }

    #[test]
    fn rotate_point_pivot() {
        let p = rotate_point(Point::new(2.0, 1.0), 90.0, Point::new(1.0, 1.0));
        assert!(almost_equal_points(p, Point::new(1.0, 2.0), 1e-9));
    }

    #[test]
    fn almost_equal_points_1() {
        let a = Point::new(1.0, 1.0);
        assert!(almost_equal_points(a, Point::new(1.000_000_000_1, 1.0), DEFAULT_TOLERANCE));
        assert!(!almost_equal_points(a, Point::new(1.1, 1.1), DEFAULT_TOLERANCE));
    }

    #[test]
    fn union_1() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, -5.0, 10.0, 10.0);
        assert_eq!(a.union(&b), Rect::new(0.0, -5.0, 15.0, 15.0));
    }

    #[test]
    fn bbox_transform_scale() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        let ts = Matrix::from_scale(2.0, -1.0);
        assert_eq!(r.bbox_transform(&ts), Rect::new(2.0, -6.0, 6.0, 4.0));
    }

    #[test]
    fn bbox_transform_rotate() {
        let r = Rect::new(0.0, 0.0, 10.0, 20.0);
        let bbox = r.bbox_transform(&Matrix::from_rotate(90.0));
        assert!(almost_equal(bbox.x, -20.0, 1e-9));
        assert!(almost_equal(bbox.y, 0.0, 1e-9));
        assert!(almost_equal(bbox.width, 20.0, 1e-9));
        assert!(almost_equal(bbox.height, 10.0, 1e-9));
    }

    #[test]
    fn screen_size_zero() {
        assert!(ScreenSize::new(0, 10).is_none());
        assert!(ScreenSize::new(10, 10).is_some());
    }

    #[test]
    fn rect_is_finite() {
        assert!(Rect::new(0.0, 0.0, 1.0, 1.0).is_finite());
        assert!(!Rect::new(0.0, f64::NAN, 1.0, 1.0).is_finite());
    }
}
