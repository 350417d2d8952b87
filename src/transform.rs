// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt;

use crate::geom::{FuzzyEq, FuzzyZero, Point};

/// A 2D affine transform in the SVG `matrix(a b c d e f)` layout.
///
/// Maps a point as:
///
/// ```text
/// x' = a*x + c*y + e
/// y' = b*x + d*y + f
/// ```
///
/// The implicit third row `(0 0 1)` is never stored.
///
/// All angles taken by the constructors are in degrees.
#[derive(Clone, Copy, PartialEq, Debug)]
#[allow(missing_docs)]
pub struct Matrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Matrix {
    /// Constructs a new matrix.
    #[inline]
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Matrix { a, b, c, d, e, f }
    }

    /// Constructs an identity matrix, aka `matrix(1 0 0 1 0 0)`.
    #[inline]
    pub fn identity() -> Self {
        Matrix::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    /// Constructs a new translate matrix.
    #[inline]
    pub fn from_translate(tx: f64, ty: f64) -> Self {
        Matrix::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// Constructs a new scale matrix.
    #[inline]
    pub fn from_scale(sx: f64, sy: f64) -> Self {
        Matrix::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Constructs a new scale matrix that scales both axes by `s`.
    #[inline]
    pub fn from_uniform_scale(s: f64) -> Self {
        Matrix::from_scale(s, s)
    }

    /// Constructs a new rotate matrix.
    ///
    /// Rotation is about the origin. A positive angle rotates clockwise
    /// in a Y-down coordinate system.
    #[inline]
    pub fn from_rotate(angle: f64) -> Self {
        let (sin, cos) = angle.to_radians().sin_cos();
        Matrix::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Constructs a new rotate matrix about the `(cx, cy)` pivot.
    ///
    /// Same as `translate(cx cy) rotate(angle) translate(-cx -cy)`.
    #[inline]
    pub fn from_rotate_at(angle: f64, cx: f64, cy: f64) -> Self {
        compose(&[
            Matrix::from_translate(cx, cy),
            Matrix::from_rotate(angle),
            Matrix::from_translate(-cx, -cy),
        ])
    }

    /// Constructs a new skew matrix along the X axis.
    #[inline]
    pub fn from_skew_x(angle: f64) -> Self {
        Matrix::new(1.0, 0.0, angle.to_radians().tan(), 1.0, 0.0, 0.0)
    }

    /// Constructs a new skew matrix along the Y axis.
    #[inline]
    pub fn from_skew_y(angle: f64) -> Self {
        Matrix::new(1.0, angle.to_radians().tan(), 0.0, 1.0, 0.0, 0.0)
    }

    /// Returns `self * other`.
    ///
    /// See [`multiply`] for the application order.
    #[inline]
    pub fn multiply(&self, other: &Matrix) -> Matrix {
        multiply(self, other)
    }

    /// Maps a point through the matrix.
    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Returns the matrix determinant.
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Returns an inverted matrix.
    ///
    /// Returns `None` for a singular matrix or when a component is not finite.
    pub fn invert(&self) -> Option<Matrix> {
        let det = self.determinant();
        if det.is_fuzzy_zero() || !det.is_finite() {
            return None;
        }

        let inv_det = 1.0 / det;
        Some(Matrix::new(
             self.d * inv_det,
            -self.b * inv_det,
            -self.c * inv_det,
             self.a * inv_det,
            (self.c * self.f - self.d * self.e) * inv_det,
            (self.b * self.e - self.a * self.f) * inv_det,
        ))
    }

    /// Returns `true` if the matrix is an identity one, aka `(1 0 0 1 0 0)`.
    pub fn is_identity(&self) -> bool {
        self.fuzzy_eq(&Matrix::identity())
    }

    /// Returns `true` if the matrix contains a translate part.
    pub fn has_translate(&self) -> bool {
        !self.e.is_fuzzy_zero() || !self.f.is_fuzzy_zero()
    }

    /// Returns `true` if all components are finite.
    pub fn is_finite(&self) -> bool {
        self.a.is_finite()
            && self.b.is_finite()
            && self.c.is_finite()
            && self.d.is_finite()
            && self.e.is_finite()
            && self.f.is_finite()
    }

    /// Returns the components as a `[a, b, c, d, e, f]` array.
    #[inline]
    pub fn to_array(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    /// Factors the matrix into elementary transforms.
    ///
    /// See [`decompose`].
    #[inline]
    pub fn decompose(&self) -> Decomposition {
        decompose(self)
    }
}

impl Default for Matrix {
    #[inline]
    fn default() -> Matrix {
        Matrix::identity()
    }
}

impl From<[f64; 6]> for Matrix {
    #[inline]
    fn from(v: [f64; 6]) -> Self {
        Matrix::new(v[0], v[1], v[2], v[3], v[4], v[5])
    }
}

impl FuzzyEq for Matrix {
    fn fuzzy_eq(&self, other: &Self) -> bool {
           self.a.fuzzy_eq(&other.a)
        && self.b.fuzzy_eq(&other.b)
        && self.c.fuzzy_eq(&other.c)
        && self.d.fuzzy_eq(&other.d)
        && self.e.fuzzy_eq(&other.e)
        && self.f.fuzzy_eq(&other.f)
    }
}

/// Writes the matrix as a `transform` attribute value.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "matrix({} {} {} {} {} {})", self.a, self.b, self.c, self.d, self.e, self.f)
    }
}


/// Multiplies two matrices, returning `ts1 * ts2`.
///
/// This is the matrix of the `transform="ts1 ts2"` list: `ts1` sets up the outer
/// coordinate system, so a point is mapped by `ts2` first and by `ts1` after.
#[inline(never)]
pub fn multiply(ts1: &Matrix, ts2: &Matrix) -> Matrix {
    Matrix {
        a: ts1.a * ts2.a + ts1.c * ts2.b,
        b: ts1.b * ts2.a + ts1.d * ts2.b,
        c: ts1.a * ts2.c + ts1.c * ts2.d,
        d: ts1.b * ts2.c + ts1.d * ts2.d,
        e: ts1.a * ts2.e + ts1.c * ts2.f + ts1.e,
        f: ts1.b * ts2.e + ts1.d * ts2.f + ts1.f,
    }
}

/// Folds matrices left-to-right with [`multiply`].
///
/// `compose(&[a, b, c])` is the matrix of `transform="a b c"`.
/// An empty slice produces an identity matrix.
///
/// # Examples
///
/// ```
/// use svgfns::{compose, Matrix, Point};
///
/// let ts = compose(&[Matrix::from_uniform_scale(2.0), Matrix::from_translate(5.0, 0.0)]);
/// assert_eq!(ts.apply(Point::new(1.0, 1.0)), Point::new(12.0, 2.0));
/// ```
pub fn compose(matrices: &[Matrix]) -> Matrix {
    matrices.iter().fold(Matrix::identity(), |acc, ts| multiply(&acc, ts))
}

/// Maps a point through a matrix.
#[inline]
pub fn apply_matrix_to_point(p: Point, ts: &Matrix) -> Point {
    ts.apply(p)
}


/// A matrix factored into elementary transforms.
///
/// The factorization is not unique. This one satisfies:
///
/// ```text
/// compose([translate(tx ty), rotate(rotate), scale(sx sy), skewX(skew_x)]) == matrix
/// ```
///
/// Mirroring is always carried by a negative `scale.0`, never by `scale.1`.
/// `rotate` is in the `(-180, 180]` range.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Decomposition {
    /// The `(e, f)` part.
    pub translate: Point,
    /// Rotation in degrees.
    pub rotate: f64,
    /// `(sx, sy)` scale factors.
    pub scale: (f64, f64),
    /// X-axis skew in degrees.
    pub skew_x: f64,
}

impl Decomposition {
    /// Composes the parts back into a matrix.
    pub fn to_matrix(&self) -> Matrix {
        compose(&[
            Matrix::from_translate(self.translate.x, self.translate.y),
            Matrix::from_rotate(self.rotate),
            Matrix::from_scale(self.scale.0, self.scale.1),
            Matrix::from_skew_x(self.skew_x),
        ])
    }
}

/// Factors a matrix into translate, rotate, scale and skew parts.
///
/// Uses a QR factorization of the `[[a c] [b d]]` linear part.
///
/// When the first column is zero, the rotation is chosen so that the second
/// column becomes the Y scale, and both `scale.0` and `skew_x` are zero.
/// A fully collapsed matrix therefore produces zero rotation and zero skew.
pub fn decompose(ts: &Matrix) -> Decomposition {
    let Matrix { a, b, c, d, e, f } = *ts;
    let translate = Point::new(e, f);

    let scale_x = a.hypot(b);
    if scale_x == 0.0 {
        return Decomposition {
            translate,
            rotate: normalize_angle((-c).atan2(d).to_degrees()),
            scale: (0.0, c.hypot(d)),
            skew_x: 0.0,
        };
    }

    let a_norm = a / scale_x;
    let b_norm = b / scale_x;

    let shear = a_norm * c + b_norm * d;
    let c2 = c - a_norm * shear;
    let d2 = d - b_norm * shear;
    let scale_y = c2.hypot(d2);

    // A reflection is moved into the X scale, which flips the first column.
    let reflect = if ts.determinant() < 0.0 { -1.0 } else { 1.0 };
    let rotate = (b_norm * reflect).atan2(a_norm * reflect).to_degrees();

    Decomposition {
        translate,
        rotate: normalize_angle(rotate),
        scale: (scale_x * reflect, scale_y),
        skew_x: (shear / scale_x).atan().to_degrees(),
    }
}

#[inline]
fn normalize_angle(angle: f64) -> f64 {
    if angle <= -180.0 { angle + 360.0 } else { angle }
}
