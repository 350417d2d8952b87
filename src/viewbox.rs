// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! `viewBox` arithmetic: pan, zoom, crop and fit.
//!
//! All functions operate on user-space rects and never touch a document.

use std::str::FromStr;

use crate::{Error, Matrix, Point, Rect};

/// A box padding in user units.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    /// Creates a new padding.
    #[inline]
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Padding { top, right, bottom, left }
    }
}

/// The same padding on all sides.
impl From<f64> for Padding {
    #[inline]
    fn from(n: f64) -> Self {
        Padding::new(n, n, n, n)
    }
}


/// Parses a `viewBox` attribute value.
///
/// Values can be separated by commas and/or whitespace.
/// Non-numeric values are dropped. Returns `None` when less than
/// four numbers are left. Extra numbers are ignored.
pub fn parse_view_box<'a, T: Into<Option<&'a str>>>(text: T) -> Option<Rect> {
    let text = text.into()?;
    let mut numbers = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .filter_map(|s| svgtypes::Number::from_str(s).ok())
        .map(|n| n.0);

    Some(Rect::new(numbers.next()?, numbers.next()?, numbers.next()?, numbers.next()?))
}

/// Writes a rect as a `viewBox` attribute value.
///
/// When `round` is set, values are rounded to 3 decimal places.
pub fn format_view_box(rect: &Rect, round: bool) -> String {
    let r = |n: f64| if round { round_to_thousandths(n) } else { n };
    format!("{} {} {} {}", r(rect.x), r(rect.y), r(rect.width), r(rect.height))
}

#[inline]
fn round_to_thousandths(n: f64) -> f64 {
    (n * 1000.0).round() / 1000.0
}

/// Moves a `viewBox` by `dx`, `dy` user units.
#[inline]
pub fn translate_view_box(vb: &Rect, dx: f64, dy: f64) -> Rect {
    Rect::new(vb.x + dx, vb.y + dy, vb.width, vb.height)
}

/// Zooms a `viewBox` by `factor` around `center`.
///
/// `factor > 1` zooms in, `factor < 1` zooms out. The `center` stays at the
/// same relative position and defaults to the `viewBox` center.
///
/// # Errors
///
/// - `InvalidZoomFactor` when `factor` is not a finite positive number.
pub fn scale_view_box(vb: &Rect, factor: f64, center: Option<Point>) -> Result<Rect, Error> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(Error::InvalidZoomFactor(factor));
    }

    let c = center.unwrap_or_else(|| vb.center());
    Ok(Rect::new(
        c.x - (c.x - vb.x) / factor,
        c.y - (c.y - vb.y) / factor,
        vb.width / factor,
        vb.height / factor,
    ))
}

/// Returns the bounding box of a `viewBox` mapped through `ts`.
///
/// Rotation and skew produce a larger box that contains all the corners.
#[inline]
pub fn transform_view_box(vb: &Rect, ts: &Matrix) -> Rect {
    vb.bbox_transform(ts)
}

/// Expands a content box by the padding.
///
/// The result is a tight crop rect for a `viewBox`.
pub fn trim_box<P: Into<Padding>>(content: &Rect, padding: P) -> Rect {
    let p = padding.into();
    Rect::new(
        content.x - p.left,
        content.y - p.top,
        content.width + p.left + p.right,
        content.height + p.top + p.bottom,
    )
}

/// Centers a `viewBox` on the content while keeping its size.
///
/// Without a `viewBox`, the content size is used, with `100` for an empty side.
pub fn center_view_box(content: &Rect, vb: Option<&Rect>) -> Rect {
    let (width, height) = match vb {
        Some(vb) => (vb.width, vb.height),
        None => (non_zero_or(content.width, 100.0), non_zero_or(content.height, 100.0)),
    };

    let c = content.center();
    Rect::new(c.x - width / 2.0, c.y - height / 2.0, width, height)
}

#[inline]
fn non_zero_or(n: f64, fallback: f64) -> f64 {
    if n != 0.0 && !n.is_nan() { n } else { fallback }
}

/// Builds a `viewBox` that fits the padded content into `width` x `height`
/// while preserving the aspect ratio.
///
/// The padded content box is divided by `min(width / w, height / h)`
/// and centered on the content. Padded content sides smaller than 1
/// are treated as 1.
pub fn fit_view_box<P: Into<Padding>>(content: &Rect, width: f64, height: f64, padding: P) -> Rect {
    let trimmed = trim_box(content, padding);
    let content_w = trimmed.width.max(1.0);
    let content_h = trimmed.height.max(1.0);
    let scale = (width / content_w).min(height / content_h);

    let new_w = trimmed.width / scale;
    let new_h = trimmed.height / scale;
    let c = trimmed.center();
    Rect::new(c.x - new_w / 2.0, c.y - new_h / 2.0, new_w, new_h)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::FuzzyEq;

    macro_rules! test_parse {
        ($name:ident, $text:expr, $result:expr) => (
            #[test]
            fn $name() {
                assert_eq!(parse_view_box($text), $result);
            }
        )
    }

    test_parse!(parse_1, "0 0 100 50", Some(Rect::new(0.0, 0.0, 100.0, 50.0)));
    test_parse!(parse_2, " -10,-20 , 30 40 ", Some(Rect::new(-10.0, -20.0, 30.0, 40.0)));
    test_parse!(parse_3, "0 0 100", None);
    test_parse!(parse_4, "0 a 0 100 50", Some(Rect::new(0.0, 0.0, 100.0, 50.0)));
    test_parse!(parse_5, "", None);
    test_parse!(parse_6, None, None);
    test_parse!(parse_7, "1 2 3 4 5", Some(Rect::new(1.0, 2.0, 3.0, 4.0)));

    #[test]
    fn format_1() {
        let r = Rect::new(0.12345, 1.0, 10.0006, 2.5);
        assert_eq!(format_view_box(&r, true), "0.123 1 10.001 2.5");
        assert_eq!(format_view_box(&r, false), "0.12345 1 10.0006 2.5");
    }

    #[test]
    fn translate_1() {
        let vb = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(translate_view_box(&vb, 10.0, -5.0), Rect::new(10.0, -5.0, 100.0, 100.0));
    }

    #[test]
    fn zoom_in_center() {
        let vb = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(scale_view_box(&vb, 2.0, None).unwrap(), Rect::new(25.0, 25.0, 50.0, 50.0));
    }

    #[test]
    fn zoom_out_at_point() {
        let vb = Rect::new(0.0, 0.0, 100.0, 100.0);
        let r = scale_view_box(&vb, 0.5, Some(Point::new(0.0, 0.0))).unwrap();
        assert_eq!(r, Rect::new(0.0, 0.0, 200.0, 200.0));
    }

    #[test]
    fn zoom_invalid() {
        let vb = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(scale_view_box(&vb, 0.0, None), Err(Error::InvalidZoomFactor(0.0)));
        assert!(scale_view_box(&vb, -1.0, None).is_err());
        assert!(scale_view_box(&vb, f64::INFINITY, None).is_err());
    }

    #[test]
    fn transform_1() {
        let vb = Rect::new(0.0, 0.0, 10.0, 10.0);
        let ts = crate::parse_transform("translate(5 5) scale(2)");
        assert_eq!(transform_view_box(&vb, &ts), Rect::new(5.0, 5.0, 20.0, 20.0));
    }

    #[test]
    fn trim_1() {
        let content = Rect::new(10.0, 10.0, 50.0, 20.0);
        assert_eq!(trim_box(&content, 5.0), Rect::new(5.0, 5.0, 60.0, 30.0));
        assert_eq!(
            trim_box(&content, Padding::new(1.0, 2.0, 3.0, 4.0)),
            Rect::new(6.0, 9.0, 56.0, 24.0)
        );
    }

    #[test]
    fn center_1() {
        let content = Rect::new(10.0, 10.0, 20.0, 20.0);
        let vb = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(center_view_box(&content, Some(&vb)), Rect::new(-30.0, -5.0, 100.0, 50.0));
    }

    #[test]
    fn center_without_view_box() {
        let content = Rect::new(10.0, 10.0, 0.0, 20.0);
        assert_eq!(center_view_box(&content, None), Rect::new(-40.0, 10.0, 100.0, 20.0));
    }

    #[test]
    fn fit_1() {
        let content = Rect::new(0.0, 0.0, 200.0, 100.0);
        let r = fit_view_box(&content, 100.0, 100.0, 0.0);
        assert!(r.fuzzy_eq(&Rect::new(-100.0, -50.0, 400.0, 200.0)));

        let r = fit_view_box(&content, 400.0, 400.0, 0.0);
        assert!(r.fuzzy_eq(&Rect::new(50.0, 25.0, 100.0, 50.0)));
    }
}
