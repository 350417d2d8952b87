// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Output size resolution.

use std::str::FromStr;

use svgtypes::{Length, LengthUnit};

use crate::{Matrix, ScreenSize, Size};

/// Parses a `width`/`height` attribute value into user units.
///
/// Absolute units are converted using 96 DPI.
/// Percentages and font-relative units (`em`, `ex`) can't be resolved
/// without a document, so they produce `None`, just like invalid values.
pub fn parse_dimension<'a, T: Into<Option<&'a str>>>(text: T) -> Option<f64> {
    let length = Length::from_str(text.into()?.trim()).ok()?;
    let n = length.number;
    let px = match length.unit {
        LengthUnit::None | LengthUnit::Px => n,
        LengthUnit::In => n * 96.0,
        LengthUnit::Cm => n * 96.0 / 2.54,
        LengthUnit::Mm => n * 96.0 / 25.4,
        LengthUnit::Pt => n * 4.0 / 3.0,
        LengthUnit::Pc => n * 16.0,
        LengthUnit::Em | LengthUnit::Ex | LengthUnit::Percent => return None,
    };

    if px.is_finite() { Some(px) } else { None }
}

/// Resolves the output size from optional `width` and `height`.
///
/// - Both set: used as is.
/// - One set: the other one is derived from the `intrinsic` aspect ratio.
/// - None set: the `intrinsic` size is used.
///
/// Zero, negative and non-finite values are treated as not set.
/// The result is rounded to whole pixels. Returns `None` when the
/// resolved size is empty or not finite.
pub fn resolve_dimensions(width: Option<f64>, height: Option<f64>, intrinsic: Size) -> Option<ScreenSize> {
    let is_set = |n: &f64| n.is_finite() && *n > 0.0;
    let (w, h) = match (width.filter(is_set), height.filter(is_set)) {
        (Some(w), Some(h)) => (w, h),
        (Some(w), None) => (w, w / intrinsic.aspect_ratio()),
        (None, Some(h)) => (h * intrinsic.aspect_ratio(), h),
        (None, None) => (intrinsic.width, intrinsic.height),
    };

    to_screen_size(w, h)
}

fn to_screen_size(width: f64, height: f64) -> Option<ScreenSize> {
    let width = width.round();
    let height = height.round();
    let max = u32::MAX as f64;
    if !(width >= 1.0 && width <= max && height >= 1.0 && height <= max) {
        return None;
    }

    ScreenSize::new(width as u32, height as u32)
}


/// Image fit options.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum FitTo {
    /// Keep original size.
    Original,
    /// Scale to width.
    Width(u32),
    /// Scale to height.
    Height(u32),
    /// Scale to fit inside the size, preserving the aspect ratio.
    Size(u32, u32),
    /// Zoom by factor.
    Zoom(f32),
}

impl Default for FitTo {
    fn default() -> Self {
        FitTo::Original
    }
}

impl FitTo {
    /// Applies the fit options to a size.
    pub fn fit_to(&self, size: ScreenSize) -> Option<ScreenSize> {
        let s = size.to_size();
        match *self {
            FitTo::Original => Some(size),
            FitTo::Width(w) => resolve_dimensions(Some(w as f64), None, s),
            FitTo::Height(h) => resolve_dimensions(None, Some(h as f64), s),
            FitTo::Size(w, h) => {
                let k = (w as f64 / s.width).min(h as f64 / s.height);
                to_screen_size(s.width * k, s.height * k)
            }
            FitTo::Zoom(z) => to_screen_size(s.width * z as f64, s.height * z as f64),
        }
    }

    /// Returns a scale matrix that maps `size` onto the fitted size.
    ///
    /// Returns an identity matrix when the size can't be fitted.
    pub fn fit_to_transform(&self, size: ScreenSize) -> Matrix {
        let size1 = size.to_size();
        let size2 = match self.fit_to(size) {
            Some(v) => v.to_size(),
            None => return Matrix::default(),
        };

        Matrix::from_scale(size2.width / size1.width, size2.height / size1.height)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_dim {
        ($name:ident, $text:expr, $result:expr) => (
            #[test]
            fn $name() {
                assert_eq!(parse_dimension($text), $result);
            }
        )
    }

    test_dim!(dim_1, "100", Some(100.0));
    test_dim!(dim_2, "100px", Some(100.0));
    test_dim!(dim_3, " 2.5 ", Some(2.5));
    test_dim!(dim_4, "1in", Some(96.0));
    test_dim!(dim_5, "12pt", Some(16.0));
    test_dim!(dim_6, "50%", None);
    test_dim!(dim_7, "2em", None);
    test_dim!(dim_8, "auto", None);
    test_dim!(dim_9, None, None);

    fn size(w: u32, h: u32) -> ScreenSize {
        ScreenSize::new(w, h).unwrap()
    }

    #[test]
    fn resolve_both() {
        let r = resolve_dimensions(Some(10.0), Some(20.0), Size::new(100.0, 50.0));
        assert_eq!(r, Some(size(10, 20)));
    }

    #[test]
    fn resolve_width() {
        let r = resolve_dimensions(Some(50.0), None, Size::new(200.0, 100.0));
        assert_eq!(r, Some(size(50, 25)));
    }

    #[test]
    fn resolve_height() {
        let r = resolve_dimensions(None, Some(33.0), Size::new(200.0, 100.0));
        assert_eq!(r, Some(size(66, 33)));
    }

    #[test]
    fn resolve_intrinsic() {
        let r = resolve_dimensions(None, Some(0.0), Size::new(10.4, 20.6));
        assert_eq!(r, Some(size(10, 21)));
    }

    #[test]
    fn resolve_degenerate() {
        assert_eq!(resolve_dimensions(Some(50.0), None, Size::new(0.0, 100.0)), None);
        assert_eq!(resolve_dimensions(None, None, Size::new(0.0, 0.0)), None);
    }

    #[test]
    fn fit_to() {
        let s = size(200, 100);
        assert_eq!(FitTo::Original.fit_to(s), Some(s));
        assert_eq!(FitTo::Width(100).fit_to(s), Some(size(100, 50)));
        assert_eq!(FitTo::Height(50).fit_to(s), Some(size(100, 50)));
        assert_eq!(FitTo::Size(100, 100).fit_to(s), Some(size(100, 50)));
        assert_eq!(FitTo::Zoom(1.5).fit_to(s), Some(size(300, 150)));
        assert_eq!(FitTo::Zoom(0.0).fit_to(s), None);
    }

    #[test]
    fn fit_to_transform() {
        let ts = FitTo::Zoom(2.0).fit_to_transform(size(10, 20));
        assert_eq!(ts, Matrix::from_scale(2.0, 2.0));
        assert_eq!(FitTo::Zoom(0.0).fit_to_transform(size(10, 20)), Matrix::identity());
    }
}
