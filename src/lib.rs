// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
*svgfns* is a collection of SVG geometry utilities.

The core is a 2D affine transform engine:

- matrix factories: [`Matrix::identity`], [`Matrix::from_translate`], [`Matrix::from_scale`],
  [`Matrix::from_rotate`], [`Matrix::from_skew_x`], [`Matrix::from_skew_y`]
- composition: [`multiply`] and [`compose`]
- point mapping: [`apply_matrix_to_point`]
- factorization: [`decompose`]
- the [`<transform-list>`] parser: [`parse_transform`]

On top of it there are `viewBox` helpers (pan, zoom, crop, fit),
output size resolution and a few plain geometry functions.

## Conventions

- Matrices use the SVG `matrix(a b c d e f)` layout.
- `compose(&[a, b, c])` is the same as `transform="a b c"`.
- All angles are in degrees. Positive angles rotate clockwise
  in a Y-down coordinate system.

## Safety

- The library should not panic on any input.
- The library forbids unsafe code.

[`<transform-list>`]: https://www.w3.org/TR/SVG11/coords.html#TransformAttribute
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(missing_debug_implementations)]

mod dimensions;
mod error;
mod geom;
mod parser;
mod polar;
mod transform;
mod viewbox;

pub use crate::dimensions::*;
pub use crate::error::*;
pub use crate::geom::*;
pub use crate::parser::*;
pub use crate::polar::*;
pub use crate::transform::*;
pub use crate::viewbox::*;
