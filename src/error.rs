// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::parser::SkipReason;

/// List of all errors.
#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// A transform list contains a malformed function.
    ///
    /// Only produced by the strict parser. The position is in chars, starting from 1.
    InvalidTransform {
        /// Position of the function name.
        pos: usize,
        /// Why the function was rejected.
        reason: SkipReason,
    },

    /// A transform list is longer than the configured limit.
    InputTooLong {
        /// Input length in bytes.
        len: usize,
        /// Allowed length in bytes.
        max: usize,
    },

    /// A zoom factor must be a finite positive number.
    InvalidZoomFactor(f64),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::InvalidTransform { pos, ref reason } => {
                write!(f, "{} at position {}", reason, pos)
            }
            Error::InputTooLong { len, max } => {
                write!(f, "input is {} bytes long, while the limit is {}", len, max)
            }
            Error::InvalidZoomFactor(factor) => {
                write!(f, "zoom factor must be > 0, got {}", factor)
            }
        }
    }
}

impl std::error::Error for Error {}
