// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The [`<transform-list>`] parser.
//!
//! [`<transform-list>`]: https://www.w3.org/TR/SVG11/coords.html#TransformAttribute

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};

use crate::{compose, Error, Matrix};

/// The default transform list length limit, in bytes.
pub const MAX_TRANSFORM_LEN: usize = 10_000;

/// Transform list parsing options.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ParseOptions {
    /// Inputs longer than this many bytes are not parsed at all.
    ///
    /// Default: [`MAX_TRANSFORM_LEN`]
    pub max_len: usize,
}

impl Default for ParseOptions {
    fn default() -> ParseOptions {
        ParseOptions {
            max_len: MAX_TRANSFORM_LEN,
        }
    }
}


/// A single `name(args)` function call from a transform list.
///
/// Arguments are kept as raw text and parsed by [`Token::evaluate`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Token<'a> {
    /// Function name.
    pub name: &'a str,
    /// Text between the parentheses.
    pub args: &'a str,
    /// Byte offset of the name.
    pub start: usize,
    /// Byte offset just after the closing parenthesis.
    pub end: usize,
}

/// Why a transform function was left out of the result.
#[derive(Clone, PartialEq, Debug)]
pub enum SkipReason {
    /// Not one of the supported transform functions.
    UnknownFunction(String),

    /// An argument is not a finite SVG number.
    InvalidNumber(String),

    /// A function has a wrong number of arguments.
    ArgumentCount {
        /// Function name.
        name: String,
        /// Number of arguments found.
        found: usize,
    },

    /// Text outside of any transform function.
    ///
    /// Ignored by [`parse_transform`], rejected by [`parse_transform_strict`].
    UnexpectedData,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SkipReason::UnknownFunction(ref name) => {
                write!(f, "unknown transform function '{}'", name)
            }
            SkipReason::InvalidNumber(ref text) => {
                write!(f, "invalid number '{}'", text)
            }
            SkipReason::ArgumentCount { ref name, found } => {
                write!(f, "'{}' does not accept {} argument(s)", name, found)
            }
            SkipReason::UnexpectedData => {
                write!(f, "unexpected data")
            }
        }
    }
}

/// A result of a single transform function evaluation.
#[derive(Clone, PartialEq, Debug)]
pub enum TokenResult {
    /// The function was converted into a matrix.
    Valid(Matrix),
    /// The function is malformed and must not affect the result.
    Skipped(SkipReason),
}


/// Splits a transform list into `name(args)` tokens.
///
/// Matches every `(\w+)\s*\(([^)]*)\)` occurrence from left to right.
/// Anything in between is ignored.
///
/// # Examples
///
/// ```
/// use svgfns::tokenize;
///
/// let tokens = tokenize("translate(10, 20) rotate (45)");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[1].name, "rotate");
/// assert_eq!(tokens[1].args, "45");
/// ```
pub fn tokenize(text: &str) -> Vec<Token> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        if !is_word_byte(bytes[pos]) {
            pos += 1;
            continue;
        }

        let start = pos;
        while pos < bytes.len() && is_word_byte(bytes[pos]) {
            pos += 1;
        }
        let name_end = pos;

        let rest = &text[pos..];
        pos += rest.find(|c: char| !c.is_whitespace()).unwrap_or(rest.len());

        // A match can't start in the middle of this word either,
        // so continue right after it.
        if pos == bytes.len() || bytes[pos] != b'(' {
            continue;
        }

        let args_start = pos + 1;
        let args_len = match bytes[args_start..].iter().position(|c| *c == b')') {
            Some(n) => n,
            // No closing parenthesis till the end, so nothing else can match.
            None => break,
        };

        let end = args_start + args_len + 1;
        tokens.push(Token {
            name: &text[start..name_end],
            args: &text[args_start..args_start + args_len],
            start,
            end,
        });
        pos = end;
    }

    tokens
}

#[inline]
fn is_word_byte(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

impl<'a> Token<'a> {
    /// Parses comma and/or whitespace separated arguments.
    pub fn numbers(&self) -> Result<Vec<f64>, SkipReason> {
        self.args
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(parse_number)
            .collect()
    }

    /// Converts the token into a matrix.
    pub fn evaluate(&self) -> TokenResult {
        let numbers = match self.numbers() {
            Ok(v) => v,
            Err(e) => return TokenResult::Skipped(e),
        };

        let ts = match (self.name, numbers.as_slice()) {
            ("matrix", &[a, b, c, d, e, f]) => Matrix::new(a, b, c, d, e, f),
            ("translate", &[tx]) => Matrix::from_translate(tx, 0.0),
            ("translate", &[tx, ty]) => Matrix::from_translate(tx, ty),
            ("translateX", &[tx]) => Matrix::from_translate(tx, 0.0),
            ("translateY", &[ty]) => Matrix::from_translate(0.0, ty),
            ("scale", &[s]) => Matrix::from_uniform_scale(s),
            ("scale", &[sx, sy]) => Matrix::from_scale(sx, sy),
            ("scaleX", &[sx]) => Matrix::from_scale(sx, 1.0),
            ("scaleY", &[sy]) => Matrix::from_scale(1.0, sy),
            ("rotate", &[angle]) | ("rotate", &[angle, _]) => Matrix::from_rotate(angle),
            ("rotate", &[angle, cx, cy]) => {
                if cx != 0.0 || cy != 0.0 {
                    Matrix::from_rotate_at(angle, cx, cy)
                } else {
                    Matrix::from_rotate(angle)
                }
            }
            ("skewX", &[angle]) => Matrix::from_skew_x(angle),
            ("skewY", &[angle]) => Matrix::from_skew_y(angle),
            (
                "matrix" | "translate" | "translateX" | "translateY" | "scale" | "scaleX"
                | "scaleY" | "rotate" | "skewX" | "skewY",
                _,
            ) => {
                return TokenResult::Skipped(SkipReason::ArgumentCount {
                    name: self.name.to_string(),
                    found: numbers.len(),
                });
            }
            _ => return TokenResult::Skipped(SkipReason::UnknownFunction(self.name.to_string())),
        };

        TokenResult::Valid(ts)
    }
}

fn parse_number(text: &str) -> Result<f64, SkipReason> {
    match svgtypes::Number::from_str(text) {
        Ok(n) if n.0.is_finite() => Ok(n.0),
        _ => Err(SkipReason::InvalidNumber(text.to_string())),
    }
}


/// Parses an SVG `transform` attribute value into a single matrix.
///
/// This parser never fails:
///
/// - `None`, an empty string or a string without any transform function
///   produce an identity matrix.
/// - Malformed functions (unknown name, bad number, wrong arity) are skipped,
///   the rest are still applied.
/// - Inputs longer than [`MAX_TRANSFORM_LEN`] produce an identity matrix.
///
/// Functions are composed in the document order, just like [`compose`].
///
/// Use [`parse_transform_strict`] or `Matrix::from_str` when malformed input
/// must be reported instead.
///
/// # Examples
///
/// ```
/// use svgfns::{parse_transform, Matrix};
///
/// assert_eq!(parse_transform("translate(10) scale(2)"), Matrix::new(2.0, 0.0, 0.0, 2.0, 10.0, 0.0));
/// assert_eq!(parse_transform("translate(foo) scale(2)"), Matrix::from_uniform_scale(2.0));
/// assert_eq!(parse_transform(None), Matrix::identity());
/// ```
pub fn parse_transform<'a, T: Into<Option<&'a str>>>(text: T) -> Matrix {
    parse_transform_with(text, &ParseOptions::default())
}

/// Like [`parse_transform`], but with custom options.
pub fn parse_transform_with<'a, T: Into<Option<&'a str>>>(text: T, opt: &ParseOptions) -> Matrix {
    let text = match text.into() {
        Some(v) => v,
        None => return Matrix::identity(),
    };

    if text.len() > opt.max_len {
        warn!("Transform list is {} bytes long, while the limit is {}. Ignored.",
              text.len(), opt.max_len);
        return Matrix::identity();
    }

    let matrices: Vec<Matrix> = tokenize(text)
        .iter()
        .filter_map(|token| match token.evaluate() {
            TokenResult::Valid(ts) => {
                debug!("'{}({})' -> {}", token.name, token.args, ts);
                Some(ts)
            }
            TokenResult::Skipped(reason) => {
                warn!("Transform function '{}({})' skipped: {}.", token.name, token.args, reason);
                None
            }
        })
        .collect();

    compose(&matrices)
}

/// A strict transform list parser.
///
/// Same as [`parse_transform_strict`] with default options.
impl FromStr for Matrix {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Error> {
        parse_transform_strict(text, &ParseOptions::default())
    }
}

/// Parses an SVG `transform` attribute value, rejecting malformed input.
///
/// An empty string is still a valid value.
///
/// # Errors
///
/// - `InputTooLong` when the input is longer than `ParseOptions::max_len`.
/// - `InvalidTransform` on the first malformed function
///   or on any non-separator text between functions.
pub fn parse_transform_strict(text: &str, opt: &ParseOptions) -> Result<Matrix, Error> {
    if text.len() > opt.max_len {
        return Err(Error::InputTooLong { len: text.len(), max: opt.max_len });
    }

    let mut matrices = Vec::new();
    let mut prev_end = 0;
    for token in tokenize(text) {
        check_separators(text, prev_end, token.start)?;
        prev_end = token.end;

        match token.evaluate() {
            TokenResult::Valid(ts) => matrices.push(ts),
            TokenResult::Skipped(reason) => {
                return Err(Error::InvalidTransform { pos: char_pos(text, token.start), reason });
            }
        }
    }
    check_separators(text, prev_end, text.len())?;

    Ok(compose(&matrices))
}

fn check_separators(text: &str, start: usize, end: usize) -> Result<(), Error> {
    let gap = &text[start..end];
    match gap.find(|c: char| c != ',' && !c.is_whitespace()) {
        Some(idx) => Err(Error::InvalidTransform {
            pos: char_pos(text, start + idx),
            reason: SkipReason::UnexpectedData,
        }),
        None => Ok(()),
    }
}

/// Converts a byte offset into a char position, starting from 1.
fn char_pos(text: &str, byte_pos: usize) -> usize {
    text[..byte_pos].chars().count() + 1
}
