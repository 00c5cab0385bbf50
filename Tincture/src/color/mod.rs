//! Color literal parsing and formatting
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Handles the three textual color families found in stylesheets:
//! - `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` hex literals
//! - `rgb(r, g, b)` functional notation
//! - `rgba(r, g, b, a)` functional notation with alpha
//!
//! Literals are parsed into [`Rgba`] components and formatted back into any
//! [`ColorFormat`]. Alpha values are always kept at two decimal places.

pub mod name;

pub use name::{NAME_PREFIX, derive_name};

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::error::{Error, Result};

/// `rgb(...)` literal with three 1-3 digit channels. Padding is ASCII
/// whitespace only.
pub(crate) const RGB_PATTERN: &str =
    r"rgb\([\t\n\f\r ]*([0-9]{1,3})[\t\n\f\r ]*,[\t\n\f\r ]*([0-9]{1,3})[\t\n\f\r ]*,[\t\n\f\r ]*([0-9]{1,3})[\t\n\f\r ]*\)";

/// `rgba(...)` literal; alpha is `0`, `1` or a `0.`-prefixed decimal.
pub(crate) const RGBA_PATTERN: &str =
    r"rgba\([\t\n\f\r ]*([0-9]{1,3})[\t\n\f\r ]*,[\t\n\f\r ]*([0-9]{1,3})[\t\n\f\r ]*,[\t\n\f\r ]*([0-9]{1,3})[\t\n\f\r ]*,[\t\n\f\r ]*(0\.[0-9]+|0|1)[\t\n\f\r ]*\)";

/// Single-literal `rgba(...)` parsing also reads formatted output such as
/// `1.00`; the alpha is clamped afterwards.
const RGBA_LITERAL_PATTERN: &str =
    r"^rgba\([\t\n\f\r ]*([0-9]{1,3})[\t\n\f\r ]*,[\t\n\f\r ]*([0-9]{1,3})[\t\n\f\r ]*,[\t\n\f\r ]*([0-9]{1,3})[\t\n\f\r ]*,[\t\n\f\r ]*([0-9]*\.?[0-9]+)[\t\n\f\r ]*\)$";

lazy_static! {
    static ref RGB_LITERAL: Regex =
        Regex::new(&format!("^{RGB_PATTERN}$")).expect("rgb literal pattern is valid");
    static ref RGBA_LITERAL: Regex =
        Regex::new(RGBA_LITERAL_PATTERN).expect("rgba literal pattern is valid");
}

// ============================================================================
// Formats
// ============================================================================

/// Output notation a color can be rewritten into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// `#rrggbb`, or `#rrggbbaa` when translucent
    Hex,
    /// `rgb(r, g, b)`, alpha dropped
    Rgb,
    /// `rgba(r, g, b, a.aa)`
    Rgba,
}

impl ColorFormat {
    /// Every supported format, in the order they are documented.
    pub const ALL: [Self; 3] = [Self::Hex, Self::Rgb, Self::Rgba];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
        }
    }
}

impl FromStr for ColorFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            "rgba" => Ok(Self::Rgba),
            other => Err(Error::UnsupportedFormat {
                format: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Components
// ============================================================================

/// A color broken into 8-bit channels and a `0.0..=1.0` alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    /// Returned for text that is not a recognized color literal.
    ///
    /// Indistinguishable from opaque black; use [`Rgba::parse`] when the
    /// difference matters.
    pub const ZERO: Self = Self::opaque(0, 0, 0);

    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parse a single color literal, returning `None` for unrecognized text.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();

        if text.starts_with("rgba(") {
            let caps = RGBA_LITERAL.captures(text)?;
            let alpha: f64 = caps[4].parse().ok()?;
            return Some(Self {
                r: parse_channel(&caps[1]),
                g: parse_channel(&caps[2]),
                b: parse_channel(&caps[3]),
                a: round_alpha(alpha.clamp(0.0, 1.0)),
            });
        }

        if text.starts_with("rgb(") {
            let caps = RGB_LITERAL.captures(text)?;
            return Some(Self::opaque(
                parse_channel(&caps[1]),
                parse_channel(&caps[2]),
                parse_channel(&caps[3]),
            ));
        }

        text.strip_prefix('#').and_then(parse_hex_digits)
    }

    /// Render these components in the given notation.
    #[must_use]
    pub fn to_format(&self, format: ColorFormat) -> String {
        let Self { r, g, b, a } = *self;
        match format {
            ColorFormat::Hex if a >= 1.0 => format!("#{r:02x}{g:02x}{b:02x}"),
            ColorFormat::Hex => {
                let alpha = (a.clamp(0.0, 1.0) * 255.0).round() as u8;
                format!("#{r:02x}{g:02x}{b:02x}{alpha:02x}")
            }
            ColorFormat::Rgb => format!("rgb({r}, {g}, {b})"),
            ColorFormat::Rgba => format!("rgba({r}, {g}, {b}, {a:.2})"),
        }
    }
}

/// Decimal channel, saturating at 255.
fn parse_channel(digits: &str) -> u8 {
    digits.parse::<u32>().map_or(0, |value| value.min(255) as u8)
}

/// Round to two decimal places, half away from zero.
fn round_alpha(alpha: f64) -> f64 {
    (alpha * 100.0).round() / 100.0
}

fn alpha_from_byte(byte: u8) -> f64 {
    round_alpha(f64::from(byte) / 255.0)
}

/// Hex digits after the `#`. Short forms repeat each nibble (`f` -> `ff`).
fn parse_hex_digits(digits: &str) -> Option<Rgba> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).ok().map(|n| n * 0x11);
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();

    match digits.len() {
        3 => Some(Rgba::opaque(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Rgba {
            r: nibble(0)?,
            g: nibble(1)?,
            b: nibble(2)?,
            a: alpha_from_byte(nibble(3)?),
        }),
        6 => Some(Rgba::opaque(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Rgba {
            r: byte(0)?,
            g: byte(2)?,
            b: byte(4)?,
            a: alpha_from_byte(byte(6)?),
        }),
        _ => None,
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Parse a color literal into components.
///
/// Unrecognized text yields [`Rgba::ZERO`] rather than an error.
#[must_use]
pub fn parse_to_components(text: &str) -> Rgba {
    Rgba::parse(text).unwrap_or(Rgba::ZERO)
}

/// Format components using a format name (`hex`, `rgb` or `rgba`).
pub fn format_from(color: Rgba, format: &str) -> Result<String> {
    let format: ColorFormat = format.parse()?;
    Ok(color.to_format(format))
}

/// Convert a literal to the named format.
///
/// # Example
/// ```
/// use tincture::color::convert;
///
/// assert_eq!(convert("#ff0000", "rgba")?, "rgba(255, 0, 0, 1.00)");
/// assert_eq!(convert("rgba(255, 0, 0, 0.5)", "hex")?, "#ff000080");
/// # Ok::<(), tincture::Error>(())
/// ```
pub fn convert(literal: &str, format: &str) -> Result<String> {
    format_from(parse_to_components(literal), format)
}

/// Convert a literal to an already-validated format.
#[must_use]
pub fn convert_to(literal: &str, format: ColorFormat) -> String {
    parse_to_components(literal).to_format(format)
}
