// SPDX-License-Identifier: MIT
//
// legible color model: integer RGB channels plus alpha and a luma weight.
//
// Single-character field names (r, g, b, a, l) follow the usual color
// science convention and match the notation used throughout the crate.
#![allow(clippy::many_single_char_names)]
//
// Unlike a rendering color type, nothing here is clamped or gamut-mapped.
// A parsed `rgb(999, 0, 0)` keeps its 999: downstream decisions only care
// about which side of a brightness threshold a color lands on, and they
// must agree with the grammar exactly as written.
//
// Accepted grammar, tried in order:
//
//   #RGB | #RRGGBB       → hex (see `parse_hex` for the 3-digit rule)
//   rgb(R, G, B)         → integer channels, alpha 1
//   rgba(R, G, B, A)     → integer channels, decimal alpha
//   <name>               → one of the 20 entries in `named::NAMED_COLORS`
//
// Anything else is an error from `FromStr`, and opaque black from `parse`.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::named;

// ─── Luminance ───────────────────────────────────────────────────────────────

/// Weighted luma of an RGB triple, normalized by 255.
///
///   l = (0.299 * r + 0.587 * g + 0.114 * b) / 255
///
/// In-range channels give a value in [0.0, 1.0]. Out-of-range channels are
/// not clamped, so neither is the result.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn luminance(r: u32, g: u32, b: u32) -> f64 {
    // Plain multiply/add, evaluated left to right: a fused multiply-add
    // rounds differently and can flip a result sitting on the 0.5 boundary.
    (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// An RGBA color with a precomputed luminance.
///
/// Values are immutable records: build one with [`Color::rgb`],
/// [`Color::rgba`], or by parsing a string.
///
/// # Examples
///
/// ```
/// use legible_color::Color;
///
/// let teal: Color = "rgb(0, 128, 128)".parse().unwrap();
/// assert_eq!((teal.r, teal.g, teal.b), (0, 128, 128));
///
/// let glass = legible_color::parse("rgba(255,255,255,0.25)");
/// assert!(glass.is_translucent());
///
/// // Unknown input never fails through `parse`; it becomes opaque black.
/// assert_eq!(legible_color::parse("no such color"), Color::BLACK);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    /// Red channel. Normally 0–255, but never clamped.
    pub r: u32,

    /// Green channel.
    pub g: u32,

    /// Blue channel.
    pub b: u32,

    /// Opacity: 1.0 is fully opaque. May be NaN for a malformed `rgba()`
    /// alpha, which compares as not translucent.
    pub a: f64,

    /// Luminance, see [`luminance`]. Named colors carry a literal value
    /// from the table instead of a computed one.
    pub l: f64,
}

impl Color {
    /// Opaque black, also the fallback for anything unparseable.
    pub const BLACK: Self = Self::with_luminance(0, 0, 0, 1.0, 0.0);

    /// Opaque white.
    pub const WHITE: Self = Self::with_luminance(255, 255, 255, 1.0, 1.0);

    /// Create an opaque color, computing its luminance.
    #[inline]
    #[must_use]
    pub fn rgb(r: u32, g: u32, b: u32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Create a color with alpha, computing its luminance.
    #[inline]
    #[must_use]
    pub fn rgba(r: u32, g: u32, b: u32, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a,
            l: luminance(r, g, b),
        }
    }

    /// Create a color with an explicit luminance value.
    ///
    /// Used for table-defined colors whose `l` is a literal rather than a
    /// function of the channels.
    #[inline]
    #[must_use]
    pub const fn with_luminance(r: u32, g: u32, b: u32, a: f64, l: f64) -> Self {
        Self { r, g, b, a, l }
    }

    /// Parse a `#RGB` / `#RRGGBB` string.
    ///
    /// Returns `None` for anything that is not exactly `#` plus 3 or 6 hex
    /// digits.
    #[must_use]
    pub fn hex(s: &str) -> Option<Self> {
        parse_hex(s)
    }

    /// Whether alpha is strictly below 1.0.
    ///
    /// NaN alpha is not translucent.
    #[inline]
    #[must_use]
    pub fn is_translucent(self) -> bool {
        self.a < 1.0
    }

    /// Encode the channels as `#rrggbb`.
    ///
    /// Each channel contributes its low byte, so in-range colors roundtrip
    /// through [`Color::hex`] unchanged.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = (self.r & 0xff, self.g & 0xff, self.b & 0xff);
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Why a string did not parse as a [`Color`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    /// The input was the empty string.
    #[error("empty color string")]
    Empty,

    /// No grammar (hex, `rgb()`, `rgba()`, named) matched the input.
    #[error("unrecognized color {0:?}")]
    Unrecognized(String),
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseColorError::Empty);
        }
        parse_hex(s)
            .or_else(|| parse_rgb(s))
            .or_else(|| parse_rgba(s))
            .or_else(|| named::named(s))
            .ok_or_else(|| ParseColorError::Unrecognized(s.to_owned()))
    }
}

/// Parse any supported color string, falling back to [`Color::BLACK`].
///
/// This never fails: empty, malformed, and unknown inputs all come back
/// as opaque black.
#[must_use]
pub fn parse(s: &str) -> Color {
    s.parse().unwrap_or_default()
}

/// Whitespace allowed after a comma: tab, line feed, vertical tab, form
/// feed, carriage return, space, the Unicode space separators, U+2028,
/// U+2029 and U+FEFF. U+0085 is not included.
const SEP_WS: &str = r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]*";

static RGB: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^rgb\(([0-9]+),{SEP_WS}([0-9]+),{SEP_WS}([0-9]+)\)$"
    ))
    .ok()
});

static RGBA: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^rgba\(([0-9]+),{SEP_WS}([0-9]+),{SEP_WS}([0-9]+),{SEP_WS}([0-9.]+)\)$"
    ))
    .ok()
});

/// Parse `#RGB` or `#RRGGBB`.
///
/// The digits are concatenated with themselves and the last six digits of
/// that string are decoded as `RRGGBB`. For six-digit input this is the
/// plain reading. For three digits it is *not* CSS shorthand: `#abc`
/// becomes `abcabc`, i.e. `(0xab, 0xca, 0xbc)`, not `#aabbcc`.
fn parse_hex(s: &str) -> Option<Color> {
    let digits = s.strip_prefix('#')?;
    if !matches!(digits.len(), 3 | 6) {
        return None;
    }

    let doubled = format!("{digits}{digits}");
    let tail = &doubled.as_bytes()[doubled.len() - 6..];
    let r = parse_hex_byte(&tail[0..2])?;
    let g = parse_hex_byte(&tail[2..4])?;
    let b = parse_hex_byte(&tail[4..6])?;
    Some(Color::rgb(u32::from(r), u32::from(g), u32::from(b)))
}

fn parse_rgb(s: &str) -> Option<Color> {
    let caps = RGB.as_ref()?.captures(s)?;
    Some(Color::rgb(
        parse_channel(&caps[1]),
        parse_channel(&caps[2]),
        parse_channel(&caps[3]),
    ))
}

fn parse_rgba(s: &str) -> Option<Color> {
    let caps = RGBA.as_ref()?.captures(s)?;
    // `[0-9.]+` admits things like "1.2.3" or "."; those carry NaN alpha.
    let a = caps[4].parse::<f64>().unwrap_or(f64::NAN);
    Some(Color::rgba(
        parse_channel(&caps[1]),
        parse_channel(&caps[2]),
        parse_channel(&caps[3]),
        a,
    ))
}

/// Decimal digits to a channel value, saturating on overflow.
#[inline]
fn parse_channel(digits: &str) -> u32 {
    digits.parse().unwrap_or(u32::MAX)
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
