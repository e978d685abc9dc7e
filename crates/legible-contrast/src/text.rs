//! The two text colors a decision can produce.

use std::fmt;

use serde::Serialize;

/// Brightness above this selects black text.
pub const BRIGHTNESS_THRESHOLD: f64 = 0.5;

/// Readable text color for a background: pure black or pure white.
///
/// Serializes as its CSS short-hex form, `"#000"` or `"#fff"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TextColor {
    /// `#000`, for bright backgrounds.
    #[serde(rename = "#000")]
    Black,

    /// `#fff`, for dark backgrounds.
    #[serde(rename = "#fff")]
    White,
}

impl TextColor {
    /// Map a brightness score to a text color.
    ///
    /// Strictly above [`BRIGHTNESS_THRESHOLD`] is black; everything else,
    /// including exactly 0.5 and NaN, is white.
    #[must_use]
    pub fn for_brightness(brightness: f64) -> Self {
        if brightness > BRIGHTNESS_THRESHOLD {
            Self::Black
        } else {
            Self::White
        }
    }

    /// The CSS hex string for this color.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Black => "#000",
            Self::White => "#fff",
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(TextColor::for_brightness(0.5), TextColor::White);
        assert_eq!(TextColor::for_brightness(0.500_001), TextColor::Black);
    }

    #[test]
    fn extremes() {
        assert_eq!(TextColor::for_brightness(0.0), TextColor::White);
        assert_eq!(TextColor::for_brightness(1.0), TextColor::Black);
        assert_eq!(TextColor::for_brightness(3.9), TextColor::Black);
    }

    #[test]
    fn nan_is_white() {
        assert_eq!(TextColor::for_brightness(f64::NAN), TextColor::White);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(TextColor::Black.to_string(), "#000");
        assert_eq!(TextColor::White.to_string(), "#fff");
    }

    #[test]
    fn serializes_as_hex_string() {
        assert_eq!(serde_json::to_string(&TextColor::Black).unwrap(), "\"#000\"");
        assert_eq!(serde_json::to_string(&TextColor::White).unwrap(), "\"#fff\"");
    }
}
