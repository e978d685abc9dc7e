//! Named colors: a fixed table of 20 common color names.
//!
//! Each entry carries literal channel, alpha and luminance values. The
//! luminance column is table data, not the [`luminance`](crate::luminance)
//! formula applied to the channels, and is used as-is.
//!
//! Lookup is exact and case-sensitive: `"white"` is known, `"White"` is not.

use crate::color::Color;

/// The named-color table, in declaration order.
pub static NAMED_COLORS: [(&str, Color); 20] = [
    ("black", Color::with_luminance(0, 0, 0, 1.0, 0.0)),
    ("white", Color::with_luminance(255, 255, 255, 1.0, 1.0)),
    ("red", Color::with_luminance(255, 0, 0, 1.0, 0.2126)),
    ("green", Color::with_luminance(0, 128, 0, 1.0, 0.7152)),
    ("blue", Color::with_luminance(0, 0, 255, 1.0, 0.0722)),
    ("yellow", Color::with_luminance(255, 255, 0, 1.0, 0.9278)),
    ("orange", Color::with_luminance(255, 165, 0, 1.0, 0.3932)),
    ("purple", Color::with_luminance(128, 0, 128, 1.0, 0.2126)),
    ("pink", Color::with_luminance(255, 182, 193, 1.0, 0.5647)),
    ("brown", Color::with_luminance(165, 42, 42, 1.0, 0.1686)),
    ("gray", Color::with_luminance(128, 128, 128, 1.0, 0.5)),
    ("lightgray", Color::with_luminance(211, 211, 211, 1.0, 0.8275)),
    ("darkgray", Color::with_luminance(169, 169, 169, 1.0, 0.3333)),
    ("silver", Color::with_luminance(192, 192, 192, 1.0, 0.5019)),
    ("gold", Color::with_luminance(255, 215, 0, 1.0, 0.6372)),
    ("navy", Color::with_luminance(0, 0, 128, 1.0, 0.0352)),
    ("olive", Color::with_luminance(128, 128, 0, 1.0, 0.2159)),
    ("teal", Color::with_luminance(0, 128, 128, 1.0, 0.139)),
    ("maroon", Color::with_luminance(128, 0, 0, 1.0, 0.0722)),
    ("lime", Color::with_luminance(0, 255, 0, 1.0, 0.7152)),
];

/// Look up a named color.
///
/// Returns `None` if the name is not in the table.
#[must_use]
pub fn named(name: &str) -> Option<Color> {
    NAMED_COLORS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|&(_, color)| color)
}

/// List all known color names.
pub fn named_color_names() -> impl Iterator<Item = &'static str> {
    NAMED_COLORS.iter().map(|&(name, _)| name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
