// SPDX-License-Identifier: MIT
//
// legible: pick black or white text for a background color.
//
// This crate wires the two workspace members together behind one import:
//
//   legible-color    → parse color strings, blend colors
//   legible-contrast → brightness decision, memo cache, configuration
//
// Typical use keeps one `Decider` alive for the lifetime of a view or a
// process and asks it for text colors as backgrounds come and go:
//
//   let mut decider = legible::Decider::new();
//   let text = decider.decide(Some("rgba(0, 0, 0, 0.4)"), Some("#fafafa"));
//   assert_eq!(text.as_str(), "#fff");

pub use legible_color::{
    Color, Composite, NAMED_COLORS, ParseColorError, blend, luminance, named, named_color_names,
    parse,
};
pub use legible_contrast::{
    CacheStats, Config, DecisionCache, Decider, TextColor, brightness, contrast_anchor,
};
