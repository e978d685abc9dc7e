// SPDX-License-Identifier: MIT
//
// legible-color: color strings in, integer RGBA records out.
//
// The parsing half of legible. It reads the handful of color notations a
// UI is likely to hand over (hex, rgb(), rgba(), and a small table of
// names), keeps channel values exactly as written, and never refuses
// input through the total `parse` entry point. The compositing half
// blends two colors linearly on integer channels.

pub mod blend;
pub mod color;
pub mod named;

pub use blend::{Composite, blend};
pub use color::{Color, ParseColorError, luminance, parse};
pub use named::{NAMED_COLORS, named, named_color_names};
