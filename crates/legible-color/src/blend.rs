// SPDX-License-Identifier: MIT
//
// Alpha compositing on integer channels.
//
// Each channel moves linearly from the background toward the foreground
// by `alpha` and is rounded to the nearest integer:
//
//   out = round(bg + (fg - bg) * alpha)
//
// The composite's `a` is the blend factor itself, not a Porter-Duff output
// alpha. Callers that need "how far toward the foreground did we go" read
// it from there.

use serde::Serialize;

use crate::color::Color;

/// The result of [`blend`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Composite {
    pub r: u32,
    pub g: u32,
    pub b: u32,

    /// The blend factor passed to [`blend`], verbatim.
    pub a: f64,
}

impl Composite {
    /// Drop the blend factor and view the result as an opaque color.
    #[must_use]
    pub fn to_color(self) -> Color {
        Color::rgb(self.r, self.g, self.b)
    }
}

/// Blend `foreground` over `background` by `alpha`.
///
/// `alpha` = 0.0 returns the background channels, 1.0 the foreground's.
/// Only channels are read from the inputs; their own alpha is ignored.
#[must_use]
pub fn blend(foreground: &Color, background: &Color, alpha: f64) -> Composite {
    Composite {
        r: mix(background.r, foreground.r, alpha),
        g: mix(background.g, foreground.g, alpha),
        b: mix(background.b, foreground.b, alpha),
        a: alpha,
    }
}

/// Interpolate one channel and round half away from zero.
#[inline]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops
)]
fn mix(from: u32, to: u32, alpha: f64) -> u32 {
    let from = f64::from(from);
    // Float-to-int `as` saturates at the u32 bounds.
    (from + (f64::from(to) - from) * alpha).round() as u32
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
