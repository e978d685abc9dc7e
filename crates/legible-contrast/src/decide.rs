//! Text color decisions: black or white text for a given background.
//!
//! The decision is a single brightness threshold, not a WCAG contrast
//! ratio:
//!
//! - Opaque background: brightness is the channel luma
//!   `(0.299r + 0.587g + 0.114b) / 255`, recomputed from the parsed
//!   channels (a named color's table luminance is not used here).
//! - Translucent background (`a < 1`): an anchor color is picked from the
//!   container (black on a light container, white on a dark one), blended
//!   over the background by the background's alpha, and the composite's
//!   blend factor is taken as the brightness. The result therefore tracks
//!   the background's alpha alone.
//! - Absent or empty background: brightness 1, so black text, as if the
//!   background were white.
//!
//! Brightness above 0.5 gives [`TextColor::Black`], otherwise
//! [`TextColor::White`]. Every decision is memoized per input pair.

use legible_color::{Color, blend, luminance, parse};
use tracing::{debug, trace};

use crate::cache::{DecisionCache, cache_key};
use crate::config::Config;
use crate::text::TextColor;

/// Pick the compositing anchor for a container: black if the container's
/// luminance is above 0.5, white otherwise.
#[must_use]
pub fn contrast_anchor(container: &Color) -> Color {
    if container.l > 0.5 {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

/// Brightness score of a parsed background against a parsed container.
///
/// Pure; see the module docs for the two branches.
#[must_use]
pub fn brightness(background: &Color, container: &Color) -> f64 {
    if background.is_translucent() {
        let anchor = contrast_anchor(container);
        blend(&anchor, background, background.a).a
    } else {
        luminance(background.r, background.g, background.b)
    }
}

/// Memoizing text color decider.
///
/// One `Decider` owns one cache. Create it once per process or per
/// consumer and pass it where decisions are needed; [`Decider::reset`]
/// empties the cache.
///
/// # Examples
///
/// ```
/// use legible_contrast::{Decider, TextColor};
///
/// let mut decider = Decider::new();
/// assert_eq!(decider.decide(Some("black"), None), TextColor::White);
/// assert_eq!(decider.decide(Some("#ffe4b5"), None), TextColor::Black);
/// assert_eq!(decider.decide(None, None).as_str(), "#000");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Decider {
    config: Config,
    cache: DecisionCache,
}

impl Decider {
    /// Create a decider with the default configuration and an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decider with the given configuration and an empty cache.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self::with_cache(config, DecisionCache::new())
    }

    /// Create a decider around an existing cache.
    #[must_use]
    pub const fn with_cache(config: Config, cache: DecisionCache) -> Self {
        Self { config, cache }
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Read access to the memo table, for size and hit/miss inspection.
    #[must_use]
    pub const fn cache(&self) -> &DecisionCache {
        &self.cache
    }

    /// Decide the text color for `background` on `container`.
    ///
    /// `container` falls back to [`Config::default_container`]. Never
    /// fails: unparseable colors are treated as opaque black.
    pub fn decide(&mut self, background: Option<&str>, container: Option<&str>) -> TextColor {
        let container = container.unwrap_or(self.config.default_container.as_str());
        // Absent and empty backgrounds decide identically, so they share a key.
        let background = background.unwrap_or_default();
        let key = cache_key(background, container);

        if let Some(text) = self.cache.get(&key) {
            trace!(background, container, %text, "text color cache hit");
            return text;
        }

        let score = if background.is_empty() {
            1.0
        } else {
            brightness(&parse(background), &parse(container))
        };
        let text = TextColor::for_brightness(score);
        debug!(background, container, brightness = score, %text, "computed text color");

        self.cache.insert(key, text);
        text
    }

    /// Forget every memoized decision.
    pub fn reset(&mut self) {
        let evicted = self.cache.clear();
        debug!(evicted, "text color cache reset");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheStats;
    use pretty_assertions::assert_eq;

    fn decide(background: &str) -> TextColor {
        Decider::new().decide(Some(background), None)
    }

    // ── Absent / empty background ───────────────────────────────────

    #[test]
    fn empty_background_is_black_text() {
        let mut decider = Decider::new();
        assert_eq!(decider.decide(Some(""), Some("white")), TextColor::Black);
    }

    #[test]
    fn absent_background_is_black_text() {
        let mut decider = Decider::new();
        assert_eq!(decider.decide(None, None), TextColor::Black);
    }

    #[test]
    fn empty_background_ignores_container() {
        let mut decider = Decider::new();
        assert_eq!(decider.decide(None, Some("black")), TextColor::Black);
    }

    #[test]
    fn absent_and_empty_share_an_entry() {
        let mut decider = Decider::new();
        decider.decide(None, None);
        decider.decide(Some(""), Some("white"));
        assert_eq!(decider.cache().len(), 1);
        assert_eq!(decider.cache().stats(), CacheStats { hits: 1, misses: 1 });
    }

    // ── Opaque backgrounds ──────────────────────────────────────────

    #[test]
    fn white_and_black() {
        assert_eq!(decide("white"), TextColor::Black);
        assert_eq!(decide("black"), TextColor::White);
        assert_eq!(decide("#ffffff"), TextColor::Black);
        assert_eq!(decide("#000000"), TextColor::White);
        assert_eq!(decide("rgb(255, 255, 255)"), TextColor::Black);
    }

    #[test]
    fn unparseable_is_black_background() {
        assert_eq!(decide("notacolor"), TextColor::White);
        assert_eq!(decide("#12"), TextColor::White);
        assert_eq!(decide("hsl(0, 0%, 100%)"), TextColor::White);
    }

    #[test]
    fn named_colors_use_channel_luma() {
        // Gray's table luminance is exactly 0.5, but the decision recomputes
        // from channels: 128 / 255 > 0.5.
        assert_eq!(decide("gray"), TextColor::Black);
        assert_eq!(decide("navy"), TextColor::White);
        assert_eq!(decide("yellow"), TextColor::Black);
        assert_eq!(decide("lime"), TextColor::Black);
        assert_eq!(decide("maroon"), TextColor::White);
    }

    #[test]
    fn short_hex_uses_doubled_digits() {
        // "#0f0" reads as (0x0f, 0x00, 0xf0), a dark blue, not bright green.
        assert_eq!(decide("#0f0"), TextColor::White);
        assert_eq!(decide("#00ff00"), TextColor::Black);
    }

    #[test]
    fn out_of_range_channels_are_kept() {
        // 0.299 * 999 / 255 > 1
        assert_eq!(decide("rgb(999,0,0)"), TextColor::Black);
        assert_eq!(decide("rgb(255,0,0)"), TextColor::White);
    }

    #[test]
    fn alpha_of_one_or_more_is_opaque() {
        assert_eq!(decide("rgba(0,0,0,1)"), TextColor::White);
        assert_eq!(decide("rgba(255,255,255,5)"), TextColor::Black);
    }

    #[test]
    fn malformed_alpha_takes_opaque_path() {
        assert_eq!(decide("rgba(255,255,255,1.2.3)"), TextColor::Black);
        assert_eq!(decide("rgba(0,0,0,.)"), TextColor::White);
    }

    // ── Translucent backgrounds ─────────────────────────────────────

    #[test]
    fn half_transparent_black_on_white() {
        // Anchor is black (container l = 1), blend factor 0.5 → not > 0.5.
        let mut decider = Decider::new();
        assert_eq!(
            decider.decide(Some("rgba(0,0,0,0.5)"), Some("white")),
            TextColor::White
        );
    }

    #[test]
    fn translucent_brightness_is_the_alpha() {
        assert_eq!(decide("rgba(0,0,0,0.51)"), TextColor::Black);
        assert_eq!(decide("rgba(255,255,255,0.2)"), TextColor::White);
        assert_eq!(decide("rgba(0,0,0,0)"), TextColor::White);
    }

    #[test]
    fn translucent_result_does_not_depend_on_container() {
        let mut decider = Decider::new();
        for container in ["white", "black", "gray", "#123456", "garbage"] {
            assert_eq!(
                decider.decide(Some("rgba(10,20,30,0.8)"), Some(container)),
                TextColor::Black,
                "container {container}"
            );
        }
    }

    #[test]
    fn anchor_follows_container_luminance() {
        assert_eq!(contrast_anchor(&Color::WHITE), Color::BLACK);
        assert_eq!(contrast_anchor(&Color::BLACK), Color::WHITE);
        // Exactly 0.5 is not light.
        assert_eq!(contrast_anchor(&parse("gray")), Color::WHITE);
        assert_eq!(contrast_anchor(&parse("silver")), Color::BLACK);
    }

    #[test]
    fn brightness_branches() {
        let opaque = parse("rgb(0,255,0)");
        assert!((brightness(&opaque, &Color::WHITE) - 0.587).abs() < 1e-9);

        let glass = parse("rgba(0,255,0,0.3)");
        assert!((brightness(&glass, &Color::WHITE) - 0.3).abs() < 1e-12);
    }

    // ── Cache ───────────────────────────────────────────────────────

    #[test]
    fn repeated_decide_is_idempotent() {
        let mut decider = Decider::new();
        let first = decider.decide(Some("#336699"), Some("white"));
        let size = decider.cache().len();
        let second = decider.decide(Some("#336699"), Some("white"));
        assert_eq!(first, second);
        assert_eq!(decider.cache().len(), size);
        assert_eq!(decider.cache().stats(), CacheStats { hits: 1, misses: 1 });
    }

    #[test]
    fn container_is_part_of_the_key() {
        let mut decider = Decider::new();
        decider.decide(Some("red"), Some("white"));
        decider.decide(Some("red"), Some("black"));
        assert_eq!(decider.cache().len(), 2);
        assert!(decider.cache().contains("red-white"));
        assert!(decider.cache().contains("red-black"));
    }

    #[test]
    fn dashed_inputs_share_a_memo_entry() {
        let mut decider = Decider::new();
        assert_eq!(
            decider.decide(Some("white"), Some("black-white")),
            TextColor::Black
        );
        // Same key "white-black-white": answered from the first entry.
        assert_eq!(
            decider.decide(Some("white-black"), Some("white")),
            TextColor::Black
        );
        assert_eq!(decider.cache().len(), 1);
        assert_eq!(
            Decider::new().decide(Some("white-black"), Some("white")),
            TextColor::White
        );
    }

    #[test]
    fn omitted_container_uses_config_default() {
        let mut decider = Decider::new();
        decider.decide(Some("red"), None);
        assert!(decider.cache().contains("red-white"));

        let config = Config::default().with_default_container("navy");
        let mut decider = Decider::with_config(config);
        decider.decide(Some("red"), None);
        assert!(decider.cache().contains("red-navy"));
        assert_eq!(decider.config().default_container, "navy");
    }

    #[test]
    fn cached_value_matches_fresh_computation() {
        let inputs = ["#abc", "rgba(1,2,3,0.7)", "teal", "nope", "rgb(200, 200, 200)"];
        let mut warm = Decider::new();
        for input in inputs {
            warm.decide(Some(input), None);
        }
        for input in inputs {
            let cached = warm.decide(Some(input), None);
            let fresh = Decider::new().decide(Some(input), None);
            assert_eq!(cached, fresh, "input {input}");
        }
    }

    #[test]
    fn reset_empties_cache_and_forces_recompute() {
        let mut decider = Decider::new();
        decider.decide(Some("white"), None);
        decider.decide(Some("black"), None);
        assert_eq!(decider.cache().len(), 2);

        decider.reset();
        assert!(decider.cache().is_empty());

        assert_eq!(decider.decide(Some("white"), None), TextColor::Black);
        assert_eq!(decider.cache().stats(), CacheStats { hits: 0, misses: 1 });
    }

    #[test]
    fn injected_cache_is_used() {
        let mut cache = DecisionCache::new();
        cache.insert(cache_key("white", "white"), TextColor::White);
        let mut decider = Decider::with_cache(Config::default(), cache);
        // The injected entry answers without recomputation.
        assert_eq!(decider.decide(Some("white"), None), TextColor::White);
        assert_eq!(decider.cache().stats().hits, 1);
    }
}
