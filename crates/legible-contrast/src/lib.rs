//! # legible-contrast: black or white text for any background
//!
//! Picks a readable text color for a background color string, optionally
//! sitting inside a container whose color matters when the background is
//! translucent. Decisions are memoized per input pair.
//!
//! # Architecture
//!
//! ```text
//! (background, container)
//!     │
//!     ▼
//! cache.rs:  memo lookup by "background-container" key
//!     │ miss
//!     ▼
//! legible-color: parse both strings (never fails, falls back to black)
//!     │
//!     ▼
//! decide.rs: translucent? blend anchor over background : channel luma
//!     │
//!     ▼
//! text.rs:   brightness > 0.5 → "#000", else "#fff"
//! ```
//!
//! Nothing here is thread-safe by itself: a [`Decider`] is an ordinary
//! owned value and callers serialize access to it.

pub mod cache;
pub mod config;
pub mod decide;
pub mod text;

pub use cache::{CacheStats, DecisionCache};
pub use config::Config;
pub use decide::{Decider, brightness, contrast_anchor};
pub use text::TextColor;
