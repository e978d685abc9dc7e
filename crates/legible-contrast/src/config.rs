//! Decider configuration.
//!
//! | Field               | Default   | Meaning                                   |
//! |---------------------|-----------|-------------------------------------------|
//! | `default_container` | `"white"` | Container color used when none is given   |
//!
//! `Config` deserializes with every field optional, so a host can embed it
//! as a table in its own settings file and override only what it needs.

use serde::{Deserialize, Serialize};

/// Container color assumed when a call doesn't name one.
pub const DEFAULT_CONTAINER: &str = "white";

/// Settings for a [`Decider`](crate::Decider).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Color string used as the container background when `decide` is
    /// called without one. Parsed with the same grammar as any other color.
    pub default_container: String,
}

impl Config {
    /// Replace the default container color.
    #[must_use]
    pub fn with_default_container(mut self, container: impl Into<String>) -> Self {
        self.default_container = container.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_container: DEFAULT_CONTAINER.to_owned(),
        }
    }
}
