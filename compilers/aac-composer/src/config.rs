use std::env;

use crate::catalog::{MAX_LEVEL, MIN_LEVEL};

/// Runtime knobs of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    /// Highest vocabulary tier shown, 1..=3.
    pub level: u8,
    /// Move the active role forward after each tap, and back on undo.
    pub auto_advance: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { level: MIN_LEVEL, auto_advance: true }
    }
}

impl BoardConfig {
    /// Reads `AAC_LEVEL` and `AAC_AUTO_ADVANCE`, keeping defaults for
    /// anything missing or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let level = lookup("AAC_LEVEL")
            .and_then(|v| v.trim().parse::<u8>().ok())
            .filter(|l| (MIN_LEVEL..=MAX_LEVEL).contains(l))
            .unwrap_or(defaults.level);

        let auto_advance = lookup("AAC_AUTO_ADVANCE")
            .and_then(|v| v.trim().parse::<bool>().ok())
            .unwrap_or(defaults.auto_advance);

        Self { level, auto_advance }
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level.clamp(MIN_LEVEL, MAX_LEVEL);
        self
    }
}
