//! Error types for palette parsing and burst configuration

use thiserror::Error;

/// A palette entry that could not be turned into a color
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// No hex digits were left after stripping
    #[error("color {0:?} contains no hex digits")]
    Empty(String),
    /// Fewer than three hex digits, so not even shorthand applies
    #[error("color {0:?} needs at least 3 hex digits")]
    TooShort(String),
}

/// Burst options that cannot produce a valid batch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid palette entry at index {index}: {source}")]
    InvalidColor {
        index: usize,
        #[source]
        source: ColorError,
    },
    #[error("palette is empty")]
    EmptyPalette,
    #[error("shape set is empty")]
    EmptyShapes,
    #[error("particle lifetime must be at least one tick")]
    ZeroTicks,
}
