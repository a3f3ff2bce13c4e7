//! Error types
//!
//! Three families, matching how the host is expected to react:
//! - Configuration errors (`CatalogError`, `SettingsError`, `ConfigError`) are
//!   fatal at construction; the session refuses to exist.
//! - `PlaceError` comes back from `Session::start_round`; the previous round
//!   stays as it was and the host may retry with larger bounds.
//! - `ClickError` is a contract violation by the host (a click for an item the
//!   round never placed). It never changes session state.

use thiserror::Error;

use crate::catalog::ItemId;

/// Invalid item catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is empty")]
    Empty,

    #[error("catalog needs at least 2 items, got {count}")]
    TooFewItems { count: usize },

    #[error("catalog has no target item")]
    NoTarget,

    #[error("catalog must have exactly one target item, got {count}")]
    MultipleTargets { count: usize },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Invalid placement settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("item footprint size must be positive and finite, got {0}")]
    InvalidFootprint(f32),

    #[error("bounds padding must be non-negative and finite, got {0}")]
    InvalidPadding(f32),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("settings file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Anything that stops a session from being constructed
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Placement could not be computed for the supplied bounds
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaceError {
    #[error("bounds must be positive and finite, got {width}x{height}")]
    InvalidBounds { width: f32, height: f32 },

    #[error(
        "bounds {width}x{height} cannot fit a {footprint}-unit item with {padding}-unit padding"
    )]
    DegenerateBounds {
        width: f32,
        height: f32,
        footprint: f32,
        padding: f32,
    },
}

/// Click that the current round cannot resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClickError {
    #[error("item {0} is not part of the current round")]
    UnknownItem(ItemId),
}
