//! Drawer Hunt - find the ID card hidden among the clutter
//!
//! Core modules:
//! - `catalog`: The fixed table of placeable items (decoys + one target)
//! - `sim`: Deterministic session engine (shuffle, placement, round state machine)
//! - `presentation`: Reference view model that turns session events into labels
//! - `settings`: Placement configuration (footprint, padding)
//! - `clock`: Monotonic time sources

pub mod catalog;
pub mod clock;
pub mod error;
pub mod presentation;
pub mod settings;
pub mod sim;

pub use catalog::{Item, ItemCatalog, ItemId, ItemSpec};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use error::{CatalogError, ClickError, ConfigError, PlaceError, SettingsError};
pub use presentation::{DrawerView, ItemView};
pub use settings::Settings;
pub use sim::{
    Bounds, ClickOutcome, GameEvent, PlacedItem, PresentationSink, RandomSource, Round, RoundState,
    Score, Session, Severity,
};

/// Game configuration constants
pub mod consts {
    /// Side length of an item's square footprint (units)
    pub const ITEM_FOOTPRINT_SIZE: f32 = 80.0;
    /// Gap kept between items and the drawer edge (units)
    pub const BOUNDS_PADDING: f32 = 50.0;

    /// Full turn in degrees; rotations live in [0, FULL_TURN_DEGREES)
    pub const FULL_TURN_DEGREES: f32 = 360.0;

    /// How long a decoy stays locked while it shakes (seconds)
    pub const SHAKE_DURATION: f32 = 0.5;
    /// How long the target stays locked while it celebrates (seconds)
    pub const CELEBRATE_DURATION: f32 = 1.5;
}

/// Format a click count the way the HUD shows it
#[inline]
pub fn clicks_label(count: u32) -> String {
    count.to_string()
}

/// Format elapsed whole seconds for the HUD timer
#[inline]
pub fn timer_label(seconds: u64) -> String {
    format!("{}s", seconds)
}

/// Format the found counter ("0/1" or "1/1")
#[inline]
pub fn found_label(found: bool) -> &'static str {
    if found { "1/1" } else { "0/1" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(clicks_label(0), "0");
        assert_eq!(clicks_label(12), "12");
        assert_eq!(timer_label(0), "0s");
        assert_eq!(timer_label(75), "75s");
        assert_eq!(found_label(false), "0/1");
        assert_eq!(found_label(true), "1/1");
    }
}
