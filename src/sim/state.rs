//! Round state and core session types
//!
//! Everything a presentation layer may want to snapshot lives here and is
//! serializable.

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::catalog::{Item, ItemId};
use crate::error::PlaceError;

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundState {
    /// No round started yet, nothing placed
    #[default]
    Idle,
    /// Items placed, accepting clicks
    Active,
    /// Target found; clicks ignored until the next round
    Won,
}

impl RoundState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundState::Idle => "Idle",
            RoundState::Active => "Active",
            RoundState::Won => "Won",
        }
    }
}

/// Usable container rectangle, centre-origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    /// Reject non-positive or non-finite sizes
    pub fn new(width: f32, height: f32) -> Result<Self, PlaceError> {
        let bounds = Self { width, height };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn validate(&self) -> Result<(), PlaceError> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(PlaceError::InvalidBounds {
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width, self.height) * 0.5
    }
}

/// An item's placement for one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    pub item: Item,
    /// Centre position relative to the container centre
    pub position: Vec2,
    /// Rotation in degrees, [0, 360)
    pub rotation_degrees: f32,
}

impl PlacedItem {
    pub fn id(&self) -> ItemId {
        self.item.id
    }
}

/// Result of a won round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub clicks: u32,
    /// Whole seconds, floored
    pub seconds: u64,
}

/// The live round
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Round {
    /// Placed items in shuffle order
    pub placed_items: Vec<PlacedItem>,
    pub click_count: u32,
    /// Clock reading when the round started
    pub start_time: Duration,
    pub state: RoundState,
    pub target_found: bool,
    /// Clock reading when the target was clicked
    pub finished_at: Option<Duration>,
}

impl Round {
    /// Fresh active round over a computed placement
    pub fn start(placed_items: Vec<PlacedItem>, start_time: Duration) -> Self {
        Self {
            placed_items,
            click_count: 0,
            start_time,
            state: RoundState::Active,
            target_found: false,
            finished_at: None,
        }
    }

    pub fn find(&self, id: ItemId) -> Option<&PlacedItem> {
        self.placed_items.iter().find(|p| p.item.id == id)
    }

    /// Elapsed time at `now`, frozen once the round is won
    pub fn elapsed(&self, now: Duration) -> Duration {
        match self.state {
            RoundState::Idle => Duration::ZERO,
            RoundState::Active => now.saturating_sub(self.start_time),
            RoundState::Won => self
                .finished_at
                .unwrap_or(now)
                .saturating_sub(self.start_time),
        }
    }

    pub fn score(&self) -> Option<Score> {
        let finished_at = self.finished_at?;
        Some(Score {
            clicks: self.click_count,
            seconds: finished_at.saturating_sub(self.start_time).as_secs(),
        })
    }
}
