//! Events pushed from the session to the presentation layer
//!
//! Fire-and-forget and strictly ordered. The sink never talks back.

use serde::{Deserialize, Serialize};

use crate::catalog::ItemId;

/// Message tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Neutral,
    /// Round won
    Success,
}

/// State change for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Remove every item view from the previous round
    ItemsCleared,
    /// One per item, in round order
    ItemPlaced {
        item_id: ItemId,
        display_name: String,
        icon: String,
        is_target: bool,
        x: f32,
        y: f32,
        rotation_degrees: f32,
    },
    ClicksUpdated {
        count: u32,
    },
    TimerUpdated {
        seconds: u64,
    },
    FoundUpdated {
        found: bool,
    },
    MessageShown {
        text: String,
        severity: Severity,
    },
}

impl GameEvent {
    /// True for the message that ends a round
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GameEvent::MessageShown {
                severity: Severity::Success,
                ..
            }
        )
    }
}

/// Receiver of session events
pub trait PresentationSink {
    fn emit(&mut self, event: GameEvent);
}

impl PresentationSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

impl<S: PresentationSink + ?Sized> PresentationSink for &mut S {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}

/// Sink that drops everything (headless hosts, benchmarks)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl PresentationSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}
