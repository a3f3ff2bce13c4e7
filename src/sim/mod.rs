//! Deterministic session engine
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Randomness only through an injected `RandomSource`
//! - Time only through an injected `Clock` or explicit timestamps
//! - No rendering or platform dependencies; visuals react to `GameEvent`s

pub mod event;
pub mod place;
pub mod rng;
pub mod session;
pub mod shuffle;
pub mod state;

pub use event::{GameEvent, NullSink, PresentationSink, Severity};
pub use place::{PlacementArea, place};
pub use rng::{RandomSource, RngState};
pub use session::{ClickOutcome, Session};
pub use shuffle::shuffle;
pub use state::{Bounds, PlacedItem, Round, RoundState, Score};
