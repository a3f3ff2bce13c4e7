//! Round lifecycle
//!
//! `Idle --start--> Active --target--> Won --start--> Active`. Decoy clicks
//! keep the round `Active`; `start_round` may be called from any state and
//! abandons whatever round was live.

use std::time::Duration;

use rand_pcg::Pcg32;

use super::event::{GameEvent, PresentationSink, Severity};
use super::place::place;
use super::rng::{RandomSource, RngState};
use super::shuffle::shuffle;
use super::state::{Bounds, Round, RoundState, Score};
use crate::catalog::{ItemCatalog, ItemId};
use crate::clock::{Clock, MonotonicClock};
use crate::error::{ClickError, ConfigError, PlaceError};
use crate::settings::Settings;

/// What a click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Round not active; nothing happened
    Ignored,
    /// A decoy was clicked; the round continues
    Decoy(ItemId),
    /// The target was clicked; the round is won
    Found(Score),
}

/// The session engine
///
/// Owns the catalog, settings, random source, clock and the single live
/// round. Every operation takes `&mut self`; a multi-threaded host must
/// serialize calls itself.
#[derive(Debug)]
pub struct Session<R = Pcg32, C = MonotonicClock> {
    catalog: ItemCatalog,
    settings: Settings,
    rng: R,
    clock: C,
    round: Round,
    rounds_started: u64,
}

impl Session<Pcg32, MonotonicClock> {
    /// Session with a seeded `Pcg32` and the real clock
    pub fn seeded(catalog: ItemCatalog, settings: Settings, seed: u64) -> Result<Self, ConfigError> {
        Self::new(catalog, settings, RngState::new(seed).to_rng(), MonotonicClock::new())
    }
}

impl<R: RandomSource, C: Clock> Session<R, C> {
    pub fn new(
        catalog: ItemCatalog,
        settings: Settings,
        rng: R,
        clock: C,
    ) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self {
            catalog,
            settings,
            rng,
            clock,
            round: Round::default(),
            rounds_started: 0,
        })
    }

    /// Shuffle, place and begin a fresh round
    ///
    /// Placement is computed before anything changes: on error the previous
    /// round stays live and nothing is emitted.
    pub fn start_round(
        &mut self,
        bounds: Bounds,
        sink: &mut impl PresentationSink,
    ) -> Result<(), PlaceError> {
        let shuffled = shuffle(self.catalog.items(), &mut self.rng);
        let placed = place(
            &shuffled,
            bounds,
            self.settings.item_footprint_size,
            self.settings.bounds_padding,
            &mut self.rng,
        )?;

        sink.emit(GameEvent::ItemsCleared);

        self.round = Round::start(placed, self.clock.now());
        self.rounds_started += 1;
        log::info!(
            "Round {} started: {} items in {}x{}",
            self.rounds_started,
            self.round.placed_items.len(),
            bounds.width,
            bounds.height
        );

        for placed in &self.round.placed_items {
            sink.emit(GameEvent::ItemPlaced {
                item_id: placed.item.id,
                display_name: placed.item.display_name.clone(),
                icon: placed.item.icon.clone(),
                is_target: placed.item.is_target,
                x: placed.position.x,
                y: placed.position.y,
                rotation_degrees: placed.rotation_degrees,
            });
        }

        sink.emit(GameEvent::ClicksUpdated { count: 0 });
        sink.emit(GameEvent::TimerUpdated { seconds: 0 });
        sink.emit(GameEvent::FoundUpdated { found: false });
        sink.emit(GameEvent::MessageShown {
            text: String::new(),
            severity: Severity::Neutral,
        });
        Ok(())
    }

    /// Host cadence timer update; only an active round reports time
    pub fn tick(&mut self, now: Duration, sink: &mut impl PresentationSink) {
        if self.round.state != RoundState::Active {
            return;
        }
        sink.emit(GameEvent::TimerUpdated {
            seconds: self.round.elapsed(now).as_secs(),
        });
    }

    /// Resolve a click on a placed item
    ///
    /// Clicks outside an active round are ignored. An id the round never
    /// placed is a host bug and leaves the round untouched.
    pub fn register_click(
        &mut self,
        item_id: ItemId,
        sink: &mut impl PresentationSink,
    ) -> Result<ClickOutcome, ClickError> {
        if self.round.state != RoundState::Active {
            log::debug!(
                "Ignoring click on {} while {}",
                item_id,
                self.round.state.as_str()
            );
            return Ok(ClickOutcome::Ignored);
        }

        let Some(placed) = self.round.find(item_id) else {
            log::warn!("Click on unknown item {}", item_id);
            return Err(ClickError::UnknownItem(item_id));
        };
        let is_target = placed.item.is_target;
        let name = placed.item.display_name.clone();

        self.round.click_count += 1;
        let clicks = self.round.click_count;
        log::debug!("Click {} on {} ({})", clicks, name, item_id);
        sink.emit(GameEvent::ClicksUpdated { count: clicks });

        if !is_target {
            sink.emit(GameEvent::MessageShown {
                text: format!("That's a {}, keep looking!", name),
                severity: Severity::Neutral,
            });
            return Ok(ClickOutcome::Decoy(item_id));
        }

        let now = self.clock.now();
        self.round.target_found = true;
        self.round.state = RoundState::Won;
        self.round.finished_at = Some(now);
        let seconds = self.round.elapsed(now).as_secs();
        log::info!("{} found in {} clicks and {}s", name, clicks, seconds);

        sink.emit(GameEvent::FoundUpdated { found: true });
        sink.emit(GameEvent::MessageShown {
            text: format!(
                "🎉 Congratulations! You found the {} in {} clicks and {} seconds!",
                name, clicks, seconds
            ),
            severity: Severity::Success,
        });
        Ok(ClickOutcome::Found(Score { clicks, seconds }))
    }

    pub fn current_state(&self) -> RoundState {
        self.round.state
    }

    pub fn click_count(&self) -> u32 {
        self.round.click_count
    }

    pub fn has_won(&self) -> bool {
        self.round.target_found
    }

    /// Pull-based timer: whole seconds elapsed at `now`
    pub fn elapsed_seconds(&self, now: Duration) -> u64 {
        self.round.elapsed(now).as_secs()
    }

    /// Score of the current round, once won
    pub fn score(&self) -> Option<Score> {
        self.round.score()
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Number of rounds started so far
    pub fn rounds_started(&self) -> u64 {
        self.rounds_started
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
