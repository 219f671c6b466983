//! The session: single owner of the live game state.
//!
//! All mutation funnels through `&mut self` methods here, which serializes
//! the periodic tick trigger and user actions against each other by
//! construction; overlapping invocations cannot compile. Every mutation is
//! persisted best-effort afterwards.

use crate::actions::{apply_action, ActionKind};
use crate::journal::now_ms;
use crate::state::{CatVariant, GameState};
use crate::storage::GameStorage;
use crate::tick::{process_tick, TickOutcome};

pub struct GameSession<S: GameStorage> {
    state: GameState,
    storage: S,
}

impl<S: GameStorage> GameSession<S> {
    /// Resume from the persisted save, or start fresh when there is none,
    /// the payload fails validation, or the backend errors. Load problems
    /// never surface to the player.
    pub fn restore_or_default(storage: S) -> Self {
        let state = match storage.load() {
            Ok(Some(state)) => state,
            Ok(None) => GameState::default(),
            Err(err) => {
                log::warn!("could not load saved game, starting fresh: {err}");
                GameState::default()
            }
        };
        Self { state, storage }
    }

    /// Resume from the persisted save, surfacing backend failures.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend itself is unavailable. A
    /// merely missing or invalid save still succeeds with a fresh state.
    pub fn restore(storage: S) -> Result<Self, anyhow::Error> {
        let state = storage
            .load()
            .map_err(anyhow::Error::new)?
            .unwrap_or_default();
        Ok(Self { state, storage })
    }

    /// Wrap an explicit state, persisting it as the new save.
    pub fn with_state(storage: S, state: GameState) -> Self {
        let session = Self { state, storage };
        session.persist();
        session
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Run the tick engine against the current wall clock.
    pub fn tick_now(&mut self) -> TickOutcome {
        self.tick_at(now_ms())
    }

    /// Run the tick engine against an explicit clock reading.
    pub fn tick_at(&mut self, now_ms: i64) -> TickOutcome {
        let outcome = process_tick(&mut self.state, now_ms);
        if outcome.ticks > 0 {
            self.persist();
        }
        outcome
    }

    /// Apply one care action.
    pub fn perform(&mut self, action: ActionKind) {
        apply_action(&mut self.state, action);
        self.persist();
    }

    /// Rename the cat; empty trimmed input is a no-op. Returns whether the
    /// name changed.
    pub fn rename_cat(&mut self, name: &str) -> bool {
        if self.state.rename_cat(name) {
            self.persist();
            true
        } else {
            false
        }
    }

    /// Switch the cosmetic coat variant.
    pub fn set_variant(&mut self, variant: CatVariant) {
        self.state.set_variant(variant);
        self.persist();
    }

    /// Replace the whole state with fresh defaults. The confirmation prompt
    /// is the host's responsibility.
    pub fn reset(&mut self) {
        self.state = GameState::default();
        self.persist();
    }

    /// Truncate the journal to its single system entry.
    pub fn clear_log(&mut self) {
        self.state.clear_log();
        self.persist();
    }

    fn persist(&self) {
        // Fire-and-forget: the in-memory state stays authoritative for the
        // session even when the write fails, and there is no retry.
        if let Err(err) = self.storage.save(&self.state) {
            log::warn!("failed to persist game state: {err}");
        }
    }
}
