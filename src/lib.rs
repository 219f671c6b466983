//! Rescue-Cat Game Engine
//!
//! Platform-agnostic core simulation for the rescue-cat care game.
//! This crate provides the stat/tick/action/trust mechanics without UI or
//! platform-specific dependencies: the host drives a periodic trigger into
//! [`GameSession::tick_now`], forwards user input to
//! [`GameSession::perform`], and renders whatever
//! [`GameSession::state`] exposes.

pub mod actions;
pub mod constants;
pub mod events;
pub mod journal;
pub mod session;
pub mod state;
pub mod storage;
pub mod tick;

// Re-export commonly used types
pub use actions::{apply_action, ActionEffect, ActionKind};
pub use constants::{TICK_INTERVAL_MS, TICK_MINUTES};
pub use events::{unlock_trust_events, TrustUnlock};
pub use journal::{now_ms, LogEntry};
pub use session::GameSession;
pub use state::{clamp_stat, Cat, CatVariant, GameState, Mood, Stats, UnlockedEvents};
pub use storage::{FileStorage, GameStorage, MemoryStorage, StorageError};
pub use tick::{millis_until_next_tick, next_tick_label, process_tick, TickOutcome};
