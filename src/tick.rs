//! Tick engine: fixed-interval passive decay with catch-up.
//!
//! The host fires a cheap real-time trigger (once a second or so); this
//! module decides how many whole five-minute ticks have actually elapsed
//! since the last applied boundary and applies them all at once, so an
//! application left closed overnight catches up on reopen.

use crate::constants::{
    MULTI_TICK_LOG_THRESHOLD, STRESS_DIRTY_BONUS, STRESS_DIRTY_BONUS_THRESHOLD, TICK_DIRTY_GAIN,
    TICK_HUNGER_GAIN, TICK_INTERVAL_MS, TICK_STRESS_BASE, TRUST_DECAY_PER_TICK,
};
use crate::state::{clamp_stat, GameState};

/// What a single catch-up pass did, for host-side display effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Whole tick increments applied. Zero means the state was untouched.
    pub ticks: i64,
    /// Total trust lost to the crisis coupling this pass.
    pub trust_decayed: i32,
}

impl TickOutcome {
    /// Whether the host should flash its transient "trust decreased" banner.
    /// The banner and its auto-clear timer are display concerns; nothing
    /// about them is persisted.
    #[must_use]
    pub const fn trust_dropped(&self) -> bool {
        self.trust_decayed > 0
    }
}

/// Apply every whole tick that has elapsed between `state.last_tick_at` and
/// `now_ms`, then advance the boundary by exactly that many intervals.
///
/// Sub-interval elapsed time is a no-op, and so is a boundary in the future
/// (clock skew, sleep/resume): negative elapsed never produces ticks.
pub fn process_tick(state: &mut GameState, now_ms: i64) -> TickOutcome {
    let elapsed = now_ms - state.last_tick_at;
    if elapsed < TICK_INTERVAL_MS {
        return TickOutcome::default();
    }
    let ticks = elapsed / TICK_INTERVAL_MS;

    for _ in 0..ticks {
        let stats = &mut state.stats;
        stats.hunger = clamp_stat(stats.hunger + TICK_HUNGER_GAIN);
        stats.dirty = clamp_stat(stats.dirty + TICK_DIRTY_GAIN);

        // The bonus check reads the dirty value already updated in this same
        // increment, so dirt crossing the threshold mid-catch-up raises
        // stress from that increment onward.
        let mut stress_gain = TICK_STRESS_BASE;
        if stats.dirty >= STRESS_DIRTY_BONUS_THRESHOLD {
            stress_gain += STRESS_DIRTY_BONUS;
        }
        stats.stress = clamp_stat(stats.stress + stress_gain);
    }

    // Crisis is evaluated once on the post-loop stats, then charged per
    // elapsed tick; it is not re-checked per sub-increment. Only ticks that
    // still found trust above zero count toward the logged total.
    let mut trust_decayed = 0;
    if state.stats.in_crisis() {
        for _ in 0..ticks {
            if state.stats.trust > 0 {
                state.stats.trust = clamp_stat(state.stats.trust - TRUST_DECAY_PER_TICK);
                trust_decayed += TRUST_DECAY_PER_TICK;
            }
        }
    }

    state.last_tick_at += ticks * TICK_INTERVAL_MS;

    if ticks >= MULTI_TICK_LOG_THRESHOLD {
        state.push_log(format!("時間がたった。様子を見てみよう（+{ticks}tick）"));
    }
    if trust_decayed > 0 {
        state.push_log(format!(
            "放置しすぎて信頼が下がってしまった…（-{trust_decayed}）"
        ));
    }
    log::debug!("applied {ticks} tick(s), trust decayed {trust_decayed}");

    TickOutcome {
        ticks,
        trust_decayed,
    }
}

/// Milliseconds until the next tick boundary is due. Zero once a tick is
/// already overdue.
#[must_use]
pub fn millis_until_next_tick(state: &GameState, now_ms: i64) -> i64 {
    (state.last_tick_at + TICK_INTERVAL_MS - now_ms).clamp(0, TICK_INTERVAL_MS)
}

/// Countdown label for the home screen, `MM:SS`.
#[must_use]
pub fn next_tick_label(state: &GameState, now_ms: i64) -> String {
    let remain = millis_until_next_tick(state, now_ms);
    let minutes = remain / 60_000;
    let seconds = (remain % 60_000) / 1_000;
    format!("{minutes:02}:{seconds:02}")
}
