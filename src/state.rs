//! Core game state: the cat, its stats, and the persisted aggregate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    CAT_NAME_MAX_CHARS, CRISIS_THRESHOLD, DEFAULT_CAT_NAME, MAX_LOGS, MOOD_DISTRESS_THRESHOLD,
    MOOD_HAPPY_TRUST, STAT_MAX, STAT_MIN,
};
use crate::journal::LogEntry;

/// Clamp a stat value into the valid `[0, 100]` range.
///
/// Every stat write in the simulation must go through this; out-of-range
/// deltas are absorbed, never rejected.
#[must_use]
pub const fn clamp_stat(value: i32) -> i32 {
    if value < STAT_MIN {
        STAT_MIN
    } else if value > STAT_MAX {
        STAT_MAX
    } else {
        value
    }
}

/// Cosmetic coat variant. Never read by simulation logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CatVariant {
    #[default]
    White,
    Black,
    Orange,
    Calico,
    Cream,
}

impl CatVariant {
    pub const ALL: [Self; 5] = [
        Self::White,
        Self::Black,
        Self::Orange,
        Self::Calico,
        Self::Cream,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
            Self::Orange => "orange",
            Self::Calico => "calico",
            Self::Cream => "cream",
        }
    }
}

impl fmt::Display for CatVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatVariant {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" => Ok(Self::White),
            "black" => Ok(Self::Black),
            "orange" => Ok(Self::Orange),
            "calico" => Ok(Self::Calico),
            "cream" => Ok(Self::Cream),
            _ => Err(()),
        }
    }
}

/// The cat being cared for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cat {
    pub name: String,
    /// Saves written before variants existed lack this field; it back-fills
    /// to white without discarding the rest of the save.
    #[serde(default)]
    pub variant: CatVariant,
}

impl Default for Cat {
    fn default() -> Self {
        Self {
            name: DEFAULT_CAT_NAME.to_string(),
            variant: CatVariant::default(),
        }
    }
}

/// Render-facing summary of how the cat is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Normal,
    Happy,
    Sad,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// 0 = fed, 100 = starving.
    pub hunger: i32,
    /// 0 = calm, 100 = distressed.
    pub stress: i32,
    /// 0 = clean, 100 = filthy.
    pub dirty: i32,
    /// 0 = stranger, 100 = fully bonded.
    pub trust: i32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            hunger: 30,
            stress: 20,
            dirty: 15,
            trust: 0,
        }
    }
}

impl Stats {
    /// Clamp all stats to valid ranges.
    pub fn clamp(&mut self) {
        self.hunger = clamp_stat(self.hunger);
        self.stress = clamp_stat(self.stress);
        self.dirty = clamp_stat(self.dirty);
        self.trust = clamp_stat(self.trust);
    }

    /// Whether any negative stat has reached the crisis threshold.
    ///
    /// Read live by the warning banner and once per catch-up by the tick
    /// engine's trust-decay step.
    #[must_use]
    pub fn in_crisis(&self) -> bool {
        self.hunger >= CRISIS_THRESHOLD
            || self.stress >= CRISIS_THRESHOLD
            || self.dirty >= CRISIS_THRESHOLD
    }

    /// Avatar mood: distress beats happiness.
    #[must_use]
    pub fn mood(&self) -> Mood {
        if self.hunger >= MOOD_DISTRESS_THRESHOLD
            || self.stress >= MOOD_DISTRESS_THRESHOLD
            || self.dirty >= MOOD_DISTRESS_THRESHOLD
        {
            Mood::Sad
        } else if self.trust >= MOOD_HAPPY_TRUST {
            Mood::Happy
        } else {
            Mood::Normal
        }
    }
}

/// Trust-event thresholds already shown to the player.
///
/// Grows monotonically and is persisted sorted ascending; it only ever
/// shrinks on a full reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UnlockedEvents {
    #[serde(default)]
    pub trust_events: Vec<i32>,
}

impl UnlockedEvents {
    #[must_use]
    pub fn contains(&self, threshold: i32) -> bool {
        self.trust_events.contains(&threshold)
    }
}

/// The root persisted aggregate. Exclusively owned by one
/// [`GameSession`](crate::GameSession); collaborators read it, never hold it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub cat: Cat,
    pub stats: Stats,
    /// Last fully-applied tick boundary, epoch milliseconds. Only ever
    /// advances by exact multiples of the tick interval; never snapped to
    /// "now", so sub-tick remainders carry over.
    pub last_tick_at: i64,
    #[serde(default)]
    pub unlocked: UnlockedEvents,
    /// Newest first, capped at 60.
    #[serde(default)]
    pub logs: Vec<LogEntry>,
    /// Most recent trust-event message not yet replaced; cleared by any
    /// action that does not unlock a new event.
    #[serde(default)]
    pub home_notice: Option<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game(crate::journal::now_ms())
    }
}

impl GameState {
    /// Fresh state for a newly arrived cat, with the tick boundary stamped
    /// at `now_ms`.
    #[must_use]
    pub fn new_game(now_ms: i64) -> Self {
        Self {
            cat: Cat::default(),
            stats: Stats::default(),
            last_tick_at: now_ms,
            unlocked: UnlockedEvents::default(),
            logs: vec![LogEntry::new(
                "保護猫がやってきた。まずは距離感を大事にしよう。",
            )],
            home_notice: None,
        }
    }

    /// Prepend a journal entry, discarding the oldest beyond the cap.
    pub fn push_log(&mut self, text: impl Into<String>) {
        self.logs.insert(0, LogEntry::new(text));
        self.logs.truncate(MAX_LOGS);
    }

    /// Rename the cat from trimmed user input. Empty input is a no-op;
    /// anything past twelve characters is dropped.
    ///
    /// Returns whether the name changed.
    pub fn rename_cat(&mut self, name: &str) -> bool {
        let trimmed: String = name.trim().chars().take(CAT_NAME_MAX_CHARS).collect();
        if trimmed.is_empty() {
            return false;
        }
        self.cat.name = trimmed;
        self.push_log(format!("名前が「{}」になった。", self.cat.name));
        true
    }

    /// Switch the cosmetic coat variant.
    pub fn set_variant(&mut self, variant: CatVariant) {
        self.cat.variant = variant;
        self.push_log("毛色が変わった気がする…？");
    }

    /// Truncate the journal to a single system entry.
    pub fn clear_log(&mut self) {
        self.logs = vec![LogEntry::new("ログを消した。お世話は続く。")];
    }

    /// Decode a persisted save payload.
    ///
    /// Any parse failure, including a payload missing the required `stats`
    /// or `cat` objects, yields `None` so the caller can substitute a fresh
    /// state; it is never surfaced as a user-visible error. Optional fields
    /// absent from older saves are back-filled by their serde defaults.
    #[must_use]
    pub fn from_saved_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<Self>(json) {
            Ok(mut state) => {
                // Saves are written clamped; a hand-edited one is normalized
                // rather than rejected.
                state.stats.clamp();
                Some(state)
            }
            Err(err) => {
                log::warn!("discarding undecodable save: {err}");
                None
            }
        }
    }

    /// Encode the full state for persistence.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_saved_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
