//! Centralized balance and tuning constants for the rescue-cat simulation.
//!
//! These values define the deterministic math for the core simulation.
//! Keeping them together ensures that gameplay can only be adjusted via
//! code changes reviewed in version control, rather than through external
//! JSON assets.

// Stat bounds ---------------------------------------------------------------
pub(crate) const STAT_MIN: i32 = 0;
pub(crate) const STAT_MAX: i32 = 100;

// Tick tuning (one tick = 5 simulated minutes) ------------------------------
pub const TICK_MINUTES: i64 = 5;
pub const TICK_INTERVAL_MS: i64 = TICK_MINUTES * 60 * 1000;
pub(crate) const TICK_HUNGER_GAIN: i32 = 4;
pub(crate) const TICK_DIRTY_GAIN: i32 = 3;
pub(crate) const TICK_STRESS_BASE: i32 = 2;
pub(crate) const STRESS_DIRTY_BONUS_THRESHOLD: i32 = 60;
pub(crate) const STRESS_DIRTY_BONUS: i32 = 1;
/// Ticks at or above this count produce a "time passed" log entry.
pub(crate) const MULTI_TICK_LOG_THRESHOLD: i64 = 2;

// Crisis and trust decay ----------------------------------------------------
pub(crate) const CRISIS_THRESHOLD: i32 = 80;
pub(crate) const TRUST_DECAY_PER_TICK: i32 = 1;

// Mood thresholds (avatar-facing, no gameplay effect) -----------------------
pub(crate) const MOOD_DISTRESS_THRESHOLD: i32 = 85;
pub(crate) const MOOD_HAPPY_TRUST: i32 = 75;

// Action tuning -------------------------------------------------------------
/// Below this trust the cat barely responds to play; trust gain is capped.
pub(crate) const PLAY_TRUST_GATE: i32 = 15;
pub(crate) const PLAY_GATED_TRUST_GAIN: i32 = 1;
pub(crate) const FEED_SATED_THRESHOLD: i32 = 30;
pub(crate) const CLEAN_TIDY_THRESHOLD: i32 = 20;
pub(crate) const REST_CALM_THRESHOLD: i32 = 30;

// Trust event ladder --------------------------------------------------------
pub(crate) const TRUST_EVENTS: &[(i32, &str)] = &[
    (5, "ちらっ…（目が合った気がする）"),
    (10, "2歩だけ近づいてきた"),
    (15, "おもちゃを見てる"),
    (20, "小さく「にゃ」って言った"),
    (25, "ごはんのあとに座って待ってる"),
    (30, "目の前で寝た"),
    (40, "ゴロゴロ音が聞こえる"),
    (50, "手にすりすりしてきた"),
    (60, "ちょっとだけ抱っこOK"),
    (75, "膝に乗ってきた（優勝）"),
];

// Journal -------------------------------------------------------------------
pub(crate) const MAX_LOGS: usize = 60;
pub(crate) const LOG_ID_LEN: usize = 9;

// Cat -----------------------------------------------------------------------
pub(crate) const CAT_NAME_MAX_CHARS: usize = 12;
pub(crate) const DEFAULT_CAT_NAME: &str = "ミケ";
