//! Action engine: the four one-shot care actions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    CLEAN_TIDY_THRESHOLD, FEED_SATED_THRESHOLD, PLAY_GATED_TRUST_GAIN, PLAY_TRUST_GATE,
    REST_CALM_THRESHOLD,
};
use crate::events::unlock_trust_events;
use crate::state::{clamp_stat, GameState, Stats};

/// The closed set of care actions the UI can trigger.
///
/// Unknown action strings fail at the [`FromStr`] boundary; the simulation
/// itself only ever sees a valid variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Feed,
    Play,
    Clean,
    Rest,
}

impl ActionKind {
    pub const ALL: [Self; 4] = [Self::Feed, Self::Play, Self::Clean, Self::Rest];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feed => "feed",
            Self::Play => "play",
            Self::Clean => "clean",
            Self::Rest => "rest",
        }
    }

    /// The fixed stat delta vector for this action.
    #[must_use]
    pub const fn effect(self) -> ActionEffect {
        match self {
            Self::Feed => ActionEffect {
                hunger: -20,
                stress: -3,
                dirty: 0,
                trust: 1,
                label: "ごはん",
            },
            Self::Play => ActionEffect {
                hunger: 6,
                stress: -18,
                dirty: 0,
                trust: 2,
                label: "遊ぶ",
            },
            Self::Clean => ActionEffect {
                hunger: 0,
                stress: -5,
                dirty: -25,
                trust: 0,
                label: "掃除",
            },
            Self::Rest => ActionEffect {
                hunger: 4,
                stress: -12,
                dirty: 0,
                trust: 1,
                label: "休む",
            },
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feed" => Ok(Self::Feed),
            "play" => Ok(Self::Play),
            "clean" => Ok(Self::Clean),
            "rest" => Ok(Self::Rest),
            _ => Err(()),
        }
    }
}

/// One-shot stat deltas plus the journal label for an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionEffect {
    pub hunger: i32,
    pub stress: i32,
    pub dirty: i32,
    pub trust: i32,
    pub label: &'static str,
}

/// Apply one care action: stat deltas (clamped), a flavor message keyed on
/// the pre-action stats, the combined journal entry, the trust-event check
/// against the post-action trust, and the home-notice overwrite.
pub fn apply_action(state: &mut GameState, action: ActionKind) {
    let effect = action.effect();
    let before = state.stats.clone();

    // A standoffish cat is not yet responsive to play; its trust gain is
    // capped until the gate is reached. All other actions use the table.
    let trust_gain = if action == ActionKind::Play && before.trust < PLAY_TRUST_GATE {
        PLAY_GATED_TRUST_GAIN
    } else {
        effect.trust
    };

    let stats = &mut state.stats;
    stats.hunger = clamp_stat(stats.hunger + effect.hunger);
    stats.stress = clamp_stat(stats.stress + effect.stress);
    stats.dirty = clamp_stat(stats.dirty + effect.dirty);
    stats.trust = clamp_stat(stats.trust + trust_gain);

    let message = flavor_message(action, &before);
    state.push_log(format!("{}：{}", effect.label, message));

    let unlock = unlock_trust_events(state.stats.trust, &state.unlocked.trust_events);
    state.unlocked.trust_events = unlock.unlocked;
    if let Some(log_text) = unlock.log_text {
        state.push_log(log_text);
    }
    // Each action overwrites the notice slot: a fresh event text, or nothing.
    state.home_notice = unlock.notice;
}

/// Pick the flavor line, branching on the stats as they were before the
/// action's deltas were applied.
fn flavor_message(action: ActionKind, before: &Stats) -> &'static str {
    match action {
        ActionKind::Feed => {
            if before.hunger < FEED_SATED_THRESHOLD {
                "おなか満足…💤"
            } else {
                "もぐもぐ…おいしい！"
            }
        }
        ActionKind::Play => {
            if before.trust < PLAY_TRUST_GATE {
                "ちょっとだけ興味ある…"
            } else {
                "たのしい！またやろ！"
            }
        }
        ActionKind::Clean => {
            if before.dirty < CLEAN_TIDY_THRESHOLD {
                "ここ、きれい。いいね。"
            } else {
                "すっきり！呼吸しやすい！"
            }
        }
        ActionKind::Rest => {
            if before.stress < REST_CALM_THRESHOLD {
                "落ち着いた…"
            } else {
                "ふぅ…ちょっと安心。"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_keys_round_trip() {
        for action in ActionKind::ALL {
            assert_eq!(action.as_str().parse::<ActionKind>(), Ok(action));
        }
        assert!("nap".parse::<ActionKind>().is_err());
        assert!("".parse::<ActionKind>().is_err());
    }

    #[test]
    fn feed_applies_table_deltas() {
        let mut state = GameState::new_game(0);
        state.stats.hunger = 50;
        apply_action(&mut state, ActionKind::Feed);
        assert_eq!(state.stats.hunger, 30);
        assert_eq!(state.stats.stress, 17);
        assert_eq!(state.stats.dirty, 15);
        assert_eq!(state.stats.trust, 1);
    }

    #[test]
    fn deltas_clamp_at_bounds() {
        let mut state = GameState::new_game(0);
        state.stats.hunger = 5;
        state.stats.stress = 1;
        apply_action(&mut state, ActionKind::Feed);
        assert_eq!(state.stats.hunger, 0);
        assert_eq!(state.stats.stress, 0);

        state.stats.dirty = 10;
        apply_action(&mut state, ActionKind::Clean);
        assert_eq!(state.stats.dirty, 0);
    }

    #[test]
    fn play_trust_gain_is_gated_below_fifteen() {
        let mut state = GameState::new_game(0);
        state.stats.trust = 10;
        apply_action(&mut state, ActionKind::Play);
        assert_eq!(state.stats.trust, 11);
        assert_eq!(state.logs[0].text, "遊ぶ：ちょっとだけ興味ある…");
    }

    #[test]
    fn play_trust_gain_uses_table_at_gate() {
        let mut state = GameState::new_game(0);
        state.stats.trust = 15;
        apply_action(&mut state, ActionKind::Play);
        assert_eq!(state.stats.trust, 17);
        assert_eq!(state.logs[0].text, "遊ぶ：たのしい！またやろ！");
    }

    #[test]
    fn feed_message_branches_on_pre_action_hunger() {
        let mut state = GameState::new_game(0);
        state.stats.hunger = 20;
        apply_action(&mut state, ActionKind::Feed);
        assert_eq!(state.logs[0].text, "ごはん：おなか満足…💤");

        let mut hungry = GameState::new_game(0);
        hungry.stats.hunger = 80;
        apply_action(&mut hungry, ActionKind::Feed);
        assert_eq!(hungry.logs[0].text, "ごはん：もぐもぐ…おいしい！");
    }

    #[test]
    fn clean_and_rest_messages_branch_on_pre_action_stats() {
        let mut state = GameState::new_game(0);
        state.stats.dirty = 10;
        apply_action(&mut state, ActionKind::Clean);
        assert_eq!(state.logs[0].text, "掃除：ここ、きれい。いいね。");

        state.stats.dirty = 40;
        apply_action(&mut state, ActionKind::Clean);
        assert_eq!(state.logs[0].text, "掃除：すっきり！呼吸しやすい！");

        state.stats.stress = 10;
        apply_action(&mut state, ActionKind::Rest);
        assert_eq!(state.logs[0].text, "休む：落ち着いた…");

        state.stats.stress = 50;
        apply_action(&mut state, ActionKind::Rest);
        assert_eq!(state.logs[0].text, "休む：ふぅ…ちょっと安心。");
    }

    #[test]
    fn unlock_sets_notice_and_extra_log_entry() {
        let mut state = GameState::new_game(0);
        state.stats.trust = 4;
        apply_action(&mut state, ActionKind::Feed);
        assert_eq!(state.stats.trust, 5);
        assert_eq!(state.unlocked.trust_events, vec![5]);
        assert!(state.unlocked.contains(5));
        assert!(!state.unlocked.contains(10));
        assert_eq!(
            state.home_notice.as_deref(),
            Some("💗 ちらっ…（目が合った気がする）")
        );
        // Event entry lands on top of the action entry.
        assert_eq!(
            state.logs[0].text,
            "💗 信頼イベント：ちらっ…（目が合った気がする）"
        );
        assert!(state.logs[1].text.starts_with("ごはん："));
    }

    #[test]
    fn action_without_unlock_clears_stale_notice() {
        let mut state = GameState::new_game(0);
        state.home_notice = Some("💗 目の前で寝た".to_string());
        apply_action(&mut state, ActionKind::Clean);
        assert!(state.home_notice.is_none());
    }
}
