//! Trust event ladder: one-time narrative unlocks as trust crosses fixed
//! thresholds.

use crate::constants::TRUST_EVENTS;

/// Result of walking the ladder against the current trust value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrustUnlock {
    /// The full unlocked set after this check, sorted ascending.
    pub unlocked: Vec<i32>,
    /// Home-notice text for the newest unlock, if any.
    pub notice: Option<String>,
    /// Journal text for the newest unlock, if any.
    pub log_text: Option<String>,
}

/// Walk the ladder in ascending threshold order and collect every threshold
/// that newly qualifies at `current_trust`.
///
/// All newly qualifying thresholds join the unlocked set, but the notice and
/// log slots are overwritten per iteration, so when a single jump crosses
/// several thresholds only the last one iterated provides the texts. Already
/// unlocked thresholds are never re-emitted.
#[must_use]
pub fn unlock_trust_events(current_trust: i32, previously_unlocked: &[i32]) -> TrustUnlock {
    let mut unlocked = previously_unlocked.to_vec();
    let mut notice = None;
    let mut log_text = None;

    for &(threshold, text) in TRUST_EVENTS {
        if current_trust >= threshold && !unlocked.contains(&threshold) {
            unlocked.push(threshold);
            log_text = Some(format!("💗 信頼イベント：{text}"));
            notice = Some(format!("💗 {text}"));
        }
    }
    unlocked.sort_unstable();

    TrustUnlock {
        unlocked,
        notice,
        log_text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_qualifies_below_first_threshold() {
        let result = unlock_trust_events(4, &[]);
        assert!(result.unlocked.is_empty());
        assert!(result.notice.is_none());
        assert!(result.log_text.is_none());
    }

    #[test]
    fn single_threshold_unlocks_with_texts() {
        let result = unlock_trust_events(5, &[]);
        assert_eq!(result.unlocked, vec![5]);
        assert_eq!(
            result.notice.as_deref(),
            Some("💗 ちらっ…（目が合った気がする）")
        );
        assert_eq!(
            result.log_text.as_deref(),
            Some("💗 信頼イベント：ちらっ…（目が合った気がする）")
        );
    }

    #[test]
    fn large_jump_unlocks_all_but_last_wins_texts() {
        let result = unlock_trust_events(22, &[]);
        assert_eq!(result.unlocked, vec![5, 10, 15, 20]);
        // The 20-threshold event, iterated last, owns both text slots.
        assert_eq!(result.notice.as_deref(), Some("💗 小さく「にゃ」って言った"));
        assert_eq!(
            result.log_text.as_deref(),
            Some("💗 信頼イベント：小さく「にゃ」って言った")
        );
    }

    #[test]
    fn already_unlocked_thresholds_are_silent() {
        let result = unlock_trust_events(12, &[5, 10]);
        assert_eq!(result.unlocked, vec![5, 10]);
        assert!(result.notice.is_none());
        assert!(result.log_text.is_none());
    }

    #[test]
    fn partial_overlap_emits_only_the_new_threshold() {
        let result = unlock_trust_events(15, &[5, 10]);
        assert_eq!(result.unlocked, vec![5, 10, 15]);
        assert_eq!(result.notice.as_deref(), Some("💗 おもちゃを見てる"));
    }

    #[test]
    fn result_stays_sorted_ascending() {
        let result = unlock_trust_events(30, &[25, 5]);
        assert_eq!(result.unlocked, vec![5, 10, 15, 20, 25, 30]);
    }

    #[test]
    fn set_growth_is_monotonic_over_any_trust_path() {
        let mut unlocked: Vec<i32> = Vec::new();
        for trust in [0, 7, 3, 20, 11, 80, 2] {
            let before = unlocked.clone();
            let result = unlock_trust_events(trust, &unlocked);
            for t in &before {
                assert!(result.unlocked.contains(t), "threshold {t} was dropped");
            }
            unlocked = result.unlocked;
        }
        assert_eq!(unlocked, vec![5, 10, 15, 20, 25, 30, 40, 50, 60, 75]);
    }
}
