//! Scoring and hint rules for a game.

use serde::{Deserialize, Serialize};

/// Points for a correct answer.
pub const CORRECT_ANSWER_REWARD: i64 = 10;
/// Points taken off the reward per hint used.
pub const HINT_PENALTY: i64 = 2;
/// Hints a single game may request in total.
pub const MAX_HINTS: u32 = 4;
/// The hint-adjusted reward never drops below this.
pub const HINT_FLOOR: i64 = 2;

/// Tuning for a [`QuizGame`](crate::game::QuizGame).
///
/// Fixed for the lifetime of a game. Missing fields in a TOML `[rules]`
/// table fall back to the defaults above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    #[serde(default = "default_reward")]
    pub correct_answer_reward: i64,
    #[serde(default = "default_penalty")]
    pub hint_penalty: i64,
    #[serde(default = "default_max_hints")]
    pub max_hints: u32,
    #[serde(default = "default_floor")]
    pub hint_floor: i64,
}

fn default_reward() -> i64 {
    CORRECT_ANSWER_REWARD
}
fn default_penalty() -> i64 {
    HINT_PENALTY
}
fn default_max_hints() -> u32 {
    MAX_HINTS
}
fn default_floor() -> i64 {
    HINT_FLOOR
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            correct_answer_reward: CORRECT_ANSWER_REWARD,
            hint_penalty: HINT_PENALTY,
            max_hints: MAX_HINTS,
            hint_floor: HINT_FLOOR,
        }
    }
}

impl GameRules {
    /// The whole score after `hints_used` hints: `max(reward - n * penalty, floor)`.
    ///
    /// Pure, so calling it again with the same count always gives the same value.
    pub fn reward_for_hints(&self, hints_used: u32) -> i64 {
        let penalty = i64::from(hints_used).saturating_mul(self.hint_penalty);
        self.correct_answer_reward
            .saturating_sub(penalty)
            .max(self.hint_floor)
    }
}
