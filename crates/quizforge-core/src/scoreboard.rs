//! Score accumulator.

/// A single integer score. No clamping happens here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    score: i64,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// Add `amount` to the score. Negative amounts are accepted as-is.
    pub fn increase_score(&mut self, amount: i64) {
        self.score += amount;
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}
