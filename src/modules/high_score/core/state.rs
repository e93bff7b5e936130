/// Value read as the high score when nothing is stored.
pub const BASELINE: i64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighScoreState {
    /// Never written, or the stored entry expired.
    Empty,
    Recorded(i64),
}

impl HighScoreState {
    pub fn value(&self) -> i64 {
        match self {
            HighScoreState::Empty => BASELINE,
            HighScoreState::Recorded(value) => *value,
        }
    }

    /// The raw cache entry this state was loaded from.
    pub fn stored(&self) -> Option<i64> {
        match self {
            HighScoreState::Empty => None,
            HighScoreState::Recorded(value) => Some(*value),
        }
    }
}

impl From<Option<i64>> for HighScoreState {
    fn from(stored: Option<i64>) -> Self {
        stored.map_or(HighScoreState::Empty, HighScoreState::Recorded)
    }
}
