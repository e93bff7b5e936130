#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("score {candidate} does not beat the high score {current}")]
    NotHigher { candidate: i64, current: i64 },
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { high_score: i64 },
    Rejected { reason: DecideError },
}
