#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitScore {
    pub candidate: i64,
}
