use crate::modules::high_score::core::state::HighScoreState;
use crate::modules::high_score::use_cases::submit_score::command::SubmitScore;
use crate::modules::high_score::use_cases::submit_score::decision::{DecideError, Decision};

/// Ties are rejected, so an equal score never refreshes the record's expiry.
pub fn decide_submit(state: &HighScoreState, command: SubmitScore) -> Decision {
    let current = state.value();
    if command.candidate > current {
        Decision::Accepted {
            high_score: command.candidate,
        }
    } else {
        Decision::Rejected {
            reason: DecideError::NotHigher {
                candidate: command.candidate,
                current,
            },
        }
    }
}
