use axum::{
    Form, Json, extract::State, extract::rejection::FormRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::{debug, error};

use crate::modules::high_score::use_cases::submit_score::command::SubmitScore;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SubmitScoreForm {
    pub my_score: i64,
}

/// Responds with a JSON boolean telling whether the score became the new record.
pub async fn handle(
    State(state): State<AppState>,
    form: Result<Form<SubmitScoreForm>, FormRejection>,
) -> impl IntoResponse {
    let Form(form) = match form {
        Ok(f) => f,
        Err(rejection) => {
            debug!(%rejection, "malformed score submission");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    let command = SubmitScore {
        candidate: form.my_score,
    };

    match state.submit_score.handle(command).await {
        Ok(updated) => Json(updated).into_response(),
        Err(e) => {
            error!(error = %e, candidate = command.candidate, "failed to submit score");
            StatusCode::SERVICE_UNAVAILABLE.into_response()
        }
    }
}
