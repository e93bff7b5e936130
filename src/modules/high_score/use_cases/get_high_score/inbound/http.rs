use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::error;

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.get_high_score.handle().await {
        Ok(high_score) => Json(high_score).into_response(),
        Err(e) => {
            error!(error = %e, "failed to read the high score");
            StatusCode::SERVICE_UNAVAILABLE.into_response()
        }
    }
}
