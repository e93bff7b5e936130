use axum::{extract::State, http::StatusCode, response::Html, response::IntoResponse};
use tracing::error;

use crate::modules::high_score::use_cases::render_game::page::render_game_page;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.get_high_score.handle().await {
        Ok(high_score) => Html(render_game_page(high_score)).into_response(),
        Err(e) => {
            error!(error = %e, "failed to read the high score for the game page");
            StatusCode::SERVICE_UNAVAILABLE.into_response()
        }
    }
}
