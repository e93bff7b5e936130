use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::modules::high_score::use_cases::get_high_score::inbound::http as get_http;
use crate::modules::high_score::use_cases::render_game::inbound::http as game_http;
use crate::modules::high_score::use_cases::submit_score::inbound::http as submit_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(game_http::handle))
        .route(
            "/high-score",
            get(get_http::handle).post(submit_http::handle),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
