const GAME_TEMPLATE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/game.html"));

const HIGH_SCORE_PLACEHOLDER: &str = "{{high_score}}";

pub fn render_game_page(high_score: i64) -> String {
    GAME_TEMPLATE.replace(HIGH_SCORE_PLACEHOLDER, &high_score.to_string())
}
