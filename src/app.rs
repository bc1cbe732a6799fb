use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/day/previous", post(handlers::previous_day_form))
        .route("/day/next", post(handlers::next_day_form))
        .route("/api/day", get(handlers::get_day).post(handlers::select_day))
        .route("/api/day/previous", post(handlers::previous_day))
        .route("/api/day/next", post(handlers::next_day))
        .route("/api/chart", get(handlers::get_chart))
        .route("/api/chart/:page", get(handlers::get_chart_page))
        .route("/api/steps", post(handlers::add_steps))
        .route("/api/goal", post(handlers::set_goal))
        .with_state(state)
}
