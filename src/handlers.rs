use crate::errors::AppError;
use crate::models::{
    AddStepsRequest, ChartPageResponse, ChartSummary, DayMetrics, GoalRequest, SelectDayRequest,
    StatsView,
};
use crate::state::AppState;
use crate::ui::render_index;
use crate::window::chart_page_window;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Json,
};
use chrono::NaiveDate;
use std::time::Duration;
use tracing::info;

const SELECTION_WAIT: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy)]
enum Direction {
    Previous,
    Next,
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.controller.view()))
}

pub async fn get_day(State(state): State<AppState>) -> Json<StatsView> {
    Json(state.controller.view())
}

pub async fn select_day(
    State(state): State<AppState>,
    Json(payload): Json<SelectDayRequest>,
) -> Json<StatsView> {
    state.controller.select_day(payload.date);
    state
        .controller
        .wait_for_selection(payload.date, SELECTION_WAIT)
        .await;
    Json(state.controller.view())
}

pub async fn previous_day(State(state): State<AppState>) -> Result<Json<StatsView>, AppError> {
    Ok(Json(step_selection(&state, Direction::Previous).await?))
}

pub async fn next_day(State(state): State<AppState>) -> Result<Json<StatsView>, AppError> {
    Ok(Json(step_selection(&state, Direction::Next).await?))
}

pub async fn previous_day_form(State(state): State<AppState>) -> Result<Redirect, AppError> {
    step_selection(&state, Direction::Previous).await?;
    Ok(Redirect::to("/"))
}

pub async fn next_day_form(State(state): State<AppState>) -> Result<Redirect, AppError> {
    step_selection(&state, Direction::Next).await?;
    Ok(Redirect::to("/"))
}

pub async fn get_chart(State(state): State<AppState>) -> Json<ChartSummary> {
    let view = state.controller.view();
    Json(ChartSummary {
        week_count: view.week_count,
        current_page: view.chart_page,
    })
}

pub async fn get_chart_page(
    State(state): State<AppState>,
    Path(page): Path<u64>,
) -> Result<Json<ChartPageResponse>, AppError> {
    let week_count = state.controller.view().week_count;
    if page >= week_count {
        return Err(AppError::not_found(format!(
            "chart has {week_count} page(s), page {page} requested"
        )));
    }
    let window = chart_page_window(state.clock.today(), page)
        .ok_or_else(|| AppError::not_found("page is outside the calendar"))?;

    Ok(Json(ChartPageResponse {
        page,
        first_day: window.first_day,
        last_day: window.last_day,
        days: state.store.chart_days(&window),
    }))
}

pub async fn add_steps(
    State(state): State<AppState>,
    Json(payload): Json<AddStepsRequest>,
) -> Result<Json<DayMetrics>, AppError> {
    if payload.steps == 0 {
        return Err(AppError::bad_request("steps must be greater than zero"));
    }
    let today = state.clock.today();
    let metrics = state.store.add_steps(today, payload.steps).await?;
    Ok(Json(metrics))
}

pub async fn set_goal(
    State(state): State<AppState>,
    Json(payload): Json<GoalRequest>,
) -> Result<Json<DayMetrics>, AppError> {
    if payload.goal == 0 {
        return Err(AppError::bad_request("goal must be greater than zero"));
    }
    let today = state.clock.today();
    let metrics = state.store.set_goal(today, payload.goal).await?;
    info!(%today, goal = payload.goal, "daily goal updated");
    Ok(Json(metrics))
}

async fn step_selection(state: &AppState, direction: Direction) -> Result<StatsView, AppError> {
    let target = step_target(&state.controller.view(), direction)?;
    state.controller.select_day(target);
    state
        .controller
        .wait_for_selection(target, SELECTION_WAIT)
        .await;
    Ok(state.controller.view())
}

/// Neighbouring day of the selection in `view`, checked against the range
/// from the same view.
fn step_target(view: &StatsView, direction: Direction) -> Result<NaiveDate, AppError> {
    let (allowed, target, label) = match direction {
        Direction::Previous => (view.can_go_previous, view.day.date.pred_opt(), "previous"),
        Direction::Next => (view.can_go_next, view.day.date.succ_opt(), "next"),
    };
    if !allowed {
        return Err(AppError::bad_request(format!(
            "no {label} day within {}..={}",
            view.range.start(),
            view.range.end()
        )));
    }
    target.ok_or_else(|| AppError::bad_request("selected day is at the edge of the calendar"))
}
