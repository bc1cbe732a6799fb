use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::window::{self, DateRange};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayRecord {
    pub steps: u64,
    pub goal: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppData {
    pub days: BTreeMap<NaiveDate, DayRecord>,
}

impl AppData {
    /// Earliest day with a stored record.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.keys().next().copied()
    }
}

/// Metrics for one day as produced by a metrics source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayMetrics {
    pub date: NaiveDate,
    pub steps: u64,
    pub goal: u64,
    pub calorie_burned: f64,
    pub distance_travelled: f64,
    pub carbon_dioxide_saved: f64,
}

/// The day currently shown in detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedDay {
    pub date: NaiveDate,
    pub steps_taken: u64,
    pub goal_reached: bool,
    pub calorie_burned: i64,
    pub distance_travelled: f64,
    pub carbon_dioxide_saved: f64,
}

impl Default for SelectedDay {
    fn default() -> Self {
        Self {
            date: NaiveDate::MIN,
            steps_taken: 0,
            goal_reached: false,
            calorie_burned: 0,
            distance_travelled: 0.0,
            carbon_dioxide_saved: 0.0,
        }
    }
}

impl From<DayMetrics> for SelectedDay {
    fn from(metrics: DayMetrics) -> Self {
        Self {
            date: metrics.date,
            steps_taken: metrics.steps,
            goal_reached: metrics.steps >= metrics.goal,
            calorie_burned: metrics.calorie_burned.round() as i64,
            distance_travelled: metrics.distance_travelled,
            carbon_dioxide_saved: metrics.carbon_dioxide_saved,
        }
    }
}

/// Selected day and range read together, with everything derived from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsView {
    pub day: SelectedDay,
    pub range: DateRange,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub chart_page: u64,
    pub week_count: u64,
}

impl StatsView {
    pub fn derive(day: SelectedDay, range: DateRange) -> Self {
        Self {
            can_go_previous: window::can_go_previous(day.date, &range),
            can_go_next: window::can_go_next(day.date, &range),
            chart_page: window::chart_page_index(day.date, &range),
            week_count: window::week_page_count(&range),
            day,
            range,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SelectDayRequest {
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct AddStepsRequest {
    pub steps: u64,
}

#[derive(Debug, Deserialize)]
pub struct GoalRequest {
    pub goal: u64,
}

#[derive(Debug, Serialize)]
pub struct ChartDay {
    pub date: NaiveDate,
    pub steps: u64,
    pub goal_reached: bool,
}

#[derive(Debug, Serialize)]
pub struct ChartPageResponse {
    pub page: u64,
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
    pub days: Vec<ChartDay>,
}

#[derive(Debug, Serialize)]
pub struct ChartSummary {
    pub week_count: u64,
    pub current_page: u64,
}
