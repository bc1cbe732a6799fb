//! Day-window arithmetic shared by the controller and the presentation layer.
//!
//! Everything here is a pure function of a selected date and a [`DateRange`].
//! Chart pages are seven days wide; page 0 ends on the range's last day and
//! page indices grow backwards in time.

use chrono::{Days, NaiveDate};
use serde::Serialize;

pub const DAYS_PER_PAGE: u64 = 7;

/// Inclusive span of navigable history, `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Builds a range ending on `end`. A `start` later than `end` collapses to
    /// the single-day range `[end, end]`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: start.min(end),
            end,
        }
    }

    pub fn single_day(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Seven-day window shown on one chart page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartWindow {
    pub page: u64,
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}

impl ChartWindow {
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.first_day.iter_days().take(DAYS_PER_PAGE as usize)
    }
}

pub fn can_go_previous(date: NaiveDate, range: &DateRange) -> bool {
    date > range.start
}

pub fn can_go_next(date: NaiveDate, range: &DateRange) -> bool {
    date < range.end
}

/// Page holding `date`. A date past the end of the range is measured by its
/// distance from the end, the same as a date before it.
pub fn chart_page_index(date: NaiveDate, range: &DateRange) -> u64 {
    days_between(date, range.end) / DAYS_PER_PAGE
}

/// Number of chart pages needed to cover `range`; never less than one.
pub fn week_page_count(range: &DateRange) -> u64 {
    days_between(range.start, range.end) / DAYS_PER_PAGE + 1
}

/// Window for `page`, counted back from `today`. Pages past the start of
/// recorded history are still produced. Returns `None` only when the window
/// would fall outside the representable calendar.
pub fn chart_page_window(today: NaiveDate, page: u64) -> Option<ChartWindow> {
    let back = page.checked_mul(DAYS_PER_PAGE)?;
    let last_day = today.checked_sub_days(Days::new(back))?;
    let first_day = last_day.checked_sub_days(Days::new(DAYS_PER_PAGE - 1))?;
    Some(ChartWindow {
        page,
        first_day,
        last_day,
    })
}

fn days_between(a: NaiveDate, b: NaiveDate) -> u64 {
    (b - a).num_days().unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn january_range() -> DateRange {
        DateRange::new(date(2024, 1, 10), date(2024, 1, 20))
    }

    #[test]
    fn navigation_follows_range_bounds() {
        let range = january_range();
        assert!(!can_go_previous(range.start(), &range));
        assert!(can_go_next(range.start(), &range));
        assert!(can_go_previous(date(2024, 1, 15), &range));
        assert!(can_go_next(date(2024, 1, 15), &range));
        assert!(can_go_previous(range.end(), &range));
        assert!(!can_go_next(range.end(), &range));
    }

    #[test]
    fn single_day_range_disables_both_directions() {
        let today = date(2024, 1, 20);
        let range = DateRange::single_day(today);
        assert!(!can_go_previous(today, &range));
        assert!(!can_go_next(today, &range));
        assert_eq!(week_page_count(&range), 1);
    }

    #[test]
    fn start_after_end_collapses_to_end() {
        let range = DateRange::new(date(2024, 2, 1), date(2024, 1, 20));
        assert_eq!(range, DateRange::single_day(date(2024, 1, 20)));
    }

    #[test]
    fn week_page_count_for_ten_day_history() {
        assert_eq!(week_page_count(&january_range()), 2);
        let six_days = DateRange::new(date(2024, 1, 14), date(2024, 1, 20));
        assert_eq!(week_page_count(&six_days), 1);
        let seven_days_back = DateRange::new(date(2024, 1, 13), date(2024, 1, 20));
        assert_eq!(week_page_count(&seven_days_back), 2);
    }

    #[test]
    fn chart_page_index_counts_back_from_end() {
        let range = january_range();
        assert_eq!(chart_page_index(date(2024, 1, 20), &range), 0);
        assert_eq!(chart_page_index(date(2024, 1, 14), &range), 0);
        assert_eq!(chart_page_index(date(2024, 1, 13), &range), 1);
        assert_eq!(chart_page_index(date(2024, 1, 10), &range), 1);
    }

    #[test]
    fn chart_page_index_tolerates_date_after_end() {
        let range = january_range();
        assert_eq!(chart_page_index(date(2024, 1, 27), &range), 1);
        assert_eq!(chart_page_index(date(2024, 1, 21), &range), 0);
    }

    #[test]
    fn chart_page_index_spans_month_boundaries() {
        let range = DateRange::new(date(2023, 11, 1), date(2024, 1, 5));
        assert_eq!(chart_page_index(date(2023, 12, 29), &range), 1);
        assert_eq!(chart_page_index(date(2023, 11, 1), &range), 9);
        assert_eq!(week_page_count(&range), 10);
    }

    #[test]
    fn chart_window_for_pages() {
        let today = date(2024, 1, 20);
        let first = chart_page_window(today, 0).unwrap();
        assert_eq!(first.first_day, date(2024, 1, 14));
        assert_eq!(first.last_day, today);

        let second = chart_page_window(today, 1).unwrap();
        assert_eq!(second.first_day, date(2024, 1, 7));
        assert_eq!(second.last_day, date(2024, 1, 13));
        assert_eq!(second.days().count(), 7);
        assert_eq!(second.days().last(), Some(date(2024, 1, 13)));
    }

    #[test]
    fn chart_window_is_not_clamped_to_history() {
        let today = date(2024, 1, 20);
        let window = chart_page_window(today, 10).unwrap();
        assert_eq!(window.last_day, date(2023, 11, 11));
        assert!(chart_page_window(today, u64::MAX).is_none());
    }
}
