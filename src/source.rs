//! Collaborators the controller observes.
//!
//! Both sources are push-based: a subscription is a stream that yields the
//! current value and then re-emits whenever it changes. Dropping the stream
//! unsubscribes.

use crate::models::DayMetrics;
use chrono::{Local, NaiveDate};
use futures_util::stream::BoxStream;
use std::sync::{Mutex, PoisonError};

pub trait DayMetricsSource: Send + Sync + 'static {
    /// Metrics for `date`, re-emitted whenever that day's data changes.
    fn day(&self, date: NaiveDate) -> BoxStream<'static, DayMetrics>;
}

pub trait FirstDateSource: Send + Sync + 'static {
    /// Earliest date with any recorded data. Silent while no history exists.
    fn first_date(&self) -> BoxStream<'static, NaiveDate>;
}

pub trait Clock: Send + Sync + 'static {
    fn today(&self) -> NaiveDate;
}

/// Calendar date in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    today: Mutex<NaiveDate>,
}

impl ManualClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Mutex::new(today),
        }
    }

    pub fn set(&self, today: NaiveDate) {
        *self.today.lock().unwrap_or_else(PoisonError::into_inner) = today;
    }
}

impl Clock for ManualClock {
    fn today(&self) -> NaiveDate {
        *self.today.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
