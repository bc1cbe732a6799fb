//! Selected-day and date-range state for the stats screen.
//!
//! The controller owns two observable values, the selected day and the
//! navigable date range, and keeps them fed from the metrics and first-date
//! sources. Each selection runs its own subscription task; starting a new
//! selection aborts the previous task and bumps a generation counter, and a
//! task only publishes while its generation is current. Both checks happen
//! under the same lock, so an emission from a superseded selection can never
//! land after the newer one took over.

use crate::models::{SelectedDay, StatsView};
use crate::source::{Clock, DayMetricsSource, FirstDateSource};
use crate::window::DateRange;
use chrono::NaiveDate;
use futures_util::StreamExt;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

pub struct DateWindowController {
    shared: Arc<Shared>,
    metrics: Arc<dyn DayMetricsSource>,
    clock: Arc<dyn Clock>,
    range_task: JoinHandle<()>,
}

struct Shared {
    day_tx: watch::Sender<SelectedDay>,
    range_tx: watch::Sender<DateRange>,
    earliest: Mutex<Option<NaiveDate>>,
    selection: Mutex<Selection>,
}

impl Shared {
    /// Rebuilds the range from the last known earliest date and `today`,
    /// publishing it when it differs from the current value.
    fn publish_range(&self, earliest: Option<NaiveDate>, today: NaiveDate) -> DateRange {
        let range = DateRange::new(earliest.unwrap_or(today), today);
        let changed = self.range_tx.send_if_modified(|current| {
            if *current == range {
                return false;
            }
            *current = range;
            true
        });
        if changed {
            debug!(start = %range.start(), end = %range.end(), "date range updated");
        }
        range
    }
}

#[derive(Default)]
struct Selection {
    generation: u64,
    task: Option<JoinHandle<()>>,
}

impl DateWindowController {
    /// Starts observing history and selects today. Must be called from within
    /// a tokio runtime.
    pub fn new(
        metrics: Arc<dyn DayMetricsSource>,
        first_date: Arc<dyn FirstDateSource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let today = clock.today();
        let (day_tx, _) = watch::channel(SelectedDay::default());
        let (range_tx, _) = watch::channel(DateRange::single_day(today));
        let shared = Arc::new(Shared {
            day_tx,
            range_tx,
            earliest: Mutex::new(None),
            selection: Mutex::new(Selection::default()),
        });

        let mut first_dates = first_date.first_date();
        let range_shared = Arc::clone(&shared);
        let range_clock = Arc::clone(&clock);
        let range_task = tokio::spawn(async move {
            while let Some(date) = first_dates.next().await {
                let mut earliest = lock_or_recover(&range_shared.earliest);
                *earliest = Some(date);
                range_shared.publish_range(*earliest, range_clock.today());
            }
        });

        let controller = Self {
            shared,
            metrics,
            clock,
            range_task,
        };
        controller.select_day(today);
        controller
    }

    /// Switches the selection to `date` and follows its metrics until the
    /// next selection. Any date is accepted.
    pub fn select_day(&self, date: NaiveDate) {
        let mut selection = lock_or_recover(&self.shared.selection);
        if let Some(task) = selection.task.take() {
            task.abort();
        }
        selection.generation += 1;
        let generation = selection.generation;
        debug!(%date, generation, "selecting day");

        let mut updates = self.metrics.day(date);
        let shared = Arc::clone(&self.shared);
        selection.task = Some(tokio::spawn(async move {
            while let Some(metrics) = updates.next().await {
                let current = {
                    let selection = lock_or_recover(&shared.selection);
                    if selection.generation == generation {
                        shared.day_tx.send_replace(SelectedDay::from(metrics));
                        true
                    } else {
                        false
                    }
                };
                if !current {
                    break;
                }
            }
        }));
    }

    /// Selects the day before the current one and returns it.
    pub fn select_previous_day(&self) -> Option<NaiveDate> {
        let target = self.current_day().date.pred_opt()?;
        self.select_day(target);
        Some(target)
    }

    /// Selects the day after the current one and returns it.
    pub fn select_next_day(&self) -> Option<NaiveDate> {
        let target = self.current_day().date.succ_opt()?;
        self.select_day(target);
        Some(target)
    }

    pub fn selected_day(&self) -> watch::Receiver<SelectedDay> {
        self.shared.day_tx.subscribe()
    }

    pub fn date_range(&self) -> watch::Receiver<DateRange> {
        self.refresh_range();
        self.shared.range_tx.subscribe()
    }

    pub fn current_day(&self) -> SelectedDay {
        self.shared.day_tx.borrow().clone()
    }

    /// Range ending on the clock's current day. Crossing midnight moves the
    /// end forward even when no new history arrives.
    pub fn current_range(&self) -> DateRange {
        self.refresh_range()
    }

    fn refresh_range(&self) -> DateRange {
        let earliest = lock_or_recover(&self.shared.earliest);
        self.shared.publish_range(*earliest, self.clock.today())
    }

    /// Reads both values in one pass and derives the navigation state.
    pub fn view(&self) -> StatsView {
        StatsView::derive(self.current_day(), self.current_range())
    }

    /// Waits until `date` is the selected day, up to `limit`.
    pub async fn wait_for_selection(&self, date: NaiveDate, limit: Duration) -> bool {
        let mut day_rx = self.selected_day();
        let resolved = tokio::time::timeout(limit, async move {
            day_rx.wait_for(|day| day.date == date).await.is_ok()
        })
        .await;
        match resolved {
            Ok(resolved) => resolved,
            Err(_) => {
                warn!(%date, "selected day did not resolve in time");
                false
            }
        }
    }
}

impl Drop for DateWindowController {
    fn drop(&mut self) {
        self.range_task.abort();
        if let Some(task) = lock_or_recover(&self.shared.selection).task.take() {
            task.abort();
        }
        debug!("date window controller released its subscriptions");
    }
}

fn lock_or_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            warn!("controller lock poisoned, recovering");
            poisoned.into_inner()
        }
    }
}
