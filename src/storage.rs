use crate::errors::AppError;
use crate::metrics::MetricsConfig;
use crate::models::{AppData, ChartDay, DayMetrics};
use crate::source::{DayMetricsSource, FirstDateSource};
use crate::window::ChartWindow;
use chrono::NaiveDate;
use futures_util::stream::{self, BoxStream};
use futures_util::{StreamExt, future};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::{Mutex, watch};
use tracing::{debug, error};

pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file: {err}");
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            AppData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    let payload = serde_json::to_vec_pretty(data)?;
    fs::write(path, payload).await?;
    Ok(())
}

/// Step history backed by a JSON file. A mutation reaches subscribers only
/// after it has been written to disk.
pub struct StepStore {
    path: PathBuf,
    config: MetricsConfig,
    data: watch::Sender<AppData>,
    write_lock: Mutex<()>,
}

impl StepStore {
    pub fn new(path: PathBuf, config: MetricsConfig, data: AppData) -> Self {
        let (data, _) = watch::channel(data);
        Self {
            path,
            config,
            data,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn open(path: PathBuf, config: MetricsConfig) -> Self {
        let data = load_data(&path).await;
        debug!(days = data.days.len(), path = %path.display(), "loaded step history");
        Self::new(path, config, data)
    }

    pub fn snapshot(&self) -> AppData {
        self.data.borrow().clone()
    }

    pub fn metrics_for(&self, date: NaiveDate) -> DayMetrics {
        self.config.day_metrics(date, self.data.borrow().days.get(&date))
    }

    pub fn chart_days(&self, window: &ChartWindow) -> Vec<ChartDay> {
        let data = self.data.borrow();
        window
            .days()
            .map(|date| {
                let record = self.config.record_or_default(data.days.get(&date));
                ChartDay {
                    date,
                    steps: record.steps,
                    goal_reached: record.steps >= record.goal,
                }
            })
            .collect()
    }

    pub async fn add_steps(&self, date: NaiveDate, steps: u64) -> Result<DayMetrics, AppError> {
        let default = self.config.record_or_default(None);
        self.mutate(|data| {
            let entry = data.days.entry(date).or_insert(default);
            entry.steps = entry.steps.saturating_add(steps);
        })
        .await?;
        Ok(self.metrics_for(date))
    }

    pub async fn set_goal(&self, date: NaiveDate, goal: u64) -> Result<DayMetrics, AppError> {
        let default = self.config.record_or_default(None);
        self.mutate(|data| {
            data.days.entry(date).or_insert(default).goal = goal;
        })
        .await?;
        Ok(self.metrics_for(date))
    }

    async fn mutate(&self, apply: impl FnOnce(&mut AppData)) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        let mut data = self.snapshot();
        apply(&mut data);
        persist_data(&self.path, &data).await?;
        self.data.send_replace(data);
        Ok(())
    }
}

impl DayMetricsSource for StepStore {
    fn day(&self, date: NaiveDate) -> BoxStream<'static, DayMetrics> {
        let config = self.config;
        projection(self.data.subscribe(), move |data| {
            config.day_metrics(date, data.days.get(&date))
        })
    }
}

impl FirstDateSource for StepStore {
    fn first_date(&self) -> BoxStream<'static, NaiveDate> {
        projection(self.data.subscribe(), AppData::first_date)
            .filter_map(future::ready)
            .boxed()
    }
}

/// Emits `project(data)` immediately, then again each time the store changes
/// in a way that alters the projected value.
fn projection<T, F>(rx: watch::Receiver<AppData>, project: F) -> BoxStream<'static, T>
where
    T: Clone + PartialEq + Send + 'static,
    F: FnMut(&AppData) -> T + Send + 'static,
{
    stream::unfold(
        (rx, project, None::<T>),
        |(mut rx, mut project, last)| async move {
            let mut waiting = last.is_some();
            loop {
                if waiting && rx.changed().await.is_err() {
                    return None;
                }
                waiting = true;
                let next = project(&rx.borrow_and_update());
                if last.as_ref() != Some(&next) {
                    return Some((next.clone(), (rx, project, Some(next))));
                }
            }
        },
    )
    .boxed()
}
