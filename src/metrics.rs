use crate::models::{DayMetrics, DayRecord};
use chrono::NaiveDate;

/// Conversion factors from raw steps to the derived metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsConfig {
    pub default_goal: u64,
    pub step_length_m: f64,
    pub kcal_per_step: f64,
    pub co2_kg_per_km: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            default_goal: 6000,
            step_length_m: 0.7,
            kcal_per_step: 0.04,
            co2_kg_per_km: 0.12,
        }
    }
}

impl MetricsConfig {
    /// A day with no record reports zero steps against the default goal.
    pub fn record_or_default(&self, record: Option<&DayRecord>) -> DayRecord {
        record.copied().unwrap_or(DayRecord {
            steps: 0,
            goal: self.default_goal,
        })
    }

    pub fn day_metrics(&self, date: NaiveDate, record: Option<&DayRecord>) -> DayMetrics {
        let record = self.record_or_default(record);
        let steps = record.steps as f64;
        let distance_km = steps * self.step_length_m / 1000.0;
        DayMetrics {
            date,
            steps: record.steps,
            goal: record.goal,
            calorie_burned: steps * self.kcal_per_step,
            distance_travelled: distance_km,
            carbon_dioxide_saved: distance_km * self.co2_kg_per_km,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn metrics_scale_with_steps() {
        let config = MetricsConfig::default();
        let date = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        let metrics = config.day_metrics(date, Some(&DayRecord { steps: 10_000, goal: 8000 }));
        assert_eq!(metrics.steps, 10_000);
        assert_eq!(metrics.goal, 8000);
        assert!(approx(metrics.calorie_burned, 400.0));
        assert!(approx(metrics.distance_travelled, 7.0));
        assert!(approx(metrics.carbon_dioxide_saved, 0.84));
    }

    #[test]
    fn missing_record_uses_default_goal() {
        let config = MetricsConfig {
            default_goal: 1234,
            ..MetricsConfig::default()
        };
        let date = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        let metrics = config.day_metrics(date, None);
        assert_eq!(metrics.steps, 0);
        assert_eq!(metrics.goal, 1234);
        assert!(approx(metrics.distance_travelled, 0.0));
    }
}
