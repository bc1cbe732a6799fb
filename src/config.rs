use crate::metrics::MetricsConfig;
use std::{env, path::PathBuf, str::FromStr};
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub port: u16,
    pub metrics: MetricsConfig,
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = MetricsConfig::default();
        Self {
            data_path: resolve_data_path(),
            port: env_or("PORT", DEFAULT_PORT),
            metrics: MetricsConfig {
                default_goal: env_or("STEP_GOAL", defaults.default_goal),
                step_length_m: env_or("STEP_LENGTH_M", defaults.step_length_m),
                kcal_per_step: env_or("KCAL_PER_STEP", defaults.kcal_per_step),
                co2_kg_per_km: env_or("CO2_KG_PER_KM", defaults.co2_kg_per_km),
            },
        }
    }
}

pub fn resolve_data_path() -> PathBuf {
    env::var("APP_DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/steps.json"))
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => parse_or(key, &raw, default),
        Err(_) => default,
    }
}

fn parse_or<T: FromStr>(key: &str, raw: &str, default: T) -> T {
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!("ignoring invalid {key}={raw:?}, using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_falls_back_on_garbage() {
        assert_eq!(parse_or("PORT", "9090", DEFAULT_PORT), 9090);
        assert_eq!(parse_or("PORT", " 9091 ", DEFAULT_PORT), 9091);
        assert_eq!(parse_or("PORT", "not-a-port", DEFAULT_PORT), DEFAULT_PORT);
        assert_eq!(parse_or("STEP_LENGTH_M", "0.8", 0.7), 0.8);
    }
}
