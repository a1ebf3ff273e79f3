use std::{env, fmt::Display, str::FromStr, time::Duration};

use tracing::{info, warn};

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_INSIGHT_DELAY_MS: u64 = 500;
pub const DEFAULT_HEADLINE_DELAY_MS: u64 = 300;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub insight_delay: Duration,
    pub headline_delay: Duration,
}

impl Config {
    pub fn load() -> Result<Self, ServerError> {
        Ok(Self {
            port: try_load("PORT", DEFAULT_PORT)?,
            insight_delay: Duration::from_millis(try_load(
                "INSIGHT_DELAY_MS",
                DEFAULT_INSIGHT_DELAY_MS,
            )?),
            headline_delay: Duration::from_millis(try_load(
                "HEADLINE_DELAY_MS",
                DEFAULT_HEADLINE_DELAY_MS,
            )?),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            insight_delay: Duration::from_millis(DEFAULT_INSIGHT_DELAY_MS),
            headline_delay: Duration::from_millis(DEFAULT_HEADLINE_DELAY_MS),
        }
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key)
        .map_err(|_| {
            warn!("Environment variable {key} not found, using default");
        })
        .ok()
}

fn try_load<T: FromStr + Display>(key: &str, default: T) -> Result<T, ServerError>
where
    T::Err: Display,
{
    match var(key) {
        Some(value) => parse_value(key, &value),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, ServerError>
where
    T::Err: Display,
{
    value.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");

        ServerError::Config {
            key: key.to_string(),
            message: e.to_string(),
        }
    })
}
