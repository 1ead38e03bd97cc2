//! Runtime options read from the environment.
//!
//! The binary has no flags; everything tunable comes from `MONKEY_APP_*`
//! variables read once at start-up. Empty values count as unset so a shell
//! `VAR=` does not silently change behavior.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const CATALOG_ENV: &str = "MONKEY_APP_CATALOG";
pub const SEED_ENV: &str = "MONKEY_APP_SEED";
pub const REVEAL_MS_ENV: &str = "MONKEY_APP_REVEAL_MS";
pub const NO_ART_ENV: &str = "MONKEY_APP_NO_ART";
pub const LOG_ENV: &str = "MONKEY_APP_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Alternate catalog document; `None` uses the embedded seed data.
    pub catalog_path: Option<PathBuf>,
    /// Fixed RNG seed for reproducible sessions.
    pub seed: Option<u64>,
    /// Pause before revealing a random pick.
    pub reveal_pause: Duration,
    pub show_art: bool,
    /// `tracing` env-filter directive.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            seed: None,
            reveal_pause: Duration::ZERO,
            show_art: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env_non_empty)
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let seed = non_empty(SEED_ENV)
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("{SEED_ENV} must be an unsigned integer, got '{raw}'"))
            })
            .transpose()?;

        let reveal_pause = non_empty(REVEAL_MS_ENV)
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map(Duration::from_millis)
                    .with_context(|| {
                        format!("{REVEAL_MS_ENV} must be a number of milliseconds, got '{raw}'")
                    })
            })
            .transpose()?
            .unwrap_or(defaults.reveal_pause);

        let show_art = non_empty(NO_ART_ENV)
            .map(|v| v.trim() == "0")
            .unwrap_or(defaults.show_art);

        Ok(Self {
            catalog_path: non_empty(CATALOG_ENV).map(PathBuf::from),
            seed,
            reveal_pause,
            show_art,
            log_filter: non_empty(LOG_ENV).unwrap_or(defaults.log_filter),
        })
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}
