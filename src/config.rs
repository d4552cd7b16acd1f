use std::str::FromStr;
use anyhow::{anyhow, Result};
use simplelog::LevelFilter;
use crate::utils::gpa::{clamp_credits, parse_or_default};

pub const DEFAULT_CREDITS: f64 = 3.0;
pub const DEFAULT_GRADE: &str = "B";

/// Values given to a freshly added course row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowDefaults {
    pub credits: f64,
    pub grade: String,
}

impl Default for RowDefaults {
    fn default() -> Self {
        Self {
            credits: DEFAULT_CREDITS,
            grade: DEFAULT_GRADE.to_string(),
        }
    }
}

/// Settings read from the environment (and `.env`) before CLI overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub defaults: RowDefaults,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: RowDefaults::default(),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Reads GPA_DEFAULT_CREDITS, GPA_DEFAULT_GRADE and GPA_LOG_LEVEL from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("GPA_DEFAULT_CREDITS") {
            config.defaults.credits = clamp_credits(parse_or_default(&raw, DEFAULT_CREDITS));
        }
        if let Some(raw) = lookup("GPA_DEFAULT_GRADE") {
            let grade = raw.trim();
            if !grade.is_empty() {
                config.defaults.grade = grade.to_string();
            }
        }
        if let Some(raw) = lookup("GPA_LOG_LEVEL") {
            config.log_level = LevelFilter::from_str(raw.trim())
                .map_err(|_| anyhow!("GPA_LOG_LEVEL must be one of off, error, warn, info, debug, trace (got {:?})", raw))?;
        }

        Ok(config)
    }
}
