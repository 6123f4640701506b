use std::{env, path::PathBuf};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a positive integer (got '{value}')")]
    InvalidWorkers { key: &'static str, value: String },
    #[error("{key} must not be empty")]
    Empty { key: &'static str },
}

/// Server settings, read from `GARDEN_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: String,
    /// External plant data; the bundled catalog is used when unset.
    pub plants_path: Option<PathBuf>,
    pub workers: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            plants_path: None,
            workers: None,
        }
    }
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("GARDEN_BIND_ADDR") {
            if addr.trim().is_empty() {
                return Err(ConfigError::Empty {
                    key: "GARDEN_BIND_ADDR",
                });
            }
            config.bind_addr = addr;
        }

        config.plants_path = lookup("GARDEN_PLANTS_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        if let Some(raw) = lookup("GARDEN_WORKERS") {
            let workers = raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or(ConfigError::InvalidWorkers {
                    key: "GARDEN_WORKERS",
                    value: raw.clone(),
                })?;
            config.workers = Some(workers);
        }

        Ok(config)
    }
}
