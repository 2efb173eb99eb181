use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::{olog_debug, Error, Result};

/// Default number of Monte Carlo trials for the failure-time simulation.
pub const DEFAULT_TRIALS: usize = 50_000;

/// Default cap on task count for the exhaustive ordering search.
pub const DEFAULT_MAX_TASKS: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Monte Carlo trial count for the failure-time simulation.
    #[serde(default = "default_trials")]
    pub trials: usize,

    /// Maximum table size accepted by the exhaustive search (n! blow-up guard).
    #[serde(default = "default_max_tasks")]
    pub max_tasks: usize,

    /// Fixed rng seed for reproducible simulations. Random when absent.
    pub seed: Option<u64>,
}

fn default_trials() -> usize {
    DEFAULT_TRIALS
}

fn default_max_tasks() -> usize {
    DEFAULT_MAX_TASKS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            max_tasks: DEFAULT_MAX_TASKS,
            seed: None,
        }
    }
}

impl Config {
    pub fn ordo_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir().ok_or(Error::NoHomeDir)?.join(".ordo"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::ordo_dir()?.join("ordo.toml"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        olog_debug!("Config::load path={}", path.display());
        if !path.exists() {
            olog_debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(&fs::read_to_string(&path)?)?;
        olog_debug!(
            "Config loaded: trials={}, max_tasks={}, seed={:?}",
            config.trials,
            config.max_tasks,
            config.seed
        );
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let ordo_dir = Self::ordo_dir()?;
        olog_debug!("Config::save ordo_dir={}", ordo_dir.display());
        if !ordo_dir.exists() {
            fs::create_dir_all(&ordo_dir)?;
        }
        let path = Self::config_path()?;
        fs::write(&path, toml::to_string_pretty(self)?)?;
        olog_debug!("Config saved to {}", path.display());
        Ok(())
    }
}
