//! Configuration file support for Racepace.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/racepace/config.toml`.

use crate::scheduler::{SchedulerSettings, DEFAULT_TOTAL_WEEKS};
use crate::{DayOfWeek, DistanceUnit, Error, PaceFormat, Preferences, Result, MAX_TOTAL_WEEKS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub plan: PlanDefaults,

    #[serde(default)]
    pub preferences: PreferenceDefaults,

    #[serde(default)]
    pub cache: CacheConfig,
}

/// Plan generation defaults
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlanDefaults {
    #[serde(default = "default_total_weeks")]
    pub default_total_weeks: u32,
}

impl Default for PlanDefaults {
    fn default() -> Self {
        Self {
            default_total_weeks: default_total_weeks(),
        }
    }
}

/// Preferences applied when a request leaves them unset
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct PreferenceDefaults {
    #[serde(default)]
    pub distance_unit: DistanceUnit,

    #[serde(default)]
    pub pace_format: PaceFormat,

    #[serde(default)]
    pub preferred_rest_days: Vec<DayOfWeek>,

    #[serde(default)]
    pub enforce_rest_days: bool,
}

/// Caller-side plan cache configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: i64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_ttl_seconds(),
        }
    }
}

/// Longest cache lifetime accepted from the config file (30 days)
pub const MAX_CACHE_TTL_SECONDS: i64 = 30 * 24 * 60 * 60;

// Default value functions
fn default_total_weeks() -> u32 {
    DEFAULT_TOTAL_WEEKS
}

fn default_ttl_seconds() -> i64 {
    3600
}

impl PreferenceDefaults {
    /// Preferences built from these defaults
    pub fn to_preferences(&self) -> Preferences {
        Preferences {
            distance_unit: self.distance_unit,
            pace_format: self.pace_format,
            preferred_rest_days: if self.preferred_rest_days.is_empty() {
                None
            } else {
                Some(self.preferred_rest_days.clone())
            },
            enforce_rest_days: Some(self.enforce_rest_days),
        }
    }
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = match dirs::config_dir() {
            Some(dir) => dir,
            None => {
                let home = std::env::var("HOME").map_err(|_| {
                    Error::Config("cannot locate config directory: HOME is not set".into())
                })?;
                PathBuf::from(home).join(".config")
            }
        };
        Ok(base.join("racepace").join("config.toml"))
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path()?;
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.plan.default_total_weeks == 0 || self.plan.default_total_weeks > MAX_TOTAL_WEEKS {
            return Err(Error::Config(format!(
                "plan.default_total_weeks must be between 1 and {}",
                MAX_TOTAL_WEEKS
            )));
        }
        if !(0..=MAX_CACHE_TTL_SECONDS).contains(&self.cache.ttl_seconds) {
            return Err(Error::Config(format!(
                "cache.ttl_seconds must be between 0 and {}",
                MAX_CACHE_TTL_SECONDS
            )));
        }
        if let Some(day) = self
            .preferences
            .preferred_rest_days
            .iter()
            .find(|d| !(1..=7).contains(*d))
        {
            return Err(Error::Config(format!(
                "preferences.preferred_rest_days contains {} (expected 1-7)",
                day
            )));
        }
        Ok(())
    }

    pub fn scheduler_settings(&self) -> SchedulerSettings {
        SchedulerSettings {
            default_total_weeks: self.plan.default_total_weeks,
        }
    }

    /// Cache lifetime, clamped to the accepted range for unvalidated configs
    pub fn cache_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.cache.ttl_seconds.clamp(0, MAX_CACHE_TTL_SECONDS))
    }
}
