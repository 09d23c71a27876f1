use crate::env::{
    default_cache_ttl_ms, default_employee_cache_ttl_ms, env_cache_ttl_ms, env_project_top_n,
    env_reference_data, settings_file,
};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings parsed from `config.toml`.
///
/// Every field is optional; missing values fall back to built-in defaults.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// TOML file replacing the built-in reference tables.
    #[serde(default)]
    pub reference_data: Option<PathBuf>,
    /// TTL for generated recommendation lists.
    #[serde(default)]
    pub cache_ttl_ms: Option<u64>,
    /// TTL for stored per-employee recommendation lists.
    #[serde(default)]
    pub employee_cache_ttl_ms: Option<u64>,
    #[serde(default)]
    pub thresholds: ThresholdOverrides,
    #[serde(default)]
    pub reasoning: ReasoningSettings,
}

/// Overrides for the scorers' inclusion cutoffs and top-N limits.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct ThresholdOverrides {
    pub course_min_score: Option<f64>,
    pub course_top_n: Option<usize>,
    pub mentor_min_score: Option<f64>,
    pub mentor_top_n: Option<usize>,
    pub project_min_score: Option<f64>,
    pub project_top_n: Option<usize>,
}

/// How the template reasoning generator picks its template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningStrategy {
    /// Always the template at `seed % templates`.
    #[default]
    Fixed,
    /// Rotates by candidate id, offset by `seed`.
    Rotating,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ReasoningSettings {
    #[serde(default)]
    pub strategy: ReasoningStrategy,
    #[serde(default)]
    pub seed: u64,
}

/// Loads settings from the default location, or defaults when the file is absent.
pub fn load_settings() -> Result<Settings> {
    let Some(path) = settings_file() else {
        return Ok(Settings::default());
    };
    if !path.exists() {
        return Ok(Settings::default());
    }
    load_settings_from(&path)
}

/// Loads settings from `path`.
///
/// A malformed file is logged and treated as empty rather than failing startup.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file: {}", path.display()))?;
    match toml::from_str::<Settings>(&text) {
        Ok(settings) => Ok(settings),
        Err(e) => {
            tracing::warn!(
                error = %e,
                path = %path.display(),
                "Ignoring malformed settings file"
            );
            Ok(Settings::default())
        }
    }
}

impl Settings {
    /// TTL for generated recommendations: env var, then settings, then 15 minutes.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_millis(
            env_cache_ttl_ms()
                .or(self.cache_ttl_ms)
                .unwrap_or_else(default_cache_ttl_ms),
        )
    }

    /// TTL for stored per-employee lists: settings, then 5 minutes.
    pub fn employee_cache_ttl(&self) -> Duration {
        Duration::from_millis(
            self.employee_cache_ttl_ms
                .unwrap_or_else(default_employee_cache_ttl_ms),
        )
    }

    /// Reference-data override path: env var, then settings.
    pub fn reference_data_path(&self) -> Option<PathBuf> {
        env_reference_data().or_else(|| self.reference_data.clone())
    }

    /// Threshold overrides with the env var applied on top.
    pub fn effective_thresholds(&self) -> ThresholdOverrides {
        let mut thresholds = self.thresholds.clone();
        if let Some(n) = env_project_top_n() {
            thresholds.project_top_n = Some(n);
        }
        thresholds
    }
}
