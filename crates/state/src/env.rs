use anyhow::Result;
use std::path::PathBuf;

const DEFAULT_CACHE_TTL_MS: u64 = 900_000; // 15 minutes
const DEFAULT_EMPLOYEE_CACHE_TTL_MS: u64 = 300_000; // 5 minutes

/// Returns the user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    #[cfg(unix)]
    if let Ok(home) = std::env::var("HOME") {
        return Ok(PathBuf::from(home));
    }
    dirs::home_dir().ok_or_else(|| anyhow::anyhow!("home directory not found"))
}

/// Returns the path to the settings file.
///
/// `CAREERPATH_CONFIG` wins; otherwise `~/.careerpath/config.toml`.
pub fn settings_file() -> Option<PathBuf> {
    if let Ok(custom) = std::env::var("CAREERPATH_CONFIG") {
        return Some(PathBuf::from(custom));
    }
    home_dir()
        .ok()
        .map(|h| h.join(".careerpath/config.toml"))
}

/// Returns the reference-data override file from `CAREERPATH_REFERENCE_DATA`.
pub fn env_reference_data() -> Option<PathBuf> {
    std::env::var("CAREERPATH_REFERENCE_DATA")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from)
}

/// Returns the recommendation cache TTL from `CAREERPATH_CACHE_TTL_MS`.
pub fn env_cache_ttl_ms() -> Option<u64> {
    std::env::var("CAREERPATH_CACHE_TTL_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
}

/// Returns the project top-N cutoff from `CAREERPATH_PROJECT_TOP_N`.
pub fn env_project_top_n() -> Option<usize> {
    std::env::var("CAREERPATH_PROJECT_TOP_N")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|n| *n > 0)
}

/// Checks if `CAREERPATH_DIAGNOSE` environment variable is set to true.
pub fn env_diag() -> bool {
    std::env::var("CAREERPATH_DIAGNOSE")
        .map(|s| s == "1" || s.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

pub(crate) fn default_cache_ttl_ms() -> u64 {
    DEFAULT_CACHE_TTL_MS
}

pub(crate) fn default_employee_cache_ttl_ms() -> u64 {
    DEFAULT_EMPLOYEE_CACHE_TTL_MS
}
