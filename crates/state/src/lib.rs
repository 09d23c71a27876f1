//! Runtime configuration for the careerpath engine.
//!
//! This crate provides utilities for:
//! - Reading `CAREERPATH_*` environment variables.
//! - Loading the optional `config.toml` settings file (thresholds, cache TTLs,
//!   reference-data overrides, reasoning strategy).

pub mod env;
pub mod settings;

pub use env::{
    env_cache_ttl_ms, env_diag, env_project_top_n, env_reference_data, home_dir, settings_file,
};
pub use settings::{
    load_settings, load_settings_from, ReasoningSettings, ReasoningStrategy, Settings,
    ThresholdOverrides,
};
