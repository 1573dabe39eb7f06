//! Configuration file loading with precedence handling.

use crate::model::{SeriesFilter, SortDirection, SortKey, SortSpec, ViewMode};
use crate::state::poster_options::{PosterOptions, PosterSize};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "SIDX_CONFIG";
/// Environment variable overriding the initial view mode.
pub const ENV_VIEW: &str = "SIDX_VIEW";
/// Environment variable overriding the series library path.
pub const ENV_LIBRARY: &str = "SIDX_LIBRARY";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/sidx/config.toml`.
///
/// ```toml
/// library_path = "/srv/media/series.json"
/// view = "posters"
/// sort_key = "sortTitle"
/// sort_direction = "descending"
/// filter = "monitored"
/// poster_size = "large"
/// show_poster_titles = false
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Initial view mode ("table" or "posters"; anything else is table).
    #[serde(default)]
    pub view: Option<String>,

    /// Initial sort key, e.g. "sortTitle", "network".
    #[serde(default)]
    pub sort_key: Option<String>,

    /// Initial sort direction.
    #[serde(default)]
    pub sort_direction: Option<SortDirection>,

    /// Initial filter preset name, e.g. "monitored".
    #[serde(default)]
    pub filter: Option<String>,

    /// Path to the JSON series library.
    #[serde(default)]
    pub library_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Poster cell size.
    #[serde(default)]
    pub poster_size: Option<PosterSize>,

    /// Show titles under posters.
    #[serde(default)]
    pub show_poster_titles: Option<bool>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Initial view mode.
    pub view: ViewMode,
    /// Initial sort key and direction.
    pub sort: SortSpec,
    /// Initial filter preset.
    pub filter: SeriesFilter,
    /// JSON series library, if one is configured.
    pub library_path: Option<PathBuf>,
    /// Log file for tracing output.
    pub log_file_path: PathBuf,
    /// Initial poster grid options.
    pub poster_options: PosterOptions,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            view: ViewMode::Table,
            sort: SortSpec::default(),
            filter: SeriesFilter::All,
            library_path: None,
            log_file_path: default_log_path(),
            poster_options: PosterOptions::default(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/sidx/sidx.log` on Unix-like systems, or the
/// platform equivalent. Falls back to the current directory when no
/// state directory is known.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("sidx").join("sidx.log")
    } else {
        PathBuf::from("sidx.log")
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/sidx/config.toml` on Unix, appropriate path on other platforms.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sidx").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `SIDX_CONFIG` environment variable
/// 3. Default path `~/.config/sidx/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// Unknown view tokens resolve to table, unknown sort keys are kept
/// as-is, and unknown filter names resolve to "all".
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let sort = SortSpec::new(
        config
            .sort_key
            .as_deref()
            .map(SortKey::from_token)
            .unwrap_or(defaults.sort.key),
        config.sort_direction.unwrap_or(defaults.sort.direction),
    );

    ResolvedConfig {
        view: config
            .view
            .as_deref()
            .map(ViewMode::from_token)
            .unwrap_or(defaults.view),
        sort,
        filter: config
            .filter
            .as_deref()
            .and_then(SeriesFilter::from_name)
            .unwrap_or(defaults.filter),
        library_path: config.library_path.or(defaults.library_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        poster_options: PosterOptions {
            size: config.poster_size.unwrap_or(defaults.poster_options.size),
            show_title: config
                .show_poster_titles
                .unwrap_or(defaults.poster_options.show_title),
        },
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `SIDX_VIEW`: Override view mode
/// - `SIDX_LIBRARY`: Override library path
pub fn apply_env_overrides(config: ResolvedConfig) -> ResolvedConfig {
    apply_overrides_from(config, |name| std::env::var(name).ok())
}

/// Apply overrides using `lookup` in place of the process environment.
pub fn apply_overrides_from(
    mut config: ResolvedConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    if let Some(view) = lookup(ENV_VIEW) {
        config.view = ViewMode::from_token(&view);
    }

    if let Some(library) = lookup(ENV_LIBRARY) {
        config.library_path = Some(PathBuf::from(library));
    }

    config
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--library` path.
    pub library: Option<PathBuf>,
    /// `--view` token.
    pub view: Option<String>,
    /// `--sort` key.
    pub sort_key: Option<String>,
    /// `--descending` was passed.
    pub descending: bool,
    /// `--filter` preset.
    pub filter: Option<SeriesFilter>,
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence. Only flags the user actually
/// set are applied; `--descending` can only force descending order.
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(library) = cli.library {
        config.library_path = Some(library);
    }

    if let Some(view) = cli.view {
        config.view = ViewMode::from_token(&view);
    }

    if let Some(key) = cli.sort_key {
        config.sort.key = SortKey::from_token(&key);
    }

    if cli.descending {
        config.sort.direction = SortDirection::Descending;
    }

    if let Some(filter) = cli.filter {
        config.filter = filter;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
