//! Configuration module.
//!
//! Settings resolve through a precedence chain:
//! defaults → config file → environment variables → CLI arguments.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, apply_overrides_from, default_config_path,
    default_log_path, load_config_file, load_config_with_precedence, merge_config, CliOverrides,
    ConfigError, ConfigFile, ResolvedConfig, ENV_CONFIG, ENV_LIBRARY, ENV_VIEW,
};
