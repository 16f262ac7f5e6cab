//! Configuration file loading for tool-reasoner
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `REASONER_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./reasoner.toml` or `./.reasoner.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/tool-reasoner/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    API_KEY_ENV, ConfigValidationError, FileConfig, FileGeminiConfig, FileOutputConfig,
};
pub use loader::ConfigLoader;
