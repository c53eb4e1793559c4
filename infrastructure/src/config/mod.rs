//! Configuration loading for questionnaire-admin
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUESTIONNAIRE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./questionnaire.toml` or `./.questionnaire.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/questionnaire-admin/config.toml`
//! 5. Default values
//!
//! The gateway endpoint and connection string have no defaults.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_CONNECTION_HEADER, FileCatalogueConfig, FileConfig,
    FileGatewayConfig, FileOutputConfig, FileVerifyConfig, GatewayConfig,
};
pub use loader::{ConfigLoader, ConfigSource, ENV_PREFIX};
