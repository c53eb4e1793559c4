//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file
//! (and of `QUESTIONNAIRE_*` environment overrides).

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Header carrying the connection string unless configured otherwise.
pub const DEFAULT_CONNECTION_HEADER: &str = "Neon-Connection-String";

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error(
        "gateway.endpoint is not set (config file or QUESTIONNAIRE_GATEWAY__ENDPOINT)"
    )]
    MissingEndpoint,

    #[error("gateway.endpoint is not a valid http(s) URL: {0}")]
    InvalidEndpoint(String),

    #[error(
        "gateway.connection_string is not set (config file or QUESTIONNAIRE_GATEWAY__CONNECTION_STRING)"
    )]
    MissingConnectionString,

    #[error("gateway.connection_header cannot be empty")]
    EmptyConnectionHeader,
}

/// Raw gateway configuration from TOML
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGatewayConfig {
    /// SQL-over-HTTP endpoint URL
    pub endpoint: Option<String>,
    /// Connection string of the target database (secret)
    pub connection_string: Option<String>,
    /// Header the connection string is sent in
    pub connection_header: String,
}

impl Default for FileGatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            connection_string: None,
            connection_header: DEFAULT_CONNECTION_HEADER.to_string(),
        }
    }
}

impl fmt::Debug for FileGatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileGatewayConfig")
            .field("endpoint", &self.endpoint)
            .field(
                "connection_string",
                &self.connection_string.as_ref().map(|_| "<redacted>"),
            )
            .field("connection_header", &self.connection_header)
            .finish()
    }
}

impl FileGatewayConfig {
    /// Check that the required secrets are present and well-formed
    pub fn validate(&self) -> Result<GatewayConfig, ConfigValidationError> {
        let endpoint = self
            .endpoint
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .ok_or(ConfigValidationError::MissingEndpoint)?;

        let url = Url::parse(endpoint)
            .map_err(|e| ConfigValidationError::InvalidEndpoint(format!("{endpoint}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigValidationError::InvalidEndpoint(endpoint.to_string()));
        }

        let connection_string = self
            .connection_string
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .ok_or(ConfigValidationError::MissingConnectionString)?;

        let connection_header = self.connection_header.trim();
        if connection_header.is_empty() {
            return Err(ConfigValidationError::EmptyConnectionHeader);
        }

        Ok(GatewayConfig {
            endpoint: url.to_string(),
            connection_header: connection_header.to_string(),
            connection_string: connection_string.to_string(),
        })
    }
}

/// Validated gateway settings
#[derive(Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub endpoint: String,
    pub connection_header: String,
    pub connection_string: String,
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("endpoint", &self.endpoint)
            .field("connection_header", &self.connection_header)
            .field("connection_string", &"<redacted>")
            .finish()
    }
}

/// Raw catalogue configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogueConfig {
    /// Catalogue TOML file replacing the built-in one
    pub path: Option<PathBuf>,
}

/// Raw verifier configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileVerifyConfig {
    /// Expected active template count (defaults to the catalogue size)
    pub expected_active: Option<u64>,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub gateway: FileGatewayConfig,
    pub catalogue: FileCatalogueConfig,
    pub verify: FileVerifyConfig,
    pub output: FileOutputConfig,
}
