//! Catalogue loading
//!
//! The production catalogue is compiled into the binaries. A TOML file of the
//! same shape can replace it via `catalogue.path` in the config.

use questionnaire_domain::{Catalogue, CatalogueError, QuestionDefinition};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// The built-in catalogue
const EMBEDDED_CATALOGUE: &str = include_str!("../../catalogue/questions.toml");

/// Errors that can occur while loading a catalogue
#[derive(Error, Debug)]
pub enum CatalogueLoadError {
    #[error("Failed to read catalogue {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalogue: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] CatalogueError),
}

/// On-disk shape: a list of `[[question]]` tables
#[derive(Debug, Deserialize)]
struct CatalogueFile {
    #[serde(rename = "question", default)]
    questions: Vec<QuestionDefinition>,
}

/// Loads and validates question catalogues
pub struct CatalogueLoader;

impl CatalogueLoader {
    /// Load from `path` when given, otherwise the built-in catalogue
    pub fn load(path: Option<&Path>) -> Result<Catalogue, CatalogueLoadError> {
        match path {
            Some(p) => Self::from_path(p),
            None => Self::embedded(),
        }
    }

    pub fn embedded() -> Result<Catalogue, CatalogueLoadError> {
        Self::from_toml_str(EMBEDDED_CATALOGUE)
    }

    pub fn from_path(path: &Path) -> Result<Catalogue, CatalogueLoadError> {
        debug!("Loading catalogue from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| CatalogueLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Catalogue, CatalogueLoadError> {
        let file: CatalogueFile = toml::from_str(content)?;
        Ok(Catalogue::new(file.questions)?)
    }
}
