//! Shared bootstrap for the seed-questions and verify-questions binaries
//!
//! Wires together all layers using dependency injection.

use anyhow::{Context, Result};
use questionnaire_domain::Catalogue;
use questionnaire_infrastructure::{
    CatalogueLoader, ConfigLoader, FileConfig, HttpSqlGateway, SqlQuestionStore,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Store used by both binaries
pub type Store = SqlQuestionStore<HttpSqlGateway>;

/// Initialize logging based on verbosity level.
///
/// Logs go to stderr; stdout carries the transcript.
pub fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Load merged configuration and apply output settings
pub fn load_config(config_path: Option<&Path>) -> Result<FileConfig> {
    let config = ConfigLoader::load(config_path).context("Failed to load configuration")?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

/// Print configuration sources, highest priority first
pub fn print_config_sources(config_path: Option<&Path>) {
    println!("Configuration sources (in priority order):");
    for source in ConfigLoader::sources(config_path) {
        let mark = if source.found { "FOUND" } else { "     " };
        println!("  [{}] {:8} {}", mark, format!("{}:", source.label), source.location);
    }
    println!("  [     ] {:8} built-in defaults", "Default:");
}

/// Catalogue from `catalogue.path`, or the built-in one
pub fn load_catalogue(config: &FileConfig) -> Result<Catalogue> {
    let catalogue = CatalogueLoader::load(config.catalogue.path.as_deref())
        .context("Failed to load question catalogue")?;
    info!("Catalogue has {} questions", catalogue.len());
    Ok(catalogue)
}

/// Build the gateway and store from validated configuration
pub fn connect(config: &FileConfig) -> Result<Arc<Store>> {
    let gateway_config = config
        .gateway
        .validate()
        .context("Invalid gateway configuration")?;
    let gateway = HttpSqlGateway::new(&gateway_config).context("Failed to create SQL gateway")?;
    info!("Using SQL gateway at {}", gateway.endpoint());

    Ok(Arc::new(SqlQuestionStore::new(Arc::new(gateway))))
}
