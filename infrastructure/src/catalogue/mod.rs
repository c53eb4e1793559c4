//! Question catalogue sources

pub mod loader;

pub use loader::{CatalogueLoadError, CatalogueLoader};
