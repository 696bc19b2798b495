//! Repository adapters for persistence layer

use std::path::PathBuf;

use haulrig_infra::persistence::FileCatalogRepository;
use haulrig_types::{ConfigError, Result};
use tracing::debug;

use crate::config::Config;

/// Open the catalog repository, preferring an explicit path over the config
pub fn open_catalog_repo(config: &Config, path: Option<PathBuf>) -> Result<FileCatalogRepository> {
    let path = path
        .or_else(|| config.catalog_path.clone())
        .ok_or_else(|| {
            ConfigError::ParseError(
                "no catalog given: pass --catalog or set catalog_path in config".to_string(),
            )
        })?;
    debug!(path = %path.display(), "opening catalog");
    FileCatalogRepository::new(path)
}
