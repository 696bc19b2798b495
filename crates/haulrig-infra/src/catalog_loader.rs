//! Catalog loader for JSON and TOML catalog files
//!
//! Load records are normalized here, once, so nothing past this point sees
//! the legacy flat shape.

use std::fs;
use std::path::Path;

use haulrig_domain::model::{
    Candidate, LoadSpec, ModularTrailer, RawLoadRecord, TrailerSpec, TruckSpec,
};
use haulrig_domain::service::normalize_load;
use haulrig_types::{CatalogError, Error, Result};
use serde::Deserialize;
use tracing::{debug, info};

/// On-disk catalog layout
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    trailers: Vec<TrailerSpec>,
    #[serde(default)]
    modular_trailers: Vec<ModularTrailer>,
    #[serde(default)]
    trucks: Vec<TruckSpec>,
    #[serde(default)]
    loads: Vec<RawLoadRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => Ok(CatalogFormat::Json),
            Some("toml") => Ok(CatalogFormat::Toml),
            _ => Err(CatalogError::UnsupportedFormat(path.display().to_string()).into()),
        }
    }
}

/// Catalog contents with loads in canonical shape
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub trailers: Vec<TrailerSpec>,
    pub modular_trailers: Vec<ModularTrailer>,
    pub trucks: Vec<TruckSpec>,
    pub loads: Vec<LoadSpec>,
}

impl Catalog {
    /// Load a catalog file, format chosen by extension
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }
        let format = CatalogFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;
        let catalog = Self::load_from_str(&content, format)?;
        info!(
            path = %path.display(),
            trailers = catalog.trailers.len(),
            modular = catalog.modular_trailers.len(),
            trucks = catalog.trucks.len(),
            loads = catalog.loads.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse catalog content
    pub fn load_from_str(content: &str, format: CatalogFormat) -> Result<Self> {
        let file: CatalogFile = match format {
            CatalogFormat::Json => serde_json::from_str(content).map_err(|e| {
                CatalogError::Parse(format!("Failed to parse catalog JSON: {}", e))
            })?,
            CatalogFormat::Toml => toml::from_str(content).map_err(|e| {
                CatalogError::Parse(format!("Failed to parse catalog TOML: {}", e))
            })?,
        };

        let loads = file
            .loads
            .into_iter()
            .map(|raw| {
                if raw.category.is_none() || raw.dims.is_none() || raw.cg.is_none() {
                    debug!(load = %raw.id, "normalizing legacy load record");
                }
                normalize_load(raw)
            })
            .collect();

        Ok(Self {
            trailers: file.trailers,
            modular_trailers: file.modular_trailers,
            trucks: file.trucks,
            loads,
        })
    }

    /// All trailers as candidates: rigid ones first, then non-empty modular ones
    pub fn candidates(&self) -> Vec<Candidate> {
        self.trailers
            .iter()
            .cloned()
            .map(Candidate::Rigid)
            .chain(
                self.modular_trailers
                    .iter()
                    .filter(|m| !m.modules.is_empty())
                    .cloned()
                    .map(Candidate::Modular),
            )
            .collect()
    }

    pub fn get_load(&self, id: &str) -> Option<&LoadSpec> {
        self.loads.iter().find(|l| l.id == id)
    }

    pub fn get_truck(&self, id: &str) -> Option<&TruckSpec> {
        self.trucks.iter().find(|t| t.id == id)
    }

    pub fn get_trailer(&self, id: &str) -> Option<&TrailerSpec> {
        self.trailers.iter().find(|t| t.id == id)
    }

    pub fn get_modular_trailer(&self, id: &str) -> Option<&ModularTrailer> {
        self.modular_trailers.iter().find(|m| m.id == id)
    }
}
