//! File-based implementation of CatalogRepository

use std::path::{Path, PathBuf};

use haulrig_domain::model::{LoadSpec, ModularTrailer, TrailerSpec, TruckSpec};
use haulrig_domain::repository::CatalogRepository;
use haulrig_types::Error;

use crate::catalog_loader::Catalog;

/// File-based catalog repository (JSON or TOML)
pub struct FileCatalogRepository {
    path: PathBuf,
    catalog: Catalog,
}

impl FileCatalogRepository {
    /// Open a repository from a catalog file path
    pub fn new(path: PathBuf) -> Result<Self, Error> {
        let catalog = Catalog::load_from_file(&path)?;
        Ok(Self { path, catalog })
    }

    /// Get the catalog path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Borrow the loaded catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Reload data from disk
    pub fn reload(&mut self) -> Result<(), Error> {
        self.catalog = Catalog::load_from_file(&self.path)?;
        Ok(())
    }
}

impl CatalogRepository for FileCatalogRepository {
    fn find_trailers(&self) -> Result<Vec<TrailerSpec>, Error> {
        Ok(self.catalog.trailers.clone())
    }

    fn find_modular_trailers(&self) -> Result<Vec<ModularTrailer>, Error> {
        Ok(self.catalog.modular_trailers.clone())
    }

    fn find_trucks(&self) -> Result<Vec<TruckSpec>, Error> {
        Ok(self.catalog.trucks.clone())
    }

    fn find_loads(&self) -> Result<Vec<LoadSpec>, Error> {
        Ok(self.catalog.loads.clone())
    }

    fn find_load(&self, id: &str) -> Result<Option<LoadSpec>, Error> {
        Ok(self.catalog.get_load(id).cloned())
    }

    fn find_truck(&self, id: &str) -> Result<Option<TruckSpec>, Error> {
        Ok(self.catalog.get_truck(id).cloned())
    }
}
