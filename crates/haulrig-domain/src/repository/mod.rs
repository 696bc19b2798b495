//! Repository trait definitions for catalog data

use haulrig_types::Error;

use crate::model::{LoadSpec, ModularTrailer, TrailerSpec, TruckSpec};

/// Read access to a catalog of trailers, trucks and loads
///
/// Loads come back already normalized.
pub trait CatalogRepository {
    fn find_trailers(&self) -> Result<Vec<TrailerSpec>, Error>;

    fn find_modular_trailers(&self) -> Result<Vec<ModularTrailer>, Error>;

    fn find_trucks(&self) -> Result<Vec<TruckSpec>, Error>;

    fn find_loads(&self) -> Result<Vec<LoadSpec>, Error>;

    /// Find a load by id
    fn find_load(&self, id: &str) -> Result<Option<LoadSpec>, Error> {
        Ok(self.find_loads()?.into_iter().find(|l| l.id == id))
    }

    /// Find a truck by id
    fn find_truck(&self, id: &str) -> Result<Option<TruckSpec>, Error> {
        Ok(self.find_trucks()?.into_iter().find(|t| t.id == id))
    }

    /// Find a rigid trailer by id
    fn find_trailer(&self, id: &str) -> Result<Option<TrailerSpec>, Error> {
        Ok(self.find_trailers()?.into_iter().find(|t| t.id == id))
    }
}
