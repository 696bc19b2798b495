//! Infrastructure layer - catalog loaders and file-backed repositories

pub mod catalog_loader;
pub mod persistence;

pub use catalog_loader::{Catalog, CatalogFormat};
