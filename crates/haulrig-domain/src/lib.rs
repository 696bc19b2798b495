//! Heavy-haul rig domain: cargo, trailers, trucks, and the compatibility
//! and load-distribution services that work on them.

pub mod model;
pub mod repository;
pub mod service;

#[cfg(test)]
mod test_support;

pub use model::*;
pub use repository::CatalogRepository;
