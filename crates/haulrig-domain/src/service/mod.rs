//! Domain services

pub mod axle_distribution;
pub mod build_totals;
pub mod center_of_gravity;
pub mod compatibility;
pub mod connection_geometry;
pub mod load_normalizer;
pub mod ranking;
pub mod truck_config;
pub mod validation;

pub use axle_distribution::{AxleLoadDistribution, NominalShare, RandomizedShare};
pub use build_totals::{
    load_totals, trailer_totals, truck_totals, LoadBuildTotals, TrailerBuildTotals,
    TruckBuildTotals,
};
pub use center_of_gravity::{axle_positions, center_of_gravity};
pub use compatibility::{evaluate, find_matches, CompatibilityEvaluator};
pub use connection_geometry::trailer_offset;
pub use load_normalizer::normalize_load;
pub use ranking::rank_matches;
pub use truck_config::{resize_axles, MAX_TRUCK_AXLES};
pub use validation::{blocks_save, validate_module, validate_trailer_connection, validate_truck};
