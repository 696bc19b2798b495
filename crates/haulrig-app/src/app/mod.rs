//! Application use cases

pub mod match_service;
pub mod totals_service;
pub mod truck_service;
pub mod validation_service;

pub use match_service::{
    build_distribution, collect_candidates, find_matches_for_load, MatchOptions, MatchReport,
    RankedMatch, RigPairing,
};
pub use totals_service::{build_totals, BuildSelection, BuildTotals, ModularSummary};
pub use truck_service::{rig_offset, truck_profile, TruckProfile};
pub use validation_service::{
    validate_catalog, validate_entry, EntryKind, Finding, ValidationReport,
};
