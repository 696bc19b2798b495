//! Match Service - rank catalog trailers for a load
//!
//! Workflow:
//! 1. Resolve the load (and optional towing truck) from the catalog
//! 2. Collect rigid and modular candidates
//! 3. Evaluate each candidate with the configured axle distribution
//! 4. Rank and attach rig pairing figures when a truck is given

use haulrig_domain::model::{Candidate, LoadSpec, SmartMatch, TruckSpec};
use haulrig_domain::repository::CatalogRepository;
use haulrig_domain::service::{
    trailer_offset, AxleLoadDistribution, CompatibilityEvaluator, NominalShare, RandomizedShare,
};
use haulrig_types::{CatalogError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{AxleDistributionKind, Config};

/// Options for a match run
#[derive(Debug, Clone, Default)]
pub struct MatchOptions {
    /// Axle load estimation strategy
    pub distribution: AxleDistributionKind,

    /// Seed for the randomized strategy
    pub seed: Option<u64>,

    /// Truck that will tow the trailer
    pub truck_id: Option<String>,

    /// Only keep candidates that can carry the load
    pub carriable_only: bool,

    /// Maximum number of results (None = all)
    pub limit: Option<usize>,
}

impl MatchOptions {
    /// Start from the configured strategy and seed
    pub fn from_config(config: &Config) -> Self {
        Self {
            distribution: config.axle_distribution,
            seed: config.seed,
            ..Self::default()
        }
    }

    pub fn with_distribution(mut self, distribution: AxleDistributionKind) -> Self {
        self.distribution = distribution;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    pub fn with_truck(mut self, truck_id: Option<String>) -> Self {
        self.truck_id = truck_id;
        self
    }

    pub fn with_carriable_only(mut self, carriable_only: bool) -> Self {
        self.carriable_only = carriable_only;
        self
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }
}

/// Truck-to-trailer pairing figures for a rigid candidate
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RigPairing {
    pub truck_id: String,
    /// Longitudinal trailer offset from the truck coupling point
    pub trailer_offset_m: f64,
}

/// One ranked entry of a match report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedMatch {
    pub rank: usize,
    pub score: u8,
    #[serde(flatten)]
    pub smart_match: SmartMatch,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rig: Option<RigPairing>,
}

/// Result of a match run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub load: LoadSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truck: Option<TruckSpec>,
    pub evaluated: usize,
    pub matches: Vec<RankedMatch>,
}

impl MatchReport {
    /// Number of candidates that can carry the load
    pub fn carriable_count(&self) -> usize {
        self.matches
            .iter()
            .filter(|m| m.smart_match.can_carry)
            .count()
    }
}

/// Build the axle load strategy for the given options
pub fn build_distribution(
    kind: AxleDistributionKind,
    seed: Option<u64>,
) -> Box<dyn AxleLoadDistribution> {
    match (kind, seed) {
        (AxleDistributionKind::Nominal, _) => Box::new(NominalShare),
        (AxleDistributionKind::Randomized, Some(seed)) => {
            Box::new(RandomizedShare::new(StdRng::seed_from_u64(seed)))
        }
        (AxleDistributionKind::Randomized, None) => Box::new(RandomizedShare::default()),
    }
}

/// Gather every candidate in catalog order: rigid trailers first, then modular builds
pub fn collect_candidates<R: CatalogRepository + ?Sized>(repo: &R) -> Result<Vec<Candidate>> {
    let mut candidates: Vec<Candidate> = repo
        .find_trailers()?
        .into_iter()
        .map(Candidate::from)
        .collect();

    for modular in repo.find_modular_trailers()? {
        if modular.modules.is_empty() {
            debug!(id = %modular.id, "skipping modular trailer without modules");
            continue;
        }
        candidates.push(Candidate::from(modular));
    }

    Ok(candidates)
}

/// Rank every catalog candidate for the load with the given id
pub fn find_matches_for_load<R: CatalogRepository + ?Sized>(
    repo: &R,
    load_id: &str,
    options: &MatchOptions,
) -> Result<MatchReport> {
    let load = repo.find_load(load_id)?.ok_or_else(|| CatalogError::NotFound {
        kind: "Load",
        id: load_id.to_string(),
    })?;

    let truck = match &options.truck_id {
        Some(id) => Some(repo.find_truck(id)?.ok_or_else(|| CatalogError::NotFound {
            kind: "Truck",
            id: id.clone(),
        })?),
        None => None,
    };

    let candidates = collect_candidates(repo)?;
    info!(
        load = %load.id,
        candidates = candidates.len(),
        strategy = %options.distribution,
        "evaluating candidates"
    );

    let mut evaluator =
        CompatibilityEvaluator::new(build_distribution(options.distribution, options.seed));
    let ranked = evaluator.find_matches(&load, &candidates);

    let matches: Vec<RankedMatch> = ranked
        .into_iter()
        .filter(|m| !options.carriable_only || m.can_carry)
        .take(options.limit.unwrap_or(usize::MAX))
        .enumerate()
        .map(|(i, smart_match)| {
            let rig = truck.as_ref().and_then(|t| rig_pairing(&smart_match.candidate, t));
            RankedMatch {
                rank: i + 1,
                score: smart_match.score(),
                smart_match,
                rig,
            }
        })
        .collect();

    debug!(kept = matches.len(), "match run finished");

    Ok(MatchReport {
        load,
        truck,
        evaluated: candidates.len(),
        matches,
    })
}

/// Pairing figures only exist for rigid trailers; modular builds carry their own coupling
fn rig_pairing(candidate: &Candidate, truck: &TruckSpec) -> Option<RigPairing> {
    match candidate {
        Candidate::Rigid(trailer) => Some(RigPairing {
            truck_id: truck.id.clone(),
            trailer_offset_m: trailer_offset(trailer, truck),
        }),
        Candidate::Modular(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haulrig_infra::{Catalog, CatalogFormat};
    use haulrig_types::Error;

    struct InMemoryRepo(Catalog);

    impl CatalogRepository for InMemoryRepo {
        fn find_trailers(&self) -> Result<Vec<haulrig_domain::model::TrailerSpec>> {
            Ok(self.0.trailers.clone())
        }

        fn find_modular_trailers(&self) -> Result<Vec<haulrig_domain::model::ModularTrailer>> {
            Ok(self.0.modular_trailers.clone())
        }

        fn find_trucks(&self) -> Result<Vec<TruckSpec>> {
            Ok(self.0.trucks.clone())
        }

        fn find_loads(&self) -> Result<Vec<LoadSpec>> {
            Ok(self.0.loads.clone())
        }
    }

    const CATALOG: &str = r#"{
        "trailers": [
            {"id": "low", "type": "lowbed", "connection": "gooseneck",
             "axles": 3, "width_m": 3.0, "length_closed_m": 14.0,
             "deck_height_m": 0.9, "payload_t": 40.0, "swing_radius_m": 2.5},
            {"id": "high", "type": "flat", "connection": "towbar",
             "axles": 2, "width_m": 2.55, "length_closed_m": 10.0,
             "deck_height_m": 1.5, "payload_t": 30.0, "towbar_length_m": 3.0},
            {"id": "small", "type": "flat", "connection": "gooseneck",
             "axles": 2, "width_m": 2.55, "length_closed_m": 8.0,
             "deck_height_m": 1.0, "payload_t": 10.0}
        ],
        "modular_trailers": [
            {"id": "spmt", "name": "SPMT", "modules": [
                {"id": "m1", "type": "axle_bogie", "length": 12.0, "width": 3.0,
                 "height": 1.2, "tare": 12.0, "payloadCapacity": 60.0, "axleCount": 4}
            ]},
            {"id": "bare", "name": "Bare", "modules": []}
        ],
        "trucks": [
            {"id": "tractor", "axle_config": "6x4", "wheelbase_m": 3.8,
             "tare_t": 10.0, "max_gtw_t": 120.0}
        ],
        "loads": [
            {"id": "transformer", "category": "machinery", "weight": 20.0,
             "dims": {"length": 9.0, "width": 2.8, "height": 3.2},
             "cg": {"chainage": 4.5, "offset": 0.0},
             "securing": "chains", "dynamicFactor": 1.2}
        ]
    }"#;

    fn repo() -> InMemoryRepo {
        InMemoryRepo(Catalog::load_from_str(CATALOG, CatalogFormat::Json).unwrap())
    }

    fn nominal() -> MatchOptions {
        MatchOptions::default().with_distribution(AxleDistributionKind::Nominal)
    }

    #[test]
    fn test_collect_candidates_skips_empty_modular() {
        let ids: Vec<String> = collect_candidates(&repo())
            .unwrap()
            .iter()
            .map(|c| c.id().to_string())
            .collect();
        assert_eq!(ids, vec!["low", "high", "small", "spmt"]);
    }

    #[test]
    fn test_ranking_order() {
        let report = find_matches_for_load(&repo(), "transformer", &nominal()).unwrap();
        assert_eq!(report.evaluated, 4);

        let ids: Vec<&str> = report
            .matches
            .iter()
            .map(|m| m.smart_match.candidate.id())
            .collect();
        // spmt and low carry (margins 0.67 and 0.5); small is under capacity, high is too tall
        assert_eq!(ids, vec!["spmt", "low", "small", "high"]);
        assert_eq!(report.matches[0].rank, 1);
        assert_eq!(report.carriable_count(), 2);
    }

    #[test]
    fn test_carriable_only_and_limit() {
        let options = nominal().with_carriable_only(true).with_limit(Some(1));
        let report = find_matches_for_load(&repo(), "transformer", &options).unwrap();
        assert_eq!(report.matches.len(), 1);
        assert!(report.matches[0].smart_match.can_carry);
    }

    #[test]
    fn test_rig_pairing_for_rigid_only() {
        let options = nominal().with_truck(Some("tractor".to_string()));
        let report = find_matches_for_load(&repo(), "transformer", &options).unwrap();

        let low = report
            .matches
            .iter()
            .find(|m| m.smart_match.candidate.id() == "low")
            .unwrap();
        let rig = low.rig.as_ref().unwrap();
        assert_eq!(rig.truck_id, "tractor");
        assert!((rig.trailer_offset_m - (3.8 - 2.5)).abs() < 1e-9);

        let spmt = report
            .matches
            .iter()
            .find(|m| m.smart_match.candidate.id() == "spmt")
            .unwrap();
        assert!(spmt.rig.is_none());
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let options = MatchOptions::default().with_seed(Some(42));
        let a = find_matches_for_load(&repo(), "transformer", &options).unwrap();
        let b = find_matches_for_load(&repo(), "transformer", &options).unwrap();
        assert_eq!(a.matches, b.matches);
    }

    #[test]
    fn test_missing_load() {
        let err = find_matches_for_load(&repo(), "nope", &nominal()).unwrap_err();
        assert!(matches!(
            err,
            Error::Catalog(CatalogError::NotFound { kind: "Load", .. })
        ));
    }

    #[test]
    fn test_missing_truck() {
        let options = nominal().with_truck(Some("ghost".to_string()));
        let err = find_matches_for_load(&repo(), "transformer", &options).unwrap_err();
        assert!(matches!(
            err,
            Error::Catalog(CatalogError::NotFound { kind: "Truck", .. })
        ));
    }
}
