//! Truck Service - axle layout, CG and coupling figures for one truck

use haulrig_domain::model::TruckSpec;
use haulrig_domain::repository::CatalogRepository;
use haulrig_domain::service::{
    axle_positions, center_of_gravity, resize_axles, trailer_offset, MAX_TRUCK_AXLES,
};
use haulrig_types::{CatalogError, Error, Result};
use serde::Serialize;
use tracing::info;

use super::match_service::RigPairing;

/// Computed layout of a truck
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TruckProfile {
    pub truck_id: String,
    pub name: String,
    pub axle_config: String,
    /// Axle chainages from the front bumper (m)
    pub axle_positions: Vec<f64>,
    pub axle_weights: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterweight_t: Option<f64>,
    /// Center of gravity from the front bumper (m)
    pub center_of_gravity: f64,
}

impl TruckProfile {
    pub fn from_truck(truck: &TruckSpec) -> Self {
        Self {
            truck_id: truck.id.clone(),
            name: truck.display_name(),
            axle_config: truck.axle_config.to_string(),
            axle_positions: axle_positions(truck),
            axle_weights: truck.axle_weights.clone().unwrap_or_default(),
            counterweight_t: truck.active_counterweight_t(),
            center_of_gravity: center_of_gravity(truck),
        }
    }
}

fn require_truck<R: CatalogRepository + ?Sized>(repo: &R, truck_id: &str) -> Result<TruckSpec> {
    repo.find_truck(truck_id)?.ok_or_else(|| {
        CatalogError::NotFound {
            kind: "Truck",
            id: truck_id.to_string(),
        }
        .into()
    })
}

/// Profile a catalog truck, optionally after changing its axle count
pub fn truck_profile<R: CatalogRepository + ?Sized>(
    repo: &R,
    truck_id: &str,
    resize_to: Option<u32>,
) -> Result<TruckProfile> {
    let truck = require_truck(repo, truck_id)?;
    let truck = match resize_to {
        Some(0) => {
            return Err(Error::InvalidArgument(
                "axle count must be at least 1".to_string(),
            ))
        }
        Some(n) if n > MAX_TRUCK_AXLES => {
            return Err(Error::InvalidArgument(format!(
                "axle count must be at most {}, got {}",
                MAX_TRUCK_AXLES, n
            )))
        }
        Some(n) => {
            info!(truck = %truck.id, axles = n, "resizing axle layout");
            resize_axles(&truck, n)
        }
        None => truck,
    };
    Ok(TruckProfile::from_truck(&truck))
}

/// Coupling offset of a rigid catalog trailer behind a catalog truck
pub fn rig_offset<R: CatalogRepository + ?Sized>(
    repo: &R,
    trailer_id: &str,
    truck_id: &str,
) -> Result<RigPairing> {
    let truck = require_truck(repo, truck_id)?;
    let trailer = repo
        .find_trailer(trailer_id)?
        .ok_or_else(|| CatalogError::NotFound {
            kind: "Trailer",
            id: trailer_id.to_string(),
        })?;
    Ok(RigPairing {
        truck_id: truck.id.clone(),
        trailer_offset_m: trailer_offset(&trailer, &truck),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use haulrig_infra::persistence::FileCatalogRepository;
    use std::fs;
    use tempfile::tempdir;

    const CATALOG: &str = r#"{
        "trailers": [
            {"id": "dolly", "type": "platform-modular", "connection": "jeep_dolly",
             "axles": 4, "width_m": 3.0, "length_closed_m": 15.0,
             "deck_height_m": 1.0, "payload_t": 60.0,
             "jeep_axles": 2, "jeep_length_m": 5.0}
        ],
        "trucks": [
            {"id": "heavy", "manufacturer": "Volvo", "model": "FH16",
             "axle_config": "6x4", "wheelbase_m": 4.0,
             "tare_t": 12.0, "max_gtw_t": 150.0,
             "axle_spacings": [3.0, 1.4], "axle_weights": [6.0, 3.0, 3.0],
             "has_counterweight": true, "counterweight_mass_t": 4.0,
             "counterweight_position_m": 1.0, "overall_length_m": 8.0}
        ]
    }"#;

    fn repo() -> (tempfile::TempDir, FileCatalogRepository) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, CATALOG).unwrap();
        let repo = FileCatalogRepository::new(path).unwrap();
        (dir, repo)
    }

    #[test]
    fn test_profile_with_counterweight() {
        let (_dir, repo) = repo();
        let profile = truck_profile(&repo, "heavy", None).unwrap();
        for (got, want) in profile.axle_positions.iter().zip([1.5, 4.5, 5.9]) {
            assert!((got - want).abs() < 1e-9);
        }
        assert_eq!(profile.counterweight_t, Some(4.0));
        // (6*1.5 + 3*4.5 + 3*5.9 + 4*7.0) / 16
        let expected = (9.0 + 13.5 + 17.7 + 28.0) / 16.0;
        assert!((profile.center_of_gravity - expected).abs() < 1e-9);
        assert_eq!(profile.name, "Volvo FH16");
    }

    #[test]
    fn test_profile_resized() {
        let (_dir, repo) = repo();
        let profile = truck_profile(&repo, "heavy", Some(4)).unwrap();
        assert_eq!(profile.axle_weights, vec![6.0, 3.0, 3.0, 10.0]);
        assert_eq!(profile.axle_positions.len(), 4);
        assert_eq!(profile.axle_config, "8x4");
    }

    #[test]
    fn test_profile_rejects_zero_axles() {
        let (_dir, repo) = repo();
        let err = truck_profile(&repo, "heavy", Some(0)).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_profile_rejects_excessive_axles() {
        let (_dir, repo) = repo();
        let err = truck_profile(&repo, "heavy", Some(3_000_000_000)).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(ref msg) if msg.contains("at most 20")));
        assert!(truck_profile(&repo, "heavy", Some(MAX_TRUCK_AXLES)).is_ok());
    }

    #[test]
    fn test_rig_offset_jeep() {
        let (_dir, repo) = repo();
        let pairing = rig_offset(&repo, "dolly", "heavy").unwrap();
        assert!((pairing.trailer_offset_m - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_rig_offset_unknown_trailer() {
        let (_dir, repo) = repo();
        let err = rig_offset(&repo, "ghost", "heavy").unwrap_err();
        assert!(matches!(
            err,
            Error::Catalog(CatalogError::NotFound { kind: "Trailer", .. })
        ));
    }
}
