//! Totals Service - aggregate figures over a selection of catalog entries

use haulrig_domain::model::ModularTotals;
use haulrig_domain::repository::CatalogRepository;
use haulrig_domain::service::{
    load_totals, trailer_totals, truck_totals, LoadBuildTotals, TrailerBuildTotals,
    TruckBuildTotals,
};
use haulrig_types::{CatalogError, Result};
use serde::Serialize;

/// Ids picked for a build; an empty list means "everything of that kind"
#[derive(Debug, Clone, Default)]
pub struct BuildSelection {
    pub trailer_ids: Vec<String>,
    pub modular_ids: Vec<String>,
    pub truck_ids: Vec<String>,
    pub load_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModularSummary {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub totals: ModularTotals,
}

/// Aggregates over the selected entries
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildTotals {
    pub trailers: TrailerBuildTotals,
    pub trucks: TruckBuildTotals,
    pub loads: LoadBuildTotals,
    pub modular: Vec<ModularSummary>,
}

/// Pick entries by id in the requested order, or keep all when no ids are given
fn select<T: Clone>(
    all: Vec<T>,
    ids: &[String],
    kind: &'static str,
    id_of: impl Fn(&T) -> &str,
) -> Result<Vec<T>> {
    if ids.is_empty() {
        return Ok(all);
    }
    ids.iter()
        .map(|id| {
            all.iter()
                .find(|item| id_of(item) == id)
                .cloned()
                .ok_or_else(|| {
                    CatalogError::NotFound {
                        kind,
                        id: id.clone(),
                    }
                    .into()
                })
        })
        .collect()
}

/// Compute totals for the selected (or all) catalog entries
pub fn build_totals<R: CatalogRepository + ?Sized>(
    repo: &R,
    selection: &BuildSelection,
) -> Result<BuildTotals> {
    let trailers = select(repo.find_trailers()?, &selection.trailer_ids, "Trailer", |t| {
        t.id.as_str()
    })?;
    let trucks = select(repo.find_trucks()?, &selection.truck_ids, "Truck", |t| {
        t.id.as_str()
    })?;
    let loads = select(repo.find_loads()?, &selection.load_ids, "Load", |l| {
        l.id.as_str()
    })?;
    let modular = select(
        repo.find_modular_trailers()?,
        &selection.modular_ids,
        "Modular trailer",
        |m| m.id.as_str(),
    )?;

    Ok(BuildTotals {
        trailers: trailer_totals(&trailers),
        trucks: truck_totals(&trucks),
        loads: load_totals(&loads),
        modular: modular
            .iter()
            .map(|m| ModularSummary {
                id: m.id.clone(),
                name: m.name.clone(),
                totals: m.totals(),
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use haulrig_domain::model::ModuleType;
    use haulrig_infra::persistence::FileCatalogRepository;
    use haulrig_types::Error;
    use std::fs;
    use tempfile::tempdir;

    const CATALOG: &str = r#"{
        "trailers": [
            {"id": "a", "type": "flat", "connection": "towbar", "axles": 2,
             "width_m": 2.55, "length_closed_m": 8.0, "deck_height_m": 1.1,
             "payload_t": 18.0, "towbar_length_m": 3.5},
            {"id": "b", "type": "lowbed", "connection": "gooseneck", "axles": 3,
             "width_m": 3.0, "length_closed_m": 13.0, "deck_height_m": 0.9,
             "payload_t": 40.0}
        ],
        "modular_trailers": [
            {"id": "thp", "name": "THP", "modules": [
                {"id": "n", "type": "gooseneck", "length": 4.0, "width": 3.0,
                 "height": 1.1, "tare": 5.0, "payloadCapacity": 0.0},
                {"id": "b1", "type": "axle_bogie", "length": 6.0, "width": 3.0,
                 "height": 1.2, "tare": 12.0, "payloadCapacity": 60.0, "axleCount": 4},
                {"id": "b2", "type": "axle_bogie", "length": 6.0, "width": 3.0,
                 "height": 1.2, "tare": 12.0, "payloadCapacity": 60.0, "axleCount": 4}
            ]}
        ],
        "trucks": [
            {"id": "t1", "axle_config": "6x4", "wheelbase_m": 3.8, "tare_t": 10.0,
             "max_gtw_t": 100.0, "engine_power_hp": 600},
            {"id": "t2", "axle_config": "8x4", "wheelbase_m": 4.2, "tare_t": 13.0,
             "max_gtw_t": 180.0, "engine_power_hp": 750}
        ],
        "loads": [
            {"id": "l1", "category": "box", "weight": 10.0,
             "dims": {"length": 4.0, "width": 2.0, "height": 2.0},
             "cg": {"chainage": 2.0, "offset": 0.0}},
            {"id": "l2", "category": "box", "weight": 30.0,
             "dims": {"length": 6.0, "width": 2.0, "height": 2.0},
             "cg": {"chainage": 3.0, "offset": 0.0}}
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
    fn test_totals_over_everything() {
        let (_dir, repo) = repo();
        let totals = build_totals(&repo, &BuildSelection::default()).unwrap();

        assert_eq!(totals.trailers.total_axles, 5);
        assert!((totals.trailers.total_length - 24.5).abs() < 1e-9);
        assert_eq!(totals.trucks.total_power_hp, 1350.0);
        assert_eq!(totals.trucks.max_gtw, 180.0);
        assert_eq!(totals.loads.total_weight, 40.0);
        assert_eq!(totals.loads.average_cg, 2.75);

        let thp = &totals.modular[0];
        assert_eq!(thp.totals.total_axles, 8);
        assert_eq!(thp.totals.module_counts[&ModuleType::AxleBogie], 2);
    }

    #[test]
    fn test_selection_keeps_requested_order() {
        let (_dir, repo) = repo();
        let selection = BuildSelection {
            truck_ids: vec!["t2".to_string()],
            load_ids: vec!["l1".to_string()],
            ..BuildSelection::default()
        };
        let totals = build_totals(&repo, &selection).unwrap();
        assert_eq!(totals.trucks.total_tare, 13.0);
        assert_eq!(totals.loads.average_cg, 2.0);
    }

    #[test]
    fn test_unknown_selection() {
        let (_dir, repo) = repo();
        let selection = BuildSelection {
            load_ids: vec!["nope".to_string()],
            ..BuildSelection::default()
        };
        let err = build_totals(&repo, &selection).unwrap_err();
        assert!(matches!(
            err,
            Error::Catalog(CatalogError::NotFound { kind: "Load", .. })
        ));
    }
}
