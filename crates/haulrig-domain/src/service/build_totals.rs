//! Aggregate figures over an in-progress build selection

use serde::Serialize;

use crate::model::{ConnectionType, LoadSpec, TrailerSpec, TruckSpec};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailerBuildTotals {
    pub total_length: f64,
    pub total_axles: u32,
    pub total_payload: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TruckBuildTotals {
    pub total_power_hp: f64,
    pub total_tare: f64,
    pub max_gtw: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBuildTotals {
    pub total_weight: f64,
    /// Weight-averaged CG chainage, rounded to 2 decimals
    pub average_cg: f64,
}

/// Trailer length including a towbar or jeep/dolly in front of it
pub fn coupled_length(trailer: &TrailerSpec) -> f64 {
    let extension = match trailer.connection {
        ConnectionType::Towbar => trailer.towbar_length_m.unwrap_or(0.0),
        ConnectionType::JeepDolly => trailer.jeep_length_m.unwrap_or(0.0),
        _ => 0.0,
    };
    trailer.length_closed_m + extension
}

pub fn trailer_totals(trailers: &[TrailerSpec]) -> TrailerBuildTotals {
    trailers
        .iter()
        .fold(TrailerBuildTotals::default(), |mut totals, trailer| {
            totals.total_length += coupled_length(trailer);
            totals.total_axles += trailer.total_axles();
            totals.total_payload += trailer.payload_t;
            totals
        })
}

pub fn truck_totals(trucks: &[TruckSpec]) -> TruckBuildTotals {
    TruckBuildTotals {
        total_power_hp: trucks.iter().map(|t| t.engine_power_hp).sum(),
        total_tare: trucks.iter().map(|t| t.tare_t).sum(),
        max_gtw: trucks.iter().map(|t| t.max_gtw_t).reduce(f64::max).unwrap_or(0.0),
    }
}

pub fn load_totals(loads: &[LoadSpec]) -> LoadBuildTotals {
    let total_weight: f64 = loads.iter().map(|l| l.weight).sum();
    let weighted_cg: f64 = loads.iter().map(|l| l.weight * l.cg.chainage).sum();
    let average_cg = if total_weight > 0.0 {
        (weighted_cg / total_weight * 100.0).round() / 100.0
    } else {
        0.0
    };
    LoadBuildTotals {
        total_weight,
        average_cg,
    }
}
