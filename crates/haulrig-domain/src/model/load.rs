//! Cargo (load) type definitions

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Cargo type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadCategory {
    Container,
    /// Generic cargo, used when a legacy record carries no type
    #[default]
    Box,
    #[serde(rename = "e-room")]
    ERoom,
    Machinery,
    Tank,
    Drum,
    CableSpool,
    Blade,
    TowerSection,
    Nacelle,
    Vehicle,
    Excavator,
    MiningTruck,
    Custom,
}

impl LoadCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadCategory::Container => "container",
            LoadCategory::Box => "box",
            LoadCategory::ERoom => "e-room",
            LoadCategory::Machinery => "machinery",
            LoadCategory::Tank => "tank",
            LoadCategory::Drum => "drum",
            LoadCategory::CableSpool => "cable_spool",
            LoadCategory::Blade => "blade",
            LoadCategory::TowerSection => "tower_section",
            LoadCategory::Nacelle => "nacelle",
            LoadCategory::Vehicle => "vehicle",
            LoadCategory::Excavator => "excavator",
            LoadCategory::MiningTruck => "mining_truck",
            LoadCategory::Custom => "custom",
        }
    }

    /// Map a free-form legacy `load_type` string. Unknown strings become `Custom`.
    pub fn from_legacy(load_type: &str) -> Self {
        load_type.parse().unwrap_or(LoadCategory::Custom)
    }
}

impl FromStr for LoadCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let category = match s.trim() {
            "container" => LoadCategory::Container,
            "box" => LoadCategory::Box,
            "e-room" => LoadCategory::ERoom,
            "machinery" => LoadCategory::Machinery,
            "tank" => LoadCategory::Tank,
            "drum" => LoadCategory::Drum,
            "cable_spool" => LoadCategory::CableSpool,
            "blade" => LoadCategory::Blade,
            "tower_section" => LoadCategory::TowerSection,
            "nacelle" => LoadCategory::Nacelle,
            "vehicle" => LoadCategory::Vehicle,
            "excavator" => LoadCategory::Excavator,
            "mining_truck" => LoadCategory::MiningTruck,
            "custom" => LoadCategory::Custom,
            other => return Err(format!("unknown load category: {}", other)),
        };
        Ok(category)
    }
}

impl std::fmt::Display for LoadCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bounding dimensions in meters
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

/// Center of gravity of a load
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadCg {
    /// Longitudinal position from the load's front edge (m)
    pub chainage: f64,
    /// Lateral position from centerline (m)
    pub offset: f64,
}

/// Normalized outline point (0..1 on both axes)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapePoint {
    pub x: f64,
    pub y: f64,
}

/// Flat fields of the older on-disk load shape
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyLoadFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo_axle_weights: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo_length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo_cg_chainage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo_cg_offset: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_securing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permitted_envelope_ref: Option<String>,
}

impl LegacyLoadFields {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A load record as found on disk, in either shape (or both at once)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLoadRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<LoadCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dims: Option<Dimensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cg: Option<LoadCg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub securing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub envelope_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape_svg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape_points: Option<Vec<ShapePoint>>,
    #[serde(flatten)]
    pub legacy: LegacyLoadFields,
}

/// Canonical cargo item
///
/// Produced once at ingestion by `service::normalize_load`; every core
/// service works on this shape only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadSpec {
    pub id: String,
    pub category: LoadCategory,
    /// Static weight in tonnes
    pub weight: f64,
    pub dims: Dimensions,
    pub cg: LoadCg,
    /// Securing method identifier (chains, straps, ...)
    pub securing: String,
    /// Braking/cornering multiplier. Carried through, never applied by the core.
    pub dynamic_factor: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub envelope_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape_svg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape_points: Option<Vec<ShapePoint>>,
    /// Legacy fields that arrived with the record, kept untouched
    #[serde(flatten)]
    pub legacy: LegacyLoadFields,
}

impl From<LoadSpec> for RawLoadRecord {
    fn from(load: LoadSpec) -> Self {
        RawLoadRecord {
            id: load.id,
            category: Some(load.category),
            weight: Some(load.weight),
            dims: Some(load.dims),
            cg: Some(load.cg),
            securing: Some(load.securing),
            dynamic_factor: Some(load.dynamic_factor),
            envelope_ref: load.envelope_ref,
            notes: load.notes,
            shape_svg: load.shape_svg,
            shape_points: load.shape_points,
            legacy: load.legacy,
        }
    }
}
