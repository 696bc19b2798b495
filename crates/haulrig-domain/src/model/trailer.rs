//! Rigid trailer type definitions

use serde::{Deserialize, Serialize};

/// How a trailer couples to the towing truck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionType {
    Gooseneck,
    Towbar,
    JeepDolly,
    /// Any connection string the engine does not recognize
    #[serde(other)]
    Other,
}

impl ConnectionType {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionType::Gooseneck => "gooseneck",
            ConnectionType::Towbar => "towbar",
            ConnectionType::JeepDolly => "jeep/dolly",
            ConnectionType::Other => "other",
        }
    }
}

impl std::fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Trailer body type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrailerType {
    Flat,
    SemiLow,
    Lowbed,
    PlatformModular,
}

/// Tire specification, e.g. "385/65R22.5"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TireSpec {
    pub width_mm: f64,
    pub aspect_ratio: f64,
    pub rim_size_inch: f64,
    pub label: String,
}

/// Rigid trailer
///
/// Connection-specific fields are only meaningful for the matching
/// `connection`; the others are ignored even when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailerSpec {
    pub id: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub family: String,
    #[serde(default)]
    pub model: String,
    #[serde(rename = "type")]
    pub trailer_type: TrailerType,
    pub connection: ConnectionType,
    pub axles: u32,
    pub width_m: f64,
    pub length_closed_m: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_m: Option<f64>,
    pub deck_height_m: f64,
    #[serde(default)]
    pub axle_spacing_m: f64,
    pub payload_t: f64,
    #[serde(default)]
    pub tare_t: f64,

    // gooseneck
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kingpin_height_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swing_radius_m: Option<f64>,

    // towbar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub towbar_length_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eye_height_m: Option<f64>,

    // jeep/dolly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jeep_axles: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jeep_length_m: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tires: Option<TireSpec>,
}

impl TrailerSpec {
    /// Display name: manufacturer and model
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.manufacturer, self.model);
        let name = name.trim();
        if name.is_empty() {
            self.id.clone()
        } else {
            name.to_string()
        }
    }

    /// Jeep axles, only when the trailer is actually coupled through a jeep/dolly
    pub fn active_jeep_axles(&self) -> u32 {
        match self.connection {
            ConnectionType::JeepDolly => self.jeep_axles.unwrap_or(0),
            _ => 0,
        }
    }

    /// Own axles plus any active jeep axles
    pub fn total_axles(&self) -> u32 {
        self.axles.saturating_add(self.active_jeep_axles())
    }
}
