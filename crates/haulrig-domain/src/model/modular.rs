//! Modular trailer type definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Deck height assumed when a modular trailer has no deck module
pub const DEFAULT_MODULAR_DECK_HEIGHT_M: f64 = 1.2;

/// Role of a module within a modular trailer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleType {
    Gooseneck,
    Deck,
    AxleBogie,
    Dolly,
    Extension,
    Ramp,
}

impl ModuleType {
    pub fn label(&self) -> &'static str {
        match self {
            ModuleType::Gooseneck => "Gooseneck",
            ModuleType::Deck => "Deck",
            ModuleType::AxleBogie => "Axle bogie",
            ModuleType::Dolly => "Dolly",
            ModuleType::Extension => "Extension",
            ModuleType::Ramp => "Ramp",
        }
    }
}

/// One section of a modular trailer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailerModule {
    pub id: String,
    #[serde(rename = "type")]
    pub module_type: ModuleType,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub tare: f64,
    #[serde(default)]
    pub payload_capacity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axle_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axle_spacings: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kingpin_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ramp_angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Ordered (front to back) sequence of modules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModularTrailer {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub modules: Vec<TrailerModule>,
}

/// Aggregate figures over all modules
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModularTotals {
    pub total_length: f64,
    pub total_axles: u32,
    pub total_tare: f64,
    pub total_payload: f64,
    pub module_counts: BTreeMap<ModuleType, usize>,
}

impl ModularTrailer {
    pub fn total_length(&self) -> f64 {
        self.modules.iter().map(|m| m.length).sum()
    }

    pub fn total_axles(&self) -> u32 {
        self.modules
            .iter()
            .map(|m| m.axle_count.unwrap_or(0))
            .fold(0, u32::saturating_add)
    }

    pub fn total_tare(&self) -> f64 {
        self.modules.iter().map(|m| m.tare).sum()
    }

    pub fn payload_capacity(&self) -> f64 {
        self.modules.iter().map(|m| m.payload_capacity).sum()
    }

    /// Widest module. An empty trailer has no width.
    pub fn max_width(&self) -> f64 {
        self.modules.iter().map(|m| m.width).fold(0.0, f64::max)
    }

    /// Height of the first deck module, or the default deck height
    pub fn deck_height(&self) -> f64 {
        self.modules
            .iter()
            .find(|m| m.module_type == ModuleType::Deck)
            .map(|m| m.height)
            .unwrap_or(DEFAULT_MODULAR_DECK_HEIGHT_M)
    }

    pub fn totals(&self) -> ModularTotals {
        let mut module_counts = BTreeMap::new();
        for module in &self.modules {
            *module_counts.entry(module.module_type).or_insert(0) += 1;
        }
        ModularTotals {
            total_length: self.total_length(),
            total_axles: self.total_axles(),
            total_tare: self.total_tare(),
            total_payload: self.payload_capacity(),
            module_counts,
        }
    }
}
