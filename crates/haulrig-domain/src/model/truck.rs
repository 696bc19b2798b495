//! Truck (tractor) type definitions

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::trailer::TireSpec;

/// Wheel formula such as "6x4": total wheel positions x driven wheel positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AxleConfig {
    pub total_wheels: u32,
    pub driven_wheels: u32,
}

impl AxleConfig {
    pub fn new(total_wheels: u32, driven_wheels: u32) -> Self {
        Self {
            total_wheels,
            driven_wheels,
        }
    }

    /// Axles implied by the wheel formula (two wheel positions per axle)
    pub fn axle_count(&self) -> u32 {
        self.total_wheels / 2
    }
}

impl FromStr for AxleConfig {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (total, driven) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("invalid axle config '{}': expected <total>x<driven>", s))?;
        let total_wheels = total
            .trim()
            .parse()
            .map_err(|_| format!("invalid axle config '{}': bad wheel count", s))?;
        let driven_wheels = driven
            .trim()
            .parse()
            .map_err(|_| format!("invalid axle config '{}': bad driven count", s))?;
        Ok(Self::new(total_wheels, driven_wheels))
    }
}

impl TryFrom<String> for AxleConfig {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AxleConfig> for String {
    fn from(config: AxleConfig) -> Self {
        config.to_string()
    }
}

impl std::fmt::Display for AxleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.total_wheels, self.driven_wheels)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CabType {
    Day,
    Sleeper,
}

/// Truck specification
///
/// The extended fields (axle layout, kingpin, counterweight, overall
/// dimensions) are only read by the center-of-gravity calculator and the
/// truck validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruckSpec {
    pub id: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truck_name: Option<String>,
    pub axle_config: AxleConfig,
    pub wheelbase_m: f64,
    pub tare_t: f64,
    /// Gross train weight
    pub max_gtw_t: f64,
    #[serde(default)]
    pub engine_power_hp: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cab_type: Option<CabType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_axles: Option<u32>,
    /// n-1 distances between consecutive axles (m)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axle_spacings: Option<Vec<f64>>,
    /// Static weight on each axle (t)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axle_weights: Option<Vec<f64>>,

    #[serde(default)]
    pub has_kingpin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kingpin_height_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kingpin_offset_m: Option<f64>,

    #[serde(default)]
    pub has_counterweight: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterweight_mass_t: Option<f64>,
    /// Distance of the counterweight from the rear end (m)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterweight_position_m: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_length_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_width_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chassis_height_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cab_height_m: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_tires: Option<TireSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rear_tires: Option<TireSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TruckSpec {
    pub fn display_name(&self) -> String {
        let parts = [
            self.truck_name.as_deref().unwrap_or(""),
            self.manufacturer.as_str(),
            self.model.as_str(),
        ];
        let name = parts
            .iter()
            .filter(|p| !p.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        if name.is_empty() {
            self.id.clone()
        } else {
            name
        }
    }

    /// Counterweight mass when the truck carries one
    pub fn active_counterweight_t(&self) -> Option<f64> {
        if self.has_counterweight {
            self.counterweight_mass_t
        } else {
            None
        }
    }
}
