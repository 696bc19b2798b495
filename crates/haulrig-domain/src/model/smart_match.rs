//! Evaluation result for one candidate trailer

use serde::Serialize;

use super::candidate::Candidate;

/// Derived, transient evaluation of one candidate against one load.
/// Built fresh on every evaluation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartMatch {
    pub candidate: Candidate,
    pub total_axles: u32,
    /// Estimated load per axle (t), front to back
    pub axle_loads: Vec<f64>,
    pub axle_violations: Vec<bool>,
    pub height_violation: bool,
    pub length_violation: bool,
    pub width_violation: bool,
    pub deck_height: f64,
    pub payload_capacity: f64,
    pub can_carry_weight: bool,
    pub can_carry: bool,
    /// Spare payload fraction, 0 when the weight cannot be carried
    pub margin: f64,
}

impl SmartMatch {
    /// Display score in percent, capped at 100
    pub fn score(&self) -> u8 {
        (self.margin * 100.0).round().clamp(0.0, 100.0) as u8
    }

    pub fn has_axle_violation(&self) -> bool {
        self.axle_violations.iter().any(|v| *v)
    }

    pub fn max_axle_load(&self) -> Option<f64> {
        self.axle_loads.iter().copied().reduce(f64::max)
    }
}
