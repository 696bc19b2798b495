//! Truck configuration rules
//!
//! Unlike the trailer and module rules these accumulate: every triggered
//! check adds its own warning. No rule here produces an error.

use crate::model::{TruckSpec, ValidationMessage};

pub const TARE_TOLERANCE_T: f64 = 0.5;
pub const MAX_KINGPIN_HEIGHT_M: f64 = 1.5;
pub const MAX_FRONT_AXLE_T: f64 = 7.5;
pub const MAX_REAR_AXLE_T: f64 = 11.5;
pub const MAX_OVERALL_WIDTH_M: f64 = 2.55;
pub const MAX_TOTAL_HEIGHT_M: f64 = 4.0;

/// Chassis height assumed when none is recorded
pub const DEFAULT_CHASSIS_HEIGHT_M: f64 = 1.0;
/// Cab height assumed when none is recorded
pub const DEFAULT_CAB_HEIGHT_M: f64 = 3.2;

pub fn validate_truck(truck: &TruckSpec) -> Vec<ValidationMessage> {
    let mut messages = Vec::new();
    let axle_weights = truck.axle_weights.as_deref().unwrap_or(&[]);

    if !axle_weights.is_empty() {
        let total = axle_weights.iter().sum::<f64>() + truck.active_counterweight_t().unwrap_or(0.0);
        if (total - truck.tare_t).abs() > TARE_TOLERANCE_T {
            messages.push(ValidationMessage::warning(format!(
                "Total axle weights ({:.1}t) don't match tare weight ({}t)",
                total, truck.tare_t
            )));
        }
    }

    // kingpin height is only checked on trucks fitted with a kingpin
    if truck.has_kingpin {
        if let Some(height) = truck.kingpin_height_m.filter(|h| *h > MAX_KINGPIN_HEIGHT_M) {
            messages.push(ValidationMessage::warning(format!(
                "Kingpin height ({}m) exceeds 1.5m maximum",
                height
            )));
        }
    }

    if let Some(front) = axle_weights.first().filter(|w| **w > MAX_FRONT_AXLE_T) {
        messages.push(ValidationMessage::warning(format!(
            "Front axle load ({}t) exceeds typical 7.5t limit",
            front
        )));
    }
    for (i, weight) in axle_weights.iter().enumerate().skip(1) {
        if *weight > MAX_REAR_AXLE_T {
            messages.push(ValidationMessage::warning(format!(
                "Axle {} load ({}t) exceeds typical 11.5t limit",
                i + 1,
                weight
            )));
        }
    }

    if let Some(width) = truck.overall_width_m.filter(|w| *w > MAX_OVERALL_WIDTH_M) {
        messages.push(ValidationMessage::warning(format!(
            "Overall width ({}m) exceeds standard 2.55m limit",
            width
        )));
    }

    let total_height = truck.chassis_height_m.unwrap_or(DEFAULT_CHASSIS_HEIGHT_M)
        + truck.cab_height_m.unwrap_or(DEFAULT_CAB_HEIGHT_M);
    if total_height > MAX_TOTAL_HEIGHT_M {
        messages.push(ValidationMessage::warning(format!(
            "Total height ({:.2}m) exceeds 4.0m standard limit",
            total_height
        )));
    }

    messages
}
