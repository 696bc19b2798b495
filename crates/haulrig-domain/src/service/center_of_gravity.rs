//! Truck center-of-gravity calculation
//!
//! All positions are chainages in meters measured from the front bumper.

use tracing::debug;

use crate::model::TruckSpec;

/// Front axle position behind the front bumper
pub const FRONT_AXLE_POSITION_M: f64 = 1.5;

/// Counterweight distance from the rear end when not recorded
pub const DEFAULT_COUNTERWEIGHT_POSITION_M: f64 = 0.5;

/// Axle count used when neither `num_axles` nor the wheel formula say otherwise
const FALLBACK_AXLE_COUNT: u32 = 3;

/// Axle positions from the front bumper
///
/// Uses the recorded spacings when present, otherwise spreads the axles
/// evenly over the wheelbase.
pub fn axle_positions(truck: &TruckSpec) -> Vec<f64> {
    match truck.axle_spacings.as_deref() {
        Some(spacings) if !spacings.is_empty() => {
            let mut positions = Vec::with_capacity(spacings.len() + 1);
            let mut current = FRONT_AXLE_POSITION_M;
            positions.push(current);
            for spacing in spacings {
                current += spacing;
                positions.push(current);
            }
            positions
        }
        _ => {
            let num_axles = truck
                .num_axles
                .unwrap_or_else(|| match truck.axle_config.axle_count() {
                    0 => FALLBACK_AXLE_COUNT,
                    n => n,
                });
            let spacing = if num_axles > 2 {
                truck.wheelbase_m / (num_axles - 1) as f64
            } else {
                truck.wheelbase_m
            };
            (0..num_axles)
                .map(|i| FRONT_AXLE_POSITION_M + i as f64 * spacing)
                .collect()
        }
    }
}

/// Rough CG estimate for a truck without axle weights
pub fn estimated_center_of_gravity(wheelbase_m: f64) -> f64 {
    wheelbase_m * 0.4 + 1.2
}

/// Center of gravity (m from the front bumper)
///
/// Weight-moment average over the axles, plus the counterweight when the
/// truck carries one. Axle weights without a matching position are ignored.
pub fn center_of_gravity(truck: &TruckSpec) -> f64 {
    let weights = match truck.axle_weights.as_deref() {
        Some(w) if !w.is_empty() => w,
        _ => return estimated_center_of_gravity(truck.wheelbase_m),
    };

    let positions = axle_positions(truck);
    if positions.len() < weights.len() {
        debug!(
            truck = %truck.id,
            positions = positions.len(),
            weights = weights.len(),
            "more axle weights than axle positions, extra weights ignored"
        );
    }

    let (mut total_moment, mut total_weight) = positions
        .iter()
        .zip(weights)
        .fold((0.0, 0.0), |(moment, weight), (pos, w)| {
            (moment + pos * w, weight + w)
        });

    if let Some(mass) = truck.active_counterweight_t().filter(|m| *m > 0.0) {
        match truck.overall_length_m {
            Some(overall_length) => {
                let position = overall_length
                    - truck
                        .counterweight_position_m
                        .unwrap_or(DEFAULT_COUNTERWEIGHT_POSITION_M);
                total_moment += position * mass;
                total_weight += mass;
            }
            None => debug!(
                truck = %truck.id,
                "counterweight ignored: overall length unknown"
            ),
        }
    }

    if total_weight > 0.0 {
        total_moment / total_weight
    } else {
        truck.wheelbase_m / 2.0 + 1.2
    }
}
