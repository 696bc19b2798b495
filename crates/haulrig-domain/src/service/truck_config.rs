//! Truck axle layout editing

use crate::model::{AxleConfig, TruckSpec};

/// Weight given to an axle added by [`resize_axles`] (t)
pub const DEFAULT_NEW_AXLE_WEIGHT_T: f64 = 10.0;
/// Spacing given to a gap added by [`resize_axles`] (m)
pub const DEFAULT_NEW_AXLE_SPACING_M: f64 = 1.4;
/// Largest axle count a truck layout can be resized to
pub const MAX_TRUCK_AXLES: u32 = 20;

/// Change the number of axles, keeping weights, spacings and the wheel
/// formula consistent with it. Counts above [`MAX_TRUCK_AXLES`] are clamped.
pub fn resize_axles(truck: &TruckSpec, num_axles: u32) -> TruckSpec {
    let num_axles = num_axles.min(MAX_TRUCK_AXLES);
    let n = num_axles as usize;

    let mut axle_weights = truck.axle_weights.clone().unwrap_or_default();
    axle_weights.resize(n, DEFAULT_NEW_AXLE_WEIGHT_T);

    let mut axle_spacings = truck.axle_spacings.clone().unwrap_or_default();
    axle_spacings.resize(n.saturating_sub(1), DEFAULT_NEW_AXLE_SPACING_M);

    let total_wheels = num_axles.saturating_mul(2);
    let driven_wheels = match truck.axle_config.driven_wheels {
        0 => 2,
        driven => driven,
    };

    TruckSpec {
        num_axles: Some(num_axles),
        axle_weights: Some(axle_weights),
        axle_spacings: Some(axle_spacings),
        axle_config: AxleConfig::new(total_wheels, total_wheels.min(driven_wheels)),
        ..truck.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::truck;

    #[test]
    fn test_grow_axles() {
        let mut t = truck(4.0);
        t.axle_weights = Some(vec![7.0, 9.0]);
        t.axle_spacings = Some(vec![3.8]);
        let resized = resize_axles(&t, 4);
        assert_eq!(resized.num_axles, Some(4));
        assert_eq!(resized.axle_weights, Some(vec![7.0, 9.0, 10.0, 10.0]));
        assert_eq!(resized.axle_spacings, Some(vec![3.8, 1.4, 1.4]));
        assert_eq!(resized.axle_config.to_string(), "8x4");
    }

    #[test]
    fn test_shrink_axles() {
        let mut t = truck(4.0);
        t.axle_weights = Some(vec![7.0, 9.0, 9.0]);
        t.axle_spacings = Some(vec![3.8, 1.35]);
        let resized = resize_axles(&t, 1);
        assert_eq!(resized.axle_weights, Some(vec![7.0]));
        assert_eq!(resized.axle_spacings, Some(vec![]));
        // driven wheels are capped at the new total
        assert_eq!(resized.axle_config.to_string(), "2x2");
    }

    #[test]
    fn test_resize_clamps_axle_count() {
        let resized = resize_axles(&truck(4.0), u32::MAX);
        assert_eq!(resized.num_axles, Some(MAX_TRUCK_AXLES));
        assert_eq!(resized.axle_weights.map(|w| w.len()), Some(20));
        assert_eq!(resized.axle_config.to_string(), "40x4");
    }

    #[test]
    fn test_resize_keeps_other_fields() {
        let t = truck(4.0);
        let resized = resize_axles(&t, 2);
        assert_eq!(resized.id, t.id);
        assert_eq!(resized.wheelbase_m, t.wheelbase_m);
        assert_eq!(resized.axle_config.to_string(), "4x4");
    }
}
