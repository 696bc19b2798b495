//! Truck-to-trailer longitudinal offset per connection kind

use crate::model::{ConnectionType, TrailerSpec, TruckSpec};

pub const DEFAULT_SWING_RADIUS_M: f64 = 2.0;
pub const DEFAULT_TOWBAR_LENGTH_M: f64 = 4.0;
pub const DEFAULT_JEEP_LENGTH_M: f64 = 4.0;

/// Signed distance (m) from the truck's reference point to the trailer's
/// front reference point, starting from the truck wheelbase.
///
/// A gooseneck overlaps the tractor frame and shortens the rig; towbars and
/// jeep/dollies extend it. Unset lengths fall back to the defaults above.
pub fn trailer_offset(trailer: &TrailerSpec, truck: &TruckSpec) -> f64 {
    let base = truck.wheelbase_m;
    match trailer.connection {
        ConnectionType::Gooseneck => {
            base - trailer.swing_radius_m.unwrap_or(DEFAULT_SWING_RADIUS_M)
        }
        ConnectionType::Towbar => {
            base + trailer.towbar_length_m.unwrap_or(DEFAULT_TOWBAR_LENGTH_M)
        }
        ConnectionType::JeepDolly => base + trailer.jeep_length_m.unwrap_or(DEFAULT_JEEP_LENGTH_M),
        ConnectionType::Other => base,
    }
}
