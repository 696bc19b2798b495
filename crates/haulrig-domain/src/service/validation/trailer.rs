//! Trailer connection rules

use crate::model::{ConnectionType, TrailerSpec, ValidationMessage};

/// Kingpin plus deck height above which the rig risks the 4 m overall height
pub const MAX_KINGPIN_DECK_HEIGHT_M: f64 = 1.6;

/// Towbar length beyond which driver line of sight suffers
pub const MAX_TOWBAR_LENGTH_M: f64 = 6.0;

/// Check the connection-specific fields of a rigid trailer
///
/// Returns the first finding only; `None` means the configuration is valid.
pub fn validate_trailer_connection(trailer: &TrailerSpec) -> Option<ValidationMessage> {
    match trailer.connection {
        ConnectionType::Gooseneck => {
            let (Some(kingpin_height), Some(_)) = (trailer.kingpin_height_m, trailer.swing_radius_m)
            else {
                return Some(ValidationMessage::error(
                    "Kingpin height and swing radius are required for gooseneck connection",
                ));
            };
            if kingpin_height + trailer.deck_height_m > MAX_KINGPIN_DECK_HEIGHT_M {
                return Some(ValidationMessage::warning(
                    "King-pin + deck too high for 4 m overall height",
                ));
            }
            None
        }
        ConnectionType::Towbar => {
            let (Some(towbar_length), Some(_)) = (trailer.towbar_length_m, trailer.eye_height_m)
            else {
                return Some(ValidationMessage::error(
                    "Towbar length and eye height are required for towbar connection",
                ));
            };
            if towbar_length > MAX_TOWBAR_LENGTH_M {
                return Some(ValidationMessage::warning(
                    "Towbar exceeds 6 m - driver line-of-sight risk",
                ));
            }
            None
        }
        ConnectionType::JeepDolly => {
            let (Some(jeep_axles), Some(_)) = (trailer.jeep_axles, trailer.jeep_length_m) else {
                return Some(ValidationMessage::error(
                    "Jeep axle count and length are required for jeep/dolly connection",
                ));
            };
            if jeep_axles < 1 {
                return Some(ValidationMessage::error("Jeep axle count required"));
            }
            None
        }
        ConnectionType::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Severity;
    use crate::test_support::trailer;

    fn gooseneck(kingpin: Option<f64>, swing: Option<f64>, deck: f64) -> TrailerSpec {
        let mut t = trailer(ConnectionType::Gooseneck);
        t.kingpin_height_m = kingpin;
        t.swing_radius_m = swing;
        t.deck_height_m = deck;
        t
    }

    #[test]
    fn test_gooseneck_missing_swing_radius_is_error() {
        let msg = validate_trailer_connection(&gooseneck(Some(1.0), None, 0.5)).unwrap();
        assert_eq!(msg.severity, Severity::Error);
    }

    #[test]
    fn test_gooseneck_missing_kingpin_is_error() {
        let msg = validate_trailer_connection(&gooseneck(None, Some(2.0), 0.5)).unwrap();
        assert_eq!(msg.severity, Severity::Error);
    }

    #[test]
    fn test_gooseneck_height_boundary() {
        // 1.0 + 0.5 = 1.5, fine
        assert!(validate_trailer_connection(&gooseneck(Some(1.0), Some(2.0), 0.5)).is_none());
        // exactly 1.6 is not over the limit
        assert!(validate_trailer_connection(&gooseneck(Some(1.0), Some(2.0), 0.6)).is_none());
        let msg = validate_trailer_connection(&gooseneck(Some(1.01), Some(2.0), 0.6)).unwrap();
        assert_eq!(msg.severity, Severity::Warning);
    }

    #[test]
    fn test_towbar_rules() {
        let mut t = trailer(ConnectionType::Towbar);
        t.towbar_length_m = Some(4.0);
        let msg = validate_trailer_connection(&t).unwrap();
        assert_eq!(msg.severity, Severity::Error);

        t.eye_height_m = Some(0.9);
        assert!(validate_trailer_connection(&t).is_none());

        t.towbar_length_m = Some(6.5);
        let msg = validate_trailer_connection(&t).unwrap();
        assert_eq!(msg.severity, Severity::Warning);
    }

    #[test]
    fn test_jeep_rules() {
        let mut t = trailer(ConnectionType::JeepDolly);
        assert!(validate_trailer_connection(&t).unwrap().is_error());

        t.jeep_axles = Some(0);
        t.jeep_length_m = Some(3.5);
        let msg = validate_trailer_connection(&t).unwrap();
        assert_eq!(msg.message, "Jeep axle count required");

        t.jeep_axles = Some(2);
        assert!(validate_trailer_connection(&t).is_none());
    }

    #[test]
    fn test_other_connection_always_valid() {
        let t = trailer(ConnectionType::Other);
        assert!(validate_trailer_connection(&t).is_none());
    }
}
