//! Modular trailer module rules

use crate::model::{ModuleType, TrailerModule, ValidationMessage};

pub const MAX_MODULE_LENGTH_M: f64 = 15.0;
pub const MAX_MODULE_WIDTH_M: f64 = 3.0;
pub const MAX_BOGIE_AXLES: u32 = 6;

fn is_positive(value: f64) -> bool {
    value > 0.0
}

/// Check one module
///
/// Errors are checked before warnings and the first match wins; `None`
/// means the module is valid.
pub fn validate_module(module: &TrailerModule) -> Option<ValidationMessage> {
    if !is_positive(module.length) {
        return Some(ValidationMessage::error("Length must be greater than zero"));
    }
    if !is_positive(module.width) {
        return Some(ValidationMessage::error("Width must be greater than zero"));
    }
    if !is_positive(module.height) {
        return Some(ValidationMessage::error("Height must be greater than zero"));
    }

    match module.module_type {
        ModuleType::AxleBogie => {
            let axle_count = module.axle_count.unwrap_or(0);
            if axle_count < 1 {
                return Some(ValidationMessage::error(
                    "Axle bogie must have at least 1 axle",
                ));
            }
            let spacings = module.axle_spacings.as_ref().map_or(0, Vec::len);
            if axle_count > 1 && spacings < (axle_count - 1) as usize {
                return Some(ValidationMessage::error("Missing axle spacings"));
            }
        }
        ModuleType::Gooseneck if !module.kingpin_height.is_some_and(is_positive) => {
            return Some(ValidationMessage::error(
                "Kingpin height must be specified for gooseneck modules",
            ));
        }
        ModuleType::Ramp if !module.ramp_angle.is_some_and(is_positive) => {
            return Some(ValidationMessage::error(
                "Ramp angle must be specified for ramp modules",
            ));
        }
        _ => {}
    }

    if module.length > MAX_MODULE_LENGTH_M {
        return Some(ValidationMessage::warning(
            "Length exceeds 15m - verify transportation regulations",
        ));
    }
    if module.width > MAX_MODULE_WIDTH_M {
        return Some(ValidationMessage::warning(
            "Width exceeds 3m - may require special permits",
        ));
    }
    if module.module_type == ModuleType::AxleBogie
        && module.axle_count.unwrap_or(0) > MAX_BOGIE_AXLES
    {
        return Some(ValidationMessage::warning(
            "Large number of axles - verify turning capability",
        ));
    }

    None
}
