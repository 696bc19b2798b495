//! Load record normalization
//!
//! Maps either on-disk load shape onto the canonical [`LoadSpec`]. Call this
//! once when records are ingested; nothing downstream looks at the legacy
//! flat fields.

use crate::model::{Dimensions, LoadCategory, LoadCg, LoadSpec, RawLoadRecord};

/// Securing method assumed when none is recorded
pub const DEFAULT_SECURING: &str = "chains";

/// Dynamic factor assumed when none is recorded
pub const DEFAULT_DYNAMIC_FACTOR: f64 = 1.2;

/// Normalize a raw load record
///
/// A record carrying `category`, `dims` and `cg` is already canonical and is
/// taken as-is, legacy fields included; only a missing `weight`, `securing`
/// or `dynamicFactor` is filled with its default. Anything else is rebuilt from the
/// legacy flat fields; missing numbers become 0, which downstream reads as
/// "no cargo".
pub fn normalize_load(raw: RawLoadRecord) -> LoadSpec {
    if let (Some(category), Some(dims), Some(cg)) = (raw.category, raw.dims, raw.cg) {
        return LoadSpec {
            id: raw.id,
            category,
            weight: raw.weight.unwrap_or(0.0),
            dims,
            cg,
            securing: raw.securing.unwrap_or_else(|| DEFAULT_SECURING.to_string()),
            dynamic_factor: raw.dynamic_factor.unwrap_or(DEFAULT_DYNAMIC_FACTOR),
            envelope_ref: raw.envelope_ref,
            notes: raw.notes,
            shape_svg: raw.shape_svg,
            shape_points: raw.shape_points,
            legacy: raw.legacy,
        };
    }

    let legacy = raw.legacy;
    LoadSpec {
        id: raw.id,
        category: legacy
            .load_type
            .as_deref()
            .map(LoadCategory::from_legacy)
            .unwrap_or_default(),
        weight: legacy.cargo_weight.unwrap_or(0.0),
        dims: Dimensions {
            length: legacy.cargo_length.unwrap_or(0.0),
            width: legacy.cargo_width.unwrap_or(0.0),
            height: legacy.cargo_height.unwrap_or(0.0),
        },
        cg: LoadCg {
            chainage: legacy.cargo_cg_chainage.unwrap_or(0.0),
            offset: legacy.cargo_cg_offset.unwrap_or(0.0),
        },
        securing: legacy
            .load_securing
            .clone()
            .unwrap_or_else(|| DEFAULT_SECURING.to_string()),
        dynamic_factor: legacy.dynamic_factor.unwrap_or(DEFAULT_DYNAMIC_FACTOR),
        envelope_ref: legacy.permitted_envelope_ref.clone(),
        notes: raw.notes,
        shape_svg: raw.shape_svg,
        shape_points: raw.shape_points,
        legacy,
    }
}
