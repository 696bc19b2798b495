//! Shared fixtures for unit tests

use crate::model::{
    AxleConfig, ConnectionType, Dimensions, LegacyLoadFields, LoadCategory, LoadCg, LoadSpec,
    ModuleType, TrailerModule, TrailerSpec, TrailerType, TruckSpec,
};

pub fn truck(wheelbase_m: f64) -> TruckSpec {
    TruckSpec {
        id: "tractor".to_string(),
        manufacturer: "Volvo".to_string(),
        model: "FH16".to_string(),
        truck_name: None,
        axle_config: AxleConfig::new(6, 4),
        wheelbase_m,
        tare_t: 11.0,
        max_gtw_t: 120.0,
        engine_power_hp: 750.0,
        cab_type: None,
        num_axles: None,
        axle_spacings: None,
        axle_weights: None,
        has_kingpin: false,
        kingpin_height_m: None,
        kingpin_offset_m: None,
        has_counterweight: false,
        counterweight_mass_t: None,
        counterweight_position_m: None,
        overall_length_m: None,
        overall_width_m: None,
        chassis_height_m: Some(1.0),
        cab_height_m: Some(2.9),
        img: None,
        front_tires: None,
        rear_tires: None,
        notes: None,
    }
}

pub fn trailer(connection: ConnectionType) -> TrailerSpec {
    TrailerSpec {
        id: "trailer".to_string(),
        manufacturer: "Faymonville".to_string(),
        family: "MegaMAX".to_string(),
        model: "3-axle".to_string(),
        trailer_type: TrailerType::Lowbed,
        connection,
        axles: 3,
        width_m: 3.0,
        length_closed_m: 13.0,
        stroke_m: None,
        deck_height_m: 0.9,
        axle_spacing_m: 1.36,
        payload_t: 50.0,
        tare_t: 15.0,
        kingpin_height_m: None,
        swing_radius_m: None,
        towbar_length_m: None,
        eye_height_m: None,
        jeep_axles: None,
        jeep_length_m: None,
        img: None,
        notes: None,
        tires: None,
    }
}

pub fn module(id: &str, module_type: ModuleType) -> TrailerModule {
    TrailerModule {
        id: id.to_string(),
        module_type,
        length: 4.0,
        width: 3.0,
        height: 1.1,
        tare: 5.0,
        payload_capacity: 20.0,
        axle_count: None,
        axle_spacings: None,
        kingpin_height: None,
        ramp_angle: None,
        notes: None,
    }
}

pub fn load(weight: f64, length: f64, width: f64, height: f64) -> LoadSpec {
    LoadSpec {
        id: "load".to_string(),
        category: LoadCategory::Machinery,
        weight,
        dims: Dimensions {
            length,
            width,
            height,
        },
        cg: LoadCg {
            chainage: length / 2.0,
            offset: 0.0,
        },
        securing: "chains".to_string(),
        dynamic_factor: 1.2,
        envelope_ref: None,
        notes: None,
        shape_svg: None,
        shape_points: None,
        legacy: LegacyLoadFields::default(),
    }
}
