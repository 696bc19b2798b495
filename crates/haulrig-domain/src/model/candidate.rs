//! Candidate trailer: rigid or modular

use serde::{Deserialize, Serialize};

use super::modular::ModularTrailer;
use super::trailer::TrailerSpec;

/// A trailer evaluated against a cargo item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Candidate {
    Rigid(TrailerSpec),
    Modular(ModularTrailer),
}

impl Candidate {
    pub fn id(&self) -> &str {
        match self {
            Candidate::Rigid(t) => &t.id,
            Candidate::Modular(m) => &m.id,
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            Candidate::Rigid(t) => t.display_name(),
            Candidate::Modular(m) if !m.name.is_empty() => m.name.clone(),
            Candidate::Modular(m) => m.id.clone(),
        }
    }

    pub fn is_modular(&self) -> bool {
        matches!(self, Candidate::Modular(_))
    }

    pub fn total_axles(&self) -> u32 {
        match self {
            Candidate::Rigid(t) => t.total_axles(),
            Candidate::Modular(m) => m.total_axles(),
        }
    }

    pub fn deck_height(&self) -> f64 {
        match self {
            Candidate::Rigid(t) => t.deck_height_m,
            Candidate::Modular(m) => m.deck_height(),
        }
    }

    pub fn payload_capacity(&self) -> f64 {
        match self {
            Candidate::Rigid(t) => t.payload_t,
            Candidate::Modular(m) => m.payload_capacity(),
        }
    }

    pub fn total_length(&self) -> f64 {
        match self {
            Candidate::Rigid(t) => t.length_closed_m,
            Candidate::Modular(m) => m.total_length(),
        }
    }

    pub fn width(&self) -> f64 {
        match self {
            Candidate::Rigid(t) => t.width_m,
            Candidate::Modular(m) => m.max_width(),
        }
    }
}

impl From<TrailerSpec> for Candidate {
    fn from(trailer: TrailerSpec) -> Self {
        Candidate::Rigid(trailer)
    }
}

impl From<ModularTrailer> for Candidate {
    fn from(trailer: ModularTrailer) -> Self {
        Candidate::Modular(trailer)
    }
}
