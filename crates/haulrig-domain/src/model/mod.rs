//! Domain model types

pub mod candidate;
pub mod load;
pub mod modular;
pub mod smart_match;
pub mod trailer;
pub mod truck;
pub mod validation;

pub use candidate::Candidate;
pub use load::{Dimensions, LegacyLoadFields, LoadCategory, LoadCg, LoadSpec, RawLoadRecord, ShapePoint};
pub use modular::{ModularTotals, ModularTrailer, ModuleType, TrailerModule};
pub use smart_match::SmartMatch;
pub use trailer::{ConnectionType, TireSpec, TrailerSpec, TrailerType};
pub use truck::{AxleConfig, CabType, TruckSpec};
pub use validation::{Severity, ValidationMessage};
