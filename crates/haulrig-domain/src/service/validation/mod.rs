//! Configuration validation
//!
//! Trailer and module rules stop at the first finding and return at most one
//! message. Truck rules accumulate every finding.

mod module;
mod trailer;
mod truck;

pub use module::validate_module;
pub use trailer::validate_trailer_connection;
pub use truck::validate_truck;

use crate::model::ValidationMessage;

/// True when any message would block saving
pub fn blocks_save<'a>(messages: impl IntoIterator<Item = &'a ValidationMessage>) -> bool {
    messages.into_iter().any(ValidationMessage::is_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_save_only_on_error() {
        let warnings = vec![ValidationMessage::warning("wide")];
        assert!(!blocks_save(&warnings));
        let none: Option<ValidationMessage> = None;
        assert!(!blocks_save(&none));
        let error = Some(ValidationMessage::error("missing"));
        assert!(blocks_save(&error));
    }
}
