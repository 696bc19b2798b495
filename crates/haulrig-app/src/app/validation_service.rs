//! Validation Service - run configuration rules over catalog entries

use haulrig_domain::model::{Severity, ValidationMessage};
use haulrig_domain::repository::CatalogRepository;
use haulrig_domain::service::{blocks_save, validate_module, validate_trailer_connection, validate_truck};
use haulrig_types::{CatalogError, Result};
use serde::Serialize;
use tracing::debug;

/// Kind of catalog entry a report is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Trailer,
    ModularTrailer,
    Truck,
}

impl EntryKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Trailer => "Trailer",
            EntryKind::ModularTrailer => "Modular trailer",
            EntryKind::Truck => "Truck",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A validation message tied to the part it was raised for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Entry id, or module id for modular trailers
    pub subject: String,
    #[serde(flatten)]
    pub message: ValidationMessage,
}

/// All findings for one catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub kind: EntryKind,
    pub id: String,
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    fn new(kind: EntryKind, id: &str) -> Self {
        Self {
            kind,
            id: id.to_string(),
            findings: Vec::new(),
        }
    }

    fn push(&mut self, subject: &str, message: ValidationMessage) {
        self.findings.push(Finding {
            subject: subject.to_string(),
            message,
        });
    }

    /// True when an error-level finding would block saving this entry
    pub fn blocks_save(&self) -> bool {
        blocks_save(self.findings.iter().map(|f| &f.message))
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.message.severity == severity)
            .count()
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Validate one catalog entry by kind and id
pub fn validate_entry<R: CatalogRepository + ?Sized>(
    repo: &R,
    kind: EntryKind,
    id: &str,
) -> Result<ValidationReport> {
    let not_found = || CatalogError::NotFound {
        kind: kind.label(),
        id: id.to_string(),
    };

    let mut report = ValidationReport::new(kind, id);
    match kind {
        EntryKind::Trailer => {
            let trailer = repo.find_trailer(id)?.ok_or_else(not_found)?;
            if let Some(message) = validate_trailer_connection(&trailer) {
                report.push(&trailer.id, message);
            }
        }
        EntryKind::ModularTrailer => {
            let modular = repo
                .find_modular_trailers()?
                .into_iter()
                .find(|m| m.id == id)
                .ok_or_else(not_found)?;
            for module in &modular.modules {
                if let Some(message) = validate_module(module) {
                    report.push(&module.id, message);
                }
            }
        }
        EntryKind::Truck => {
            let truck = repo.find_truck(id)?.ok_or_else(not_found)?;
            for message in validate_truck(&truck) {
                report.push(&truck.id, message);
            }
        }
    }

    debug!(kind = %kind, id, findings = report.findings.len(), "validated entry");
    Ok(report)
}

/// Validate every trailer, modular trailer and truck in the catalog
pub fn validate_catalog<R: CatalogRepository + ?Sized>(repo: &R) -> Result<Vec<ValidationReport>> {
    let mut reports = Vec::new();
    for trailer in repo.find_trailers()? {
        reports.push(validate_entry(repo, EntryKind::Trailer, &trailer.id)?);
    }
    for modular in repo.find_modular_trailers()? {
        reports.push(validate_entry(repo, EntryKind::ModularTrailer, &modular.id)?);
    }
    for truck in repo.find_trucks()? {
        reports.push(validate_entry(repo, EntryKind::Truck, &truck.id)?);
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use haulrig_infra::persistence::FileCatalogRepository;
    use haulrig_types::Error;
    use std::fs;
    use tempfile::tempdir;

    const CATALOG: &str = r#"
[[trailers]]
id = "goose-no-kingpin"
type = "lowbed"
connection = "gooseneck"
axles = 3
width_m = 3.0
length_closed_m = 13.0
deck_height_m = 0.9
payload_t = 50.0

[[trailers]]
id = "towbar-ok"
type = "flat"
connection = "towbar"
axles = 2
width_m = 2.55
length_closed_m = 8.0
deck_height_m = 1.1
payload_t = 18.0
towbar_length_m = 3.5
eye_height_m = 0.8

[[modular_trailers]]
id = "thp"
name = "THP"

[[modular_trailers.modules]]
id = "neck"
type = "gooseneck"
length = 4.0
width = 3.0
height = 1.1
tare = 5.0
payloadCapacity = 20.0
kingpinHeight = 1.1

[[modular_trailers.modules]]
id = "wide-deck"
type = "deck"
length = 10.0
width = 3.5
height = 1.1
tare = 8.0
payloadCapacity = 40.0

[[trucks]]
id = "tall"
axle_config = "6x4"
wheelbase_m = 3.9
tare_t = 11.0
max_gtw_t = 120.0
chassis_height_m = 1.2
cab_height_m = 3.5
"#;

    fn repo() -> (tempfile::TempDir, FileCatalogRepository) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        fs::write(&path, CATALOG).unwrap();
        let repo = FileCatalogRepository::new(path).unwrap();
        (dir, repo)
    }

    #[test]
    fn test_trailer_missing_kingpin_blocks_save() {
        let (_dir, repo) = repo();
        let report = validate_entry(&repo, EntryKind::Trailer, "goose-no-kingpin").unwrap();
        assert_eq!(report.findings.len(), 1);
        assert!(report.blocks_save());
    }

    #[test]
    fn test_clean_trailer() {
        let (_dir, repo) = repo();
        let report = validate_entry(&repo, EntryKind::Trailer, "towbar-ok").unwrap();
        assert!(report.is_clean());
        assert!(!report.blocks_save());
    }

    #[test]
    fn test_modular_findings_name_the_module() {
        let (_dir, repo) = repo();
        let report = validate_entry(&repo, EntryKind::ModularTrailer, "thp").unwrap();
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].subject, "wide-deck");
        assert_eq!(report.count(Severity::Warning), 1);
        assert!(!report.blocks_save());
    }

    #[test]
    fn test_tall_truck_only_warns() {
        let (_dir, repo) = repo();
        let report = validate_entry(&repo, EntryKind::Truck, "tall").unwrap();
        assert_eq!(report.count(Severity::Warning), 1);
        assert!(report.findings[0].message.message.contains("4.70m"));
        assert!(!report.blocks_save());
    }

    #[test]
    fn test_validate_catalog_covers_every_entry() {
        let (_dir, repo) = repo();
        let reports = validate_catalog(&repo).unwrap();
        let ids: Vec<&str> = reports.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["goose-no-kingpin", "towbar-ok", "thp", "tall"]);
    }

    #[test]
    fn test_unknown_entry() {
        let (_dir, repo) = repo();
        let err = validate_entry(&repo, EntryKind::Truck, "ghost").unwrap_err();
        assert!(matches!(
            err,
            Error::Catalog(CatalogError::NotFound { kind: "Truck", .. })
        ));
    }
}
