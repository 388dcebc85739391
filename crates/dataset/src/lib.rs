//! Static MRD reference catalog.
//!
//! This crate owns the declarative reference dataset behind the
//! recommendation engine: the ELN 2025 AML MRD monitoring tables, the
//! molecular subgroups, and the subgroup-to-table bindings. The catalog is
//! embedded at compile time, parsed and validated once, and then shared
//! immutably for the life of the process.
//!
//! Resolution logic lives in `mrd-core`; this crate handles the data shape,
//! loading, and integrity checks only.

pub mod model;
pub mod validation;

pub use model::{Catalog, Guidance, MonitoringTable, Row, Subgroup, TimePointEntry};
pub use validation::ValidationWarning;

use std::sync::OnceLock;
use thiserror::Error;

/// The embedded ELN 2025 catalog source.
const CATALOG_YAML: &str = include_str!("../data/eln_mrd_2025.yaml");

/// Errors returned when loading or validating a catalog.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("invalid catalog YAML: {0}")]
    InvalidYaml(#[from] serde_path_to_error::Error<serde_yaml::Error>),

    #[error("duplicate subgroup id {0:?}")]
    DuplicateSubgroup(String),

    #[error("subgroup {0:?} has an empty time-point list")]
    EmptyTimePoints(String),

    #[error("subgroup {0:?} has an empty table binding")]
    EmptyBinding(String),

    #[error("subgroup {subgroup:?} is bound to unknown table {table:?}")]
    UnknownTable { subgroup: String, table: String },

    #[error("table {table:?} defines footnote marker {marker:?} outside \"1\"..\"9\"")]
    InvalidFootnoteMarker { table: String, marker: String },
}

/// Parse and validate a catalog from YAML source.
///
/// Authoring warnings (see [`validation::validate`]) are logged at `warn`
/// level but do not fail the load.
///
/// # Errors
///
/// Returns a [`DatasetError`] if the YAML does not parse against the wire
/// model or a structural integrity check fails.
pub fn load_from_str(yaml: &str) -> Result<Catalog, DatasetError> {
    let de = serde_yaml::Deserializer::from_str(yaml);
    let catalog: Catalog = serde_path_to_error::deserialize(de)?;
    for warning in validation::validate(&catalog)? {
        tracing::warn!("catalog authoring warning: {warning}");
    }
    Ok(catalog)
}

/// The process-wide embedded catalog.
///
/// Loaded and validated on first access, then shared immutably. The embedded
/// catalog is covered by tests, so a failure here means the build itself is
/// broken; that is the one place this crate treats a dataset fault as fatal.
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| match load_from_str(CATALOG_YAML) {
        Ok(catalog) => catalog,
        Err(err) => panic!("embedded MRD catalog failed to load: {err}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mrd_types::{RiskCategory, TimePoint};

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = catalog();
        assert_eq!(catalog.subgroups.len(), 11);
        assert_eq!(catalog.tables.len(), 6);
    }

    #[test]
    fn test_embedded_catalog_has_no_structural_errors() {
        let catalog = load_from_str(CATALOG_YAML).expect("embedded catalog must parse");
        validation::validate(&catalog).expect("embedded catalog must be structurally sound");
    }

    #[test]
    fn test_embedded_catalog_known_authoring_warnings() {
        // The published CBF follow-up rows cite footnote 4 in the definition
        // column, but the CBF table only defines footnotes 1..3. That is a
        // known flaw in the source material; the engine drops the marker at
        // display time, and the validator surfaces it as the only warning.
        let catalog = load_from_str(CATALOG_YAML).expect("embedded catalog must parse");
        let warnings = validation::validate(&catalog).expect("structurally sound");
        assert_eq!(
            warnings,
            vec![ValidationWarning::UndefinedFootnote {
                table: "CBF".to_owned(),
                time_point: TimePoint::FollowUp,
                marker: "4".to_owned(),
            }]
        );
    }

    #[test]
    fn test_subgroup_lookup_and_risk_assignment() {
        let catalog = catalog();
        let npm1 = catalog.subgroup("NPM1mut_wo_FLT3ITD").expect("present");
        assert_eq!(npm1.risk, RiskCategory::Favorable);
        assert_eq!(
            npm1.time_points,
            vec![TimePoint::Cycles2, TimePoint::Eot, TimePoint::FollowUp]
        );
        assert_eq!(npm1.tables, vec!["NPM1".to_owned()]);
        assert!(catalog.subgroup("NPM1").is_none());
    }

    #[test]
    fn test_multi_table_bindings_keep_declared_order() {
        let catalog = catalog();
        let flt3_wt = catalog.subgroup("FLT3ITD_NPM1wt").expect("present");
        assert_eq!(flt3_wt.tables, vec!["FLT3_ITD_NGS", "MFC"]);
        let flt3_mut = catalog.subgroup("FLT3ITD_NPM1mut").expect("present");
        assert_eq!(flt3_mut.tables, vec!["NPM1", "FLT3_ITD_NGS"]);
    }

    #[test]
    fn test_tables_cover_disjoint_time_point_sets() {
        let catalog = catalog();
        let pml = catalog.table("PML_RARA").expect("present");
        assert!(pml.entry(TimePoint::Baseline).is_none());
        assert!(pml.entry(TimePoint::Eot).is_some());
        let flt3 = catalog.table("FLT3_ITD_NGS").expect("present");
        assert!(flt3.entry(TimePoint::PreHct).is_some());
    }

    #[test]
    fn test_follow_up_rows_carry_tissue_qualifiers_where_entry_spans_tissues() {
        let catalog = catalog();
        let npm1 = catalog.table("NPM1").expect("present");
        let follow_up = npm1.entry(TimePoint::FollowUp).expect("present");
        assert_eq!(follow_up.tissue, "PB or BM");
        assert_eq!(follow_up.rows.len(), 6);
        assert!(follow_up.rows.iter().all(|r| r.tissue.is_some()));

        let cycles = npm1.entry(TimePoint::Cycles2).expect("present");
        assert!(cycles.rows.iter().all(|r| r.tissue.is_none()));
    }

    #[test]
    fn test_guidance_banners_present_for_annotated_subgroups() {
        let catalog = catalog();
        for id in [
            "FLT3ITD_NPM1wt",
            "FLT3ITD_NPM1mut",
            "KMT2A_MLLT3",
            "Fusion_KMT2A",
            "CEBPA_bZIP",
        ] {
            let subgroup = catalog.subgroup(id).expect("present");
            assert!(subgroup.guidance.is_some(), "missing guidance for {id}");
        }
        assert!(catalog
            .subgroup("NPM1mut_wo_FLT3ITD")
            .expect("present")
            .guidance
            .is_none());
    }

    #[test]
    fn test_load_rejects_unknown_fields() {
        let yaml = "subgroups: []\ntables: {}\nextra: true\n";
        let err = load_from_str(yaml).expect_err("should reject unknown field");
        assert!(matches!(err, DatasetError::InvalidYaml(_)));
    }
}
