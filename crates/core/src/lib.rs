//! # MRD Core
//!
//! Selection-and-resolution engine for AML MRD monitoring recommendations.
//! Given a patient's ELN risk category, molecular subgroup, and assessment
//! time point, the engine resolves which monitoring table(s) apply, in what
//! order, and which footnotes the visible rows actually reference.
//!
//! The engine is purely functional over the immutable catalog in
//! `mrd-dataset`: no I/O, no shared mutable state, safe for unlimited
//! concurrent callers. Every lookup is total: unknown identifiers and
//! inconsistent selections resolve to empty output, never errors.
//!
//! **No presentation concerns**: HTTP, CLI, and styling belong to the
//! consumers of [`Recommendation`].

pub mod assemble;
pub mod footnotes;
pub mod plan;
pub mod selection;

pub use assemble::{assemble, DisplayBlock, DisplayRow, DisplayTable, Footnote, Recommendation};
pub use plan::{resolve, ResolutionPlan};
pub use selection::{valid_subgroups, valid_time_points};

use mrd_dataset::Catalog;
use mrd_types::TimePoint;

/// Resolve a raw three-part selection against a catalog.
///
/// This is the engine's outer boundary: each identifier may be empty or
/// unrecognised, and the chain is re-validated from scratch: the subgroup
/// must belong to the named risk category and the time point must be valid
/// for the subgroup. Any break in the chain yields an empty
/// [`Recommendation`].
pub fn resolve_selection(
    catalog: &Catalog,
    risk: &str,
    subgroup_id: &str,
    time_point: &str,
) -> Recommendation {
    let known_for_risk = selection::valid_subgroups(catalog, risk)
        .iter()
        .any(|s| s.id == subgroup_id);
    if !known_for_risk {
        return Recommendation::default();
    }
    let Ok(time_point) = time_point.parse::<TimePoint>() else {
        return Recommendation::default();
    };
    assemble::assemble(catalog, subgroup_id, time_point)
}

/// [`resolve_selection`] against the embedded process-wide catalog.
pub fn recommendations(risk: &str, subgroup_id: &str, time_point: &str) -> Recommendation {
    resolve_selection(mrd_dataset::catalog(), risk, subgroup_id, time_point)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_selection_resolves() {
        let rec = recommendations("favorable", "NPM1mut_wo_FLT3ITD", "cycles_2");
        assert_eq!(rec.tables().count(), 1);
    }

    #[test]
    fn test_incomplete_selection_is_empty() {
        assert!(recommendations("adverse", "", "").is_empty());
        assert!(recommendations("", "", "").is_empty());
        assert!(recommendations("favorable", "NPM1mut_wo_FLT3ITD", "").is_empty());
    }

    #[test]
    fn test_subgroup_outside_risk_category_is_empty() {
        // FLT3ITD_NPM1wt is intermediate; pairing it with favorable is the
        // inconsistent combination the presentation reset rule prevents.
        assert!(recommendations("favorable", "FLT3ITD_NPM1wt", "eot").is_empty());
    }

    #[test]
    fn test_time_point_outside_subgroup_list_is_empty() {
        // NPM1mut w/o FLT3-ITD is not assessed at baseline.
        assert!(recommendations("favorable", "NPM1mut_wo_FLT3ITD", "baseline").is_empty());
    }

    #[test]
    fn test_unknown_time_point_is_empty() {
        assert!(recommendations("favorable", "NPM1mut_wo_FLT3ITD", "day_30").is_empty());
    }
}
