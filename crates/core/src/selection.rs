//! Selection chain resolution: risk category to subgroups, subgroup to
//! time points.
//!
//! Both lookups are defensive: unknown or empty identifiers yield empty
//! results, never errors. The presentation layer gates downstream selectors
//! on upstream choices, but nothing here depends on being called in order.

use mrd_dataset::{Catalog, Subgroup};
use mrd_types::{RiskCategory, TimePoint};

/// Subgroups belonging to a risk category, in catalog display order.
///
/// An unrecognised or empty `risk` identifier yields an empty list.
pub fn valid_subgroups<'a>(catalog: &'a Catalog, risk: &str) -> Vec<&'a Subgroup> {
    let Ok(risk) = risk.parse::<RiskCategory>() else {
        return Vec::new();
    };
    catalog
        .subgroups
        .iter()
        .filter(|s| s.risk == risk)
        .collect()
}

/// Valid assessment time points for a subgroup, in chronological order.
///
/// An unrecognised or empty `subgroup_id` yields an empty slice.
pub fn valid_time_points<'a>(catalog: &'a Catalog, subgroup_id: &str) -> &'a [TimePoint] {
    catalog
        .subgroup(subgroup_id)
        .map(|s| s.time_points.as_slice())
        .unwrap_or(&[])
}
