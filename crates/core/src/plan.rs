//! Subgroup-to-table resolution.
//!
//! Most subgroups dispatch straight through their catalog binding. The two
//! KMT2A-rearrangement subgroups are the exception: validated quantitative
//! assays exist but intervention thresholds are not yet established, so
//! their primary recommendation is advisory text with MFC retained as a
//! fallback. That override lives here, in one auditable place, and takes
//! precedence over whatever the raw binding says.

use mrd_dataset::Subgroup;

/// Subgroup ids whose primary recommendation is advisory text rather than a
/// direct table lookup.
pub const ADVISORY_SUBGROUPS: [&str; 2] = ["KMT2A_MLLT3", "Fusion_KMT2A"];

/// Fixed advisory text for KMT2A-rearranged AML.
pub const KMT2A_ADVISORY: &str = "Assays for KMT2A-rearranged AML MRD testing have been \
     developed. The need for intervention of fusion-gene persistence in remission at \
     specific thresholds and treatment timepoints remains to be established.";

/// Fallback table shown under the advisory text.
pub const KMT2A_FALLBACK_TABLE: &str = "MFC";

/// How a subgroup's recommendation is resolved to monitoring tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolutionPlan<'a> {
    /// Look up the bound tables directly, in the declared order.
    Direct(Vec<&'a str>),

    /// Show fixed advisory text first, then the fallback table.
    AdvisoryPlusFallback {
        advisory: &'static str,
        fallback: &'static str,
    },
}

/// Resolve a subgroup to its recommendation plan.
pub fn resolve(subgroup: &Subgroup) -> ResolutionPlan<'_> {
    if ADVISORY_SUBGROUPS.contains(&subgroup.id.as_str()) {
        return ResolutionPlan::AdvisoryPlusFallback {
            advisory: KMT2A_ADVISORY,
            fallback: KMT2A_FALLBACK_TABLE,
        };
    }
    ResolutionPlan::Direct(subgroup.tables.iter().map(String::as_str).collect())
}
