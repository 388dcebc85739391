//! Load-time catalog validation.
//!
//! Two severities, matching how the recommendation engine treats the data:
//! - Structural problems that would make lookups lie (a binding naming a
//!   table that does not exist, an empty time-point list) are hard errors.
//! - Authoring smells that the engine already tolerates by omission (a row
//!   referencing a footnote the owning table never defines, a stored tier
//!   that disagrees with the published response text) are warnings, logged
//!   once at load.

use crate::model::{Catalog, MonitoringTable, Row};
use crate::DatasetError;
use mrd_types::footnote::glyph_values;
use mrd_types::{ResponseTier, TimePoint};
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// A non-fatal catalog authoring problem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationWarning {
    /// Row text references a footnote marker the owning table never defines.
    /// The engine drops such markers at display time.
    UndefinedFootnote {
        table: String,
        time_point: TimePoint,
        marker: String,
    },

    /// The stored severity tier disagrees with what the legacy substring
    /// heuristic would derive from the response text.
    TierMismatch {
        table: String,
        time_point: TimePoint,
        response: String,
        stored: ResponseTier,
        derived: ResponseTier,
    },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::UndefinedFootnote {
                table,
                time_point,
                marker,
            } => write!(
                f,
                "table {table:?} at {time_point}: row text references footnote {marker} \
                 but the table defines no such footnote"
            ),
            ValidationWarning::TierMismatch {
                table,
                time_point,
                response,
                stored,
                derived,
            } => write!(
                f,
                "table {table:?} at {time_point}: response {response:?} stored as tier \
                 {stored} but text-derived tier is {derived}"
            ),
        }
    }
}

/// Validate a catalog. Returns authoring warnings on success.
///
/// # Errors
///
/// Returns a [`DatasetError`] on the first structural problem found:
/// duplicate subgroup ids, an empty time-point or table-binding list, a
/// binding referencing a missing table, or a footnote key outside "1".."9".
pub fn validate(catalog: &Catalog) -> Result<Vec<ValidationWarning>, DatasetError> {
    let mut seen_ids = HashSet::new();
    for subgroup in &catalog.subgroups {
        if !seen_ids.insert(subgroup.id.as_str()) {
            return Err(DatasetError::DuplicateSubgroup(subgroup.id.clone()));
        }
        if subgroup.time_points.is_empty() {
            return Err(DatasetError::EmptyTimePoints(subgroup.id.clone()));
        }
        if subgroup.tables.is_empty() {
            return Err(DatasetError::EmptyBinding(subgroup.id.clone()));
        }
        for key in &subgroup.tables {
            if !catalog.tables.contains_key(key) {
                return Err(DatasetError::UnknownTable {
                    subgroup: subgroup.id.clone(),
                    table: key.clone(),
                });
            }
        }
    }

    let mut warnings = Vec::new();
    for (key, table) in &catalog.tables {
        for marker in table.footnotes.keys() {
            let ok = matches!(marker.parse::<u8>(), Ok(1..=9));
            if !ok {
                return Err(DatasetError::InvalidFootnoteMarker {
                    table: key.clone(),
                    marker: marker.clone(),
                });
            }
        }
        check_table(key, table, &mut warnings);
    }
    Ok(warnings)
}

fn check_table(key: &str, table: &MonitoringTable, warnings: &mut Vec<ValidationWarning>) {
    for (&time_point, entry) in &table.time_points {
        let mut referenced = BTreeSet::new();
        for row in &entry.rows {
            for field in [&row.threshold, &row.definition, &row.response] {
                referenced.extend(glyph_values(field));
            }
            if let Some(derived) = derive_tier(row) {
                if derived != row.tier {
                    warnings.push(ValidationWarning::TierMismatch {
                        table: key.to_owned(),
                        time_point,
                        response: row.response.clone(),
                        stored: row.tier,
                        derived,
                    });
                }
            }
        }
        for value in referenced {
            let marker = value.to_string();
            if !table.footnotes.contains_key(&marker) {
                warnings.push(ValidationWarning::UndefinedFootnote {
                    table: key.to_owned(),
                    time_point,
                    marker,
                });
            }
        }
    }
}

/// The tier a substring match on the response text would suggest. Kept only
/// as an authoring cross-check for the explicit stored tier; `None` means
/// the text matches no known pattern and nothing can be cross-checked.
fn derive_tier(row: &Row) -> Option<ResponseTier> {
    let response = row.response.as_str();
    if response == "-" {
        Some(ResponseTier::NotApplicable)
    } else if response.starts_with("Optimal") {
        Some(ResponseTier::Optimal)
    } else if response.starts_with("Warning") {
        Some(ResponseTier::Warning)
    } else if response.contains("High risk") {
        Some(ResponseTier::HighRisk)
    } else if response.contains("MRD relapse") || response.contains("Molecular relapse") {
        Some(ResponseTier::Relapse)
    } else {
        None
    }
}
