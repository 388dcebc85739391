//! Wire model for the MRD reference catalog.
//!
//! These types mirror the YAML catalog shape one-to-one. Deserialisation is
//! strict (`deny_unknown_fields`) so authoring typos fail at load rather than
//! silently dropping content. Ordering rules:
//! - `Catalog::subgroups` is display order within each risk category.
//! - `Subgroup::tables` is clinical precedence ("assay A then assay B") and
//!   must be preserved verbatim downstream.
//! - `TimePointEntry::rows` is clinical precedence, never sorted.

use mrd_types::{ResponseTier, RiskCategory, TimePoint};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The full reference catalog: subgroups with their table bindings, plus the
/// monitoring tables themselves.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    /// All molecular subgroups, in display order.
    pub subgroups: Vec<Subgroup>,

    /// Monitoring tables keyed by stable table key.
    pub tables: BTreeMap<String, MonitoringTable>,
}

impl Catalog {
    /// Look up a subgroup by its stable identifier.
    pub fn subgroup(&self, id: &str) -> Option<&Subgroup> {
        self.subgroups.iter().find(|s| s.id == id)
    }

    /// Look up a monitoring table by its stable key.
    pub fn table(&self, key: &str) -> Option<&MonitoringTable> {
        self.tables.get(key)
    }
}

/// A molecular subgroup within one ELN risk category.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Subgroup {
    /// Stable identifier (for example "NPM1mut_wo_FLT3ITD").
    pub id: String,

    /// Human-readable selector label.
    pub label: String,

    /// The risk category this subgroup belongs to.
    pub risk: RiskCategory,

    /// Time points at which this subgroup is assessed, in chronological
    /// order. Always non-empty in a valid catalog.
    pub time_points: Vec<TimePoint>,

    /// Monitoring table keys bound to this subgroup, in recommendation
    /// order. Always non-empty in a valid catalog.
    pub tables: Vec<String>,

    /// Optional guidance banner shown above the tables for this subgroup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidance: Option<Guidance>,
}

/// Free-text guidance shown above the recommendation tables for a subgroup.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Guidance {
    pub heading: String,
    pub body: String,
}

/// One monitoring table (one assay modality's threshold scheme).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MonitoringTable {
    /// Table title as published.
    pub title: String,

    /// Per-time-point recommendation entries. Partial: a table covers only
    /// the time points the guideline defines thresholds for.
    pub time_points: BTreeMap<TimePoint, TimePointEntry>,

    /// Footnote text keyed by marker ("1".."9"). May be empty.
    pub footnotes: BTreeMap<String, String>,
}

impl MonitoringTable {
    /// The entry for a time point, if this table covers it.
    pub fn entry(&self, time_point: TimePoint) -> Option<&TimePointEntry> {
        self.time_points.get(&time_point)
    }
}

/// The recommendation for one table at one time point.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TimePointEntry {
    /// Recommended assay name. May carry footnote glyphs; those are display
    /// text, not harvested references.
    pub assay: String,

    /// Recommended tissue, possibly spanning alternatives ("PB or BM").
    pub tissue: String,

    /// Threshold rows in clinical precedence order.
    pub rows: Vec<Row>,
}

/// One threshold row of a monitoring table.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Row {
    /// Tissue qualifier, present only when the owning entry's tissue spans
    /// alternatives and this row applies to one of them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tissue: Option<String>,

    /// Threshold text. May embed footnote glyphs (bare or after a capital
    /// placeholder letter such as "A¹").
    pub threshold: String,

    /// Definition text. May embed footnote glyphs.
    pub definition: String,

    /// Response text as published ("-" for rows with no clinical response).
    pub response: String,

    /// Explicit severity tier for this row.
    pub tier: ResponseTier,
}
