//! Recommendation assembly.
//!
//! Composes the resolution plan with the catalog's time-point entries into
//! renderable payloads. Everything here is a pure function of the catalog
//! and the selection; inconsistent or incomplete selections produce an
//! empty [`Recommendation`], never an error.

use crate::footnotes::referenced_markers;
use crate::plan::{resolve, ResolutionPlan};
use mrd_dataset::{Catalog, Guidance, MonitoringTable, TimePointEntry};
use mrd_types::{ResponseTier, TimePoint};

/// Column header per clinical domain, matched against the table title in
/// priority order; first match wins, MFC header is the fallback.
const COLUMN_HEADERS: [(&str, &str); 5] = [
    ("NPM1", "NPM1mut/ABL1 copies (%)"),
    ("CBF", "CBF mutant/ABL1 copies (%)"),
    ("PML", "PML::RARA/ABL1 copies (%)"),
    ("FLT3", "FLT3-ITD VAF (%)"),
    ("KMT2A", "KMT2A fusion/ABL1 copies (%)"),
];

const MFC_COLUMN_HEADER: &str = "MRD % (LAIP+ or DfN+ blasts/CD45+ cells)";

/// The assembled recommendation for one (subgroup, time point) selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Recommendation {
    /// Subgroup-level guidance banner, shown above all blocks.
    pub guidance: Option<Guidance>,

    /// Ordered display blocks. Empty means "no recommendation for this
    /// combination", which is an intentional, observable outcome.
    pub blocks: Vec<DisplayBlock>,
}

impl Recommendation {
    pub fn is_empty(&self) -> bool {
        self.guidance.is_none() && self.blocks.is_empty()
    }

    /// The display tables among the blocks, in order.
    pub fn tables(&self) -> impl Iterator<Item = &DisplayTable> {
        self.blocks.iter().filter_map(|b| match b {
            DisplayBlock::Table(t) => Some(t),
            DisplayBlock::Advisory { .. } => None,
        })
    }
}

/// One ordered element of a recommendation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayBlock {
    /// Free-standing advisory text (KMT2A-rearranged subgroups).
    Advisory { text: String },

    /// A resolved monitoring table for the selected time point.
    Table(DisplayTable),
}

/// A monitoring table resolved to one time point, ready for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayTable {
    /// Stable table key.
    pub key: String,

    /// Table title as published.
    pub title: String,

    /// Threshold column header for the table's clinical domain.
    pub column_header: String,

    /// The selected time point and its fixed label.
    pub time_point: TimePoint,
    pub time_point_label: String,

    /// Recommended assay and tissue for this time point.
    pub assay: String,
    pub tissue: String,

    /// Whether rows carry a tissue qualifier column (entry spans tissues).
    pub tissue_column: bool,

    /// Threshold rows in clinical precedence order.
    pub rows: Vec<DisplayRow>,

    /// Footnotes actually referenced by the visible rows and defined by this
    /// table, ordered ascending by marker.
    pub footnotes: Vec<Footnote>,
}

/// One displayable threshold row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayRow {
    pub tissue: Option<String>,
    pub threshold: String,
    pub definition: String,
    pub response: String,
    pub tier: ResponseTier,
}

/// A footnote marker together with its text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Footnote {
    pub marker: String,
    pub text: String,
}

/// Assemble the recommendation for a subgroup at a time point.
///
/// Returns an empty [`Recommendation`] when the subgroup is unknown or the
/// time point is not in the subgroup's valid list. For direct plans, bound
/// tables without an entry for the time point are silently omitted; an
/// advisory plan always contributes its advisory block first, with the
/// fallback table's entry after it when one exists.
pub fn assemble(catalog: &Catalog, subgroup_id: &str, time_point: TimePoint) -> Recommendation {
    let Some(subgroup) = catalog.subgroup(subgroup_id) else {
        return Recommendation::default();
    };
    if !subgroup.time_points.contains(&time_point) {
        tracing::debug!(
            subgroup = subgroup_id,
            time_point = %time_point,
            "time point not valid for subgroup, returning empty recommendation"
        );
        return Recommendation::default();
    }

    let mut blocks = Vec::new();
    match resolve(subgroup) {
        ResolutionPlan::Direct(keys) => {
            for key in keys {
                // A binding to a missing table is a dataset integrity
                // violation; tolerated here by omission, flagged by the
                // dataset validator.
                let Some(table) = catalog.table(key) else {
                    tracing::debug!(table = key, "bound table missing from catalog, skipping");
                    continue;
                };
                if let Some(entry) = table.entry(time_point) {
                    blocks.push(DisplayBlock::Table(display_table(
                        key, table, time_point, entry,
                    )));
                }
            }
        }
        ResolutionPlan::AdvisoryPlusFallback { advisory, fallback } => {
            blocks.push(DisplayBlock::Advisory {
                text: advisory.to_owned(),
            });
            if let Some(table) = catalog.table(fallback) {
                if let Some(entry) = table.entry(time_point) {
                    blocks.push(DisplayBlock::Table(display_table(
                        fallback, table, time_point, entry,
                    )));
                }
            }
        }
    }

    Recommendation {
        guidance: subgroup.guidance.clone(),
        blocks,
    }
}

fn display_table(
    key: &str,
    table: &MonitoringTable,
    time_point: TimePoint,
    entry: &TimePointEntry,
) -> DisplayTable {
    let footnotes = referenced_markers(&entry.rows)
        .into_iter()
        .filter_map(|marker| {
            // Referenced-but-undefined markers are dropped: the clinical
            // text may cite footnotes defined at a different scope.
            table.footnotes.get(&marker).map(|text| Footnote {
                marker,
                text: text.clone(),
            })
        })
        .collect();

    let tissue_column =
        entry.tissue.contains(" or ") && entry.rows.iter().any(|r| r.tissue.is_some());

    DisplayTable {
        key: key.to_owned(),
        title: table.title.clone(),
        column_header: column_header(&table.title).to_owned(),
        time_point,
        time_point_label: time_point.label().to_owned(),
        assay: entry.assay.clone(),
        tissue: entry.tissue.clone(),
        tissue_column,
        rows: entry
            .rows
            .iter()
            .map(|row| DisplayRow {
                tissue: row.tissue.clone(),
                threshold: row.threshold.clone(),
                definition: row.definition.clone(),
                response: row.response.clone(),
                tier: row.tier,
            })
            .collect(),
        footnotes,
    }
}

/// Threshold column header for a table, chosen by keyword priority over the
/// title; first match wins, generic MFC header otherwise.
fn column_header(title: &str) -> &'static str {
    COLUMN_HEADERS
        .iter()
        .find(|(keyword, _)| title.contains(keyword))
        .map(|(_, header)| *header)
        .unwrap_or(MFC_COLUMN_HEADER)
}
