//! JSON wire DTOs for the REST API.
//!
//! Flat, schema-annotated mirrors of the engine's display payloads. Enum
//! vocabulary values (risk, time point, tier) travel as their stable string
//! identifiers.

use mrd_core::{DisplayBlock, DisplayRow, DisplayTable, Footnote, Recommendation};
use mrd_dataset::{Guidance, Subgroup};
use mrd_types::{RiskCategory, TimePoint};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// One selectable risk category.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
pub struct RiskCategoryRes {
    /// Stable identifier ("favorable", "intermediate", "adverse").
    pub id: String,
    pub label: String,
}

impl From<RiskCategory> for RiskCategoryRes {
    fn from(risk: RiskCategory) -> Self {
        Self {
            id: risk.id().to_owned(),
            label: risk.label().to_owned(),
        }
    }
}

/// All risk categories, in guideline order.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
pub struct RiskCategoriesRes {
    pub risk_categories: Vec<RiskCategoryRes>,
}

/// One selectable molecular subgroup.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
pub struct SubgroupRes {
    pub id: String,
    pub label: String,
    /// Risk category identifier the subgroup belongs to.
    pub risk: String,
}

impl From<&Subgroup> for SubgroupRes {
    fn from(subgroup: &Subgroup) -> Self {
        Self {
            id: subgroup.id.clone(),
            label: subgroup.label.clone(),
            risk: subgroup.risk.id().to_owned(),
        }
    }
}

/// Subgroups valid for a risk category, in display order.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
pub struct SubgroupsRes {
    pub subgroups: Vec<SubgroupRes>,
}

/// One selectable assessment time point.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
pub struct TimePointRes {
    /// Stable identifier ("baseline", "cycles_2", ...).
    pub id: String,
    pub label: String,
}

impl From<TimePoint> for TimePointRes {
    fn from(time_point: TimePoint) -> Self {
        Self {
            id: time_point.id().to_owned(),
            label: time_point.label().to_owned(),
        }
    }
}

/// Time points valid for a subgroup, in chronological order.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
pub struct TimePointsRes {
    pub time_points: Vec<TimePointRes>,
}

/// Subgroup-level guidance banner.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
pub struct GuidanceRes {
    pub heading: String,
    pub body: String,
}

impl From<&Guidance> for GuidanceRes {
    fn from(guidance: &Guidance) -> Self {
        Self {
            heading: guidance.heading.clone(),
            body: guidance.body.clone(),
        }
    }
}

/// A footnote marker with its text.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
pub struct FootnoteRes {
    pub marker: String,
    pub text: String,
}

impl From<&Footnote> for FootnoteRes {
    fn from(footnote: &Footnote) -> Self {
        Self {
            marker: footnote.marker.clone(),
            text: footnote.text.clone(),
        }
    }
}

/// One threshold row.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
pub struct RowRes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tissue: Option<String>,
    pub threshold: String,
    pub definition: String,
    pub response: String,
    /// Severity tier identifier ("optimal", "warning", "high_risk",
    /// "relapse", "not_applicable") for consistent styling.
    pub tier: String,
}

impl From<&DisplayRow> for RowRes {
    fn from(row: &DisplayRow) -> Self {
        Self {
            tissue: row.tissue.clone(),
            threshold: row.threshold.clone(),
            definition: row.definition.clone(),
            response: row.response.clone(),
            tier: row.tier.id().to_owned(),
        }
    }
}

/// A monitoring table resolved to the selected time point.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
pub struct TableRes {
    pub key: String,
    pub title: String,
    pub column_header: String,
    pub time_point: String,
    pub time_point_label: String,
    pub assay: String,
    pub tissue: String,
    pub tissue_column: bool,
    pub rows: Vec<RowRes>,
    pub footnotes: Vec<FootnoteRes>,
}

impl From<&DisplayTable> for TableRes {
    fn from(table: &DisplayTable) -> Self {
        Self {
            key: table.key.clone(),
            title: table.title.clone(),
            column_header: table.column_header.clone(),
            time_point: table.time_point.id().to_owned(),
            time_point_label: table.time_point_label.clone(),
            assay: table.assay.clone(),
            tissue: table.tissue.clone(),
            tissue_column: table.tissue_column,
            rows: table.rows.iter().map(RowRes::from).collect(),
            footnotes: table.footnotes.iter().map(FootnoteRes::from).collect(),
        }
    }
}

/// One ordered display block of a recommendation.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockRes {
    /// Free-standing advisory text.
    Advisory { text: String },

    /// A resolved monitoring table.
    Table { table: TableRes },
}

impl From<&DisplayBlock> for BlockRes {
    fn from(block: &DisplayBlock) -> Self {
        match block {
            DisplayBlock::Advisory { text } => BlockRes::Advisory { text: text.clone() },
            DisplayBlock::Table(table) => BlockRes::Table {
                table: TableRes::from(table),
            },
        }
    }
}

/// The resolved recommendation for a full selection.
///
/// An empty `blocks` list with no guidance means no recommendation exists
/// for the combination; that is a normal outcome, not an error.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
pub struct RecommendationRes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidance: Option<GuidanceRes>,
    pub blocks: Vec<BlockRes>,
}

impl From<&Recommendation> for RecommendationRes {
    fn from(rec: &Recommendation) -> Self {
        Self {
            guidance: rec.guidance.as_ref().map(GuidanceRes::from),
            blocks: rec.blocks.iter().map(BlockRes::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_res_mirrors_block_order() {
        let rec = mrd_core::recommendations("intermediate", "KMT2A_MLLT3", "eot");
        let res = RecommendationRes::from(&rec);
        assert!(matches!(res.blocks[0], BlockRes::Advisory { .. }));
        match &res.blocks[1] {
            BlockRes::Table { table } => {
                assert_eq!(table.key, "MFC");
                assert_eq!(table.time_point, "eot");
            }
            other => panic!("expected table block, got {other:?}"),
        }
        assert!(res.guidance.is_some());
    }

    #[test]
    fn test_row_res_carries_tier_identifier() {
        let rec = mrd_core::recommendations("favorable", "NPM1mut_wo_FLT3ITD", "eot");
        let res = RecommendationRes::from(&rec);
        let BlockRes::Table { table } = &res.blocks[0] else {
            panic!("expected table block");
        };
        let tiers: Vec<&str> = table.rows.iter().map(|r| r.tier.as_str()).collect();
        assert_eq!(tiers, vec!["optimal", "warning", "high_risk"]);
    }
}
