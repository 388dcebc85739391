//! Shared vocabulary types for the MRD recommendation engine.
//!
//! These are the closed enumerations every other crate speaks: ELN risk
//! categories, assessment time points, and MRD response severity tiers.
//! They are deliberately small and dependency-light so that the dataset,
//! engine, and presentation crates can all share them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod footnote;

/// Errors that can occur when parsing vocabulary identifiers.
#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    /// The input was not a recognised risk category identifier.
    #[error("unknown risk category: {0:?}")]
    UnknownRiskCategory(String),

    /// The input was not a recognised time point identifier.
    #[error("unknown time point: {0:?}")]
    UnknownTimePoint(String),

    /// The input was not a recognised response tier identifier.
    #[error("unknown response tier: {0:?}")]
    UnknownResponseTier(String),
}

/// ELN 2022 risk category for AML.
///
/// The three categories are fixed by the guideline; every molecular subgroup
/// in the reference dataset belongs to exactly one of them.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Favorable,
    Intermediate,
    Adverse,
}

impl RiskCategory {
    /// All risk categories in guideline display order.
    pub const ALL: [RiskCategory; 3] = [
        RiskCategory::Favorable,
        RiskCategory::Intermediate,
        RiskCategory::Adverse,
    ];

    /// Stable identifier used in the dataset and on the wire.
    pub fn id(&self) -> &'static str {
        match self {
            RiskCategory::Favorable => "favorable",
            RiskCategory::Intermediate => "intermediate",
            RiskCategory::Adverse => "adverse",
        }
    }

    /// Human-readable label for selectors.
    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::Favorable => "Favorable",
            RiskCategory::Intermediate => "Intermediate",
            RiskCategory::Adverse => "Adverse",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for RiskCategory {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "favorable" => Ok(RiskCategory::Favorable),
            "intermediate" => Ok(RiskCategory::Intermediate),
            "adverse" => Ok(RiskCategory::Adverse),
            other => Err(VocabularyError::UnknownRiskCategory(other.to_owned())),
        }
    }
}

/// MRD assessment time point.
///
/// Global across all subgroups; each subgroup declares which subset applies
/// to it. Declaration order here is chronological treatment order, which is
/// also the display order.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimePoint {
    #[serde(rename = "baseline")]
    Baseline,
    #[serde(rename = "cycles_2")]
    Cycles2,
    #[serde(rename = "eot")]
    Eot,
    #[serde(rename = "follow_up")]
    FollowUp,
    #[serde(rename = "pre_hct")]
    PreHct,
}

impl TimePoint {
    /// Stable identifier used in the dataset and on the wire.
    pub fn id(&self) -> &'static str {
        match self {
            TimePoint::Baseline => "baseline",
            TimePoint::Cycles2 => "cycles_2",
            TimePoint::Eot => "eot",
            TimePoint::FollowUp => "follow_up",
            TimePoint::PreHct => "pre_hct",
        }
    }

    /// Fixed human-readable label from the guideline.
    pub fn label(&self) -> &'static str {
        match self {
            TimePoint::Baseline => "Baseline",
            TimePoint::Cycles2 => "After 2 cycles of IC / Pre-HSCT",
            TimePoint::Eot => "End of treatment",
            TimePoint::FollowUp => "Follow-up",
            TimePoint::PreHct => "Pre-alloHCT",
        }
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TimePoint {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "baseline" => Ok(TimePoint::Baseline),
            "cycles_2" => Ok(TimePoint::Cycles2),
            "eot" => Ok(TimePoint::Eot),
            "follow_up" => Ok(TimePoint::FollowUp),
            "pre_hct" => Ok(TimePoint::PreHct),
            other => Err(VocabularyError::UnknownTimePoint(other.to_owned())),
        }
    }
}

/// Severity tier of an MRD response row.
///
/// Stored explicitly per row in the dataset rather than re-derived from the
/// free-text response string, so that presentation layers can apply styling
/// from a closed enumeration. `NotApplicable` marks rows that carry no
/// clinical response, such as baseline assessment rows.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResponseTier {
    Optimal,
    Warning,
    HighRisk,
    Relapse,
    NotApplicable,
}

impl ResponseTier {
    /// Stable identifier used in the dataset and on the wire.
    pub fn id(&self) -> &'static str {
        match self {
            ResponseTier::Optimal => "optimal",
            ResponseTier::Warning => "warning",
            ResponseTier::HighRisk => "high_risk",
            ResponseTier::Relapse => "relapse",
            ResponseTier::NotApplicable => "not_applicable",
        }
    }
}

impl fmt::Display for ResponseTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ResponseTier {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "optimal" => Ok(ResponseTier::Optimal),
            "warning" => Ok(ResponseTier::Warning),
            "high_risk" => Ok(ResponseTier::HighRisk),
            "relapse" => Ok(ResponseTier::Relapse),
            "not_applicable" => Ok(ResponseTier::NotApplicable),
            other => Err(VocabularyError::UnknownResponseTier(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_category_round_trips_through_id() {
        for risk in RiskCategory::ALL {
            assert_eq!(risk.id().parse::<RiskCategory>().unwrap(), risk);
        }
    }

    #[test]
    fn test_risk_category_rejects_unknown() {
        let err = "fav".parse::<RiskCategory>().expect_err("should reject");
        assert!(matches!(err, VocabularyError::UnknownRiskCategory(s) if s == "fav"));
    }

    #[test]
    fn test_time_point_ids_match_dataset_keys() {
        assert_eq!(TimePoint::Cycles2.id(), "cycles_2");
        assert_eq!(TimePoint::FollowUp.id(), "follow_up");
        assert_eq!(TimePoint::PreHct.id(), "pre_hct");
    }

    #[test]
    fn test_time_point_serde_uses_stable_ids() {
        let yaml = serde_yaml::to_string(&TimePoint::Cycles2).unwrap();
        assert_eq!(yaml.trim(), "cycles_2");
        let back: TimePoint = serde_yaml::from_str("follow_up").unwrap();
        assert_eq!(back, TimePoint::FollowUp);
    }

    #[test]
    fn test_time_point_order_is_chronological() {
        assert!(TimePoint::Baseline < TimePoint::Cycles2);
        assert!(TimePoint::Cycles2 < TimePoint::Eot);
        assert!(TimePoint::Eot < TimePoint::FollowUp);
        assert!(TimePoint::FollowUp < TimePoint::PreHct);
    }

    #[test]
    fn test_response_tier_round_trips_through_id() {
        for tier in [
            ResponseTier::Optimal,
            ResponseTier::Warning,
            ResponseTier::HighRisk,
            ResponseTier::Relapse,
            ResponseTier::NotApplicable,
        ] {
            assert_eq!(tier.id().parse::<ResponseTier>().unwrap(), tier);
        }
    }
}
