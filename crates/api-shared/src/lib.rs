//! # API Shared
//!
//! Shared wire types for the MRD guide presentation layer.
//!
//! Contains:
//! - JSON response DTOs with OpenAPI schemas (`dto` module)
//! - The shared `HealthService`
//!
//! The DTOs are deliberately separate from the engine types in `mrd-core`:
//! the engine owns clinical meaning, this crate owns the wire shape.

pub mod dto;
pub mod health;

pub use dto::{
    BlockRes, FootnoteRes, GuidanceRes, HealthRes, RecommendationRes, RiskCategoriesRes,
    RiskCategoryRes, RowRes, SubgroupRes, SubgroupsRes, TableRes, TimePointRes, TimePointsRes,
};
pub use health::HealthService;
