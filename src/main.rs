use axum::{
    Router,
    extract::{Path, Query, State},
    response::Json,
    routing::get,
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::{IntoParams, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    BlockRes, FootnoteRes, GuidanceRes, HealthRes, HealthService, RecommendationRes,
    RiskCategoriesRes, RiskCategoryRes, RowRes, SubgroupRes, SubgroupsRes, TableRes, TimePointRes,
    TimePointsRes,
};
use mrd_dataset::Catalog;
use mrd_types::RiskCategory;

/// Application state shared across REST API handlers.
///
/// The engine is stateless over the process-wide catalog, so the state is
/// just that shared reference.
#[derive(Clone, Copy)]
struct AppState {
    catalog: &'static Catalog,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, risk_categories, subgroups, time_points, recommendation),
    components(schemas(
        HealthRes,
        RiskCategoriesRes,
        RiskCategoryRes,
        SubgroupsRes,
        SubgroupRes,
        TimePointsRes,
        TimePointRes,
        RecommendationRes,
        GuidanceRes,
        BlockRes,
        TableRes,
        RowRes,
        FootnoteRes
    ))
)]
struct ApiDoc;

/// Main entry point for the MRD guide REST server.
///
/// Serves the selector lookups and the recommendation endpoint consumed by
/// the selector UI, plus Swagger UI for exploration.
///
/// # Environment Variables
/// - `MRD_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("mrd=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("MRD_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    // Force the catalog to load (and its validation warnings to log) before
    // accepting traffic.
    let catalog = mrd_dataset::catalog();
    tracing::info!(
        "++ Starting MRD guide REST on {} ({} subgroups, {} tables)",
        rest_addr,
        catalog.subgroups.len(),
        catalog.tables.len()
    );

    let app = Router::new()
        .route("/health", get(health))
        .route("/risk-categories", get(risk_categories))
        .route("/risk-categories/:risk/subgroups", get(subgroups))
        .route("/subgroups/:subgroup/time-points", get(time_points))
        .route("/recommendations", get(recommendation))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(AppState { catalog });

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint.
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/risk-categories",
    responses(
        (status = 200, description = "All ELN risk categories", body = RiskCategoriesRes)
    )
)]
/// List the ELN risk categories in guideline order.
async fn risk_categories(State(_state): State<AppState>) -> Json<RiskCategoriesRes> {
    Json(RiskCategoriesRes {
        risk_categories: RiskCategory::ALL
            .into_iter()
            .map(RiskCategoryRes::from)
            .collect(),
    })
}

#[utoipa::path(
    get,
    path = "/risk-categories/{risk}/subgroups",
    params(
        ("risk" = String, Path, description = "Risk category id")
    ),
    responses(
        (status = 200, description = "Subgroups for the risk category; empty for unknown ids", body = SubgroupsRes)
    )
)]
/// List the molecular subgroups valid for a risk category.
///
/// Unknown risk identifiers yield an empty list rather than an error, so the
/// selector UI can treat every upstream state uniformly.
async fn subgroups(State(state): State<AppState>, Path(risk): Path<String>) -> Json<SubgroupsRes> {
    Json(SubgroupsRes {
        subgroups: mrd_core::valid_subgroups(state.catalog, &risk)
            .into_iter()
            .map(SubgroupRes::from)
            .collect(),
    })
}

#[utoipa::path(
    get,
    path = "/subgroups/{subgroup}/time-points",
    params(
        ("subgroup" = String, Path, description = "Subgroup id")
    ),
    responses(
        (status = 200, description = "Time points for the subgroup; empty for unknown ids", body = TimePointsRes)
    )
)]
/// List the assessment time points valid for a subgroup.
async fn time_points(
    State(state): State<AppState>,
    Path(subgroup): Path<String>,
) -> Json<TimePointsRes> {
    Json(TimePointsRes {
        time_points: mrd_core::valid_time_points(state.catalog, &subgroup)
            .iter()
            .copied()
            .map(TimePointRes::from)
            .collect(),
    })
}

/// Query parameters for the recommendation endpoint. Each part may be empty
/// or absent; an incomplete selection resolves to an empty recommendation.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
struct RecommendationQuery {
    #[serde(default)]
    risk: String,
    #[serde(default)]
    subgroup: String,
    #[serde(default)]
    time_point: String,
}

#[utoipa::path(
    get,
    path = "/recommendations",
    params(RecommendationQuery),
    responses(
        (status = 200, description = "Resolved recommendation; empty blocks mean no recommendation", body = RecommendationRes)
    )
)]
/// Resolve the MRD monitoring recommendation for a full selection.
///
/// The engine re-validates the whole selection chain, so inconsistent or
/// stale combinations come back as an empty recommendation, never an error.
async fn recommendation(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
) -> Json<RecommendationRes> {
    let rec = mrd_core::resolve_selection(
        state.catalog,
        &query.risk,
        &query.subgroup,
        &query.time_point,
    );
    Json(RecommendationRes::from(&rec))
}
