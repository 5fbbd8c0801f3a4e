pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Boardroom API",
        version = "0.1.0",
        description = "API for Boardroom - an AI advisory panel for startup ideas"
    ),
    paths(
        routes::health_check,
        routes::orchestrate::orchestrate,
        routes::orchestrate::orchestrate_stream,
        routes::forge::start_forge_job,
        routes::forge::get_forge_job,
    ),
    components(schemas(
        routes::HealthResponse,
        routes::orchestrate::OrchestrateRequest,
        routes::orchestrate::OrchestrateResponse,
        routes::forge::ForgeRequest,
        routes::forge::ForgeStartResponse,
        boardroom_core::Advisor,
        boardroom_core::AdvisorResult,
        boardroom_core::Verdict,
        boardroom_core::Recommendation,
        boardroom_core::OverallVerdict,
        events::AdvisorRef,
        events::ProgressEvent,
        orchestrator::ArtifactKind,
        orchestrator::JobState,
        orchestrator::JobStatus,
        orchestrator::JobOutcome,
        orchestrator::StartedJob,
    )),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "orchestrate", description = "Advisory pipeline endpoints"),
        (name = "forge", description = "Artifact build job bridge"),
    )
)]
pub struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api/openapi.json", ApiDoc::openapi()))
        .route("/health", get(routes::health_check))
        .route("/api/orchestrate", post(routes::orchestrate::orchestrate))
        .route(
            "/api/orchestrate/stream",
            post(routes::orchestrate::orchestrate_stream),
        )
        .route("/api/forge", post(routes::forge::start_forge_job))
        .route("/api/forge/{id}", get(routes::forge::get_forge_job))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
