//! Route configuration and setup

use crate::api_doc::get_openapi_spec;
use crate::constants::{DOCS_PATH, HEALTH_PATH, OPENAPI_PATH, UPLOAD_PATH, VIDEOS_PATH};
use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use vidshelf_core::Config;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;

    let api_routes = Router::new()
        .route(UPLOAD_PATH, post(handlers::upload::upload_video))
        .route(VIDEOS_PATH, get(handlers::videos::list_videos))
        .route(HEALTH_PATH, get(handlers::health::health_check))
        .with_state(state)
        .route(OPENAPI_PATH, get(|| async { Json(get_openapi_spec()) }));

    let static_route = config.static_route().trim_end_matches('/');
    tracing::info!(
        route = %static_route,
        dir = %config.static_dir(),
        "Serving static files"
    );

    let app = api_routes
        .merge(utoipa_rapidoc::RapiDoc::new(OPENAPI_PATH).path(DOCS_PATH))
        .nest_service(static_route, ServeDir::new(config.static_dir()))
        // Upload size is enforced while streaming the multipart field; this
        // caps the whole request, including fields that are skipped.
        .layer(DefaultBodyLimit::max(config.max_request_body_bytes()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

/// Setup CORS configuration
fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];

    if config.cors_origins().iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any));
    }

    let origins = config
        .cors_origins()
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .map_err(|e| anyhow::anyhow!("Invalid CORS origin '{}': {}", o, e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(Any))
}
