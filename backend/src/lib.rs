//! givename backend
//!
//! Thin orchestration layer over the Google Generative Language API:
//! request validation -> prompt construction -> upstream call ->
//! response normalization/decoding -> reply.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::{Config, CorsConfig};
use crate::services::NameGenerator;

/// Shared application state: the read-only configuration lives in the
/// router layers, everything else is the generation capability.
pub struct AppState {
    pub generator: Arc<dyn NameGenerator>,
}

#[derive(OpenApi)]
#[openapi(
    paths(handlers::name::generate_names, handlers::health::health_check),
    components(schemas(
        models::NameRequest,
        models::NameSuggestion,
        models::CharacterReading,
        models::NameResponse,
    )),
    tags(
        (name = "Names", description = "Chinese name generation"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Assemble the full router: API routes, Swagger UI, CORS, tracing and the
/// inbound request deadline.
pub fn create_router(state: Arc<AppState>, config: &Config) -> Router {
    let api = Router::new()
        .route("/api/generate", post(handlers::name::generate_names))
        .route("/health", get(handlers::health::health_check))
        .with_state(state);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api)
        .layer(TimeoutLayer::new(Duration::from_secs(config.server.timeout_secs)))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&config.cors))
}

fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            },
        })
        .collect();

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|method| match method.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS method: {}", method);
                None
            },
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers([header::CONTENT_TYPE, header::ORIGIN])
}

#[cfg(test)]
mod tests;
