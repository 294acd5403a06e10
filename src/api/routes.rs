use std::any::Any;

use axum::{
    extract::Request,
    http::{header, Method, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, IntoMakeService},
    Json, Router, ServiceExt,
};
use tower::{Layer, ServiceBuilder};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

use crate::error::internal_error_body;
use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};
use crate::models::{HEALTH_PATH, ROOT_PATH, SEARCH_PATH};

use super::handlers;
use super::AppState;

/// Creates the servable application
///
/// Trailing slashes are trimmed before routing, so `/health/` reaches the
/// health check. This has to wrap the router from the outside: layers added
/// with `Router::layer` run after the route has already been chosen.
pub fn create_app(state: AppState) -> IntoMakeService<NormalizePath<Router>> {
    let app = NormalizePathLayer::trim_trailing_slash().layer(create_router(state));
    ServiceExt::<Request>::into_make_service(app)
}

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(ROOT_PATH, get(handlers::root).fallback(handlers::not_found))
        .route(
            SEARCH_PATH,
            get(handlers::ytsearch).fallback(handlers::not_found),
        )
        .route(
            HEALTH_PATH,
            get(handlers::health_check).fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(cors_layer())
                // Converts Trace's response body back to `Body`, which `Cors` requires to be `Default`
                .map_response(IntoResponse::into_response)
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
}

/// Any origin; the methods and headers browser clients send
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Last-resort handler for a panicking request
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };

    tracing::error!(error = %message, "YouTube search service error");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(internal_error_body(&message)),
    )
        .into_response()
}
