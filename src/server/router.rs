use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::handlers::{health_handler, mass_shootings_handler, school_shootings_handler};
use super::state::AppState;

pub const SCHOOL_SHOOTINGS_PATH: &str = "/wikipedia-school-shootings";
pub const MASS_SHOOTINGS_PATH: &str = "/wikipedia-mass-shootings-pre-2018";

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route(SCHOOL_SHOOTINGS_PATH, get(school_shootings_handler))
        .route(MASS_SHOOTINGS_PATH, get(mass_shootings_handler))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
