use axum::{Router, http::Method};
use storage::Database;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod catalog;
pub mod health;
pub mod races;

/// Every public route, with request tracing and permissive CORS.
pub fn router(db: Database) -> Router {
    let api = Router::new()
        .nest("/races", races::routes::routes())
        .merge(catalog::routes::routes());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .nest("/api", api)
        .merge(health::routes::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(db)
}
