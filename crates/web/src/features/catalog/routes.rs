use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{list_clubs, list_flags, list_leagues, list_trophies};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/trophies", get(list_trophies))
        .route("/flags", get(list_flags))
        .route("/leagues", get(list_leagues))
        .route("/clubs", get(list_clubs))
}
