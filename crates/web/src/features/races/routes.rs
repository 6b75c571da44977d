use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_race, list_races};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_races))
        .route("/:race_id", get(get_race))
}
