use axum::{Json, extract::State};
use storage::{
    Database,
    models::{Club, Flag, League, Trophy},
};

use crate::error::ApiResult;

use super::services;

#[utoipa::path(
    get,
    path = "/api/trophies",
    responses(
        (status = 200, description = "Trophies awarded in at least one race", body = Vec<Trophy>),
        (status = 500, description = "Store failure")
    ),
    tag = "catalog"
)]
pub async fn list_trophies(State(db): State<Database>) -> ApiResult<Json<Vec<Trophy>>> {
    Ok(Json(services::list_trophies(db.pool()).await?))
}

#[utoipa::path(
    get,
    path = "/api/flags",
    responses(
        (status = 200, description = "Flags raced for at least once", body = Vec<Flag>),
        (status = 500, description = "Store failure")
    ),
    tag = "catalog"
)]
pub async fn list_flags(State(db): State<Database>) -> ApiResult<Json<Vec<Flag>>> {
    Ok(Json(services::list_flags(db.pool()).await?))
}

#[utoipa::path(
    get,
    path = "/api/leagues",
    responses(
        (status = 200, description = "Leagues with at least one race", body = Vec<League>),
        (status = 500, description = "Store failure")
    ),
    tag = "catalog"
)]
pub async fn list_leagues(State(db): State<Database>) -> ApiResult<Json<Vec<League>>> {
    Ok(Json(services::list_leagues(db.pool()).await?))
}

#[utoipa::path(
    get,
    path = "/api/clubs",
    responses(
        (status = 200, description = "Clubs with at least one participant", body = Vec<Club>),
        (status = 500, description = "Store failure")
    ),
    tag = "catalog"
)]
pub async fn list_clubs(State(db): State<Database>) -> ApiResult<Json<Vec<Club>>> {
    Ok(Json(services::list_clubs(db.pool()).await?))
}
