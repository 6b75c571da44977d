use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::PaginatedResponse,
        race::{RaceFilter, RaceQueryParams, RaceResponse},
    },
};

use crate::error::WebError;

use super::services;

/// Path the pagination `next` link points at
const RACES_PATH: &str = "/races";

#[utoipa::path(
    get,
    path = "/api/races",
    params(RaceQueryParams),
    responses(
        (status = 200, description = "Races matching the filters, newest first", body = PaginatedResponse<RaceResponse>),
        (status = 500, description = "Store failure")
    ),
    tag = "races"
)]
pub async fn list_races(
    State(db): State<Database>,
    Query(params): Query<RaceQueryParams>,
) -> Result<Response, WebError> {
    let filter = RaceFilter::from(params);

    let (races, total) = services::list_races(db.pool(), &filter).await?;

    let response = PaginatedResponse::new(races, filter.page, filter.limit, total, RACES_PATH);

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/races/{race_id}",
    params(
        ("race_id" = i64, Path, description = "Race id")
    ),
    responses(
        (status = 200, description = "Race with its participants", body = RaceResponse),
        (status = 404, description = "Race not found"),
        (status = 500, description = "Store failure")
    ),
    tag = "races"
)]
pub async fn get_race(
    State(db): State<Database>,
    Path(race_id): Path<i64>,
) -> Result<Response, WebError> {
    let race = services::get_race(db.pool(), race_id).await?;

    Ok(Json(race).into_response())
}
