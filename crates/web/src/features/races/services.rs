use sqlx::PgPool;
use storage::{
    dto::race::{RaceFilter, RaceResponse},
    error::Result,
    repository::{participant::ParticipantRepository, race::RaceRepository},
};

/// One page of presented races and the total number of matches
pub async fn list_races(pool: &PgPool, filter: &RaceFilter) -> Result<(Vec<RaceResponse>, i64)> {
    let repo = RaceRepository::new(pool);
    let (rows, total) = repo.list(filter).await?;

    Ok((rows.into_iter().map(RaceResponse::from).collect(), total))
}

/// A race with its participants and their penalties
pub async fn get_race(pool: &PgPool, race_id: i64) -> Result<RaceResponse> {
    let row = RaceRepository::new(pool).find_by_id(race_id).await?;
    let participants = ParticipantRepository::new(pool)
        .list_by_race(race_id)
        .await?;

    let mut race = RaceResponse::from(row);
    race.participants = Some(participants);

    Ok(race)
}
