use sqlx::PgPool;
use storage::{
    error::Result,
    models::{Club, Flag, League, Trophy},
    repository::{
        club::ClubRepository, flag::FlagRepository, league::LeagueRepository,
        trophy::TrophyRepository,
    },
};

pub async fn list_trophies(pool: &PgPool) -> Result<Vec<Trophy>> {
    TrophyRepository::new(pool).list().await
}

pub async fn list_flags(pool: &PgPool) -> Result<Vec<Flag>> {
    FlagRepository::new(pool).list().await
}

pub async fn list_leagues(pool: &PgPool) -> Result<Vec<League>> {
    LeagueRepository::new(pool).list().await
}

pub async fn list_clubs(pool: &PgPool) -> Result<Vec<Club>> {
    ClubRepository::new(pool).list().await
}
