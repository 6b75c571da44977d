use sqlx::PgPool;

use crate::error::Result;
use crate::models::League;

pub struct LeagueRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> LeagueRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Leagues with at least one race
    pub async fn list(&self) -> Result<Vec<League>> {
        let leagues = sqlx::query_as::<_, League>(
            r#"
            SELECT l.id::bigint AS id, l.name, l.gender, l.symbol
            FROM league l
            WHERE EXISTS (SELECT 1 FROM race r WHERE r.league_id = l.id)
            ORDER BY l.name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(leagues)
    }
}
