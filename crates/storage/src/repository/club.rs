use sqlx::PgPool;

use crate::error::Result;
use crate::models::Club;

const CLUB_TYPE: &str = "CLUB";

pub struct ClubRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ClubRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Club entities that entered at least one race, by normalized name
    pub async fn list(&self) -> Result<Vec<Club>> {
        let clubs = sqlx::query_as::<_, Club>(
            r#"
            SELECT e.id::bigint AS id, e.name
            FROM entity e
            WHERE e.type = $1
              AND EXISTS (SELECT 1 FROM participant p WHERE p.club_id = e.id)
            ORDER BY e.normalized_name
            "#,
        )
        .bind(CLUB_TYPE)
        .fetch_all(self.pool)
        .await?;

        Ok(clubs)
    }
}
