use sqlx::PgPool;

use crate::error::Result;
use crate::models::Trophy;

pub struct TrophyRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TrophyRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Trophies awarded in at least one race
    pub async fn list(&self) -> Result<Vec<Trophy>> {
        let trophies = sqlx::query_as::<_, Trophy>(
            r#"
            SELECT t.id::bigint AS id, t.name
            FROM trophy t
            WHERE EXISTS (SELECT 1 FROM race r WHERE r.trophy_id = t.id)
            ORDER BY t.name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(trophies)
    }
}
