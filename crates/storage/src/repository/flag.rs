use sqlx::PgPool;

use crate::error::Result;
use crate::models::Flag;

pub struct FlagRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> FlagRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Flags raced for at least once
    pub async fn list(&self) -> Result<Vec<Flag>> {
        let flags = sqlx::query_as::<_, Flag>(
            r#"
            SELECT f.id::bigint AS id, f.name
            FROM flag f
            WHERE EXISTS (SELECT 1 FROM race r WHERE r.flag_id = f.id)
            ORDER BY f.name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(flags)
    }
}
