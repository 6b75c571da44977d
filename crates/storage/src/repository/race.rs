use sqlx::PgPool;

use crate::dto::race::RaceFilter;
use crate::error::{Result, StorageError};
use crate::models::RaceRow;
use crate::query::{RaceQuery, race_by_id_query};

pub struct RaceRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RaceRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// One page of races matching `filter`, plus the total number of matches.
    pub async fn list(&self, filter: &RaceFilter) -> Result<(Vec<RaceRow>, i64)> {
        let query = RaceQuery::new(filter);

        let races: Vec<RaceRow> = query
            .page_query()
            .build_query_as()
            .fetch_all(self.pool)
            .await?;

        let total = query
            .count_query()
            .build_query_scalar::<i64>()
            .fetch_one(self.pool)
            .await?;

        tracing::debug!(
            predicates = query.predicates().len(),
            returned = races.len(),
            total,
            "Listed races"
        );

        Ok((races, total))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<RaceRow> {
        let race = race_by_id_query(id)
            .build_query_as::<RaceRow>()
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(race)
    }
}
