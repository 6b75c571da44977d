use sqlx::PgPool;

use crate::dto::participant::{ParticipantResponse, PenaltyResponse};
use crate::error::Result;
use crate::models::{ParticipantRow, PenaltyRow};

pub struct ParticipantRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ParticipantRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Participants of a race with their penalties, ordered by final lap time.
    pub async fn list_by_race(&self, race_id: i64) -> Result<Vec<ParticipantResponse>> {
        let rows = sqlx::query_as::<_, ParticipantRow>(
            r#"
            SELECT p.id::bigint AS id, p.gender, p.category, p.distance::int AS distance,
                   COALESCE(p.laps::text[], '{}') AS laps,
                   p.lane::int AS lane, p.series::int AS series,
                   p.club_id::bigint AS club_id, e.name AS club_name,
                   p.club_name AS club_raw_name,
                   ((SELECT count(*) FROM penalty pe
                     WHERE pe.participant_id = p.id AND pe.disqualification) > 0) AS disqualified
            FROM participant p
            LEFT JOIN entity e ON p.club_id = e.id
            WHERE p.race_id = $1
            ORDER BY p.laps[ARRAY_UPPER(p.laps, 1)] ASC
            "#,
        )
        .bind(race_id)
        .fetch_all(self.pool)
        .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        let penalties = self.penalties_for(&ids).await?;

        let participants = rows.into_iter().map(ParticipantResponse::from).collect();
        Ok(attach_penalties(participants, penalties))
    }

    async fn penalties_for(&self, participant_ids: &[i64]) -> Result<Vec<PenaltyRow>> {
        let penalties = sqlx::query_as::<_, PenaltyRow>(
            r#"
            SELECT pe.participant_id::bigint AS participant_id, pe.penalty::int AS penalty,
                   pe.disqualification, pe.reason
            FROM penalty pe
            WHERE pe.participant_id = ANY($1)
            "#,
        )
        .bind(participant_ids)
        .fetch_all(self.pool)
        .await?;

        Ok(penalties)
    }
}

/// Hands each participant the penalties recorded against it, keeping the
/// order the store returned them in.
pub fn attach_penalties(
    mut participants: Vec<ParticipantResponse>,
    penalties: Vec<PenaltyRow>,
) -> Vec<ParticipantResponse> {
    for penalty in penalties {
        if let Some(participant) = participants
            .iter_mut()
            .find(|participant| participant.id == penalty.participant_id)
        {
            participant.penalties.push(PenaltyResponse::from(penalty));
        }
    }

    participants
}
