use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{ParticipantRow, PenaltyRow};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClubInfo {
    pub id: i64,
    pub name: Option<String>,
    /// Name as it was entered for this race, before normalization
    pub raw_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PenaltyResponse {
    #[serde(skip)]
    pub participant_id: i64,
    pub penalty: i32,
    pub disqualification: bool,
    pub reason: Option<String>,
}

impl From<PenaltyRow> for PenaltyResponse {
    fn from(row: PenaltyRow) -> Self {
        Self {
            participant_id: row.participant_id,
            penalty: row.penalty,
            disqualification: row.disqualification,
            reason: row.reason,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParticipantResponse {
    pub id: i64,
    pub gender: String,
    pub category: String,
    pub distance: Option<i32>,
    pub club: Option<ClubInfo>,
    pub disqualified: bool,
    /// Lap split times, in race order
    pub laps: Vec<String>,
    pub lane: Option<i32>,
    pub series: Option<i32>,
    pub penalties: Vec<PenaltyResponse>,
}

impl From<ParticipantRow> for ParticipantResponse {
    fn from(row: ParticipantRow) -> Self {
        let club = row.club_id.map(|id| ClubInfo {
            id,
            name: row.club_name,
            raw_name: row.club_raw_name,
        });

        Self {
            id: row.id,
            gender: row.gender,
            category: row.category,
            distance: row.distance,
            club,
            disqualified: row.disqualified,
            laps: row.laps,
            lane: row.lane,
            series: row.series,
            penalties: Vec::new(),
        }
    }
}
