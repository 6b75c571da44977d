use sqlx::FromRow;

#[derive(Debug, Clone, Default, FromRow)]
pub struct ParticipantRow {
    pub id: i64,
    pub gender: String,
    pub category: String,
    pub distance: Option<i32>,
    pub laps: Vec<String>,
    pub lane: Option<i32>,
    pub series: Option<i32>,
    pub club_id: Option<i64>,
    pub club_name: Option<String>,
    pub club_raw_name: Option<String>,
    pub disqualified: bool,
}
