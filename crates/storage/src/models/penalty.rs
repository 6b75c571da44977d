use sqlx::FromRow;

#[derive(Debug, Clone, Default, FromRow)]
pub struct PenaltyRow {
    pub participant_id: i64,
    pub penalty: i32,
    pub disqualification: bool,
    pub reason: Option<String>,
}
