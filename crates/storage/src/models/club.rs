use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A club entity that has entered at least one race.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Club {
    pub id: i64,
    pub name: String,
}
