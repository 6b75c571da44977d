use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct League {
    pub id: i64,
    pub name: String,
    pub gender: Option<String>,
    pub symbol: String,
}
