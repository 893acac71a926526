use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Site {
    #[schema(example = "f3f9a2d4-6a5e-4d0a-8a77-1f2e3d4c5b6a")]
    pub id: String,

    #[schema(example = "Zonuam Site")]
    pub name: String,

    #[schema(example = "Aizawl, Mizoram")]
    pub location: String,

    /// Owning user.
    pub user_id: String,

    #[schema(value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,
}
