use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct User {
    #[schema(example = "7e6f1c0a-2f69-4be8-9f3b-0a1c2d3e4f5a")]
    pub id: String,

    #[schema(example = "owner@worksite.com")]
    pub email: String,

    #[schema(example = "Site Owner")]
    pub name: String,

    /// manager, admin or viewer
    #[schema(example = "manager")]
    pub role: String,

    #[schema(example = "Zonuam Constructions", nullable = true)]
    pub company_name: Option<String>,

    #[schema(value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,

    /// Never serialized back to clients.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
}
