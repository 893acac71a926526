use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": "b1c2d3e4-f5a6-4b7c-8d9e-0f1a2b3c4d5e",
        "name": "Lalrinmawia",
        "phone": "+919612345678",
        "role": "mason",
        "daily_rate": 600.0,
        "site_id": "f3f9a2d4-6a5e-4d0a-8a77-1f2e3d4c5b6a",
        "user_id": "7e6f1c0a-2f69-4be8-9f3b-0a1c2d3e4f5a",
        "status": "active"
    })
)]
pub struct Worker {
    pub id: String,

    #[schema(example = "Lalrinmawia")]
    pub name: String,

    #[schema(example = "+919612345678", nullable = true)]
    pub phone: Option<String>,

    #[schema(example = "mason", nullable = true)]
    pub role: Option<String>,

    /// Pay earned for one full present day.
    #[schema(example = 600.0)]
    pub daily_rate: f64,

    pub site_id: String,

    /// Owning user; every ledger operation checks this against the principal.
    pub user_id: String,

    /// active or inactive
    #[schema(example = "active")]
    pub status: String,

    #[schema(value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,
}
