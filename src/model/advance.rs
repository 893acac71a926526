use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Cash advance handed to a worker. Multiple advances on the same date
/// accumulate; nothing is overwritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct AdvanceEntry {
    pub id: String,

    pub worker_id: String,

    #[schema(example = 200.0)]
    pub amount: f64,

    #[schema(example = "2025-06-03", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[schema(value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,
}

impl AdvanceEntry {
    pub fn new(worker_id: &str, amount: f64, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            worker_id: worker_id.to_string(),
            amount,
            date,
            created_at: Utc::now(),
        }
    }
}
