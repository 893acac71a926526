use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;

/// Daily attendance status. Anything outside these four values is rejected
/// before it reaches the store.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    sqlx::Type,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Half,
    Absent,
    Holiday,
}

/// One entry per (worker, date); re-marking the same date overwrites the
/// status and audit fields of the existing entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct AttendanceEntry {
    pub id: String,

    pub worker_id: String,

    #[schema(example = "2025-06-01", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[schema(example = "present")]
    pub status: AttendanceStatus,

    /// User who marked or last re-marked this entry.
    pub marked_by: String,

    #[schema(value_type = String, format = "date-time")]
    pub marked_at: DateTime<Utc>,

    #[schema(value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,
}

impl AttendanceEntry {
    pub fn new(
        worker_id: &str,
        date: NaiveDate,
        status: AttendanceStatus,
        marked_by: &str,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            worker_id: worker_id.to_string(),
            date,
            status,
            marked_by: marked_by.to_string(),
            marked_at: now,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_the_four_known_values() {
        assert_eq!(
            "present".parse::<AttendanceStatus>().unwrap(),
            AttendanceStatus::Present
        );
        assert_eq!(
            "half".parse::<AttendanceStatus>().unwrap(),
            AttendanceStatus::Half
        );
        assert_eq!(
            "absent".parse::<AttendanceStatus>().unwrap(),
            AttendanceStatus::Absent
        );
        assert_eq!(
            "holiday".parse::<AttendanceStatus>().unwrap(),
            AttendanceStatus::Holiday
        );
    }

    #[test]
    fn unknown_status_does_not_parse() {
        assert!("late".parse::<AttendanceStatus>().is_err());
    }

    #[test]
    fn status_round_trips_as_lowercase() {
        assert_eq!(AttendanceStatus::Holiday.to_string(), "holiday");
    }
}
