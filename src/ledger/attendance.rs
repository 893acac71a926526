//! Attendance Ledger: per-worker, per-date status entries with at most one
//! entry per (worker, date) pair.

use chrono::{NaiveDate, Utc};

use crate::auth::auth::AuthUser;
use crate::error::ApiError;
use crate::ledger::owned_worker;
use crate::model::attendance::{AttendanceEntry, AttendanceStatus};
use crate::store::{DateRange, RecordStore};

fn parse_status(status: &str) -> Result<AttendanceStatus, ApiError> {
    status.parse().map_err(|_| {
        ApiError::invalid_argument(format!(
            "unknown attendance status '{status}', expected present, half, absent or holiday"
        ))
    })
}

/// Marks a worker's attendance for one date. Re-marking an already-marked
/// date overwrites the status and audit fields of the existing entry; the
/// lookup-then-write pair is last-write-wins under concurrent marks, which is
/// accepted.
pub async fn record_status<S: RecordStore>(
    store: &S,
    principal: &AuthUser,
    worker_id: &str,
    date: NaiveDate,
    status: &str,
) -> Result<AttendanceEntry, ApiError> {
    let status = parse_status(status)?;
    let worker = owned_worker(store, principal, worker_id).await?;

    let existing = store
        .find_attendance(&worker.id, Some(DateRange::new(date, date)))
        .await?
        .into_iter()
        .next();

    let entry = match existing {
        Some(mut entry) => {
            entry.status = status;
            entry.marked_by = principal.user_id.clone();
            entry.marked_at = Utc::now();
            entry
        }
        None => AttendanceEntry::new(&worker.id, date, status, &principal.user_id),
    };

    store.upsert_attendance(&entry).await?;
    Ok(entry)
}

/// The worker's entries in descending date order, optionally restricted to an
/// inclusive range.
pub async fn query_range<S: RecordStore>(
    store: &S,
    principal: &AuthUser,
    worker_id: &str,
    range: Option<DateRange>,
) -> Result<Vec<AttendanceEntry>, ApiError> {
    let worker = owned_worker(store, principal, worker_id).await?;
    Ok(store.find_attendance(&worker.id, range).await?)
}

/// Overwrites an entry located by its own id. Unlike the by-worker flows,
/// an existing entry whose worker belongs to someone else surfaces as
/// `PermissionDenied` rather than `NotFound`.
pub async fn update_by_id<S: RecordStore>(
    store: &S,
    principal: &AuthUser,
    attendance_id: &str,
    status: &str,
) -> Result<AttendanceEntry, ApiError> {
    let status = parse_status(status)?;

    let mut entry = store
        .find_attendance_by_id(attendance_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Attendance record"))?;

    if store
        .find_worker(&entry.worker_id, &principal.user_id)
        .await?
        .is_none()
    {
        return Err(ApiError::PermissionDenied);
    }

    entry.status = status;
    entry.marked_by = principal.user_id.clone();
    entry.marked_at = Utc::now();

    store.upsert_attendance(&entry).await?;
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::testutil::{principal, seeded_store};

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[actix_web::test]
    async fn remarking_a_date_overwrites_instead_of_duplicating() {
        let store = seeded_store();
        let u1 = principal("u1");

        let first = record_status(&store, &u1, "w1", d("2025-06-01"), "present")
            .await
            .unwrap();
        let second = record_status(&store, &u1, "w1", d("2025-06-01"), "absent")
            .await
            .unwrap();

        assert_eq!(second.id, first.id);
        let entries = query_range(&store, &u1, "w1", None).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].status, AttendanceStatus::Absent);
    }

    #[actix_web::test]
    async fn unknown_status_is_rejected_before_any_lookup() {
        let store = seeded_store();
        let err = record_status(&store, &principal("u1"), "w1", d("2025-06-01"), "late")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument { .. }));
    }

    #[actix_web::test]
    async fn marking_a_foreign_worker_is_not_found() {
        let store = seeded_store();
        let err = record_status(&store, &principal("u1"), "w2", d("2025-06-01"), "present")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound { .. }));
    }

    #[actix_web::test]
    async fn disjoint_ranges_partition_the_combined_range() {
        let store = seeded_store();
        let u1 = principal("u1");
        for (day, status) in [
            ("2025-06-01", "present"),
            ("2025-06-05", "half"),
            ("2025-06-12", "absent"),
            ("2025-06-20", "holiday"),
        ] {
            record_status(&store, &u1, "w1", d(day), status).await.unwrap();
        }

        let first_half = query_range(
            &store,
            &u1,
            "w1",
            Some(DateRange::new(d("2025-06-01"), d("2025-06-10"))),
        )
        .await
        .unwrap();
        let second_half = query_range(
            &store,
            &u1,
            "w1",
            Some(DateRange::new(d("2025-06-11"), d("2025-06-30"))),
        )
        .await
        .unwrap();
        let combined = query_range(
            &store,
            &u1,
            "w1",
            Some(DateRange::new(d("2025-06-01"), d("2025-06-30"))),
        )
        .await
        .unwrap();

        assert_eq!(first_half.len() + second_half.len(), combined.len());
        for entry in &first_half {
            assert!(!second_half.contains(entry));
        }
    }

    #[actix_web::test]
    async fn absent_bounds_return_everything() {
        let store = seeded_store();
        let u1 = principal("u1");
        record_status(&store, &u1, "w1", d("2025-06-01"), "present").await.unwrap();
        record_status(&store, &u1, "w1", d("2025-07-01"), "present").await.unwrap();

        let all = query_range(&store, &u1, "w1", None).await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all[0].date > all[1].date);
    }

    #[actix_web::test]
    async fn update_by_id_overwrites_status_and_audit_fields() {
        let store = seeded_store();
        let u1 = principal("u1");
        let entry = record_status(&store, &u1, "w1", d("2025-06-01"), "present")
            .await
            .unwrap();

        let updated = update_by_id(&store, &u1, &entry.id, "half").await.unwrap();

        assert_eq!(updated.id, entry.id);
        assert_eq!(updated.status, AttendanceStatus::Half);
        assert_eq!(updated.marked_by, "u1");
    }

    #[actix_web::test]
    async fn update_by_id_on_a_missing_entry_is_not_found() {
        let store = seeded_store();
        let err = update_by_id(&store, &principal("u1"), "no-such-id", "half")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::NotFound {
                resource: "Attendance record"
            }
        ));
    }

    #[actix_web::test]
    async fn update_by_id_on_a_foreign_entry_is_permission_denied() {
        let store = seeded_store();
        let entry = record_status(&store, &principal("u2"), "w2", d("2025-06-01"), "present")
            .await
            .unwrap();

        let err = update_by_id(&store, &principal("u1"), &entry.id, "half")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::PermissionDenied));
    }
}
