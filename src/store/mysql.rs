use sqlx::MySqlPool;

use crate::model::{advance::AdvanceEntry, attendance::AttendanceEntry, worker::Worker};
use crate::store::{DateRange, RecordStore};

/// [`RecordStore`] over MySQL. Constructed once in `main` and injected as app
/// data; nothing here is process-global.
#[derive(Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Raw pool access for glue that streams outside the store contract
    /// (registration warmups, user/site CRUD).
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

impl RecordStore for MySqlStore {
    async fn find_worker(
        &self,
        worker_id: &str,
        owner_id: &str,
    ) -> Result<Option<Worker>, sqlx::Error> {
        sqlx::query_as::<_, Worker>(
            r#"
            SELECT id, name, phone, role, daily_rate, site_id, user_id, status, created_at
            FROM workers
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(worker_id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn find_attendance(
        &self,
        worker_id: &str,
        range: Option<DateRange>,
    ) -> Result<Vec<AttendanceEntry>, sqlx::Error> {
        match range {
            Some(range) => {
                sqlx::query_as::<_, AttendanceEntry>(
                    r#"
                    SELECT id, worker_id, date, status, marked_by, marked_at, created_at
                    FROM attendance
                    WHERE worker_id = ? AND date BETWEEN ? AND ?
                    ORDER BY date DESC
                    "#,
                )
                .bind(worker_id)
                .bind(range.from)
                .bind(range.to)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, AttendanceEntry>(
                    r#"
                    SELECT id, worker_id, date, status, marked_by, marked_at, created_at
                    FROM attendance
                    WHERE worker_id = ?
                    ORDER BY date DESC
                    "#,
                )
                .bind(worker_id)
                .fetch_all(&self.pool)
                .await
            }
        }
    }

    async fn find_attendance_by_id(
        &self,
        attendance_id: &str,
    ) -> Result<Option<AttendanceEntry>, sqlx::Error> {
        sqlx::query_as::<_, AttendanceEntry>(
            r#"
            SELECT id, worker_id, date, status, marked_by, marked_at, created_at
            FROM attendance
            WHERE id = ?
            "#,
        )
        .bind(attendance_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn upsert_attendance(&self, entry: &AttendanceEntry) -> Result<(), sqlx::Error> {
        // The UNIQUE KEY on (worker_id, date) turns a re-mark into an
        // overwrite of status and audit fields; the original row id survives.
        sqlx::query(
            r#"
            INSERT INTO attendance (id, worker_id, date, status, marked_by, marked_at, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                status = VALUES(status),
                marked_by = VALUES(marked_by),
                marked_at = VALUES(marked_at)
            "#,
        )
        .bind(&entry.id)
        .bind(&entry.worker_id)
        .bind(entry.date)
        .bind(entry.status)
        .bind(&entry.marked_by)
        .bind(entry.marked_at)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_advances(
        &self,
        worker_id: &str,
        range: Option<DateRange>,
    ) -> Result<Vec<AdvanceEntry>, sqlx::Error> {
        match range {
            Some(range) => {
                sqlx::query_as::<_, AdvanceEntry>(
                    r#"
                    SELECT id, worker_id, amount, date, created_at
                    FROM advances
                    WHERE worker_id = ? AND date BETWEEN ? AND ?
                    ORDER BY date DESC
                    "#,
                )
                .bind(worker_id)
                .bind(range.from)
                .bind(range.to)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, AdvanceEntry>(
                    r#"
                    SELECT id, worker_id, amount, date, created_at
                    FROM advances
                    WHERE worker_id = ?
                    ORDER BY date DESC
                    "#,
                )
                .bind(worker_id)
                .fetch_all(&self.pool)
                .await
            }
        }
    }

    async fn insert_advance(&self, entry: &AdvanceEntry) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO advances (id, worker_id, amount, date, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&entry.id)
        .bind(&entry.worker_id)
        .bind(entry.amount)
        .bind(entry.date)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
