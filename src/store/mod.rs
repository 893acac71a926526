pub mod memory;
pub mod mysql;

use chrono::NaiveDate;

use crate::model::{advance::AdvanceEntry, attendance::AttendanceEntry, worker::Worker};

pub use memory::MemoryStore;
pub use mysql::MySqlStore;

/// Inclusive calendar-date range. Ranges compare through `NaiveDate`'s total
/// order, never through string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    /// Both bounds or nothing; a lone bound is ignored, matching the query
    /// parameters the API accepts.
    pub fn from_bounds(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Option<Self> {
        match (from, to) {
            (Some(from), Some(to)) => Some(Self { from, to }),
            _ => None,
        }
    }
}

/// Storage seam consumed by the ledgers and the salary endpoint. Handlers
/// receive a concrete store; the ledger operations stay generic so tests run
/// against [`MemoryStore`].
///
/// A single document write is atomic at the store; two concurrent upserts for
/// the same (worker, date) are last-write-wins, which is accepted.
pub trait RecordStore {
    async fn find_worker(
        &self,
        worker_id: &str,
        owner_id: &str,
    ) -> Result<Option<Worker>, sqlx::Error>;

    /// Entries for one worker, newest date first, optionally restricted to an
    /// inclusive range.
    async fn find_attendance(
        &self,
        worker_id: &str,
        range: Option<DateRange>,
    ) -> Result<Vec<AttendanceEntry>, sqlx::Error>;

    async fn find_attendance_by_id(
        &self,
        attendance_id: &str,
    ) -> Result<Option<AttendanceEntry>, sqlx::Error>;

    /// Insert, or overwrite the entry already holding the (worker, date) key.
    async fn upsert_attendance(&self, entry: &AttendanceEntry) -> Result<(), sqlx::Error>;

    async fn find_advances(
        &self,
        worker_id: &str,
        range: Option<DateRange>,
    ) -> Result<Vec<AdvanceEntry>, sqlx::Error>;

    async fn insert_advance(&self, entry: &AdvanceEntry) -> Result<(), sqlx::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let range = DateRange::new(d("2025-06-01"), d("2025-06-30"));
        assert!(range.contains(d("2025-06-01")));
        assert!(range.contains(d("2025-06-30")));
        assert!(!range.contains(d("2025-05-31")));
        assert!(!range.contains(d("2025-07-01")));
    }

    #[test]
    fn lone_bound_yields_no_range() {
        assert!(DateRange::from_bounds(Some(d("2025-06-01")), None).is_none());
        assert!(DateRange::from_bounds(None, Some(d("2025-06-01"))).is_none());
        assert!(DateRange::from_bounds(None, None).is_none());
        assert_eq!(
            DateRange::from_bounds(Some(d("2025-06-01")), Some(d("2025-06-02"))),
            Some(DateRange::new(d("2025-06-01"), d("2025-06-02")))
        );
    }
}
