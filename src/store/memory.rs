use std::sync::Mutex;

use crate::model::{advance::AdvanceEntry, attendance::AttendanceEntry, worker::Worker};
use crate::store::{DateRange, RecordStore};

/// In-memory [`RecordStore`] used by the ledger and salary tests. Semantics
/// mirror [`super::MySqlStore`]: the (worker, date) key is unique for
/// attendance, reads come back newest date first.
#[derive(Default)]
pub struct MemoryStore {
    workers: Mutex<Vec<Worker>>,
    attendance: Mutex<Vec<AttendanceEntry>>,
    advances: Mutex<Vec<AdvanceEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_worker(&self, worker: Worker) {
        self.workers.lock().expect("worker store poisoned").push(worker);
    }
}

impl RecordStore for MemoryStore {
    async fn find_worker(
        &self,
        worker_id: &str,
        owner_id: &str,
    ) -> Result<Option<Worker>, sqlx::Error> {
        Ok(self
            .workers
            .lock()
            .expect("worker store poisoned")
            .iter()
            .find(|w| w.id == worker_id && w.user_id == owner_id)
            .cloned())
    }

    async fn find_attendance(
        &self,
        worker_id: &str,
        range: Option<DateRange>,
    ) -> Result<Vec<AttendanceEntry>, sqlx::Error> {
        let mut entries: Vec<_> = self
            .attendance
            .lock()
            .expect("attendance store poisoned")
            .iter()
            .filter(|e| e.worker_id == worker_id)
            .filter(|e| range.map_or(true, |r| r.contains(e.date)))
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }

    async fn find_attendance_by_id(
        &self,
        attendance_id: &str,
    ) -> Result<Option<AttendanceEntry>, sqlx::Error> {
        Ok(self
            .attendance
            .lock()
            .expect("attendance store poisoned")
            .iter()
            .find(|e| e.id == attendance_id)
            .cloned())
    }

    async fn upsert_attendance(&self, entry: &AttendanceEntry) -> Result<(), sqlx::Error> {
        let mut entries = self.attendance.lock().expect("attendance store poisoned");
        match entries
            .iter_mut()
            .find(|e| e.worker_id == entry.worker_id && e.date == entry.date)
        {
            Some(existing) => {
                existing.status = entry.status;
                existing.marked_by = entry.marked_by.clone();
                existing.marked_at = entry.marked_at;
            }
            None => entries.push(entry.clone()),
        }
        Ok(())
    }

    async fn find_advances(
        &self,
        worker_id: &str,
        range: Option<DateRange>,
    ) -> Result<Vec<AdvanceEntry>, sqlx::Error> {
        let mut entries: Vec<_> = self
            .advances
            .lock()
            .expect("advance store poisoned")
            .iter()
            .filter(|e| e.worker_id == worker_id)
            .filter(|e| range.map_or(true, |r| r.contains(e.date)))
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }

    async fn insert_advance(&self, entry: &AdvanceEntry) -> Result<(), sqlx::Error> {
        self.advances
            .lock()
            .expect("advance store poisoned")
            .push(entry.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::attendance::AttendanceStatus;
    use chrono::NaiveDate;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[actix_web::test]
    async fn upsert_keeps_one_entry_per_worker_and_date() {
        let store = MemoryStore::new();
        let first = AttendanceEntry::new("w1", d("2025-06-01"), AttendanceStatus::Present, "u1");
        let second = AttendanceEntry::new("w1", d("2025-06-01"), AttendanceStatus::Absent, "u2");

        store.upsert_attendance(&first).await.unwrap();
        store.upsert_attendance(&second).await.unwrap();

        let entries = store.find_attendance("w1", None).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].status, AttendanceStatus::Absent);
        assert_eq!(entries[0].marked_by, "u2");
        // The original row identity survives an overwrite.
        assert_eq!(entries[0].id, first.id);
    }

    #[actix_web::test]
    async fn attendance_reads_come_back_newest_first() {
        let store = MemoryStore::new();
        for day in ["2025-06-02", "2025-06-05", "2025-06-01"] {
            let entry = AttendanceEntry::new("w1", d(day), AttendanceStatus::Present, "u1");
            store.upsert_attendance(&entry).await.unwrap();
        }

        let dates: Vec<_> = store
            .find_attendance("w1", None)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.date)
            .collect();
        assert_eq!(dates, vec![d("2025-06-05"), d("2025-06-02"), d("2025-06-01")]);
    }

    #[actix_web::test]
    async fn advances_accumulate_on_the_same_date() {
        let store = MemoryStore::new();
        store
            .insert_advance(&AdvanceEntry::new("w1", 100.0, d("2025-06-01")))
            .await
            .unwrap();
        store
            .insert_advance(&AdvanceEntry::new("w1", 50.0, d("2025-06-01")))
            .await
            .unwrap();

        let advances = store.find_advances("w1", None).await.unwrap();
        assert_eq!(advances.len(), 2);
    }
}
