//! Salary computation over already-fetched ledger snapshots.
//!
//! [`compute`] is a pure function of the worker's rate and the attendance and
//! advance entries the range query returned; nothing it produces is persisted.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::model::{advance::AdvanceEntry, attendance::AttendanceEntry};
use crate::model::attendance::AttendanceStatus;
use crate::model::worker::Worker;

/// Derived payable summary for one worker over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[schema(
    example = json!({
        "worker_id": "b1c2d3e4-f5a6-4b7c-8d9e-0f1a2b3c4d5e",
        "date_from": "2025-06-01",
        "date_to": "2025-06-30",
        "total_days": 4,
        "present_days": 2,
        "half_days": 1,
        "absent_days": 1,
        "daily_earnings": 1500.0,
        "overtime": 0.0,
        "adjustments": 0.0,
        "total_advances": 200.0,
        "total_earnings": 1500.0,
        "net_payable": 1300.0
    })
)]
pub struct SalarySummary {
    pub worker_id: String,

    #[schema(value_type = String, format = "date")]
    pub date_from: NaiveDate,

    #[schema(value_type = String, format = "date")]
    pub date_to: NaiveDate,

    /// Every entry in range, holidays included.
    pub total_days: u32,
    pub present_days: u32,
    pub half_days: u32,
    pub absent_days: u32,

    pub daily_earnings: f64,

    /// Reserved for a future extension; always 0.0 here.
    pub overtime: f64,
    /// Reserved for a future extension; always 0.0 here.
    pub adjustments: f64,

    pub total_advances: f64,
    pub total_earnings: f64,

    /// May be negative when advances exceed earnings; never clamped.
    pub net_payable: f64,
}

/// Combines a worker's daily rate with attendance and advance entries already
/// filtered to `[date_from, date_to]`.
///
/// A present day earns the full daily rate, a half day earns half of it,
/// absent and holiday days earn nothing. Holidays still count toward
/// `total_days`. An inverted range is not rejected here; it simply arrives as
/// an empty record set from the range query, so every total comes out zero.
pub fn compute(
    worker: &Worker,
    attendance: &[AttendanceEntry],
    advances: &[AdvanceEntry],
    date_from: NaiveDate,
    date_to: NaiveDate,
) -> SalarySummary {
    let count = |status: AttendanceStatus| {
        attendance.iter().filter(|e| e.status == status).count() as u32
    };

    let present_days = count(AttendanceStatus::Present);
    let half_days = count(AttendanceStatus::Half);
    let absent_days = count(AttendanceStatus::Absent);
    let total_days = attendance.len() as u32;

    let daily_earnings =
        present_days as f64 * worker.daily_rate + half_days as f64 * worker.daily_rate * 0.5;

    let total_advances: f64 = advances.iter().map(|a| a.amount).sum();

    let total_earnings = daily_earnings;
    let net_payable = total_earnings - total_advances;

    SalarySummary {
        worker_id: worker.id.clone(),
        date_from,
        date_to,
        total_days,
        present_days,
        half_days,
        absent_days,
        daily_earnings,
        overtime: 0.0,
        adjustments: 0.0,
        total_advances,
        total_earnings,
        net_payable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn worker(daily_rate: f64) -> Worker {
        Worker {
            id: "w1".to_string(),
            name: "Lalrinmawia".to_string(),
            phone: None,
            role: Some("mason".to_string()),
            daily_rate,
            site_id: "s1".to_string(),
            user_id: "u1".to_string(),
            status: "active".to_string(),
            created_at: Utc::now(),
        }
    }

    fn entry(day: &str, status: AttendanceStatus) -> AttendanceEntry {
        AttendanceEntry::new("w1", d(day), status, "u1")
    }

    #[test]
    fn mixed_month_with_one_advance() {
        let worker = worker(600.0);
        let attendance = vec![
            entry("2025-06-02", AttendanceStatus::Present),
            entry("2025-06-03", AttendanceStatus::Present),
            entry("2025-06-04", AttendanceStatus::Half),
            entry("2025-06-05", AttendanceStatus::Absent),
        ];
        let advances = vec![AdvanceEntry::new("w1", 200.0, d("2025-06-03"))];

        let summary = compute(&worker, &attendance, &advances, d("2025-06-01"), d("2025-06-30"));

        assert_eq!(summary.present_days, 2);
        assert_eq!(summary.half_days, 1);
        assert_eq!(summary.absent_days, 1);
        assert_eq!(summary.total_days, 4);
        assert_eq!(summary.daily_earnings, 1500.0);
        assert_eq!(summary.total_advances, 200.0);
        assert_eq!(summary.net_payable, 1300.0);
    }

    #[test]
    fn no_attendance_goes_negative_by_the_advance() {
        let worker = worker(500.0);
        let advances = vec![AdvanceEntry::new("w1", 150.0, d("2025-06-10"))];

        let summary = compute(&worker, &[], &advances, d("2025-06-01"), d("2025-06-30"));

        assert_eq!(summary.total_days, 0);
        assert_eq!(summary.present_days, 0);
        assert_eq!(summary.half_days, 0);
        assert_eq!(summary.absent_days, 0);
        assert_eq!(summary.daily_earnings, 0.0);
        assert_eq!(summary.net_payable, -150.0);
    }

    #[test]
    fn holidays_count_as_days_but_earn_nothing() {
        let worker = worker(600.0);
        let attendance = vec![
            entry("2025-06-02", AttendanceStatus::Present),
            entry("2025-06-03", AttendanceStatus::Holiday),
        ];

        let summary = compute(&worker, &attendance, &[], d("2025-06-01"), d("2025-06-30"));

        assert_eq!(summary.total_days, 2);
        assert_eq!(summary.present_days, 1);
        assert_eq!(summary.daily_earnings, 600.0);
    }

    #[test]
    fn overtime_and_adjustments_stay_zero() {
        let worker = worker(600.0);
        let attendance = vec![entry("2025-06-02", AttendanceStatus::Present)];

        let summary = compute(&worker, &attendance, &[], d("2025-06-01"), d("2025-06-30"));

        assert_eq!(summary.overtime, 0.0);
        assert_eq!(summary.adjustments, 0.0);
        assert_eq!(summary.total_earnings, summary.daily_earnings);
    }

    #[test]
    fn recomputation_on_the_same_snapshot_is_identical() {
        let worker = worker(600.0);
        let attendance = vec![
            entry("2025-06-02", AttendanceStatus::Present),
            entry("2025-06-04", AttendanceStatus::Half),
        ];
        let advances = vec![AdvanceEntry::new("w1", 75.0, d("2025-06-02"))];

        let first = compute(&worker, &attendance, &advances, d("2025-06-01"), d("2025-06-30"));
        let second = compute(&worker, &attendance, &advances, d("2025-06-01"), d("2025-06-30"));

        assert_eq!(first, second);
    }
}
