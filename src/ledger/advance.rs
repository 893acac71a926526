//! Advance Ledger: cash handed to workers ahead of payday. Entries append,
//! never overwrite.

use chrono::NaiveDate;

use crate::auth::auth::AuthUser;
use crate::error::ApiError;
use crate::ledger::owned_worker;
use crate::model::advance::AdvanceEntry;
use crate::store::{DateRange, RecordStore};

/// Appends an advance. The amount is recorded as given; it is not checked
/// against the worker's rate or running balance.
pub async fn record<S: RecordStore>(
    store: &S,
    principal: &AuthUser,
    worker_id: &str,
    amount: f64,
    date: NaiveDate,
) -> Result<AdvanceEntry, ApiError> {
    let worker = owned_worker(store, principal, worker_id).await?;

    let entry = AdvanceEntry::new(&worker.id, amount, date);
    store.insert_advance(&entry).await?;
    Ok(entry)
}

/// The worker's advances, filtered results in descending date order.
pub async fn query_range<S: RecordStore>(
    store: &S,
    principal: &AuthUser,
    worker_id: &str,
    range: Option<DateRange>,
) -> Result<Vec<AdvanceEntry>, ApiError> {
    let worker = owned_worker(store, principal, worker_id).await?;
    Ok(store.find_advances(&worker.id, range).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::testutil::{principal, seeded_store};

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[actix_web::test]
    async fn same_date_advances_accumulate() {
        let store = seeded_store();
        let u1 = principal("u1");

        record(&store, &u1, "w1", 200.0, d("2025-06-03")).await.unwrap();
        record(&store, &u1, "w1", 100.0, d("2025-06-03")).await.unwrap();

        let advances = query_range(&store, &u1, "w1", None).await.unwrap();
        assert_eq!(advances.len(), 2);
        let total: f64 = advances.iter().map(|a| a.amount).sum();
        assert_eq!(total, 300.0);
    }

    #[actix_web::test]
    async fn foreign_worker_is_not_found() {
        let store = seeded_store();
        let err = record(&store, &principal("u1"), "w2", 50.0, d("2025-06-03"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound { .. }));
    }

    #[actix_web::test]
    async fn range_filter_is_inclusive_and_descending() {
        let store = seeded_store();
        let u1 = principal("u1");
        for (day, amount) in [("2025-06-01", 10.0), ("2025-06-15", 20.0), ("2025-07-01", 30.0)] {
            record(&store, &u1, "w1", amount, d(day)).await.unwrap();
        }

        let june = query_range(
            &store,
            &u1,
            "w1",
            Some(DateRange::new(d("2025-06-01"), d("2025-06-30"))),
        )
        .await
        .unwrap();

        assert_eq!(june.len(), 2);
        assert_eq!(june[0].date, d("2025-06-15"));
        assert_eq!(june[1].date, d("2025-06-01"));
    }
}
