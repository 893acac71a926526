pub mod advance;
pub mod attendance;

use crate::auth::auth::AuthUser;
use crate::error::ApiError;
use crate::model::worker::Worker;
use crate::store::RecordStore;

/// The one ownership capability check: every ledger operation requires
/// `Owns(worker)`. An id that does not resolve to a worker of the acting
/// principal reads as `NotFound`, never as a hint the worker exists.
pub async fn owned_worker<S: RecordStore>(
    store: &S,
    principal: &AuthUser,
    worker_id: &str,
) -> Result<Worker, ApiError> {
    store
        .find_worker(worker_id, &principal.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Worker"))
}

#[cfg(test)]
pub(crate) mod testutil {
    use chrono::Utc;

    use crate::auth::auth::AuthUser;
    use crate::model::worker::Worker;
    use crate::store::MemoryStore;

    pub fn principal(user_id: &str) -> AuthUser {
        AuthUser {
            user_id: user_id.to_string(),
            email: format!("{user_id}@worksite.com"),
        }
    }

    pub fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        store.add_worker(worker("w1", "u1", 600.0));
        store.add_worker(worker("w2", "u2", 500.0));
        store
    }

    pub fn worker(id: &str, owner: &str, daily_rate: f64) -> Worker {
        Worker {
            id: id.to_string(),
            name: "Test Worker".to_string(),
            phone: None,
            role: None,
            daily_rate,
            site_id: "s1".to_string(),
            user_id: owner.to_string(),
            status: "active".to_string(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testutil::{principal, seeded_store};
    use super::*;

    #[actix_web::test]
    async fn owner_resolves_their_worker() {
        let store = seeded_store();
        let worker = owned_worker(&store, &principal("u1"), "w1").await.unwrap();
        assert_eq!(worker.id, "w1");
    }

    #[actix_web::test]
    async fn foreign_worker_reads_as_not_found() {
        let store = seeded_store();
        let err = owned_worker(&store, &principal("u1"), "w2").await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound { resource: "Worker" }));
    }
}
