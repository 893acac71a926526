use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::auth::auth::AuthUser;
use crate::error::ApiError;
use crate::ledger::owned_worker;
use crate::salary::{self, SalarySummary};
use crate::store::{DateRange, MySqlStore, RecordStore};

#[derive(Deserialize, IntoParams)]
pub struct SalaryQuery {
    #[param(value_type = String, format = "date")]
    pub date_from: NaiveDate,

    #[param(value_type = String, format = "date")]
    pub date_to: NaiveDate,
}

/// Derived payable summary for a worker over a date range
///
/// Pure projection over the two ledgers; nothing is persisted. An inverted
/// range returns an empty record set and therefore all-zero totals.
#[utoipa::path(
    get,
    path = "/api/salary/{worker_id}",
    params(
        ("worker_id", description = "Worker ID"),
        SalaryQuery
    ),
    responses(
        (status = 200, description = "Salary summary", body = SalarySummary),
        (status = 404, description = "Worker not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Salary"
)]
pub async fn calculate_salary(
    auth: AuthUser,
    store: web::Data<MySqlStore>,
    path: web::Path<String>,
    query: web::Query<SalaryQuery>,
) -> Result<impl Responder, ApiError> {
    let worker_id = path.into_inner();
    let range = DateRange::new(query.date_from, query.date_to);

    let worker = owned_worker(store.get_ref(), &auth, &worker_id).await?;
    let attendance = store.find_attendance(&worker.id, Some(range)).await?;
    let advances = store.find_advances(&worker.id, Some(range)).await?;

    let summary = salary::compute(&worker, &attendance, &advances, range.from, range.to);

    Ok(HttpResponse::Ok().json(summary))
}
