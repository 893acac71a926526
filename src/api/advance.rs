use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::auth::auth::AuthUser;
use crate::error::ApiError;
use crate::ledger::advance;
use crate::model::advance::AdvanceEntry;
use crate::store::{DateRange, MySqlStore};

#[derive(Deserialize, ToSchema)]
pub struct RecordAdvance {
    pub worker_id: String,

    #[schema(example = 200.0)]
    pub amount: f64,

    #[schema(example = "2025-06-03", value_type = String, format = "date")]
    pub date: NaiveDate,
}

#[derive(Deserialize, IntoParams)]
pub struct AdvanceRangeQuery {
    /// Inclusive lower bound; only applied together with date_to.
    #[param(value_type = String, format = "date")]
    pub date_from: Option<NaiveDate>,

    /// Inclusive upper bound; only applied together with date_from.
    #[param(value_type = String, format = "date")]
    pub date_to: Option<NaiveDate>,
}

/// Record a cash advance for a worker
#[utoipa::path(
    post,
    path = "/api/advances",
    request_body = RecordAdvance,
    responses(
        (status = 201, description = "Advance recorded", body = AdvanceEntry),
        (status = 404, description = "Worker not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Advances"
)]
pub async fn record_advance(
    auth: AuthUser,
    store: web::Data<MySqlStore>,
    payload: web::Json<RecordAdvance>,
) -> Result<impl Responder, ApiError> {
    let entry = advance::record(
        store.get_ref(),
        &auth,
        &payload.worker_id,
        payload.amount,
        payload.date,
    )
    .await?;

    Ok(HttpResponse::Created().json(entry))
}

/// List a worker's advances
#[utoipa::path(
    get,
    path = "/api/advances/{worker_id}",
    params(
        ("worker_id", description = "Worker ID"),
        AdvanceRangeQuery
    ),
    responses(
        (status = 200, description = "Advance entries", body = [AdvanceEntry]),
        (status = 404, description = "Worker not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Advances"
)]
pub async fn list_advances(
    auth: AuthUser,
    store: web::Data<MySqlStore>,
    path: web::Path<String>,
    query: web::Query<AdvanceRangeQuery>,
) -> Result<impl Responder, ApiError> {
    let worker_id = path.into_inner();
    let range = DateRange::from_bounds(query.date_from, query.date_to);

    let entries = advance::query_range(store.get_ref(), &auth, &worker_id, range).await?;

    Ok(HttpResponse::Ok().json(entries))
}
