use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::auth::auth::AuthUser;
use crate::error::ApiError;
use crate::ledger::attendance;
use crate::model::attendance::AttendanceEntry;
use crate::store::{DateRange, MySqlStore};

#[derive(Deserialize, ToSchema)]
pub struct MarkAttendance {
    pub worker_id: String,

    #[schema(example = "2025-06-01", value_type = String, format = "date")]
    pub date: NaiveDate,

    /// present, half, absent or holiday
    #[schema(example = "present")]
    pub status: String,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateAttendance {
    /// present, half, absent or holiday
    #[schema(example = "half")]
    pub status: String,
}

#[derive(Deserialize, IntoParams)]
pub struct AttendanceRangeQuery {
    /// Inclusive lower bound; only applied together with date_to.
    #[param(value_type = String, format = "date")]
    pub date_from: Option<NaiveDate>,

    /// Inclusive upper bound; only applied together with date_from.
    #[param(value_type = String, format = "date")]
    pub date_to: Option<NaiveDate>,
}

/// Mark (or re-mark) attendance for a worker and date
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = MarkAttendance,
    responses(
        (status = 200, description = "Attendance recorded", body = AttendanceEntry),
        (status = 400, description = "Unknown attendance status"),
        (status = 404, description = "Worker not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    auth: AuthUser,
    store: web::Data<MySqlStore>,
    payload: web::Json<MarkAttendance>,
) -> Result<impl Responder, ApiError> {
    let entry = attendance::record_status(
        store.get_ref(),
        &auth,
        &payload.worker_id,
        payload.date,
        &payload.status,
    )
    .await?;

    Ok(HttpResponse::Ok().json(entry))
}

/// List a worker's attendance, newest date first
#[utoipa::path(
    get,
    path = "/api/attendance/{worker_id}",
    params(
        ("worker_id", description = "Worker ID"),
        AttendanceRangeQuery
    ),
    responses(
        (status = 200, description = "Attendance entries", body = [AttendanceEntry]),
        (status = 404, description = "Worker not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Attendance"
)]
pub async fn list_attendance(
    auth: AuthUser,
    store: web::Data<MySqlStore>,
    path: web::Path<String>,
    query: web::Query<AttendanceRangeQuery>,
) -> Result<impl Responder, ApiError> {
    let worker_id = path.into_inner();
    let range = DateRange::from_bounds(query.date_from, query.date_to);

    let entries = attendance::query_range(store.get_ref(), &auth, &worker_id, range).await?;

    Ok(HttpResponse::Ok().json(entries))
}

/// Update an attendance entry by its id
#[utoipa::path(
    put,
    path = "/api/attendance/{attendance_id}",
    params(
        ("attendance_id", description = "Attendance entry ID")
    ),
    request_body = UpdateAttendance,
    responses(
        (status = 200, description = "Attendance updated", body = AttendanceEntry),
        (status = 400, description = "Unknown attendance status"),
        (status = 403, description = "Entry belongs to another user's worker"),
        (status = 404, description = "Attendance record not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Attendance"
)]
pub async fn update_attendance(
    auth: AuthUser,
    store: web::Data<MySqlStore>,
    path: web::Path<String>,
    payload: web::Json<UpdateAttendance>,
) -> Result<impl Responder, ApiError> {
    let attendance_id = path.into_inner();

    let entry =
        attendance::update_by_id(store.get_ref(), &auth, &attendance_id, &payload.status).await?;

    Ok(HttpResponse::Ok().json(entry))
}
