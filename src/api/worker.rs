use actix_web::{HttpResponse, Responder, web};
use chrono::Utc;
use serde::Deserialize;
use sqlx::MySqlPool;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::auth::auth::AuthUser;
use crate::error::ApiError;
use crate::ledger::owned_worker;
use crate::model::worker::Worker;
use crate::store::MySqlStore;

const DEFAULT_DAILY_RATE: f64 = 500.0;

#[derive(Deserialize, ToSchema)]
pub struct CreateWorker {
    #[schema(example = "Lalrinmawia")]
    pub name: String,

    #[schema(example = "+919612345678", nullable = true)]
    pub phone: Option<String>,

    #[schema(example = "mason", nullable = true)]
    pub role: Option<String>,

    /// Defaults to 500 when absent.
    #[schema(example = 600.0, nullable = true)]
    pub daily_rate: Option<f64>,

    pub site_id: String,
}

#[derive(Deserialize, IntoParams)]
pub struct WorkerQuery {
    /// Restrict the listing to one site.
    pub site_id: Option<String>,
}

/// Create a worker owned by the caller
#[utoipa::path(
    post,
    path = "/api/workers",
    request_body = CreateWorker,
    responses(
        (status = 201, description = "Worker created", body = Worker),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Workers"
)]
pub async fn create_worker(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateWorker>,
) -> Result<impl Responder, ApiError> {
    let worker = Worker {
        id: Uuid::new_v4().to_string(),
        name: payload.name.clone(),
        phone: payload.phone.clone(),
        role: payload.role.clone(),
        daily_rate: payload.daily_rate.unwrap_or(DEFAULT_DAILY_RATE),
        site_id: payload.site_id.clone(),
        user_id: auth.user_id,
        status: "active".to_string(),
        created_at: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO workers (id, name, phone, role, daily_rate, site_id, user_id, status, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&worker.id)
    .bind(&worker.name)
    .bind(&worker.phone)
    .bind(&worker.role)
    .bind(worker.daily_rate)
    .bind(&worker.site_id)
    .bind(&worker.user_id)
    .bind(&worker.status)
    .bind(worker.created_at)
    .execute(pool.get_ref())
    .await?;

    Ok(HttpResponse::Created().json(worker))
}

/// List the caller's workers, optionally for one site
#[utoipa::path(
    get,
    path = "/api/workers",
    params(WorkerQuery),
    responses(
        (status = 200, description = "Workers owned by the caller", body = [Worker]),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Workers"
)]
pub async fn list_workers(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    query: web::Query<WorkerQuery>,
) -> Result<impl Responder, ApiError> {
    let workers = match &query.site_id {
        Some(site_id) => {
            sqlx::query_as::<_, Worker>(
                r#"
                SELECT id, name, phone, role, daily_rate, site_id, user_id, status, created_at
                FROM workers
                WHERE user_id = ? AND site_id = ?
                ORDER BY created_at DESC
                "#,
            )
            .bind(&auth.user_id)
            .bind(site_id)
            .fetch_all(pool.get_ref())
            .await?
        }
        None => {
            sqlx::query_as::<_, Worker>(
                r#"
                SELECT id, name, phone, role, daily_rate, site_id, user_id, status, created_at
                FROM workers
                WHERE user_id = ?
                ORDER BY created_at DESC
                "#,
            )
            .bind(&auth.user_id)
            .fetch_all(pool.get_ref())
            .await?
        }
    };

    Ok(HttpResponse::Ok().json(workers))
}

/// Get one of the caller's workers by id
#[utoipa::path(
    get,
    path = "/api/workers/{worker_id}",
    params(
        ("worker_id", description = "Worker ID")
    ),
    responses(
        (status = 200, description = "Worker found", body = Worker),
        (status = 404, description = "Worker not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Workers"
)]
pub async fn get_worker(
    auth: AuthUser,
    store: web::Data<MySqlStore>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let worker_id = path.into_inner();
    let worker = owned_worker(store.get_ref(), &auth, &worker_id).await?;
    Ok(HttpResponse::Ok().json(worker))
}
