use actix_web::{HttpResponse, Responder, web};
use chrono::Utc;
use serde::Deserialize;
use sqlx::MySqlPool;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::auth::AuthUser;
use crate::error::ApiError;
use crate::model::site::Site;

#[derive(Deserialize, ToSchema)]
pub struct CreateSite {
    #[schema(example = "Zonuam Site")]
    pub name: String,
    #[schema(example = "Aizawl, Mizoram")]
    pub location: String,
}

/// Create a site owned by the caller
#[utoipa::path(
    post,
    path = "/api/sites",
    request_body = CreateSite,
    responses(
        (status = 201, description = "Site created", body = Site),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Sites"
)]
pub async fn create_site(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateSite>,
) -> Result<impl Responder, ApiError> {
    let site = Site {
        id: Uuid::new_v4().to_string(),
        name: payload.name.clone(),
        location: payload.location.clone(),
        user_id: auth.user_id,
        created_at: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO sites (id, name, location, user_id, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&site.id)
    .bind(&site.name)
    .bind(&site.location)
    .bind(&site.user_id)
    .bind(site.created_at)
    .execute(pool.get_ref())
    .await?;

    Ok(HttpResponse::Created().json(site))
}

/// List the caller's sites
#[utoipa::path(
    get,
    path = "/api/sites",
    responses(
        (status = 200, description = "Sites owned by the caller", body = [Site]),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Sites"
)]
pub async fn list_sites(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
) -> Result<impl Responder, ApiError> {
    let sites = sqlx::query_as::<_, Site>(
        r#"
        SELECT id, name, location, user_id, created_at
        FROM sites
        WHERE user_id = ?
        ORDER BY created_at DESC
        "#,
    )
    .bind(&auth.user_id)
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(sites))
}
