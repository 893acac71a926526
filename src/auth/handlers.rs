use actix_web::{HttpResponse, Responder, web};
use chrono::Utc;
use serde_json::json;
use sqlx::MySqlPool;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

use crate::{
    auth::{
        jwt::generate_access_token,
        password::{hash_password, verify_password},
    },
    config::Config,
    model::user::User,
    models::{LoginReq, RegisterReq, TokenResponse},
    utils::{email_cache, email_filter},
};

/// true  => email AVAILABLE
/// false => email TAKEN
pub async fn is_email_available(email: &str, pool: &MySqlPool) -> bool {
    let email = email.to_lowercase();

    // Cuckoo filter gives a fast definite negative.
    if !email_filter::might_exist(&email) {
        return true;
    }

    // Moka cache gives a fast positive.
    if email_cache::is_taken(&email).await {
        return false;
    }

    // Database fallback
    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM users WHERE email = ? LIMIT 1)",
    )
    .bind(&email)
    .fetch_one(pool)
    .await
    .unwrap_or(true); // fail-safe

    !exists
}

/// Inserts a new user and keeps the email filter and cache populated.
async fn insert_user(user: &User, pool: &MySqlPool) -> Result<(), HttpResponse> {
    let result = sqlx::query(
        r#"
        INSERT INTO users (id, email, name, role, company_name, created_at, password_hash)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&user.id)
    .bind(&user.email)
    .bind(&user.name)
    .bind(&user.role)
    .bind(&user.company_name)
    .bind(user.created_at)
    .bind(&user.password_hash)
    .execute(pool)
    .await;

    match result {
        Ok(_) => {
            email_filter::insert(&user.email);
            email_cache::mark_taken(&user.email).await;
            Ok(())
        }
        Err(e) => {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.code() == Some("23000".into()) {
                    return Err(HttpResponse::Conflict().json(json!({
                        "error": "Email already registered"
                    })));
                }
            }

            error!(error = %e, "Failed to insert user");
            Err(HttpResponse::InternalServerError().json(json!({
                "error": "Failed to register user"
            })))
        }
    }
}

/// User registration: creates the account and logs it straight in.
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterReq,
    responses(
        (status = 201, description = "User registered", body = TokenResponse),
        (status = 400, description = "Empty email or password"),
        (status = 409, description = "Email already registered")
    ),
    tag = "Auth"
)]
pub async fn register(
    payload: web::Json<RegisterReq>,
    pool: web::Data<MySqlPool>,
    config: web::Data<Config>,
) -> impl Responder {
    let email = payload.email.trim().to_lowercase();
    let password = &payload.password;

    if email.is_empty() || password.is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "error": "Email and password must not be empty"
        }));
    }

    if !is_email_available(&email, pool.get_ref()).await {
        return HttpResponse::Conflict().json(json!({
            "error": "Email already registered"
        }));
    }

    let user = User {
        id: Uuid::new_v4().to_string(),
        email,
        name: payload.name.clone(),
        role: "manager".to_string(),
        company_name: payload.company_name.clone(),
        created_at: Utc::now(),
        password_hash: hash_password(password),
    };

    match insert_user(&user, pool.get_ref()).await {
        Ok(_) => {
            let access_token = generate_access_token(
                &user.id,
                &user.email,
                &config.jwt_secret,
                config.access_token_ttl,
            );

            HttpResponse::Created().json(TokenResponse {
                access_token,
                token_type: "bearer".to_string(),
                user,
            })
        }
        Err(err_resp) => err_resp,
    }
}

/// Login for an existing user.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginReq,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Empty email or password"),
        (status = 401, description = "Invalid email or password")
    ),
    tag = "Auth"
)]
#[instrument(
    name = "auth_login",
    skip(pool, config, payload),
    fields(email = %payload.email)
)]
pub async fn login(
    payload: web::Json<LoginReq>,
    pool: web::Data<MySqlPool>,
    config: web::Data<Config>,
) -> impl Responder {
    info!("Login request received");

    if payload.email.trim().is_empty() || payload.password.is_empty() {
        info!("Validation failed: empty email or password");
        return HttpResponse::BadRequest().body("Email or password required");
    }

    debug!("Fetching user from database");

    let db_user = match sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, name, role, company_name, created_at, password_hash
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(payload.email.to_lowercase())
    .fetch_optional(pool.get_ref())
    .await
    {
        Ok(Some(user)) => {
            debug!(user_id = %user.id, "User found");
            user
        }
        Ok(None) => {
            info!("Invalid credentials: user not found");
            return HttpResponse::Unauthorized().body("Invalid email or password");
        }
        Err(e) => {
            error!(error = %e, "Database error while fetching user");
            return HttpResponse::InternalServerError().finish();
        }
    };

    debug!("Verifying password");

    if let Err(e) = verify_password(&payload.password, &db_user.password_hash) {
        info!(error = %e, "Invalid credentials: password mismatch");
        return HttpResponse::Unauthorized().body("Invalid email or password");
    }

    debug!("Generating access token");

    let access_token = generate_access_token(
        &db_user.id,
        &db_user.email,
        &config.jwt_secret,
        config.access_token_ttl,
    );

    info!("Login successful");

    HttpResponse::Ok().json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
        user: db_user,
    })
}
