use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::User;

#[derive(Deserialize, ToSchema)]
pub struct RegisterReq {
    #[schema(example = "owner@worksite.com")]
    pub email: String,
    pub password: String,
    #[schema(example = "Site Owner")]
    pub name: String,
    #[schema(example = "Zonuam Constructions", nullable = true)]
    pub company_name: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginReq {
    #[schema(example = "owner@worksite.com")]
    pub email: String,
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    #[schema(example = "bearer")]
    pub token_type: String,
    pub user: User,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: String,
    /// Subject: the user's email.
    pub sub: String,
    pub exp: usize,
    pub jti: String,
}
