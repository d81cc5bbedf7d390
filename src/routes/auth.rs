/// Authentication routes: registration and login.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::auth::{hash_password, issue_token, verify_password, Role};
use crate::configuration::JwtSettings;
use crate::error::{AppError, AuthError, ErrorContext};
use crate::store::{Store, User};
use crate::validators::{is_valid_email, is_valid_name, validate_password_strength};

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user_role: String,
    pub user_id: String,
}

impl TokenResponse {
    fn new(access_token: String, user: &User) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            user_role: user.role.to_string(),
            user_id: user.id.to_string(),
        }
    }
}

/// POST /api/auth/register
///
/// Creates an account with the requested role and issues a session token.
/// The role is assigned here, once; nothing in this service changes it later.
///
/// # Errors
/// - 400: invalid email/name or password policy violation
/// - 409: email already registered
pub async fn register(
    form: web::Json<RegisterRequest>,
    store: web::Data<Store>,
    jwt_config: web::Data<JwtSettings>,
) -> Result<HttpResponse, AppError> {
    let context = ErrorContext::new("user_registration");

    let email = is_valid_email(&form.email)?;
    let name = is_valid_name(&form.name)?;
    validate_password_strength(&form.password)?;
    let password_hash = hash_password(&form.password)?;

    let user = User::new(email, password_hash, form.role, name);
    store.insert_user(user.clone()).await?;

    let access_token = issue_token(&user.id, user.role, jwt_config.get_ref())?;

    tracing::info!(
        request_id = %context.request_id,
        user_id = %user.id,
        role = %user.role,
        "User registered successfully"
    );

    Ok(HttpResponse::Created().json(TokenResponse::new(access_token, &user)))
}

/// POST /api/auth/login
///
/// Verifies the password against the stored hash and issues a fresh token.
///
/// # Security Notes
/// Unknown email and wrong password produce the identical 401 response, so
/// the endpoint cannot be used to enumerate accounts.
pub async fn login(
    form: web::Json<LoginRequest>,
    store: web::Data<Store>,
    jwt_config: web::Data<JwtSettings>,
) -> Result<HttpResponse, AppError> {
    let context = ErrorContext::new("user_login");

    let email = is_valid_email(&form.email)?;

    let user = store
        .find_user_by_email(&email)
        .await
        .ok_or(AppError::Auth(AuthError::InvalidCredentials))?;

    if !verify_password(&form.password, &user.password_hash) {
        return Err(AppError::Auth(AuthError::InvalidCredentials));
    }

    let access_token = issue_token(&user.id, user.role, jwt_config.get_ref())?;

    tracing::info!(
        request_id = %context.request_id,
        user_id = %user.id,
        "User logged in successfully"
    );

    Ok(HttpResponse::Ok().json(TokenResponse::new(access_token, &user)))
}
