use crate::{
    auth::{
        auth::AuthUser,
        jwt::generate_access_token,
        password::{hash_password, verify_password},
    },
    config::Config,
    error::AppError,
    model::role::Role,
    models::{LoginReqDto, LoginResponse, RegisterReqDto},
    state::AppState,
};
use actix_web::{HttpResponse, web};
use serde_json::json;
use tracing::{debug, error, info, instrument};

/// Operator sign-in
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginReqDto,
    responses(
        (status = 200, description = "Signed in", body = LoginResponse),
        (status = 400, description = "Username or password missing"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
#[instrument(
    name = "auth_login",
    skip(state, config, user),
    fields(username = %user.username)
)]
pub async fn login(
    user: web::Json<LoginReqDto>,
    state: web::Data<AppState>,
    config: web::Data<Config>,
) -> actix_web::Result<HttpResponse> {
    info!("Login request received");

    if user.username.trim().is_empty() || user.password.is_empty() {
        info!("Validation failed: empty username or password");
        return Err(AppError::validation("Username or password required").into());
    }

    // the read lock is released before the argon2 check
    let account = state.read()?.find_user(&user.username).cloned();
    let account = match account {
        Some(account) => {
            debug!(user_id = account.id, "User found");
            account
        }
        None => {
            info!("Invalid credentials: user not found");
            return Err(AppError::Unauthorized("Invalid credentials".into()).into());
        }
    };

    if let Err(e) = verify_password(&user.password, &account.password_hash) {
        info!(error = %e, "Invalid credentials: password mismatch");
        return Err(AppError::Unauthorized("Invalid credentials".into()).into());
    }

    let access_token = generate_access_token(
        account.id,
        account.username.clone(),
        account.role.id(),
        &config.jwt_secret,
        config.access_token_ttl,
    )
    .map_err(|e| {
        error!(error = %e, "Failed to sign access token");
        AppError::Internal
    })?;

    info!("Login successful");

    Ok(HttpResponse::Ok().json(LoginResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: config.access_token_ttl,
    }))
}

/// Register an HR operator (admin only)
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterReqDto,
    responses(
        (status = 201, description = "User registered"),
        (status = 400, description = "Invalid or duplicate username"),
        (status = 403, description = "Admin only")
    ),
    security(("bearer_auth" = [])),
    tag = "Auth"
)]
pub async fn register(
    auth: AuthUser,
    user: web::Json<RegisterReqDto>,
    state: web::Data<AppState>,
) -> actix_web::Result<HttpResponse> {
    auth.require_admin()?;

    if user.password.len() < 8 {
        return Err(AppError::validation("Password must be at least 8 characters").into());
    }

    let hashed = hash_password(&user.password).map_err(|e| {
        error!(error = %e, "Failed to hash password");
        AppError::Internal
    })?;
    let created = state.write()?.add_user(&user.username, hashed, Role::Hr)?;

    Ok(HttpResponse::Created().json(json!({
        "message": "User registered successfully",
        "user_id": created.id
    })))
}

/// Seeds the configured admin account. Called once at startup.
pub fn seed_admin(state: &AppState, config: &Config) -> anyhow::Result<()> {
    let hashed = hash_password(&config.admin_password)
        .map_err(|e| anyhow::anyhow!("failed to hash admin password: {e}"))?;
    state
        .write()?
        .add_user(&config.admin_username, hashed, Role::Admin)?;
    info!(username = %config.admin_username, "Admin account ready");
    Ok(())
}
