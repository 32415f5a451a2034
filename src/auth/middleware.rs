use crate::auth::auth::AuthUser;
use crate::auth::jwt::verify_token;
use crate::config::Config;
use crate::error::AppError;
use crate::model::role::Role;
use actix_web::middleware::Next;
use actix_web::{
    Error, HttpMessage, HttpRequest, ResponseError,
    body::BoxBody,
    dev::{ServiceRequest, ServiceResponse},
    web::Data,
};
use tracing::{debug, error};

/// Resolves the bearer token on `req` into the operator it was issued to.
fn authenticate(req: &HttpRequest, config: &Config) -> Result<AuthUser, AppError> {
    let header = req
        .headers()
        .get("Authorization")
        .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".into()))?
        .to_str()
        .map_err(|_| AppError::Unauthorized("Invalid Authorization header encoding".into()))?;

    let token = header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Unauthorized("Authorization header must start with Bearer".into())
    })?;

    let claims = verify_token(token, &config.jwt_secret).map_err(|e| {
        debug!(error = %e, "Rejected bearer token");
        AppError::Unauthorized("Invalid or expired token".into())
    })?;

    let role = Role::from_id(claims.role)
        .ok_or_else(|| AppError::Unauthorized("Invalid role".into()))?;

    Ok(AuthUser {
        user_id: claims.user_id,
        username: claims.sub,
        role,
    })
}

/// Gates the protected scope. Rejections are answered here with the
/// standard error body and never reach a handler.
pub async fn auth_middleware(
    req: ServiceRequest,
    next: Next<BoxBody>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let config = req.app_data::<Data<Config>>().cloned().ok_or_else(|| {
        error!("App config missing from app data");
        AppError::Internal
    })?;

    match authenticate(req.request(), &config) {
        Ok(user) => {
            req.extensions_mut().insert(user);
            next.call(req).await
        }
        Err(err) => {
            let resp = err.error_response();
            Ok(req.into_response(resp))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::generate_access_token;
    use actix_web::test::TestRequest;

    fn config() -> Config {
        Config::from_lookup(|key: &str| match key {
            "JWT_SECRET" => Some("middleware-secret".to_string()),
            "ADMIN_PASSWORD" => Some("unused".to_string()),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn valid_token_yields_operator() {
        let config = config();
        let token = generate_access_token(3, "grace".into(), 2, &config.jwt_secret, 60).unwrap();
        let req = TestRequest::default()
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_http_request();

        let user = authenticate(&req, &config).unwrap();

        assert_eq!(user.user_id, 3);
        assert_eq!(user.username, "grace");
        assert_eq!(user.role, Role::Hr);
    }

    #[test]
    fn rejections_are_unauthorized_app_errors() {
        let config = config();
        let unknown_role =
            generate_access_token(3, "grace".into(), 9, &config.jwt_secret, 60).unwrap();

        for (header, message) in [
            (None, "Missing Authorization header"),
            (Some("Token abc".to_string()), "Authorization header must start with Bearer"),
            (Some("Bearer not-a-jwt".to_string()), "Invalid or expired token"),
            (Some(format!("Bearer {unknown_role}")), "Invalid role"),
        ] {
            let mut req = TestRequest::default();
            if let Some(header) = header {
                req = req.insert_header(("Authorization", header));
            }
            let err = authenticate(&req.to_http_request(), &config).unwrap_err();
            assert_eq!(err, AppError::Unauthorized(message.into()));
        }
    }
}
