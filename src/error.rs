use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;

use crate::services::payroll_calculator::PayrollCalcError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Display, PartialEq)]
pub enum AppError {
    #[display(fmt = "{} not found", _0)]
    NotFound(String),

    #[display(fmt = "{}", _0)]
    Validation(String),

    #[display(fmt = "cannot move {} from {} to {}", entity, from, to)]
    InvalidTransition {
        entity: String,
        from: String,
        to: String,
    },

    #[display(fmt = "{}", _0)]
    Unauthorized(String),

    #[display(fmt = "{}", _0)]
    Forbidden(String),

    #[display(fmt = "Internal Server Error")]
    Internal,
}

impl std::error::Error for AppError {}

impl AppError {
    pub fn not_found(what: impl Into<String>) -> Self {
        AppError::NotFound(what.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn transition(
        entity: impl Into<String>,
        from: impl ToString,
        to: impl ToString,
    ) -> Self {
        AppError::InvalidTransition {
            entity: entity.into(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

impl From<PayrollCalcError> for AppError {
    fn from(err: PayrollCalcError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidTransition { .. } => StatusCode::CONFLICT,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "message": self.to_string()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_variants_to_status_codes() {
        assert_eq!(
            AppError::not_found("Employee 7").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::validation("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::transition("payroll", "processed", "failed").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(AppError::Internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn transition_message_names_both_states() {
        let err = AppError::transition("payroll record", "processed", "pending");
        assert_eq!(
            err.to_string(),
            "cannot move payroll record from processed to pending"
        );
    }
}
