use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::application::ActionError;
use crate::domain::errors::DomainError;
use crate::handlers::forms::FormState;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound => AppError::NotFound,
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Action(ActionError::Invalid { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Action(ActionError::Database { .. }) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        match self {
            AppError::NotFound => response.json(serde_json::json!({
                "error": self.to_string()
            })),
            AppError::Action(action) => response.json(FormState::from(action)),
            AppError::Internal(msg) => {
                log::error!("Request failed: {}", msg);
                response.json(serde_json::json!({
                    "error": "Internal server error"
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;
    use serde_json::Value;

    use crate::domain::validation::FieldErrors;

    async fn body_json(err: AppError) -> Value {
        let body = to_bytes(err.error_response().into_body())
            .await
            .expect("body should be readable");
        serde_json::from_slice(&body).expect("body should be JSON")
    }

    #[test]
    fn not_found_returns_404() {
        let resp = AppError::NotFound.error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn internal_error_returns_500() {
        let err = AppError::Internal("something went wrong".to_string());
        assert_eq!(err.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn invalid_action_returns_422() {
        let err = AppError::from(ActionError::Invalid {
            errors: FieldErrors::default(),
            message: "Missing Fields. Failed to Create Invoice.",
        });
        assert_eq!(err.error_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn database_action_returns_500() {
        let err = AppError::from(ActionError::Database {
            message: "Database Error: Failed to Create Invoice.",
        });
        assert_eq!(err.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn invalid_action_body_carries_field_errors() {
        let mut errors = FieldErrors::default();
        errors.add("status", "Please select an invoice status.");
        let body = body_json(AppError::from(ActionError::Invalid {
            errors,
            message: "Missing Fields. Failed to Create Invoice.",
        }))
        .await;

        assert_eq!(body["message"], "Missing Fields. Failed to Create Invoice.");
        assert_eq!(body["errors"]["status"][0], "Please select an invoice status.");
    }

    #[actix_web::test]
    async fn internal_error_body_hides_details() {
        let body = body_json(AppError::Internal("password=hunter2".to_string())).await;
        assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));
    }

    #[test]
    fn not_found_display() {
        assert_eq!(AppError::NotFound.to_string(), "Not found");
    }

    #[test]
    fn domain_not_found_maps_to_app_not_found() {
        let app_err: AppError = DomainError::NotFound.into();
        assert!(matches!(app_err, AppError::NotFound));
    }

    #[test]
    fn domain_internal_maps_to_app_internal() {
        let app_err: AppError = DomainError::Internal("oops".to_string()).into();
        assert!(matches!(app_err, AppError::Internal(_)));
    }
}
