use actix_web::{web, HttpResponse};

use crate::application::SignInOutcome;
use crate::domain::auth::Credentials;
use crate::errors::AppError;
use crate::state::AppState;

use super::forms::{FormState, LoginFormRequest};
use super::navigation::redirect;

/// POST /login
///
/// Checks the submitted credentials. A rejected sign-in comes back as a form
/// message; failures outside the provider surface as a 500.
#[utoipa::path(
    post,
    path = "/login",
    request_body(content = LoginFormRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Signed in; redirects to redirectTo or /dashboard"),
        (status = 401, description = "Sign-in rejected", body = FormState),
        (status = 500, description = "Internal server error"),
    ),
    tag = "auth"
)]
pub async fn authenticate(
    state: web::Data<AppState>,
    form: web::Form<LoginFormRequest>,
) -> Result<HttpResponse, AppError> {
    let LoginFormRequest {
        email,
        password,
        redirect_to,
    } = form.into_inner();
    let credentials = Credentials { email, password };
    let service = state.auth.clone();

    let outcome = web::block(move || service.authenticate(&credentials, redirect_to.as_deref()))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    match outcome {
        SignInOutcome::Accepted { redirect: target, .. } => Ok(redirect(&target)),
        SignInOutcome::Rejected(message) => {
            Ok(HttpResponse::Unauthorized().json(FormState::message(message)))
        }
    }
}
