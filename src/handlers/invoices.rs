use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::INVOICES_PATH;
use crate::domain::invoice::InvoiceView;
use crate::domain::validation::InvoiceForm;
use crate::errors::AppError;
use crate::state::AppState;

use super::forms::{FormState, InvoiceFormRequest};
use super::navigation::redirect;

// ── Response DTOs ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct InvoiceResponse {
    pub id: Uuid,
    pub customer_id: String,
    /// Amount in cents.
    pub amount: i32,
    pub status: String,
    /// Issue date, `YYYY-MM-DD`.
    pub date: NaiveDate,
}

impl From<InvoiceView> for InvoiceResponse {
    fn from(v: InvoiceView) -> Self {
        InvoiceResponse {
            id: v.id,
            customer_id: v.customer_id,
            amount: v.amount,
            status: v.status,
            date: v.date,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListInvoicesResponse {
    pub items: Vec<InvoiceResponse>,
    pub total: usize,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /dashboard/invoices
///
/// Renders the invoice list, newest first. The rendered view is cached until
/// a mutation invalidates it.
#[utoipa::path(
    get,
    path = "/dashboard/invoices",
    responses(
        (status = 200, description = "All invoices", body = ListInvoicesResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "invoices"
)]
pub async fn list_invoices(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    if let Some(view) = state.views.get(INVOICES_PATH) {
        return Ok(HttpResponse::Ok().json(view));
    }

    let generation = state.views.generation(INVOICES_PATH);
    let service = state.invoices.clone();
    let invoices = web::block(move || service.list_invoices())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let items: Vec<InvoiceResponse> = invoices.into_iter().map(InvoiceResponse::from).collect();
    let view = serde_json::to_value(ListInvoicesResponse {
        total: items.len(),
        items,
    })
    .map_err(|e| AppError::Internal(e.to_string()))?;

    state.views.store(INVOICES_PATH, generation, view.clone());
    Ok(HttpResponse::Ok().json(view))
}

/// GET /dashboard/invoices/{id}
#[utoipa::path(
    get,
    path = "/dashboard/invoices/{id}",
    params(
        ("id" = Uuid, Path, description = "Invoice UUID"),
    ),
    responses(
        (status = 200, description = "Invoice found", body = InvoiceResponse),
        (status = 404, description = "Invoice not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "invoices"
)]
pub async fn get_invoice(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let service = state.invoices.clone();

    let invoice = web::block(move || service.get_invoice(id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    match invoice {
        Some(invoice) => Ok(HttpResponse::Ok().json(InvoiceResponse::from(invoice))),
        None => Err(AppError::NotFound),
    }
}

/// POST /dashboard/invoices
///
/// Creates an invoice dated today and redirects to the list. On invalid input
/// the form state is returned with per-field errors.
#[utoipa::path(
    post,
    path = "/dashboard/invoices",
    request_body(content = InvoiceFormRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Created; redirects to /dashboard/invoices"),
        (status = 422, description = "Invalid form fields", body = FormState),
        (status = 500, description = "Database error", body = FormState),
    ),
    tag = "invoices"
)]
pub async fn create_invoice(
    state: web::Data<AppState>,
    form: web::Form<InvoiceFormRequest>,
) -> Result<HttpResponse, AppError> {
    let form = InvoiceForm::from(form.into_inner());
    let service = state.invoices.clone();

    let target = web::block(move || service.create_invoice(&form))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(redirect(&target))
}

/// POST /dashboard/invoices/{id}/edit
///
/// Overwrites customer, amount and status. The issue date never changes.
#[utoipa::path(
    post,
    path = "/dashboard/invoices/{id}/edit",
    params(
        ("id" = Uuid, Path, description = "Invoice UUID"),
    ),
    request_body(content = InvoiceFormRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Updated; redirects to /dashboard/invoices"),
        (status = 422, description = "Invalid form fields", body = FormState),
        (status = 500, description = "Database error", body = FormState),
    ),
    tag = "invoices"
)]
pub async fn update_invoice(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    form: web::Form<InvoiceFormRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let form = InvoiceForm::from(form.into_inner());
    let service = state.invoices.clone();

    let target = web::block(move || service.update_invoice(id, &form))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(redirect(&target))
}

/// POST /dashboard/invoices/{id}/delete
///
/// Deletes without an existence check and stays on the current view.
#[utoipa::path(
    post,
    path = "/dashboard/invoices/{id}/delete",
    params(
        ("id" = Uuid, Path, description = "Invoice UUID"),
    ),
    responses(
        (status = 200, description = "Deleted (or never existed)", body = FormState),
        (status = 500, description = "Database error", body = FormState),
    ),
    tag = "invoices"
)]
pub async fn delete_invoice(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let service = state.invoices.clone();

    web::block(move || service.delete_invoice(id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(FormState::default()))
}
