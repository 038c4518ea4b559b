use utoipa::OpenApi;

use crate::handlers::{auth, forms, invoices};

#[derive(OpenApi)]
#[openapi(
    paths(
        invoices::list_invoices,
        invoices::get_invoice,
        invoices::create_invoice,
        invoices::update_invoice,
        invoices::delete_invoice,
        auth::authenticate,
    ),
    components(schemas(
        forms::InvoiceFormRequest,
        forms::LoginFormRequest,
        forms::FormState,
        invoices::InvoiceResponse,
        invoices::ListInvoicesResponse,
    )),
    tags(
        (name = "invoices", description = "Invoice dashboard actions"),
        (name = "auth", description = "Credential sign-in"),
    )
)]
pub struct ApiDoc;
