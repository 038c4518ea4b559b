use actix_web::http::header;
use actix_web::HttpResponse;

use crate::application::Redirect;

/// Send the caller to `target` with `303 See Other`, so the browser follows
/// up with a GET.
pub fn redirect(target: &Redirect) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, target.path()))
        .finish()
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;

    use super::*;

    #[test]
    fn redirect_is_see_other_with_location() {
        let resp = redirect(&Redirect::to("/dashboard/invoices"));

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/dashboard/invoices"
        );
    }
}
