//! Redirect endpoint handler.

use actix_web::{get, web, HttpResponse};

use crate::errors::AppError;
use crate::services;
use crate::store::UrlStore;

/// Redirect to the original URL
///
/// This is the main functionality - when someone visits /{short_code},
/// they get redirected to the original URL.
#[get("/{short_code}")]
pub(super) async fn redirect_to_url(
    store: web::Data<UrlStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let short_code = path.into_inner();

    // Don't burn lookups on common browser paths
    if short_code == "favicon.ico" || short_code == "robots.txt" {
        return Err(AppError::short_code_not_found());
    }

    let target_url = services::resolve_url(&store, &short_code)?;

    log::info!("Redirecting {} -> {}", short_code, target_url);

    // 307 keeps clients from caching a mapping that dies with the process
    Ok(HttpResponse::TemporaryRedirect()
        .append_header(("Location", target_url))
        .finish())
}
