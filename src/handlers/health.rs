//! Health check endpoint handler.

use actix_web::{get, web, HttpResponse};

use crate::store::UrlStore;

/// Health check endpoint
///
/// Reports the number of active mappings along with the service version.
#[get("/health")]
pub(super) async fn health_check(store: web::Data<UrlStore>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "mappings": store.len()
    }))
}
