//! HTTP request handlers for the URL shortener API.
//!
//! Defines all route handlers and configures the routing table.

mod health;
mod redirect;
mod urls;

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::errors::AppError;

/// Configure all application routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").service(urls::create_short_url))
        // Register specific routes before the catch-all redirect route
        .service(health::health_check)
        .service(redirect::redirect_to_url);
}

/// JSON extractor config mapping body errors to the validation error shape
///
/// A missing or unreadable `url` field is a validation failure per the API
/// contract, not a generic bad request.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::validation(format!("Invalid request body: {}", err)).into()
}
