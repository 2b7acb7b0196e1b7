//! Shorten endpoint handler.

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::config::Config;
use crate::errors::AppError;
use crate::models::{ShortenRequest, ShortenResponse};
use crate::services;
use crate::store::UrlStore;

/// Create a new short URL
#[post("/shorten")]
pub(super) async fn create_short_url(
    store: web::Data<UrlStore>,
    config: web::Data<Config>,
    body: web::Json<ShortenRequest>,
) -> Result<HttpResponse, AppError> {
    body.validate()
        .map_err(|e| AppError::validation(format!("Invalid input: {}", e)))?;

    let created = services::shorten_url(
        &store,
        &body,
        config.short_code_length,
        config.max_generate_attempts,
    )?;

    let response = ShortenResponse {
        short_url: format!(
            "{}/{}",
            config.base_url.trim_end_matches('/'),
            created.short_code
        ),
        short_code: created.short_code,
        original_url: created.original_url,
    };

    Ok(HttpResponse::Created().json(response))
}
