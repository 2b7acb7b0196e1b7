//! # tinylink
//!
//! A minimal in-memory URL shortener built with Rust and Actix-web.
//!
//! ## Features
//! - Create short codes for long URLs
//! - Redirect short codes to original URLs
//! - In-memory store (mappings are lost on restart, by design)
//! - RESTful API with CORS support for browser clients
//! - Rate limiting for abuse protection

mod config;
mod constants;
mod errors;
mod handlers;
mod models;
mod services;
mod store;
mod test_utils;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

use crate::constants::{DEMO_SHORT_CODE, DEMO_TARGET_URL};

/// Build CORS middleware from the configured origin allow-list
///
/// An empty list falls back to the browser's same-origin policy. Configured
/// origins get credentials plus any method and header.
fn build_cors(allowed_origins: &[String]) -> Cors {
    if allowed_origins.is_empty() {
        return Cors::default();
    }

    let mut cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials();

    for origin in allowed_origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Load configuration
    let config = config::Config::from_env();

    // Initialize the in-memory store; everything in it dies with the process
    let store = store::UrlStore::new();
    if config.seed_demo_entry {
        store.seed_demo_entry();
        info!("Seeded demo mapping: {} -> {}", DEMO_SHORT_CODE, DEMO_TARGET_URL);
    }

    info!(
        "Starting tinylink server at http://{}:{}",
        config.host, config.port
    );
    info!("API Documentation:");
    info!("   POST /api/shorten      - Create a short URL");
    info!("   GET  /{{short_code}}     - Redirect to original URL");
    info!("   GET  /health           - Health check");

    // Capture bind address before moving config into closure
    let bind_addr = format!("{}:{}", config.host, config.port);

    // Configure rate limiting: 60 requests per minute per IP
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(1) // Refill rate: 1 token per second
        .burst_size(60) // Allow bursts up to 60 requests
        .finish()
        .expect("Failed to create rate limiter configuration");

    info!("Rate limiting enabled: 60 requests/minute per IP");
    info!("CORS allowed origins: {:?}", config.allowed_origins);

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            // Add store to app state
            .app_data(web::Data::new(store.clone()))
            // Add configuration to app state
            .app_data(web::Data::new(config.clone()))
            // Map JSON body errors to the validation error shape
            .app_data(handlers::json_config())
            // Enable CORS for the configured origins
            .wrap(build_cors(&config.allowed_origins))
            // Enable rate limiting middleware
            .wrap(Governor::new(&governor_conf))
            // Enable logger middleware
            .wrap(Logger::default())
            // Configure routes
            .configure(handlers::configure_routes)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
