//! Application configuration module.
//!
//! Handles loading configuration from environment variables.

use std::env;

use crate::constants::{DEFAULT_MAX_GENERATE_ATTEMPTS, DEFAULT_SHORT_CODE_LENGTH};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Base URL for generating short links
    pub base_url: String,
    /// Length of generated short codes
    pub short_code_length: usize,
    /// Maximum attempts when allocating a unique short code
    pub max_generate_attempts: u32,
    /// Origins allowed to make cross-origin requests
    pub allowed_origins: Vec<String>,
    /// Seed the demo mapping (abc123 -> https://example.com) at startup
    pub seed_demo_entry: bool,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// # Environment Variables
    /// - `HOST`: Server host (default: "127.0.0.1")
    /// - `PORT`: Server port (default: 8080)
    /// - `BASE_URL`: Base URL for short links (default: "http://{host}:{port}")
    /// - `SHORT_CODE_LENGTH`: Length of generated codes (default: 6)
    /// - `MAX_GENERATE_ATTEMPTS`: Allocation attempt budget (default: 10)
    /// - `ALLOWED_ORIGINS`: Comma-separated CORS origins (default: "http://localhost:3000")
    /// - `SEED_DEMO_ENTRY`: Seed the demo mapping at startup (default: true)
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .expect("PORT must be a valid number");

        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Self {
            host,
            port,
            base_url,
            short_code_length: env::var("SHORT_CODE_LENGTH")
                .unwrap_or_else(|_| DEFAULT_SHORT_CODE_LENGTH.to_string())
                .parse()
                .expect("SHORT_CODE_LENGTH must be a valid number"),
            max_generate_attempts: env::var("MAX_GENERATE_ATTEMPTS")
                .unwrap_or_else(|_| DEFAULT_MAX_GENERATE_ATTEMPTS.to_string())
                .parse()
                .expect("MAX_GENERATE_ATTEMPTS must be a valid number"),
            allowed_origins,
            seed_demo_entry: env::var("SEED_DEMO_ENTRY")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            base_url: "http://localhost:8080".to_string(),
            short_code_length: DEFAULT_SHORT_CODE_LENGTH,
            max_generate_attempts: DEFAULT_MAX_GENERATE_ATTEMPTS,
            allowed_origins: vec!["http://localhost:3000".to_string()],
            seed_demo_entry: true,
        }
    }
}
