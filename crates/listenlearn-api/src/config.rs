use std::net::SocketAddr;

use axum::http::HeaderValue;

use crate::error::AppError;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_CORS_ORIGINS: &[&str] = &["http://localhost:5173", "http://127.0.0.1:5173"];

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address the HTTP server binds to.
    pub listen_addr: SocketAddr,
    /// Origins allowed to make cross-origin requests (with credentials).
    pub cors_origins: Vec<HeaderValue>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `LISTENLEARN_LISTEN_ADDR` (default: "127.0.0.1:8000")
    /// - `LISTENLEARN_CORS_ORIGINS`: comma separated origins
    ///   (default: "http://localhost:5173,http://127.0.0.1:5173")
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_values(
            std::env::var("LISTENLEARN_LISTEN_ADDR").ok().as_deref(),
            std::env::var("LISTENLEARN_CORS_ORIGINS").ok().as_deref(),
        )
    }

    fn from_values(listen_addr: Option<&str>, cors_origins: Option<&str>) -> Result<Self, AppError> {
        let listen_addr = listen_addr.unwrap_or(DEFAULT_LISTEN_ADDR);
        let listen_addr = listen_addr.trim().parse::<SocketAddr>().map_err(|e| {
            AppError::Config(format!("invalid LISTENLEARN_LISTEN_ADDR '{listen_addr}': {e}"))
        })?;

        let cors_origins = match cors_origins {
            Some(raw) => parse_origins(raw)?,
            None => DEFAULT_CORS_ORIGINS
                .iter()
                .copied()
                .map(HeaderValue::from_static)
                .collect(),
        };

        Ok(Self {
            listen_addr,
            cors_origins,
        })
    }
}

fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, AppError> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            if origin == "*" {
                return Err(AppError::Config(
                    "LISTENLEARN_CORS_ORIGINS cannot contain '*' because credentials are allowed"
                        .to_string(),
                ));
            }
            origin.parse::<HeaderValue>().map_err(|e| {
                AppError::Config(format!("invalid origin in LISTENLEARN_CORS_ORIGINS '{origin}': {e}"))
            })
        })
        .collect()
}
