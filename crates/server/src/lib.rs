//! Stringprops Server - HTTP REST API for string property analysis
//!
//! This crate provides an HTTP server that exposes the stringprops core
//! via a REST API. It supports:
//!
//! - **Analysis & Storage**: Submit strings, get back derived properties,
//!   deduplicated by content fingerprint
//! - **Retrieval & Deletion**: Look up or delete stored strings by value
//!   (hash-then-lookup, never raw-string comparison)
//! - **Filtered Listing**: Explicit query parameters or free-text
//!   natural-language queries mapped to structured filters
//! - **Health & Metrics**: Liveness/readiness probes and Prometheus metrics
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Prometheus metrics
//! - `POST /strings` - Analyze and store a string
//! - `GET /strings` - List with explicit filters
//! - `GET /strings/filter-by-natural-language` - List via free-text query
//! - `GET /strings/{string_value}` - Get a stored string
//! - `DELETE /strings/{string_value}` - Delete a stored string

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
