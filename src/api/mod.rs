//! API Module
//!
//! HTTP handlers and routing for the election REST API.
//!
//! # Endpoints
//! - `/api/elections` - Elections (cached reads)
//! - `/api/candidates` - Candidates
//! - `/api/students` - Students and voting
//! - `/api/cache` - Election cache diagnostics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
