//! Campus Elections - University election management API
//!
//! CRUD over elections, candidates and students, with a read-through,
//! write-invalidate cache in front of election reads.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod seed;
pub mod services;

pub use api::AppState;
pub use config::Config;
pub use seed::seed_demo_data;
