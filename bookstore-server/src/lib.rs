//! Bookstore order-management backend
//!
//! Core subsystems:
//!
//! - **db**: SQLite pool plus catalog, customer and order stores; order
//!   writes are transactional (header + line items as one unit)
//! - **reporting**: windowed sales aggregation, JSON artifact archive and
//!   the periodic report scheduler
//! - **api**: HTTP routes and handlers over the stores and services

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod reporting;
pub mod state;
pub mod utils;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
