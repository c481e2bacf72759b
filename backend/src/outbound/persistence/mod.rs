//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports backed by
//! PostgreSQL via Diesel with async support through `diesel-async` and
//! `bb8` connection pooling.
//!
//! The adapters stay thin: row structs and schema definitions are internal
//! implementation details, never exposed to the domain, and every database
//! error is mapped onto a domain persistence error.

mod diesel_error_mapping;
mod diesel_movement_repository;
mod diesel_report_repository;
mod models;
mod pool;
mod schema;

pub use diesel_movement_repository::DieselMovementRepository;
pub use diesel_report_repository::DieselReportRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
