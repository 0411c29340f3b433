//! PostgreSQL persistence adapters built on Diesel.

mod diesel_assignment_repository;
mod diesel_project_repository;
mod diesel_worker_repository;
mod error_mapping;
mod models;
pub mod pool;
pub mod schema;

pub use diesel_assignment_repository::DieselAssignmentRepository;
pub use diesel_project_repository::DieselProjectRepository;
pub use diesel_worker_repository::DieselWorkerRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
