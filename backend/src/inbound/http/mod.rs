//! HTTP inbound adapter exposing REST endpoints.

pub mod assignments;
pub mod auth;
pub mod error;
pub mod projects;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod workers;

use actix_web::web;

pub use error::ApiResult;

/// Register every handler on a service config.
///
/// `GET /workers/me` is registered ahead of `GET /workers/{id}` so the
/// literal segment wins the route match.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(workers::sign_up)
        .service(workers::list_workers)
        .service(workers::get_self)
        .service(workers::get_worker)
        .service(projects::create_project)
        .service(projects::list_projects)
        .service(projects::get_project)
        .service(assignments::create_assignment)
        .service(assignments::list_assignments)
        .service(assignments::get_assignment);
}
