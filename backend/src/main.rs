//! Backend entry-point: wires the HTTP adapter, services and persistence.

use std::env;
use std::sync::Arc;

use actix_web::{web, App, HttpResponse, HttpServer};
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};
use utoipa::OpenApi;

use crewplan::doc::ApiDoc;
use crewplan::domain::ports::{FixtureCredentialHasher, FixturePrincipalResolver};
use crewplan::domain::{AssignmentService, ProjectService, WorkerService};
use crewplan::inbound::http::{self, state::HttpState};
use crewplan::outbound::persistence::{
    DbPool, DieselAssignmentRepository, DieselProjectRepository, DieselWorkerRepository,
    PoolConfig,
};

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let database_url = env::var("DATABASE_URL")
        .map_err(|_| std::io::Error::other("DATABASE_URL must be set"))?;
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into());

    let pool = DbPool::new(PoolConfig::new(database_url))
        .await
        .map_err(|err| std::io::Error::other(format!("database pool: {err}")))?;

    let workers = Arc::new(DieselWorkerRepository::new(pool.clone()));
    let projects = Arc::new(DieselProjectRepository::new(pool.clone()));
    let assignments = Arc::new(DieselAssignmentRepository::new(pool));

    // Real hashing and token verification plug in here once wired; the
    // fixtures keep local deployments usable in the meantime.
    warn!("using fixture credential hasher and principal resolver");
    let hasher = Arc::new(FixtureCredentialHasher);

    let worker_service = Arc::new(WorkerService::new(workers.clone(), hasher));
    let project_service = Arc::new(ProjectService::new(workers.clone(), projects.clone()));
    let assignment_service = Arc::new(AssignmentService::new(workers, projects, assignments));

    let state = HttpState {
        signup: worker_service.clone(),
        workers: worker_service,
        project_commands: project_service.clone(),
        project_queries: project_service,
        assignment_commands: assignment_service.clone(),
        assignment_queries: assignment_service,
        principal_resolver: Arc::new(FixturePrincipalResolver),
    };

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .service(web::scope("/api/v1").configure(http::configure))
            .route("/api-docs/openapi.json", web::get().to(openapi_json))
    })
    .bind(bind_addr)?
    .run()
    .await
}
