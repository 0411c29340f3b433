//! PostgreSQL-backed `ProjectRepository` implementation using Diesel.
//!
//! The worker-scoped reads join through assignments: a project is visible to
//! an employee only when one of their assignments references it.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{ProjectRepository, ProjectRepositoryError};
use crate::domain::{Project, WorkerId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewProjectRow, ProjectRow};
use super::pool::{DbPool, PoolError};
use super::schema::{assignments, projects};

/// Diesel-backed implementation of the project repository port.
#[derive(Clone)]
pub struct DieselProjectRepository {
    pool: DbPool,
}

impl DieselProjectRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: PoolError) -> ProjectRepositoryError {
    map_pool_error(error, ProjectRepositoryError::connection)
}

fn map_query(error: diesel::result::Error) -> ProjectRepositoryError {
    map_diesel_error(
        error,
        ProjectRepositoryError::query,
        ProjectRepositoryError::connection,
    )
}

fn row_to_project(row: ProjectRow) -> Result<Project, ProjectRepositoryError> {
    row.into_project()
        .map_err(|err| ProjectRepositoryError::query(format!("invalid project row: {err}")))
}

#[async_trait]
impl ProjectRepository for DieselProjectRepository {
    async fn insert(&self, project: &Project) -> Result<(), ProjectRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        diesel::insert_into(projects::table)
            .values(NewProjectRow::from_project(project))
            .execute(&mut conn)
            .await
            .map_err(map_query)?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, ProjectRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let row: Option<ProjectRow> = projects::table
            .filter(projects::id.eq(id))
            .select(ProjectRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_query)?;
        row.map(row_to_project).transpose()
    }

    async fn find_for_worker(
        &self,
        worker_id: WorkerId,
        id: Uuid,
    ) -> Result<Option<Project>, ProjectRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let row: Option<ProjectRow> = projects::table
            .inner_join(assignments::table)
            .filter(projects::id.eq(id))
            .filter(assignments::worker_id.eq(*worker_id.as_uuid()))
            .select(ProjectRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_query)?;
        row.map(row_to_project).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let rows: Vec<ProjectRow> = projects::table
            .select(ProjectRow::as_select())
            .order(projects::created_at.asc())
            .load(&mut conn)
            .await
            .map_err(map_query)?;
        rows.into_iter().map(row_to_project).collect()
    }

    async fn list_for_worker(
        &self,
        worker_id: WorkerId,
    ) -> Result<Vec<Project>, ProjectRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let rows: Vec<ProjectRow> = projects::table
            .inner_join(assignments::table)
            .filter(assignments::worker_id.eq(*worker_id.as_uuid()))
            .select(ProjectRow::as_select())
            .distinct()
            .load(&mut conn)
            .await
            .map_err(map_query)?;
        rows.into_iter().map(row_to_project).collect()
    }
}
