//! PostgreSQL-backed `WorkerRepository` implementation using Diesel.
//!
//! Ordinary reads select the credential-free row; only
//! `find_by_id_with_credential` touches the credential column. Unique
//! constraint violations on insert surface as `Duplicate` so the domain can
//! report `WorkerAlreadyExists`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{WorkerRepository, WorkerRepositoryError};
use crate::domain::{EmailAddress, Worker, WorkerId, WorkerWithCredential};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{CredentialWorkerRow, NewWorkerRow, WorkerRow};
use super::pool::{DbPool, PoolError};
use super::schema::workers;

/// Diesel-backed implementation of the worker repository port.
#[derive(Clone)]
pub struct DieselWorkerRepository {
    pool: DbPool,
}

impl DieselWorkerRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: PoolError) -> WorkerRepositoryError {
    map_pool_error(error, WorkerRepositoryError::connection)
}

fn map_query(error: diesel::result::Error) -> WorkerRepositoryError {
    map_diesel_error(
        error,
        WorkerRepositoryError::query,
        WorkerRepositoryError::connection,
    )
}

fn map_insert(error: diesel::result::Error) -> WorkerRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    if let DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) = &error {
        let constraint = info.constraint_name().unwrap_or("workers unique constraint");
        return WorkerRepositoryError::duplicate(constraint);
    }
    map_query(error)
}

fn row_to_worker(row: WorkerRow) -> Result<Worker, WorkerRepositoryError> {
    row.into_worker()
        .map_err(|err| WorkerRepositoryError::query(format!("invalid worker row: {err}")))
}

#[async_trait]
impl WorkerRepository for DieselWorkerRepository {
    async fn insert(&self, record: &WorkerWithCredential) -> Result<(), WorkerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        diesel::insert_into(workers::table)
            .values(NewWorkerRow::from_record(record))
            .execute(&mut conn)
            .await
            .map_err(map_insert)?;
        Ok(())
    }

    async fn find_by_id(&self, id: WorkerId) -> Result<Option<Worker>, WorkerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let row: Option<WorkerRow> = workers::table
            .filter(workers::id.eq(*id.as_uuid()))
            .select(WorkerRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_query)?;
        row.map(row_to_worker).transpose()
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Worker>, WorkerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let row: Option<WorkerRow> = workers::table
            .filter(workers::email.eq(email.as_ref()))
            .select(WorkerRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_query)?;
        row.map(row_to_worker).transpose()
    }

    async fn find_by_id_with_credential(
        &self,
        id: WorkerId,
    ) -> Result<Option<WorkerWithCredential>, WorkerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let row: Option<CredentialWorkerRow> = workers::table
            .filter(workers::id.eq(*id.as_uuid()))
            .select(CredentialWorkerRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_query)?;
        row.map(|row| {
            row.into_record()
                .map_err(|err| WorkerRepositoryError::query(format!("invalid worker row: {err}")))
        })
        .transpose()
    }

    async fn list_all(&self) -> Result<Vec<Worker>, WorkerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let rows: Vec<WorkerRow> = workers::table
            .select(WorkerRow::as_select())
            .order(workers::created_at.asc())
            .load(&mut conn)
            .await
            .map_err(map_query)?;
        rows.into_iter().map(row_to_worker).collect()
    }
}
