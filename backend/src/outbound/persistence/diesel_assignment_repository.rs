//! PostgreSQL-backed `AssignmentRepository` implementation using Diesel.
//!
//! The interval listing selects only the date columns so the availability
//! check never materialises full rows.

use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{AssignmentRepository, AssignmentRepositoryError};
use crate::domain::{Assignment, DateInterval, WorkerId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{AssignmentRow, NewAssignmentRow};
use super::pool::{DbPool, PoolError};
use super::schema::assignments;

/// Diesel-backed implementation of the assignment repository port.
#[derive(Clone)]
pub struct DieselAssignmentRepository {
    pool: DbPool,
}

impl DieselAssignmentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: PoolError) -> AssignmentRepositoryError {
    map_pool_error(error, AssignmentRepositoryError::connection)
}

fn map_query(error: diesel::result::Error) -> AssignmentRepositoryError {
    map_diesel_error(
        error,
        AssignmentRepositoryError::query,
        AssignmentRepositoryError::connection,
    )
}

#[async_trait]
impl AssignmentRepository for DieselAssignmentRepository {
    async fn insert(&self, assignment: &Assignment) -> Result<(), AssignmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        diesel::insert_into(assignments::table)
            .values(NewAssignmentRow::from_assignment(assignment))
            .execute(&mut conn)
            .await
            .map_err(map_query)?;
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<Assignment>, AssignmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let row: Option<AssignmentRow> = assignments::table
            .filter(assignments::id.eq(id))
            .select(AssignmentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_query)?;
        Ok(row.map(AssignmentRow::into_assignment))
    }

    async fn find_for_worker(
        &self,
        worker_id: WorkerId,
        id: Uuid,
    ) -> Result<Option<Assignment>, AssignmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let row: Option<AssignmentRow> = assignments::table
            .filter(assignments::id.eq(id))
            .filter(assignments::worker_id.eq(*worker_id.as_uuid()))
            .select(AssignmentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_query)?;
        Ok(row.map(AssignmentRow::into_assignment))
    }

    async fn list_all(&self) -> Result<Vec<Assignment>, AssignmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let rows: Vec<AssignmentRow> = assignments::table
            .select(AssignmentRow::as_select())
            .order(assignments::start_date.asc())
            .load(&mut conn)
            .await
            .map_err(map_query)?;
        Ok(rows.into_iter().map(AssignmentRow::into_assignment).collect())
    }

    async fn list_for_worker(
        &self,
        worker_id: WorkerId,
    ) -> Result<Vec<Assignment>, AssignmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let rows: Vec<AssignmentRow> = assignments::table
            .filter(assignments::worker_id.eq(*worker_id.as_uuid()))
            .select(AssignmentRow::as_select())
            .order(assignments::start_date.asc())
            .load(&mut conn)
            .await
            .map_err(map_query)?;
        Ok(rows.into_iter().map(AssignmentRow::into_assignment).collect())
    }

    async fn list_intervals_for_worker(
        &self,
        worker_id: WorkerId,
    ) -> Result<Vec<DateInterval>, AssignmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let rows: Vec<(NaiveDate, NaiveDate)> = assignments::table
            .filter(assignments::worker_id.eq(*worker_id.as_uuid()))
            .select((assignments::start_date, assignments::end_date))
            .load(&mut conn)
            .await
            .map_err(map_query)?;
        Ok(rows
            .into_iter()
            .map(|(start, end)| DateInterval::new(start, end))
            .collect())
    }
}
