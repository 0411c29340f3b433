//! Row structs bridging Diesel tables and domain types.
//!
//! Ordinary worker reads select [`WorkerRow`], which has no credential
//! column; only the explicit credential fetch touches
//! [`CredentialWorkerRow`]. Conversions into domain types go through the
//! validated constructors so malformed rows surface as query errors instead
//! of panics.

use std::str::FromStr;

use chrono::NaiveDate;
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{
    Assignment, CredentialHash, DateInterval, EmailAddress, Project, ProjectName, Role, Username,
    Worker, WorkerId, WorkerValidationError, WorkerWithCredential,
};

use super::schema::{assignments, projects, workers};

/// Credential-free worker row for ordinary reads.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = workers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct WorkerRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl WorkerRow {
    pub(crate) fn into_worker(self) -> Result<Worker, WorkerValidationError> {
        Ok(Worker::new(
            WorkerId::from_uuid(self.id),
            Username::new(self.username)?,
            EmailAddress::new(self.email)?,
            Role::from_str(&self.role)?,
        ))
    }
}

/// Worker row including the credential hash, for the explicit credential
/// fetch only.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = workers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CredentialWorkerRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub credential: String,
    pub role: String,
}

impl CredentialWorkerRow {
    pub(crate) fn into_record(self) -> Result<WorkerWithCredential, WorkerValidationError> {
        let credential = CredentialHash::new(self.credential);
        let worker = Worker::new(
            WorkerId::from_uuid(self.id),
            Username::new(self.username)?,
            EmailAddress::new(self.email)?,
            Role::from_str(&self.role)?,
        );
        Ok(WorkerWithCredential::new(worker, credential))
    }
}

/// Insertable struct for new worker records.
#[derive(Debug, Insertable)]
#[diesel(table_name = workers)]
pub(crate) struct NewWorkerRow<'a> {
    pub id: Uuid,
    pub username: &'a str,
    pub email: &'a str,
    pub credential: &'a str,
    pub role: &'a str,
}

impl<'a> NewWorkerRow<'a> {
    pub(crate) fn from_record(record: &'a WorkerWithCredential) -> Self {
        let worker = record.worker();
        Self {
            id: *worker.id().as_uuid(),
            username: worker.username().as_ref(),
            email: worker.email().as_ref(),
            credential: record.credential().expose(),
            role: worker.role().as_str(),
        }
    }
}

/// Project row for reads.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProjectRow {
    pub id: Uuid,
    pub name: String,
    pub referring_employee_id: Uuid,
}

impl ProjectRow {
    pub(crate) fn into_project(self) -> Result<Project, crate::domain::ProjectValidationError> {
        Ok(Project::new(
            self.id,
            ProjectName::new(self.name)?,
            WorkerId::from_uuid(self.referring_employee_id),
        ))
    }
}

/// Insertable struct for new project records.
#[derive(Debug, Insertable)]
#[diesel(table_name = projects)]
pub(crate) struct NewProjectRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub referring_employee_id: Uuid,
}

impl<'a> NewProjectRow<'a> {
    pub(crate) fn from_project(project: &'a Project) -> Self {
        Self {
            id: project.id(),
            name: project.name().as_ref(),
            referring_employee_id: *project.referring_employee_id().as_uuid(),
        }
    }
}

/// Assignment row for reads.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = assignments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AssignmentRow {
    pub id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub project_id: Uuid,
    pub worker_id: Uuid,
}

impl AssignmentRow {
    pub(crate) fn into_assignment(self) -> Assignment {
        Assignment::new(
            self.id,
            DateInterval::new(self.start_date, self.end_date),
            self.project_id,
            WorkerId::from_uuid(self.worker_id),
        )
    }
}

/// Insertable struct for new assignment records.
#[derive(Debug, Insertable)]
#[diesel(table_name = assignments)]
pub(crate) struct NewAssignmentRow {
    pub id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub project_id: Uuid,
    pub worker_id: Uuid,
}

impl NewAssignmentRow {
    pub(crate) fn from_assignment(assignment: &Assignment) -> Self {
        Self {
            id: assignment.id(),
            start_date: assignment.start_date(),
            end_date: assignment.end_date(),
            project_id: assignment.project_id(),
            worker_id: *assignment.worker_id().as_uuid(),
        }
    }
}
