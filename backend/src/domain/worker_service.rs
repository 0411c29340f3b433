//! Worker registration and lookup services.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    CredentialHasher, SignUpRequest, WorkerRepository, WorkerRepositoryError, WorkerSignup,
    WorkersQuery,
};
use crate::domain::{Error, Principal, Role, Worker, WorkerId, WorkerWithCredential};

fn map_repository_error(error: WorkerRepositoryError) -> Error {
    match error {
        WorkerRepositoryError::Connection { message } => {
            Error::store(format!("worker store unavailable: {message}"))
        }
        WorkerRepositoryError::Query { message } => {
            Error::store(format!("worker store error: {message}"))
        }
        WorkerRepositoryError::Duplicate { constraint } => {
            Error::store(format!("unexpected uniqueness violation: {constraint}"))
        }
    }
}

/// Worker service implementing the sign-up command and worker queries.
#[derive(Clone)]
pub struct WorkerService<R, H> {
    workers: Arc<R>,
    hasher: Arc<H>,
}

impl<R, H> WorkerService<R, H> {
    /// Create a new service over the worker store and hashing collaborator.
    pub fn new(workers: Arc<R>, hasher: Arc<H>) -> Self {
        Self { workers, hasher }
    }
}

#[async_trait]
impl<R, H> WorkerSignup for WorkerService<R, H>
where
    R: WorkerRepository,
    H: CredentialHasher,
{
    async fn sign_up(&self, request: SignUpRequest) -> Result<Worker, Error> {
        let credential = self
            .hasher
            .hash(&request.secret)
            .map_err(|err| Error::unknown(format!("credential hashing failed: {err}")))?;

        let worker = Worker::new(
            WorkerId::random(),
            request.username,
            request.email,
            Role::default(),
        );
        let record = WorkerWithCredential::new(worker, credential);

        match self.workers.insert(&record).await {
            Ok(()) => Ok(record.into_worker()),
            Err(WorkerRepositoryError::Duplicate { .. }) => Err(Error::worker_already_exists(
                "a worker with this username or email already exists",
            )),
            Err(other) => Err(map_repository_error(other)),
        }
    }
}

#[async_trait]
impl<R, H> WorkersQuery for WorkerService<R, H>
where
    R: WorkerRepository,
    H: CredentialHasher,
{
    async fn list_workers(&self, _principal: Principal) -> Result<Vec<Worker>, Error> {
        self.workers.list_all().await.map_err(map_repository_error)
    }

    async fn get_worker(&self, _principal: Principal, id: WorkerId) -> Result<Worker, Error> {
        self.workers
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::worker_not_found(format!("worker {id} not found")))
    }
}

#[cfg(test)]
#[path = "worker_service_tests.rs"]
mod tests;
