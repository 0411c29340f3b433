//! Driving port for worker-facing queries.

use async_trait::async_trait;

use crate::domain::{Error, Principal, Worker, WorkerId};

/// Driving port for reading workers.
///
/// Worker records are visible to every authenticated principal; the
/// employee scope rule applies to assignments and projects, not here.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkersQuery: Send + Sync {
    /// List every registered worker.
    async fn list_workers(&self, principal: Principal) -> Result<Vec<Worker>, Error>;

    /// Fetch one worker by identifier.
    async fn get_worker(&self, principal: Principal, id: WorkerId) -> Result<Worker, Error>;
}
