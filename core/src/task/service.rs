//! Remote task service contract
//!
//! Defines the interface the view-model uses to reach the remote
//! collection. The service is the sole source of truth for tasks.

use async_trait::async_trait;

use super::model::{Task, TaskId};
use crate::Result;

/// Interface to the remote to-do collection.
#[async_trait]
pub trait TaskService: Send + Sync {
    /// Fetch the full collection.
    async fn list(&self) -> Result<Vec<Task>>;

    /// Create a task with the given title; the service assigns the id and
    /// starts the task uncompleted.
    async fn create(&self, title: &str) -> Result<Task>;

    /// Set the completion flag of an existing task.
    async fn set_completed(&self, id: TaskId, completed: bool) -> Result<()>;

    /// Delete a task.
    async fn delete(&self, id: TaskId) -> Result<()>;
}
