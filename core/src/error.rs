//! Error types for the core library

use thiserror::Error;

use crate::task::TaskId;

#[derive(Error, Debug)]
pub enum Error {
    /// The remote service could not be reached, rejected the request, or
    /// returned a body that could not be decoded.
    #[error("Remote call failed: {0}")]
    Remote(String),

    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    /// A mutation was rejected because the task already has a request in
    /// flight.
    #[error("Task {0} already has a request in flight")]
    TaskBusy(TaskId),
}
