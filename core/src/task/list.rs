//! Task list view-model
//!
//! Holds the in-memory snapshot of the remote collection and mediates
//! between user actions and the remote service. Rendering-agnostic: front
//! ends read snapshots and invoke the operations, nothing else.

use std::collections::HashSet;

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

use super::model::{Task, TaskId};
use super::service::TaskService;
use crate::{Error, Result};

/// Request lifecycle of a single task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskPhase {
    /// No mutation in flight.
    Idle,
    /// An update or delete, plus its follow-up reload, is in flight.
    Pending,
}

#[derive(Default)]
struct ListState {
    tasks: Vec<Task>,
    draft_title: String,
}

/// View-model over the remote to-do collection.
///
/// The local list is a cache with no authority of its own: every mutation
/// goes to the service first, and `toggle`/`remove` resynchronize with a
/// full reload rather than patching locally. A failed call leaves local
/// state exactly as it was before the operation.
///
/// Operations take `&self` and may overlap. Ordering between overlapping
/// reloads is not enforced (the last response wins the view; the server is
/// unaffected). The only coordination is a per-task guard: a second
/// mutation of a task whose previous mutation is still in flight is
/// rejected with [`Error::TaskBusy`].
pub struct TaskList<S> {
    service: S,
    state: RwLock<ListState>,
    pending: Mutex<HashSet<TaskId>>,
}

impl<S: TaskService> TaskList<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: RwLock::new(ListState::default()),
            pending: Mutex::new(HashSet::new()),
        }
    }

    /// Current tasks, in the order the service returned them.
    pub async fn snapshot(&self) -> Vec<Task> {
        self.state.read().await.tasks.clone()
    }

    /// Title staged for the next `create`.
    pub async fn draft_title(&self) -> String {
        self.state.read().await.draft_title.clone()
    }

    /// Request lifecycle of the given task.
    pub async fn phase(&self, id: TaskId) -> TaskPhase {
        if self.pending.lock().await.contains(&id) {
            TaskPhase::Pending
        } else {
            TaskPhase::Idle
        }
    }

    /// Stage a title for the next `create`. Purely local; validation
    /// happens at `create` time.
    pub async fn set_draft_title(&self, text: impl Into<String>) {
        self.state.write().await.draft_title = text.into();
    }

    /// Replace the local list with the service's current collection.
    ///
    /// On failure the previous snapshot is kept.
    pub async fn load(&self) -> Result<()> {
        let tasks = match self.service.list().await {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!("Failed to load tasks: {}", e);
                return Err(e);
            }
        };
        debug!("Loaded {} tasks", tasks.len());
        self.state.write().await.tasks = tasks;
        Ok(())
    }

    /// Create a task from `title`.
    ///
    /// When the trimmed title is empty no request is issued and `Ok(None)`
    /// is returned. On success the server-returned task is appended and the
    /// draft title cleared; on failure both keep their previous values.
    pub async fn create(&self, title: &str) -> Result<Option<Task>> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(None);
        }

        let task = match self.service.create(title).await {
            Ok(task) => task,
            Err(e) => {
                warn!("Failed to create task: {}", e);
                return Err(e);
            }
        };

        let mut state = self.state.write().await;
        state.tasks.push(task.clone());
        state.draft_title.clear();
        Ok(Some(task))
    }

    /// Flip the completion flag of `id` on the service, then reload.
    ///
    /// The flag sent is the negation of the locally known value at call
    /// time. The task stays [`TaskPhase::Pending`] until the follow-up
    /// reload resolves. Failure of either step leaves local state as-is,
    /// which may then lag a change the server did apply until the next
    /// reload.
    pub async fn toggle(&self, id: TaskId) -> Result<()> {
        self.begin_mutation(id).await?;

        let completed = {
            let state = self.state.read().await;
            state.tasks.iter().find(|t| t.id == id).map(|t| t.completed)
        };

        let result = match completed {
            None => Err(Error::TaskNotFound(id)),
            Some(completed) => match self.service.set_completed(id, !completed).await {
                Ok(()) => self.load().await,
                Err(e) => {
                    warn!("Failed to toggle task {}: {}", id, e);
                    Err(e)
                }
            },
        };

        self.end_mutation(id).await;
        result
    }

    /// Delete `id` on the service, then reload.
    ///
    /// Same lifecycle and failure policy as [`toggle`](Self::toggle).
    pub async fn remove(&self, id: TaskId) -> Result<()> {
        self.begin_mutation(id).await?;

        let known = self.state.read().await.tasks.iter().any(|t| t.id == id);

        let result = if !known {
            Err(Error::TaskNotFound(id))
        } else {
            match self.service.delete(id).await {
                Ok(()) => self.load().await,
                Err(e) => {
                    warn!("Failed to delete task {}: {}", id, e);
                    Err(e)
                }
            }
        };

        self.end_mutation(id).await;
        result
    }

    async fn begin_mutation(&self, id: TaskId) -> Result<()> {
        let mut pending = self.pending.lock().await;
        if !pending.insert(id) {
            return Err(Error::TaskBusy(id));
        }
        Ok(())
    }

    async fn end_mutation(&self, id: TaskId) {
        self.pending.lock().await.remove(&id);
    }
}
