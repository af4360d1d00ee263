//! Task module
//!
//! This module contains the task model, the remote service contract, and
//! the list view-model.

mod http;
mod list;
mod model;
mod service;

pub use http::HttpTaskService;
pub use list::{TaskList, TaskPhase};
pub use model::{Task, TaskId};
pub use service::TaskService;
