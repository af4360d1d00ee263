//! HTTP implementation of the remote task service
//!
//! Talks to a REST collection: `GET`/`POST /todos` and
//! `PUT`/`DELETE /todos/{id}`, JSON bodies throughout.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use super::model::{Task, TaskId};
use super::service::TaskService;
use crate::config::RemoteConfig;
use crate::{Error, Result};

#[derive(Serialize)]
struct CreateTask<'a> {
    title: &'a str,
}

#[derive(Serialize)]
struct UpdateTask {
    completed: bool,
}

/// Remote task service reached over HTTP.
pub struct HttpTaskService {
    client: Client,
    base_url: String,
}

impl HttpTaskService {
    /// Create a client for the configured service address.
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl TaskService for HttpTaskService {
    async fn list(&self) -> Result<Vec<Task>> {
        let resp = self
            .client
            .get(self.url("/todos"))
            .send()
            .await
            .map_err(|e| Error::Remote(format!("Failed to fetch tasks: {}", e)))?;

        if !resp.status().is_success() {
            return Err(Error::Remote(format!(
                "Failed to fetch tasks: HTTP {}",
                resp.status()
            )));
        }

        resp.json()
            .await
            .map_err(|e| Error::Remote(format!("Failed to parse task list: {}", e)))
    }

    async fn create(&self, title: &str) -> Result<Task> {
        let resp = self
            .client
            .post(self.url("/todos"))
            .json(&CreateTask { title })
            .send()
            .await
            .map_err(|e| Error::Remote(format!("Failed to create task: {}", e)))?;

        if !resp.status().is_success() {
            return Err(Error::Remote(format!(
                "Failed to create task: HTTP {}",
                resp.status()
            )));
        }

        resp.json()
            .await
            .map_err(|e| Error::Remote(format!("Failed to parse created task: {}", e)))
    }

    async fn set_completed(&self, id: TaskId, completed: bool) -> Result<()> {
        let resp = self
            .client
            .put(self.url(&format!("/todos/{}", id)))
            .json(&UpdateTask { completed })
            .send()
            .await
            .map_err(|e| Error::Remote(format!("Failed to update task {}: {}", id, e)))?;

        if !resp.status().is_success() {
            return Err(Error::Remote(format!(
                "Failed to update task {}: HTTP {}",
                id,
                resp.status()
            )));
        }

        // Response body is ignored.
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> Result<()> {
        let resp = self
            .client
            .delete(self.url(&format!("/todos/{}", id)))
            .send()
            .await
            .map_err(|e| Error::Remote(format!("Failed to delete task {}: {}", id, e)))?;

        if !resp.status().is_success() {
            return Err(Error::Remote(format!(
                "Failed to delete task {}: HTTP {}",
                id,
                resp.status()
            )));
        }

        // Response body is ignored.
        Ok(())
    }
}
