//! Task model definitions

use serde::{Deserialize, Serialize};

/// Identifier minted by the remote service, stable for the task's lifetime.
pub type TaskId = i64;

/// A single to-do item, mirroring the remote wire object field for field.
///
/// `title` is set at creation and never edited; `completed` changes only
/// through an explicit update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_wire_object() {
        let task: Task = serde_json::from_str(r#"{"id":1,"title":"Buy milk","completed":false}"#)
            .expect("valid wire object");
        assert_eq!(task.id, 1);
        assert_eq!(task.title, "Buy milk");
        assert!(!task.completed);
    }
}
