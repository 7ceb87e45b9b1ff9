//! Task records and the create-task exchange.

use serde::{Deserialize, Serialize};

/// A CRM task as delivered by the backend.
///
/// Tasks carry no identifier of their own; `name` together with `date` serves
/// as the practical key. The client never mutates a task in place: after a
/// successful create, the whole list is fetched again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Creation timestamp as a "dd.MM.yyyy H:mm:ss" string.
    pub date: String,
    pub description: String,
    /// One of a small fixed vocabulary (Assigned, InProgress, Done, Overdue,
    /// Cancelled), though the backend treats it as free text.
    pub status: String,
    /// Name of the assignee.
    pub producer: String,
    /// Due date as a "dd.MM.yyyy H:mm:ss" string.
    pub execution_date: String,
    pub name: String,
    pub important: bool,
}

impl Task {
    /// Due date formatted for display; the raw backend string when it does
    /// not parse.
    pub fn execution_date_display(&self) -> String {
        crate::dates::readable_date(&self.execution_date)
    }

    /// Creation timestamp formatted for display.
    pub fn date_display(&self) -> String {
        crate::dates::readable_date_time(&self.date)
    }
}

/// Payload for creating a new task.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub important: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<TaskComment>>,
}

impl CreateTaskRequest {
    /// A request with just the required fields set.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            status: None,
            producer: None,
            execution_date: None,
            important: None,
            comments: None,
        }
    }
}

/// A free-text comment attached to a create-task request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskComment {
    pub comment: String,
}

/// Backend reply to a create-task request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateTaskResponse {
    pub success: bool,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub task: Option<Task>,
    #[serde(default)]
    pub error: Option<String>,
}

impl CreateTaskResponse {
    /// A failed response synthesized on the client (transport errors and the
    /// like), so callers always deal with one shape.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            id: None,
            message: None,
            task: None,
            error: Some(error.into()),
        }
    }
}
