use serde::{Deserialize, Serialize};

/// A task entity as stored in the task registry and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier assigned from a strictly increasing counter.
    pub id: i32,
    /// The title of the task. Never blank.
    pub title: String,
    /// A free-form description. May be empty.
    pub description: String,
    /// Whether the task is done.
    pub completed: bool,
    /// Identifier of the user who owns the task. Set on creation, immutable.
    pub user_id: i32,
}

/// Input structure for creating or updating a task.
///
/// `completed` defaults to false when omitted from the request body. The
/// non-blank title rule is enforced by the task registry, which owns that
/// invariant for both creation and update.
#[derive(Debug, Deserialize)]
pub struct TaskInput {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

/// Query parameters accepted when listing tasks.
///
/// A search query takes precedence over a completion filter when both are
/// supplied; with neither, all of the owner's tasks are returned.
#[derive(Debug, Deserialize)]
pub struct TaskQuery {
    pub completed: Option<bool>,
    pub search: Option<String>,
}

/// Response envelope for operations on a single task.
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Task>,
}

/// Response envelope for task listings.
#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub success: bool,
    pub message: String,
    pub data: Vec<Task>,
}
