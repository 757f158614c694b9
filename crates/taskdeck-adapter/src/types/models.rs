/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::Priority;

/// Name of the always-present default project every account starts with.
pub const INBOX_PROJECT_NAME: &str = "Inbox";

/// A task as the service represents it.
///
/// The id is assigned by the service; a task without an id does not exist
/// yet and is modeled as a request type instead (`CreateTaskRequest`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<Due>,
    #[serde(default)]
    pub priority: Priority,
    pub project_id: String,
}

/// Structured due date: a plain ISO calendar date, no time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Due {
    pub date: NaiveDate,
}

impl Task {
    /// Calendar day the task is due, if any
    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due.map(|due| due.date)
    }
}

/// A named bucket grouping tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
}

impl Project {
    /// Whether this is the default "Inbox" bucket
    pub fn is_inbox(&self) -> bool {
        self.name == INBOX_PROJECT_NAME
    }
}
