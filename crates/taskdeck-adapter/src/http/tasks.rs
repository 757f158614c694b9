/*
[INPUT]:  Task drafts, patches and query parameters
[OUTPUT]: Task payloads and completion/deletion confirmations
[POS]:    HTTP layer - task CRUD endpoints
[UPDATE]: When adding new task endpoints or changing request shapes
*/

use crate::http::{Result, TaskdeckClient};
use crate::types::{CreateTaskRequest, Task, UpdateTaskRequest};
use reqwest::Method;

impl TaskdeckClient {
    /// List tasks, optionally restricted to one project
    ///
    /// GET /api/tasks?projectId={projectId}
    pub async fn list_tasks(&self, project_id: Option<&str>) -> Result<Vec<Task>> {
        let endpoint = match project_id {
            Some(id) => format!("/api/tasks?projectId={}", id),
            None => "/api/tasks".to_string(),
        };
        let builder = self.request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Create a new task
    ///
    /// POST /api/tasks
    pub async fn create_task(&self, draft: CreateTaskRequest) -> Result<Task> {
        let builder = self.request(Method::POST, "/api/tasks")?.json(&draft);
        self.send_json(builder).await
    }

    /// Apply a partial update to a task
    ///
    /// POST /api/tasks/{id}
    pub async fn update_task(&self, id: &str, patch: UpdateTaskRequest) -> Result<Task> {
        let endpoint = format!("/api/tasks/{}", id);
        let builder = self.request(Method::POST, &endpoint)?.json(&patch);
        self.send_json(builder).await
    }

    /// Mark a task as completed
    ///
    /// POST /api/tasks/{id}/close
    pub async fn complete_task(&self, id: &str) -> Result<()> {
        let endpoint = format!("/api/tasks/{}/close", id);
        let builder = self.request(Method::POST, &endpoint)?;
        self.send_no_content(builder).await
    }

    /// Delete a task
    ///
    /// DELETE /api/tasks/{id}
    pub async fn delete_task(&self, id: &str) -> Result<()> {
        let endpoint = format!("/api/tasks/{}", id);
        let builder = self.request(Method::DELETE, &endpoint)?;
        self.send_no_content(builder).await
    }
}
