/*
[INPUT]:  Project names and identifiers
[OUTPUT]: Project payloads and deletion confirmations
[POS]:    HTTP layer - project CRUD endpoints
[UPDATE]: When adding new project endpoints or changing request shapes
*/

use crate::http::{Result, TaskdeckClient};
use crate::types::{CreateProjectRequest, Project};
use reqwest::Method;

impl TaskdeckClient {
    /// List all projects, Inbox included
    ///
    /// GET /api/projects
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let builder = self.request(Method::GET, "/api/projects")?;
        self.send_json(builder).await
    }

    /// Create a new project
    ///
    /// POST /api/projects
    pub async fn create_project(&self, name: &str) -> Result<Project> {
        let body = CreateProjectRequest {
            name: name.to_string(),
        };
        let builder = self.request(Method::POST, "/api/projects")?.json(&body);
        self.send_json(builder).await
    }

    /// Delete a project
    ///
    /// DELETE /api/projects/{id}
    pub async fn delete_project(&self, id: &str) -> Result<()> {
        let endpoint = format!("/api/projects/{}", id);
        let builder = self.request(Method::DELETE, &endpoint)?;
        self.send_no_content(builder).await
    }
}
