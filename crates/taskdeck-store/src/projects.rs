/*
[INPUT]:  Project commands from UI surfaces, confirmed payloads from the service
[OUTPUT]: Ordered project list and derived reads (my projects, Inbox)
[POS]:    Sync layer - project list state
[UPDATE]: When changing the cap policy or derived reads
*/

use std::sync::Arc;

use taskdeck_adapter::{Project, TaskdeckClient};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::busy::BusySignal;
use crate::error::{Result, ValidationError};
use crate::event::{EventBus, StoreEvent};
use crate::notify::NotificationRelay;

/// Soft cap on user-created projects; Inbox does not count.
pub const MAX_USER_PROJECTS: usize = 8;

/// The project list state.
///
/// Insertion order is display order. There is no optimistic insert: a
/// project only appears once the service confirms it, so the list briefly
/// shows no change while a create is in flight.
#[derive(Debug)]
pub struct ProjectStore {
    client: Arc<TaskdeckClient>,
    busy: BusySignal,
    notifier: NotificationRelay,
    events: EventBus,
    state: RwLock<Vec<Project>>,
}

impl ProjectStore {
    pub fn new(
        client: Arc<TaskdeckClient>,
        busy: BusySignal,
        notifier: NotificationRelay,
        events: EventBus,
    ) -> Self {
        Self {
            client,
            busy,
            notifier,
            events,
            state: RwLock::new(Vec::new()),
        }
    }

    /// Replace the list with the service's current projects.
    ///
    /// Idempotent; screens call this on every entry.
    pub async fn fetch_all(&self) -> Result<()> {
        let _busy = self.busy.begin();
        match self.client.list_projects().await {
            Ok(fetched) => {
                info!(count = fetched.len(), "project list refreshed");
                *self.state.write().await = fetched;
                self.events.emit(StoreEvent::ProjectsRefreshed);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch projects");
                self.notifier.error("Unable to fetch", "Please try again.");
                Err(err.into())
            }
        }
    }

    /// Create a project and append it once the service confirms.
    ///
    /// Rejected locally, with no network call and no busy transition, when
    /// the name is empty or the user-project cap is already reached.
    pub async fn create(&self, name: &str) -> Result<Project> {
        let name = name.trim();
        if name.is_empty() {
            self.notifier
                .error("Unable to create project", "Project name cannot be empty.");
            return Err(ValidationError::EmptyProjectName.into());
        }
        let user_projects = {
            let projects = self.state.read().await;
            projects.iter().filter(|project| !project.is_inbox()).count()
        };
        if user_projects >= MAX_USER_PROJECTS {
            self.notifier.error(
                "Project limit reached",
                "Delete a project before creating another.",
            );
            return Err(ValidationError::ProjectLimitReached.into());
        }

        let _busy = self.busy.begin();
        match self.client.create_project(name).await {
            Ok(project) => {
                info!(id = %project.id, "project created");
                {
                    let mut projects = self.state.write().await;
                    if !projects.iter().any(|existing| existing.id == project.id) {
                        projects.push(project.clone());
                    }
                }
                self.notifier.success("Project created", name);
                self.events.emit(StoreEvent::ProjectCreated {
                    id: project.id.clone(),
                });
                Ok(project)
            }
            Err(err) => {
                warn!(error = %err, "failed to create project");
                self.notifier
                    .error("Unable to create project", "Please try again.");
                Err(err.into())
            }
        }
    }

    /// Delete a project once the service confirms
    pub async fn delete(&self, id: &str) -> Result<()> {
        let _busy = self.busy.begin();
        match self.client.delete_project(id).await {
            Ok(()) => {
                info!(id, "project deleted");
                self.state.write().await.retain(|project| project.id != id);
                self.events.emit(StoreEvent::ProjectRemoved { id: id.to_string() });
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, id, "failed to delete project");
                self.notifier
                    .error("Unable to delete project", "Please try again.");
                Err(err.into())
            }
        }
    }

    /// Full list, Inbox included, in display order
    pub async fn projects(&self) -> Vec<Project> {
        self.state.read().await.clone()
    }

    /// User-created projects: the list minus Inbox
    pub async fn my_projects(&self) -> Vec<Project> {
        self.state
            .read()
            .await
            .iter()
            .filter(|project| !project.is_inbox())
            .cloned()
            .collect()
    }

    /// The Inbox project, once fetched
    pub async fn inbox(&self) -> Option<Project> {
        self.state
            .read()
            .await
            .iter()
            .find(|project| project.is_inbox())
            .cloned()
    }

    /// Display name for a project id, for task rows
    pub async fn name_of(&self, project_id: &str) -> Option<String> {
        self.state
            .read()
            .await
            .iter()
            .find(|project| project.id == project_id)
            .map(|project| project.name.clone())
    }
}
