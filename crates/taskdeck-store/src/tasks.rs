/// **Input**: Task commands from UI surfaces, confirmed payloads from the service.
/// **Output**: Reconciled task views and derived reads for rendering.
/// **Position**: Sync layer - the task state machine everything else reads.
/// **Update**: Replace dual task caches with a normalized table plus id views.
/// **Update**: Register created tasks in both views instead of the scoped one.
/// **Update**: Add content search across the global view.
use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use taskdeck_adapter::{CreateTaskRequest, Task, TaskdeckClient, UpdateTaskRequest};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::busy::BusySignal;
use crate::error::{Result, ValidationError};
use crate::event::{EventBus, StoreEvent, TaskView};
use crate::notify::NotificationRelay;

/// Normalized task state: one entity table keyed by id, plus the id
/// membership of the two fetched views.
///
/// A task struct lives in the table exactly once no matter how many views
/// reference it, so a confirmed mutation is applied in one place and every
/// view observes it. View vectors keep fetch order, which is display order.
#[derive(Debug, Default)]
struct TaskTable {
    tasks: HashMap<String, Task>,
    all: Vec<String>,
    scoped: Vec<String>,
}

impl TaskTable {
    fn view_ids(&self, view: TaskView) -> &[String] {
        match view {
            TaskView::All => &self.all,
            TaskView::Scoped => &self.scoped,
        }
    }

    /// Replace one view wholesale with a fetched snapshot.
    ///
    /// Fetched tasks are upserted into the table; ids the service sent
    /// twice are kept once. Table entries no longer referenced by either
    /// view are dropped afterwards.
    fn replace_view(&mut self, view: TaskView, fetched: Vec<Task>) {
        let mut ids = Vec::with_capacity(fetched.len());
        for task in fetched {
            if !ids.contains(&task.id) {
                ids.push(task.id.clone());
            }
            self.tasks.insert(task.id.clone(), task);
        }
        match view {
            TaskView::All => self.all = ids,
            TaskView::Scoped => self.scoped = ids,
        }
        self.prune();
    }

    /// Register a confirmed creation in the table and both views.
    fn insert(&mut self, task: Task) {
        if !self.all.contains(&task.id) {
            self.all.push(task.id.clone());
        }
        if !self.scoped.contains(&task.id) {
            self.scoped.push(task.id.clone());
        }
        self.tasks.insert(task.id.clone(), task);
    }

    /// Apply a confirmed update; ids no view references are left alone.
    fn apply_update(&mut self, task: Task) -> bool {
        match self.tasks.get_mut(&task.id) {
            Some(stored) => {
                *stored = task;
                true
            }
            None => false,
        }
    }

    /// Drop an id from the table and both views; absent ids are a no-op.
    fn remove(&mut self, id: &str) -> bool {
        self.all.retain(|entry| entry != id);
        self.scoped.retain(|entry| entry != id);
        self.tasks.remove(id).is_some()
    }

    fn prune(&mut self) {
        let all = &self.all;
        let scoped = &self.scoped;
        self.tasks
            .retain(|id, _| all.contains(id) || scoped.contains(id));
    }

    fn materialize(&self, view: TaskView) -> Vec<Task> {
        self.view_ids(view)
            .iter()
            .filter_map(|id| self.tasks.get(id).cloned())
            .collect()
    }

    fn due_on(&self, day: NaiveDate) -> Vec<Task> {
        self.materialize(TaskView::All)
            .into_iter()
            .filter(|task| task.due_date() == Some(day))
            .collect()
    }

    fn due_after(&self, day: NaiveDate) -> Vec<Task> {
        self.materialize(TaskView::All)
            .into_iter()
            .filter(|task| task.due_date().is_some_and(|due| due != day))
            .collect()
    }

    fn search(&self, query: &str) -> Vec<Task> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.materialize(TaskView::All)
            .into_iter()
            .filter(|task| task.content.to_lowercase().contains(&needle))
            .collect()
    }
}

/// The task state machine.
///
/// Every command follows one shape: validate, hold a busy guard for the
/// network call, reconcile the confirmed result into the table, then emit
/// a change event (plus a notification where user feedback is owed). A
/// failed call leaves the state exactly as it was.
#[derive(Debug)]
pub struct TaskStore {
    client: Arc<TaskdeckClient>,
    busy: BusySignal,
    notifier: NotificationRelay,
    events: EventBus,
    state: RwLock<TaskTable>,
}

impl TaskStore {
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
            state: RwLock::new(TaskTable::default()),
        }
    }

    /// Refresh the global view with the service's full task list
    pub async fn fetch_all(&self) -> Result<()> {
        let _busy = self.busy.begin();
        match self.client.list_tasks(None).await {
            Ok(fetched) => {
                info!(count = fetched.len(), "task list refreshed");
                self.state.write().await.replace_view(TaskView::All, fetched);
                self.events.emit(StoreEvent::TasksRefreshed {
                    view: TaskView::All,
                });
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch tasks");
                self.notifier.error("Unable to fetch", "Please try again.");
                Err(err.into())
            }
        }
    }

    /// Refresh the scoped view: one project's tasks, or the full list
    /// when no project id is given
    pub async fn fetch_scoped(&self, project_id: Option<&str>) -> Result<()> {
        let _busy = self.busy.begin();
        match self.client.list_tasks(project_id).await {
            Ok(fetched) => {
                info!(count = fetched.len(), project_id, "scoped task list refreshed");
                self.state
                    .write()
                    .await
                    .replace_view(TaskView::Scoped, fetched);
                self.events.emit(StoreEvent::TasksRefreshed {
                    view: TaskView::Scoped,
                });
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch scoped tasks");
                self.notifier.error("Unable to fetch", "Please try again.");
                Err(err.into())
            }
        }
    }

    /// Create a task; the service assigns the id.
    ///
    /// A draft with no project id is filed in Inbox by the service.
    pub async fn create(&self, draft: CreateTaskRequest) -> Result<Task> {
        if draft.content.trim().is_empty() {
            self.notifier
                .error("Unable to create task", "Task content cannot be empty.");
            return Err(ValidationError::EmptyTaskContent.into());
        }

        let _busy = self.busy.begin();
        match self.client.create_task(draft).await {
            Ok(task) => {
                info!(id = %task.id, "task created");
                self.state.write().await.insert(task.clone());
                self.notifier.success("Task created", &task.content);
                self.events.emit(StoreEvent::TaskCreated {
                    id: task.id.clone(),
                });
                Ok(task)
            }
            Err(err) => {
                warn!(error = %err, "failed to create task");
                self.notifier
                    .error("Unable to create task", "Please try again.");
                Err(err.into())
            }
        }
    }

    /// Patch a task in place; unpatched fields keep their stored values.
    ///
    /// Views that do not contain the id are left unchanged — the confirmed
    /// payload never inserts membership.
    pub async fn update(&self, id: &str, patch: UpdateTaskRequest) -> Result<Task> {
        let _busy = self.busy.begin();
        match self.client.update_task(id, patch).await {
            Ok(task) => {
                let applied = self.state.write().await.apply_update(task.clone());
                info!(id = %task.id, applied, "task updated");
                if applied {
                    self.events.emit(StoreEvent::TaskUpdated {
                        id: task.id.clone(),
                    });
                }
                Ok(task)
            }
            Err(err) => {
                warn!(error = %err, id, "failed to update task");
                self.notifier
                    .error("Unable to update task", "Please try again.");
                Err(err.into())
            }
        }
    }

    /// Complete a task; the authoritative removal from the views happens
    /// only once the service confirms
    pub async fn complete(&self, id: &str) -> Result<()> {
        let _busy = self.busy.begin();
        match self.client.complete_task(id).await {
            Ok(()) => {
                let removed = self.state.write().await.remove(id);
                info!(id, removed, "task completed");
                if removed {
                    self.events.emit(StoreEvent::TaskRemoved { id: id.to_string() });
                }
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, id, "failed to complete task");
                self.notifier
                    .error("Unable to complete task", "Please try again.");
                Err(err.into())
            }
        }
    }

    /// Delete a task
    pub async fn delete(&self, id: &str) -> Result<()> {
        let _busy = self.busy.begin();
        match self.client.delete_task(id).await {
            Ok(()) => {
                let removed = self.state.write().await.remove(id);
                info!(id, removed, "task deleted");
                if removed {
                    self.events.emit(StoreEvent::TaskRemoved { id: id.to_string() });
                }
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, id, "failed to delete task");
                self.notifier
                    .error("Unable to delete task", "Please try again.");
                Err(err.into())
            }
        }
    }

    /// Tasks of the global view, in fetch order
    pub async fn all(&self) -> Vec<Task> {
        self.state.read().await.materialize(TaskView::All)
    }

    /// Tasks of the scoped view, in fetch order
    pub async fn scoped(&self) -> Vec<Task> {
        self.state.read().await.materialize(TaskView::Scoped)
    }

    /// Global-view tasks due on the current calendar day (local time)
    pub async fn today(&self) -> Vec<Task> {
        self.due_today_on(Local::now().date_naive()).await
    }

    /// Global-view tasks with a due date that is not the current day
    pub async fn upcoming(&self) -> Vec<Task> {
        self.upcoming_on(Local::now().date_naive()).await
    }

    /// Deterministic form of [`today`](Self::today) for an explicit day
    pub async fn due_today_on(&self, day: NaiveDate) -> Vec<Task> {
        self.state.read().await.due_on(day)
    }

    /// Deterministic form of [`upcoming`](Self::upcoming) for an explicit day
    pub async fn upcoming_on(&self, day: NaiveDate) -> Vec<Task> {
        self.state.read().await.due_after(day)
    }

    /// Global-view tasks whose content contains the query, case-insensitive
    pub async fn search(&self, query: &str) -> Vec<Task> {
        self.state.read().await.search(query)
    }
}
