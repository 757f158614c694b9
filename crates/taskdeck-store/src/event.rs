/*
[INPUT]:  Confirmed store mutations
[OUTPUT]: Typed change events broadcast to UI subscribers
[POS]:    Sync layer - cross-surface reactivity without polling
[UPDATE]: When adding new store mutations that surfaces react to
*/

use tokio::sync::broadcast;

/// Which task membership a refresh replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskView {
    /// Global list backing the today/upcoming sweeps
    All,
    /// Per-project (or aliased full) list backing the detail screen
    Scoped,
}

/// Change events emitted after a successful reconciliation.
///
/// Failed commands emit nothing here; failures travel on the notification
/// relay instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A view was replaced wholesale by a fetch
    TasksRefreshed { view: TaskView },
    /// A task was created and registered in the views
    TaskCreated { id: String },
    /// A task's stored fields changed
    TaskUpdated { id: String },
    /// A task was completed or deleted and left all views
    TaskRemoved { id: String },
    /// The project list was replaced wholesale
    ProjectsRefreshed,
    /// A project was appended to the list
    ProjectCreated { id: String },
    /// A project left the list
    ProjectRemoved { id: String },
}

/// Broadcast fan-out for store events.
///
/// Subscribers hold a `broadcast::Receiver`; dropping it unsubscribes.
/// Emitting with no subscribers is a no-op.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<StoreEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.tx.subscribe()
    }

    pub(crate) fn emit(&self, event: StoreEvent) {
        let _ = self.tx.send(event);
    }
}
