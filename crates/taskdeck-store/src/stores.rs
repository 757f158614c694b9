/*
[INPUT]:  A configured adapter client
[OUTPUT]: Wired task/project stores sharing one busy signal, relay and bus
[POS]:    Sync layer - composition root the UI holds on to
[UPDATE]: When adding a store or another shared channel
*/

use std::sync::Arc;

use taskdeck_adapter::TaskdeckClient;
use tokio::sync::{broadcast, watch};

use crate::busy::BusySignal;
use crate::event::{EventBus, StoreEvent};
use crate::notify::{Notification, NotificationRelay};
use crate::projects::ProjectStore;
use crate::tasks::TaskStore;

const NOTIFICATION_CAPACITY: usize = 16;
const EVENT_CAPACITY: usize = 64;

/// Everything the presentation layer needs, wired once.
///
/// Both stores share the busy signal, the notification relay and the event
/// bus, so any command anywhere gates input and feeds the same toast and
/// reactivity surfaces.
#[derive(Debug)]
pub struct Stores {
    tasks: TaskStore,
    projects: ProjectStore,
    busy: BusySignal,
    notifier: NotificationRelay,
    events: EventBus,
}

impl Stores {
    pub fn new(client: Arc<TaskdeckClient>) -> Self {
        let busy = BusySignal::new();
        let notifier = NotificationRelay::new(NOTIFICATION_CAPACITY);
        let events = EventBus::new(EVENT_CAPACITY);

        Self {
            tasks: TaskStore::new(
                Arc::clone(&client),
                busy.clone(),
                notifier.clone(),
                events.clone(),
            ),
            projects: ProjectStore::new(client, busy.clone(), notifier.clone(), events.clone()),
            busy,
            notifier,
            events,
        }
    }

    pub fn tasks(&self) -> &TaskStore {
        &self.tasks
    }

    pub fn projects(&self) -> &ProjectStore {
        &self.projects
    }

    pub fn busy(&self) -> &BusySignal {
        &self.busy
    }

    /// In-flight count receiver for the blocking overlay
    pub fn busy_watch(&self) -> watch::Receiver<usize> {
        self.busy.watch()
    }

    /// Transient message stream for the toast surface
    pub fn notifications(&self) -> broadcast::Receiver<Notification> {
        self.notifier.subscribe()
    }

    /// Typed change events for reactive screens
    pub fn events(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }
}
