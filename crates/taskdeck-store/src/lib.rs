/*
[INPUT]:  Public API exports for taskdeck-store crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod busy;
pub mod error;
pub mod event;
pub mod notify;
pub mod projects;
pub mod stores;
pub mod tasks;

// Re-export main types for convenience
pub use busy::{BusyGuard, BusySignal};
pub use error::{CommandError, ValidationError};
pub use event::{EventBus, StoreEvent, TaskView};
pub use notify::{Notification, NotificationRelay, Severity};
pub use projects::{MAX_USER_PROJECTS, ProjectStore};
pub use stores::Stores;
pub use tasks::TaskStore;
