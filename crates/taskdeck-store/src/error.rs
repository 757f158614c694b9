/*
[INPUT]:  Command failures (local validation, remote service)
[OUTPUT]: Typed command errors for awaiting callers
[POS]:    Error handling layer - store command boundary
[UPDATE]: When adding new validation rules or failure classes
*/

use taskdeck_adapter::TaskdeckError;
use thiserror::Error;

/// Rejections raised before any network call is issued.
///
/// Validation failures never touch the busy signal.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("task content cannot be empty")]
    EmptyTaskContent,

    #[error("project name cannot be empty")]
    EmptyProjectName,

    #[error("project limit reached")]
    ProjectLimitReached,
}

/// Error returned by store commands to an awaiting caller.
///
/// Every failure is also surfaced as an error notification; awaiting the
/// command is optional and only needed for flow control (closing a modal
/// after success).
#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Service(#[from] TaskdeckError),
}

impl CommandError {
    /// Whether the command was rejected locally, before any network call
    pub fn is_validation(&self) -> bool {
        matches!(self, CommandError::Validation(_))
    }
}

/// Result type alias for store commands
pub type Result<T> = std::result::Result<T, CommandError>;
