/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Task priority, serialized as the integer 1-4 the service expects.
///
/// 1 is the default ("normal"), 4 is the most urgent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    #[default]
    P1,
    P2,
    P3,
    P4,
}

impl Priority {
    /// Display label matching the priority picker options
    pub fn label(self) -> &'static str {
        match self {
            Priority::P1 => "Priority 1 (Normal)",
            Priority::P2 => "Priority 2",
            Priority::P3 => "Priority 3",
            Priority::P4 => "Priority 4 (Urgent)",
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Priority::P1),
            2 => Ok(Priority::P2),
            3 => Ok(Priority::P3),
            4 => Ok(Priority::P4),
            other => Err(format!("priority must be 1-4, got {}", other)),
        }
    }
}

impl From<Priority> for u8 {
    fn from(value: Priority) -> Self {
        match value {
            Priority::P1 => 1,
            Priority::P2 => 2,
            Priority::P3 => 3,
            Priority::P4 => 4,
        }
    }
}
