use std::fmt;

use serde::{Deserialize, Serialize};

/// A leave request as it travels down the approval chain. Ephemeral: it
/// exists for the duration of one routing call and is never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub requester: String,
    pub days: i32,
}

impl LeaveRequest {
    pub fn new(requester: impl Into<String>, days: i32) -> Self {
        Self { requester: requester.into(), days }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApproverRole {
    DirectManager,
    DeptManager,
    GeneralManager,
}

impl fmt::Display for ApproverRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DirectManager => "DirectManager",
            Self::DeptManager => "DeptManager",
            Self::GeneralManager => "GeneralManager",
        };
        write!(f, "{name}")
    }
}

/// Terminal verdict produced by an authoritative approver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveVerdict {
    Approved,
    Rejected,
}
