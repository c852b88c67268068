use crate::domain::leave::{ApproverRole, LeaveRequest, LeaveVerdict};

/// Day counts below this fall under the direct manager's authority.
pub const DIRECT_AUTHORITY_LIMIT_DAYS: i32 = 3;
/// Day counts below this (and at or above the direct limit) fall under the
/// department manager's authority; everything else is the general manager's.
pub const DEPT_AUTHORITY_LIMIT_DAYS: i32 = 7;

/// Capability of one approval tier: whether a request of a given magnitude
/// falls under its authority, and the verdict it renders when it does.
///
/// The three tiers' authority ranges are half-open intervals that partition
/// the integers: every day count (negatives included) belongs to exactly one
/// tier. `decide` is only meaningful for requests the tier has authority
/// over; the chain router enforces that ordering.
pub trait Approver: Send + Sync {
    fn role(&self) -> ApproverRole;
    fn has_authority(&self, days: i32) -> bool;
    fn decide(&self, request: &LeaveRequest) -> LeaveVerdict;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DirectManager;

impl DirectManager {
    const AUTO_APPROVED_REQUESTER: &'static str = "conk";
}

impl Approver for DirectManager {
    fn role(&self) -> ApproverRole {
        ApproverRole::DirectManager
    }

    fn has_authority(&self, days: i32) -> bool {
        days < DIRECT_AUTHORITY_LIMIT_DAYS
    }

    fn decide(&self, request: &LeaveRequest) -> LeaveVerdict {
        if request.requester == Self::AUTO_APPROVED_REQUESTER {
            LeaveVerdict::Approved
        } else {
            LeaveVerdict::Rejected
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DeptManager;

impl DeptManager {
    const AUTO_APPROVED_REQUESTER: &'static str = "pht";
}

impl Approver for DeptManager {
    fn role(&self) -> ApproverRole {
        ApproverRole::DeptManager
    }

    fn has_authority(&self, days: i32) -> bool {
        days < DEPT_AUTHORITY_LIMIT_DAYS
    }

    fn decide(&self, request: &LeaveRequest) -> LeaveVerdict {
        if request.requester == Self::AUTO_APPROVED_REQUESTER {
            LeaveVerdict::Approved
        } else {
            LeaveVerdict::Rejected
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GeneralManager;

impl GeneralManager {
    const AUTO_APPROVED_REQUESTER: &'static str = "penghantian";
}

impl Approver for GeneralManager {
    fn role(&self) -> ApproverRole {
        ApproverRole::GeneralManager
    }

    fn has_authority(&self, days: i32) -> bool {
        days >= DEPT_AUTHORITY_LIMIT_DAYS
    }

    fn decide(&self, request: &LeaveRequest) -> LeaveVerdict {
        if request.requester == Self::AUTO_APPROVED_REQUESTER {
            LeaveVerdict::Approved
        } else {
            LeaveVerdict::Rejected
        }
    }
}
