use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::approvers::{Approver, DeptManager, DirectManager, GeneralManager};
use crate::decisions::{DecisionRecord, DecisionSink};
use crate::domain::leave::{ApproverRole, LeaveRequest, LeaveVerdict};

/// Outcome of routing one request through the chain.
///
/// A rejection by an authoritative approver and a request no approver
/// claimed are distinct outcomes; `is_approved` collapses both to `false`
/// for callers that only care about the boolean answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestOutcome {
    Approved { role: ApproverRole },
    Rejected { role: ApproverRole },
    NoAuthority,
}

impl RequestOutcome {
    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved { .. })
    }

    pub fn deciding_role(&self) -> Option<ApproverRole> {
        match self {
            Self::Approved { role } | Self::Rejected { role } => Some(*role),
            Self::NoAuthority => None,
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    #[error("an approval chain needs at least one approver")]
    EmptyChain,
}

/// One link of the approval chain: an approver plus an optional successor.
///
/// Successors are owned boxes, so a chain is acyclic and singly linked by
/// construction. Handling never mutates a node, which makes a built chain
/// safe to share across threads.
pub struct ApprovalNode {
    approver: Box<dyn Approver>,
    next: Option<Box<ApprovalNode>>,
}

impl ApprovalNode {
    pub fn new(approver: Box<dyn Approver>) -> Self {
        Self { approver, next: None }
    }

    /// Links this node's successor. Construction-time only; topology is
    /// fixed once requests start flowing.
    pub fn set_next(&mut self, node: ApprovalNode) {
        self.next = Some(Box::new(node));
    }

    /// Builds a chain from approvers in walk order.
    pub fn from_approvers(approvers: Vec<Box<dyn Approver>>) -> Result<Self, ChainError> {
        let mut nodes = approvers.into_iter().rev().map(ApprovalNode::new);
        let mut head = nodes.next().ok_or(ChainError::EmptyChain)?;
        for mut node in nodes {
            node.set_next(head);
            head = node;
        }
        Ok(head)
    }

    pub fn approver_count(&self) -> usize {
        let mut count = 1;
        let mut node = self;
        while let Some(next) = &node.next {
            count += 1;
            node = next;
        }
        count
    }

    /// Routes a request down the chain: the first approver whose authority
    /// range covers the day count renders the terminal verdict; a request no
    /// approver claims falls off the end as `NoAuthority`.
    pub fn handle(&self, request: &LeaveRequest) -> RequestOutcome {
        self.route(request, None)
    }

    /// Same walk as [`handle`](Self::handle), additionally emitting one
    /// decision record through the sink when a terminal verdict is reached.
    pub fn handle_with_sink(
        &self,
        request: &LeaveRequest,
        sink: &dyn DecisionSink,
    ) -> RequestOutcome {
        self.route(request, Some(sink))
    }

    fn route(&self, request: &LeaveRequest, sink: Option<&dyn DecisionSink>) -> RequestOutcome {
        let mut node = self;
        loop {
            if node.approver.has_authority(request.days) {
                let role = node.approver.role();
                let verdict = node.approver.decide(request);
                tracing::debug!(
                    requester = %request.requester,
                    days = request.days,
                    role = %role,
                    verdict = ?verdict,
                    "leave request decided"
                );
                if let Some(sink) = sink {
                    sink.record(DecisionRecord::new(role, verdict, request));
                }
                return match verdict {
                    LeaveVerdict::Approved => RequestOutcome::Approved { role },
                    LeaveVerdict::Rejected => RequestOutcome::Rejected { role },
                };
            }

            match &node.next {
                Some(next) => {
                    tracing::debug!(
                        requester = %request.requester,
                        days = request.days,
                        from = %node.approver.role(),
                        "leave request forwarded to next approver"
                    );
                    node = next;
                }
                None => {
                    tracing::debug!(
                        requester = %request.requester,
                        days = request.days,
                        "approval chain exhausted without an authoritative approver"
                    );
                    return RequestOutcome::NoAuthority;
                }
            }
        }
    }
}

/// Composition root: the standard three-tier chain, wired direct manager →
/// department manager → general manager. Plain construction, no process-wide
/// state.
pub fn leave_approval_chain() -> ApprovalNode {
    let mut dept = ApprovalNode::new(Box::new(DeptManager));
    dept.set_next(ApprovalNode::new(Box::new(GeneralManager)));

    let mut direct = ApprovalNode::new(Box::new(DirectManager));
    direct.set_next(dept);
    direct
}
