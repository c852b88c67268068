use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::leave::{ApproverRole, LeaveRequest, LeaveVerdict};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub decision_id: String,
    pub requester: String,
    pub days: i32,
    pub role: ApproverRole,
    pub verdict: LeaveVerdict,
    pub message: String,
    pub decided_at: DateTime<Utc>,
}

impl DecisionRecord {
    pub fn new(role: ApproverRole, verdict: LeaveVerdict, request: &LeaveRequest) -> Self {
        Self {
            decision_id: Uuid::new_v4().to_string(),
            requester: request.requester.clone(),
            days: request.days,
            role,
            verdict,
            message: render_decision_line(role, verdict, request),
            decided_at: Utc::now(),
        }
    }
}

/// One human-readable line per decision, in the wording the approval desk
/// has always used.
pub fn render_decision_line(
    role: ApproverRole,
    verdict: LeaveVerdict,
    request: &LeaveRequest,
) -> String {
    match verdict {
        LeaveVerdict::Approved => format!(
            "{role} allows {} to take a {}-day leave",
            request.requester, request.days
        ),
        LeaveVerdict::Rejected => format!(
            "{role} rejects {} to have a {}-day leave",
            request.requester, request.days
        ),
    }
}

pub trait DecisionSink: Send + Sync {
    fn record(&self, record: DecisionRecord);
}

/// Prints each decision line to stdout, one line per terminal decision.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleDecisionSink;

impl DecisionSink for ConsoleDecisionSink {
    fn record(&self, record: DecisionRecord) {
        println!("{}", record.message);
    }
}

#[derive(Clone, Default)]
pub struct InMemoryDecisionSink {
    records: Arc<Mutex<Vec<DecisionRecord>>>,
}

impl InMemoryDecisionSink {
    pub fn records(&self) -> Vec<DecisionRecord> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.records().into_iter().map(|record| record.message).collect()
    }
}

impl DecisionSink for InMemoryDecisionSink {
    fn record(&self, record: DecisionRecord) {
        match self.records.lock() {
            Ok(mut records) => records.push(record),
            Err(poisoned) => poisoned.into_inner().push(record),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::decisions::{DecisionRecord, DecisionSink, InMemoryDecisionSink};
    use crate::domain::leave::{ApproverRole, LeaveRequest, LeaveVerdict};

    #[test]
    fn in_memory_sink_captures_records_in_order() {
        let sink = InMemoryDecisionSink::default();
        sink.record(DecisionRecord::new(
            ApproverRole::DirectManager,
            LeaveVerdict::Approved,
            &LeaveRequest::new("conk", 2),
        ));
        sink.record(DecisionRecord::new(
            ApproverRole::DeptManager,
            LeaveVerdict::Rejected,
            &LeaveRequest::new("zzm", 4),
        ));

        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].requester, "conk");
        assert_eq!(records[0].verdict, LeaveVerdict::Approved);
        assert_eq!(records[1].role, ApproverRole::DeptManager);
        assert_ne!(records[0].decision_id, records[1].decision_id);
    }

    #[test]
    fn console_sink_accepts_records() {
        use crate::decisions::ConsoleDecisionSink;

        // Output goes to stdout; this only pins down that the sink is usable
        // through the trait object the router hands records to.
        let sink: &dyn DecisionSink = &ConsoleDecisionSink;
        sink.record(DecisionRecord::new(
            ApproverRole::GeneralManager,
            LeaveVerdict::Approved,
            &LeaveRequest::new("penghantian", 10),
        ));
    }

    #[test]
    fn approval_line_uses_the_allows_wording() {
        let record = DecisionRecord::new(
            ApproverRole::DirectManager,
            LeaveVerdict::Approved,
            &LeaveRequest::new("conk", 2),
        );
        assert_eq!(record.message, "DirectManager allows conk to take a 2-day leave");
    }

    #[test]
    fn rejection_line_uses_the_rejects_wording() {
        let record = DecisionRecord::new(
            ApproverRole::DeptManager,
            LeaveVerdict::Rejected,
            &LeaveRequest::new("zzm", 4),
        );
        assert_eq!(record.message, "DeptManager rejects zzm to have a 4-day leave");
    }
}
