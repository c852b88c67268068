use leavechain_core::{
    leave_approval_chain, DecisionRecord, InMemoryDecisionSink, LeaveRequest, RequestOutcome,
};
use serde::Serialize;

use crate::commands::CommandResult;

#[derive(Debug, Serialize)]
struct SubmitPayload {
    approved: bool,
    outcome: RequestOutcome,
    decision: Option<DecisionRecord>,
}

pub fn run(requester: &str, days: i32, json: bool) -> CommandResult {
    let chain = leave_approval_chain();
    let sink = InMemoryDecisionSink::default();
    let request = LeaveRequest::new(requester, days);

    let outcome = chain.handle_with_sink(&request, &sink);
    let exit_code = if outcome.is_approved() { 0 } else { 1 };

    let output = if json {
        let payload = SubmitPayload {
            approved: outcome.is_approved(),
            outcome,
            decision: sink.records().into_iter().next(),
        };
        serialize_payload(&payload)
    } else {
        sink.messages().into_iter().next().unwrap_or_else(|| {
            format!("no approver has authority over a {days}-day leave request from {requester}")
        })
    };

    CommandResult { exit_code, output }
}

fn serialize_payload(payload: &SubmitPayload) -> String {
    serde_json::to_string_pretty(payload).unwrap_or_else(|error| {
        format!(
            "{{\"approved\":false,\"error\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}
