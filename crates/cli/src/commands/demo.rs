use leavechain_core::{leave_approval_chain, InMemoryDecisionSink, LeaveRequest};

use crate::commands::CommandResult;

/// The canonical walkthrough: one request per authority tier plus one
/// authoritative rejection.
const DEMO_REQUESTS: [(&str, i32); 4] =
    [("conk", 2), ("pht", 5), ("penghantian", 10), ("zzm", 4)];

pub fn run() -> CommandResult {
    let chain = leave_approval_chain();
    let sink = InMemoryDecisionSink::default();

    for (requester, days) in DEMO_REQUESTS {
        let _ = chain.handle_with_sink(&LeaveRequest::new(requester, days), &sink);
    }

    CommandResult { exit_code: 0, output: sink.messages().join("\n") }
}
