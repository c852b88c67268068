pub mod approvers;
pub mod chain;
pub mod config;
pub mod decisions;
pub mod domain;

pub use approvers::{
    Approver, DeptManager, DirectManager, GeneralManager, DEPT_AUTHORITY_LIMIT_DAYS,
    DIRECT_AUTHORITY_LIMIT_DAYS,
};
pub use chain::{leave_approval_chain, ApprovalNode, ChainError, RequestOutcome};
pub use config::{AppConfig, ConfigError, ConfigOverrides, LoadOptions, LogFormat, LoggingConfig};
pub use decisions::{
    render_decision_line, ConsoleDecisionSink, DecisionRecord, DecisionSink, InMemoryDecisionSink,
};
pub use domain::leave::{ApproverRole, LeaveRequest, LeaveVerdict};
