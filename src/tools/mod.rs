// Tool layer: definitions, registry, confirmation gate, execution
//
// Tools registered without an auto executor require a human approval
// before their implementation runs.

pub mod executor;
pub mod gate;
pub mod implementations;
pub mod output;
pub mod registry;
pub mod types;

pub use executor::ToolExecutor;
pub use gate::{ApprovalSignal, ConfirmationGate, GateError, PendingApproval};
pub use output::{ContentItem, ToolOutput};
pub use registry::{Tool, ToolRegistry};
pub use types::{
    InvocationState, ToolDefinition, ToolInputSchema, ToolInvocation, ToolResult, ToolUse,
    APPROVAL_APPROVED, APPROVAL_REJECTED,
};
