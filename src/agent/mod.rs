// Agent-side state the tools act against

pub mod context;
pub mod mcp;
pub mod schedule;
pub mod session;

pub use context::{AgentHandle, ContextError, ToolContext};
pub use mcp::{McpServerHandle, McpServerRecord};
pub use schedule::{ScheduleWhen, ScheduledTask};
pub use session::AgentSession;
