// Built-in tool implementations
//
// The default tool set registered with an agent playground

// Demo stubs
pub mod local_time;
pub mod weather;

// Agent-backed tools
pub mod mcp;
pub mod memory;
pub mod schedule;

// Meme generation
pub mod meme;

// Re-exports for convenience
pub use local_time::LocalTimeTool;
pub use mcp::{AddMcpServerTool, ListMcpServersTool, RemoveMcpServerTool};
pub use memory::{ForgetMemoryTool, SetMemoryTool};
pub use meme::{GenerateMemeTool, ListMemeTemplatesTool, SearchMemeTemplatesTool};
pub use schedule::{CancelScheduledTaskTool, ListScheduledTasksTool, ScheduleTaskTool};
pub use weather::WeatherTool;

use crate::meme::TemplateCatalog;
use crate::tools::registry::ToolRegistry;

/// Assemble the default registry. The weather tool goes in without an
/// auto executor, so calls to it wait on the confirmation gate.
pub fn builtin_registry(
    catalog: TemplateCatalog,
    callback_host: impl Into<String>,
) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register_confirmed(Box::new(WeatherTool));
    registry.register(Box::new(LocalTimeTool));

    registry.register(Box::new(ScheduleTaskTool));
    registry.register(Box::new(ListScheduledTasksTool));
    registry.register(Box::new(CancelScheduledTaskTool));

    registry.register(Box::new(SetMemoryTool));
    registry.register(Box::new(ForgetMemoryTool));

    registry.register(Box::new(AddMcpServerTool::new(callback_host)));
    registry.register(Box::new(RemoveMcpServerTool));
    registry.register(Box::new(ListMcpServersTool));

    registry.register(Box::new(GenerateMemeTool));
    registry.register(Box::new(SearchMemeTemplatesTool::new(catalog.clone())));
    registry.register(Box::new(ListMemeTemplatesTool::new(catalog)));

    registry
}
