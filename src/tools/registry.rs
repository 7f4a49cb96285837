// Tool registry and trait definition
//
// Holds the definitions surfaced to the model plus, for gated tools,
// the separately registered implementations that only run after a
// human approves the call.

use crate::agent::ToolContext;
use crate::tools::output::ToolOutput;
use crate::tools::types::{ToolDefinition, ToolInputSchema};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

/// Tool trait - all tools must implement this
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name (e.g., "generate_meme", "set_memory")
    fn name(&self) -> &str;

    /// Human-readable description of what the tool does
    fn description(&self) -> &str;

    /// JSON Schema defining expected input parameters
    fn input_schema(&self) -> ToolInputSchema;

    /// Execute the tool with given input and context
    async fn execute(&self, input: Value, context: &ToolContext<'_>) -> Result<ToolOutput>;

    /// Get full tool definition (for the model)
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
            requires_confirmation: false,
        }
    }
}

/// One registry entry: the definition, plus an executor only when the
/// tool runs without human approval
struct RegisteredTool {
    definition: ToolDefinition,
    auto: Option<Box<dyn Tool>>,
}

/// Registry of available tools
pub struct ToolRegistry {
    tools: HashMap<String, RegisteredTool>,
    /// Implementations for gated tools, invoked only after approval
    implementations: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Create empty registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            implementations: HashMap::new(),
        }
    }

    /// Register an auto-executing tool
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        let definition = tool.definition();
        let name = definition.name.clone();
        self.implementations.remove(&name);
        self.tools.insert(
            name,
            RegisteredTool {
                definition,
                auto: Some(tool),
            },
        );
    }

    /// Register a confirmation-required tool. The public entry carries
    /// no executor; the implementation waits in a separate table until
    /// a human approves each call.
    pub fn register_confirmed(&mut self, tool: Box<dyn Tool>) {
        let mut definition = tool.definition();
        definition.requires_confirmation = true;
        let name = definition.name.clone();
        self.tools.insert(
            name.clone(),
            RegisteredTool {
                definition,
                auto: None,
            },
        );
        self.implementations.insert(name, tool);
    }

    /// Check if tool exists
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Whether a call to this tool must pass the confirmation gate.
    /// Fixed at registration time; None for unknown tools.
    pub fn needs_confirmation(&self, name: &str) -> Option<bool> {
        self.tools.get(name).map(|entry| entry.auto.is_none())
    }

    /// Executor for an auto tool (None for gated or unknown tools)
    pub fn auto_executor(&self, name: &str) -> Option<&dyn Tool> {
        self.tools
            .get(name)
            .and_then(|entry| entry.auto.as_deref())
    }

    /// Implementation of a gated tool (None for auto or unknown tools)
    pub fn implementation(&self, name: &str) -> Option<&dyn Tool> {
        self.implementations.get(name).map(|b| b.as_ref())
    }

    /// Definition for one tool
    pub fn definition(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name).map(|entry| &entry.definition)
    }

    /// List all tool names
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Get all tool definitions (for the model)
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.values().map(|entry| entry.definition.clone()).collect()
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
