// Agent handle and per-call tool context
//
// Tools never look the agent up through ambient state; whoever drives
// the executor hands the session in explicitly with each call.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

use crate::agent::mcp::{McpServerHandle, McpServerRecord};
use crate::agent::schedule::{ScheduleWhen, ScheduledTask};

/// Raised when a tool that needs the agent runs without one attached
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    #[error("no agent session is attached to this tool call")]
    NoAgent,
}

/// The agent runtime as tools see it
#[async_trait]
pub trait AgentHandle: Send + Sync + std::fmt::Debug {
    /// Write one memory entry. Updates replace the whole map under a
    /// single writer, so concurrent writers serialize and the last
    /// write wins.
    async fn memory_set(&self, key: String, value: String);

    /// Drop one memory entry; returns whether it existed
    async fn memory_forget(&self, key: &str) -> bool;

    /// Copy of the current memory map
    async fn memory_snapshot(&self) -> HashMap<String, String>;

    /// Record a task; the host runtime is responsible for firing it
    async fn schedule(&self, when: ScheduleWhen, description: String) -> Result<ScheduledTask>;

    /// All recorded tasks
    async fn schedules(&self) -> Vec<ScheduledTask>;

    /// Cancel a task; returns whether it was found
    async fn cancel_schedule(&self, task_id: &str) -> Result<bool>;

    /// Register an MCP server record and hand back its id, plus an
    /// authorization URL when the server requires a sign-in
    async fn add_mcp_server(
        &self,
        name: String,
        url: String,
        callback_host: String,
    ) -> Result<McpServerHandle>;

    /// Remove a server record; unknown ids are an error
    async fn remove_mcp_server(&self, id: &str) -> Result<()>;

    /// All registered server records
    async fn mcp_servers(&self) -> Vec<McpServerRecord>;
}

/// Context passed to tools during execution
#[derive(Clone, Copy)]
pub struct ToolContext<'a> {
    agent: Option<&'a dyn AgentHandle>,
}

impl<'a> ToolContext<'a> {
    /// Context bound to a live agent session
    pub fn with_agent(agent: &'a dyn AgentHandle) -> Self {
        Self { agent: Some(agent) }
    }

    /// Context for calls arriving outside any session
    pub fn detached() -> Self {
        Self { agent: None }
    }

    pub fn has_agent(&self) -> bool {
        self.agent.is_some()
    }

    /// The attached agent, or the error a context-requiring tool
    /// surfaces when invoked detached
    pub fn agent(&self) -> Result<&'a dyn AgentHandle, ContextError> {
        self.agent.ok_or(ContextError::NoAgent)
    }
}
