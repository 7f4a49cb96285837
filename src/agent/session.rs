// In-memory agent session
//
// Reference implementation of AgentHandle for the playground and
// tests. State lives for the process lifetime only.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::agent::context::AgentHandle;
use crate::agent::mcp::{McpServerHandle, McpServerRecord};
use crate::agent::schedule::{ScheduleWhen, ScheduledTask};

/// Process-local agent state behind async locks
#[derive(Debug)]
pub struct AgentSession {
    memory: RwLock<HashMap<String, String>>,
    schedules: RwLock<Vec<ScheduledTask>>,
    mcp_servers: RwLock<Vec<McpServerRecord>>,
}

impl AgentSession {
    pub fn new() -> Self {
        Self {
            memory: RwLock::new(HashMap::new()),
            schedules: RwLock::new(Vec::new()),
            mcp_servers: RwLock::new(Vec::new()),
        }
    }
}

impl Default for AgentSession {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AgentHandle for AgentSession {
    async fn memory_set(&self, key: String, value: String) {
        debug!(key = %key, "Setting memory entry");
        self.memory.write().await.insert(key, value);
    }

    async fn memory_forget(&self, key: &str) -> bool {
        self.memory.write().await.remove(key).is_some()
    }

    async fn memory_snapshot(&self) -> HashMap<String, String> {
        self.memory.read().await.clone()
    }

    async fn schedule(&self, when: ScheduleWhen, description: String) -> Result<ScheduledTask> {
        if !when.is_schedulable() {
            anyhow::bail!("cannot record a task without a trigger");
        }
        let task = ScheduledTask::new(when, description);
        debug!(task_id = %task.id, kind = task.when.kind(), "Recording scheduled task");
        self.schedules.write().await.push(task.clone());
        Ok(task)
    }

    async fn schedules(&self) -> Vec<ScheduledTask> {
        self.schedules.read().await.clone()
    }

    async fn cancel_schedule(&self, task_id: &str) -> Result<bool> {
        let mut schedules = self.schedules.write().await;
        let before = schedules.len();
        schedules.retain(|task| task.id != task_id);
        Ok(schedules.len() < before)
    }

    async fn add_mcp_server(
        &self,
        name: String,
        url: String,
        callback_host: String,
    ) -> Result<McpServerHandle> {
        let record = McpServerRecord::new(name, url, callback_host);
        record.validate()?;
        debug!(server_id = %record.id, server = %record.name, "Registering MCP server");

        // Connection establishment belongs to the host runtime; the
        // session only keeps the record, so no auth URL is discovered
        let handle = McpServerHandle {
            id: record.id.clone(),
            auth_url: record.auth_url.clone(),
        };
        self.mcp_servers.write().await.push(record);
        Ok(handle)
    }

    async fn remove_mcp_server(&self, id: &str) -> Result<()> {
        let mut servers = self.mcp_servers.write().await;
        let before = servers.len();
        servers.retain(|record| record.id != id);
        if servers.len() == before {
            anyhow::bail!("no MCP server with id '{}'", id);
        }
        Ok(())
    }

    async fn mcp_servers(&self) -> Vec<McpServerRecord> {
        self.mcp_servers.read().await.clone()
    }
}
