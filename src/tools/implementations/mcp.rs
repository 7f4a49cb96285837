// MCP server management tools

use crate::agent::ToolContext;
use crate::tools::output::ToolOutput;
use crate::tools::registry::Tool;
use crate::tools::types::ToolInputSchema;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

pub struct AddMcpServerTool {
    callback_host: String,
}

impl AddMcpServerTool {
    /// `callback_host` is handed to the agent for the OAuth callback
    pub fn new(callback_host: impl Into<String>) -> Self {
        Self {
            callback_host: callback_host.into(),
        }
    }
}

#[async_trait]
impl Tool for AddMcpServerTool {
    fn name(&self) -> &str {
        "add_mcp_server"
    }

    fn description(&self) -> &str {
        "A tool to dynamically add an MCP server"
    }

    fn input_schema(&self) -> ToolInputSchema {
        ToolInputSchema::simple(vec![
            ("name", "A display name for the server"),
            ("url", "The server endpoint URL"),
        ])
    }

    async fn execute(&self, input: Value, context: &ToolContext<'_>) -> Result<ToolOutput> {
        let name = input["name"].as_str().context("Missing name parameter")?;
        let url = input["url"].as_str().context("Missing url parameter")?;

        let agent = context.agent()?;
        let handle = agent
            .add_mcp_server(
                name.to_string(),
                url.to_string(),
                self.callback_host.clone(),
            )
            .await?;

        info!(server_id = %handle.id, "MCP server registered");
        let mut message = format!("MCP server added with id {}.", handle.id);
        if let Some(auth_url) = handle.auth_url {
            message.push_str(&format!(
                " Authentication is necessary. Use URL: {}",
                auth_url
            ));
        }
        Ok(ToolOutput::text(message))
    }
}

pub struct RemoveMcpServerTool;

#[async_trait]
impl Tool for RemoveMcpServerTool {
    fn name(&self) -> &str {
        "remove_mcp_server"
    }

    fn description(&self) -> &str {
        "A tool to remove an MCP server by id"
    }

    fn input_schema(&self) -> ToolInputSchema {
        ToolInputSchema::simple(vec![("id", "The ID of the server to remove")])
    }

    async fn execute(&self, input: Value, context: &ToolContext<'_>) -> Result<ToolOutput> {
        let id = input["id"].as_str().context("Missing id parameter")?;

        let agent = context.agent()?;
        agent.remove_mcp_server(id).await?;

        Ok(ToolOutput::text(format!("MCP server removed with id {}", id)))
    }
}

pub struct ListMcpServersTool;

#[async_trait]
impl Tool for ListMcpServersTool {
    fn name(&self) -> &str {
        "list_mcp_servers"
    }

    fn description(&self) -> &str {
        "A tool to list all MCP servers"
    }

    fn input_schema(&self) -> ToolInputSchema {
        ToolInputSchema::empty()
    }

    async fn execute(&self, _input: Value, context: &ToolContext<'_>) -> Result<ToolOutput> {
        let agent = context.agent()?;
        let servers = agent.mcp_servers().await;
        Ok(ToolOutput::Json(serde_json::to_value(servers)?))
    }
}
