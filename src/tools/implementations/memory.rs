// Memory key-value tools backed by the agent session

use crate::agent::ToolContext;
use crate::tools::output::ToolOutput;
use crate::tools::registry::Tool;
use crate::tools::types::ToolInputSchema;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;

pub struct SetMemoryTool;

#[async_trait]
impl Tool for SetMemoryTool {
    fn name(&self) -> &str {
        "set_memory"
    }

    fn description(&self) -> &str {
        "A tool to set a specific memory entry by key-value pair. This preserves existing memories."
    }

    fn input_schema(&self) -> ToolInputSchema {
        ToolInputSchema::simple(vec![
            ("key", "The key for the memory entry"),
            ("value", "The value to store for this key"),
        ])
    }

    async fn execute(&self, input: Value, context: &ToolContext<'_>) -> Result<ToolOutput> {
        let key = input["key"].as_str().context("Missing key parameter")?;
        let value = input["value"].as_str().context("Missing value parameter")?;

        let agent = context.agent()?;
        agent.memory_set(key.to_string(), value.to_string()).await;

        Ok(ToolOutput::text(format!(
            "Memory \"{}\" set to \"{}\"",
            key, value
        )))
    }
}

pub struct ForgetMemoryTool;

#[async_trait]
impl Tool for ForgetMemoryTool {
    fn name(&self) -> &str {
        "forget_memory"
    }

    fn description(&self) -> &str {
        "A tool to forget a specific memory entry by key"
    }

    fn input_schema(&self) -> ToolInputSchema {
        ToolInputSchema::simple(vec![("key", "The key of the memory entry to forget")])
    }

    async fn execute(&self, input: Value, context: &ToolContext<'_>) -> Result<ToolOutput> {
        let key = input["key"].as_str().context("Missing key parameter")?;

        let agent = context.agent()?;
        // Same message whether or not the key existed
        agent.memory_forget(key).await;

        Ok(ToolOutput::text(format!("Memory entry \"{}\" forgotten", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{AgentHandle, AgentSession};
    use serde_json::json;

    #[tokio::test]
    async fn test_set_then_forget() {
        let session = AgentSession::new();
        let context = ToolContext::with_agent(&session);

        let set = SetMemoryTool
            .execute(json!({ "key": "color", "value": "teal" }), &context)
            .await
            .unwrap();
        assert_eq!(set, ToolOutput::text("Memory \"color\" set to \"teal\""));
        assert_eq!(
            session.memory_snapshot().await.get("color"),
            Some(&"teal".to_string())
        );

        let forgot = ForgetMemoryTool
            .execute(json!({ "key": "color" }), &context)
            .await
            .unwrap();
        assert_eq!(forgot, ToolOutput::text("Memory entry \"color\" forgotten"));
        assert!(session.memory_snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn test_forget_is_idempotent() {
        let session = AgentSession::new();
        let context = ToolContext::with_agent(&session);

        let result = ForgetMemoryTool
            .execute(json!({ "key": "never-set" }), &context)
            .await
            .unwrap();

        assert_eq!(
            result,
            ToolOutput::text("Memory entry \"never-set\" forgotten")
        );
    }

    #[tokio::test]
    async fn test_memory_requires_agent() {
        let result = SetMemoryTool
            .execute(
                json!({ "key": "k", "value": "v" }),
                &ToolContext::detached(),
            )
            .await;

        assert!(result.is_err());
    }
}
