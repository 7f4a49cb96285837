// Local time tool - auto-executing demo stub

use crate::agent::ToolContext;
use crate::tools::output::ToolOutput;
use crate::tools::registry::Tool;
use crate::tools::types::ToolInputSchema;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

pub struct LocalTimeTool;

#[async_trait]
impl Tool for LocalTimeTool {
    fn name(&self) -> &str {
        "get_local_time"
    }

    fn description(&self) -> &str {
        "Get the local time for a specified location"
    }

    fn input_schema(&self) -> ToolInputSchema {
        ToolInputSchema::simple(vec![("location", "The location to look up")])
    }

    async fn execute(&self, input: Value, _context: &ToolContext<'_>) -> Result<ToolOutput> {
        let location = input["location"]
            .as_str()
            .context("Missing location parameter")?;

        debug!("Getting local time for {}", location);
        Ok(ToolOutput::text("10am"))
    }
}
