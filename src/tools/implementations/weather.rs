// Weather tool - demo stub behind the confirmation gate
//
// Registered without an auto executor, so every call parks on the
// gate until a human approves it

use crate::agent::ToolContext;
use crate::tools::output::ToolOutput;
use crate::tools::registry::Tool;
use crate::tools::types::ToolInputSchema;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

pub struct WeatherTool;

#[async_trait]
impl Tool for WeatherTool {
    fn name(&self) -> &str {
        "get_weather_information"
    }

    fn description(&self) -> &str {
        "Show the weather in a given city to the user"
    }

    fn input_schema(&self) -> ToolInputSchema {
        ToolInputSchema::simple(vec![("city", "The city to look up")])
    }

    async fn execute(&self, input: Value, _context: &ToolContext<'_>) -> Result<ToolOutput> {
        let city = input["city"].as_str().context("Missing city parameter")?;

        debug!("Getting weather information for {}", city);
        Ok(ToolOutput::text(format!("The weather in {} is sunny", city)))
    }
}
