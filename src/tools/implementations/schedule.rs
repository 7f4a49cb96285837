// Task scheduling tools
//
// Validation failures come back as answers, not errors, so the model
// can read the text and correct its input.

use crate::agent::{ScheduleWhen, ToolContext};
use crate::tools::output::ToolOutput;
use crate::tools::registry::Tool;
use crate::tools::types::ToolInputSchema;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

const INVALID_SCHEDULE: &str = "Not a valid schedule input";

pub struct ScheduleTaskTool;

#[async_trait]
impl Tool for ScheduleTaskTool {
    fn name(&self) -> &str {
        "schedule_task"
    }

    fn description(&self) -> &str {
        "A tool to schedule a task to be executed at a later time"
    }

    fn input_schema(&self) -> ToolInputSchema {
        ToolInputSchema {
            schema_type: "object".to_string(),
            properties: json!({
                "when": {
                    "type": "object",
                    "description": "The trigger, tagged by 'type': scheduled { date }, delayed { delayInSeconds }, cron { cron }, or no-schedule"
                },
                "description": {
                    "type": "string",
                    "description": "What the task should do when it fires"
                }
            }),
            required: vec!["when".to_string(), "description".to_string()],
        }
    }

    async fn execute(&self, input: Value, context: &ToolContext<'_>) -> Result<ToolOutput> {
        let description = input["description"]
            .as_str()
            .context("Missing description parameter")?;

        let when: ScheduleWhen = match serde_json::from_value(input["when"].clone()) {
            Ok(when) => when,
            Err(_) => return Ok(ToolOutput::text(INVALID_SCHEDULE)),
        };

        // Echo the trigger payload back in the confirmation message
        let trigger = match &when {
            ScheduleWhen::Scheduled { date } => date.to_rfc3339(),
            ScheduleWhen::Delayed { delay_in_seconds } => delay_in_seconds.to_string(),
            ScheduleWhen::Cron { cron } => cron.clone(),
            ScheduleWhen::NoSchedule => return Ok(ToolOutput::text(INVALID_SCHEDULE)),
        };
        let kind = when.kind();

        let agent = context.agent()?;
        match agent.schedule(when, description.to_string()).await {
            Ok(task) => {
                debug!(task_id = %task.id, "Task scheduled");
                Ok(ToolOutput::text(format!(
                    "Task scheduled for type \"{}\" : {}",
                    kind, trigger
                )))
            }
            Err(e) => Ok(ToolOutput::text(format!("Error scheduling task: {}", e))),
        }
    }
}

pub struct ListScheduledTasksTool;

#[async_trait]
impl Tool for ListScheduledTasksTool {
    fn name(&self) -> &str {
        "get_scheduled_tasks"
    }

    fn description(&self) -> &str {
        "List all tasks that have been scheduled"
    }

    fn input_schema(&self) -> ToolInputSchema {
        ToolInputSchema::empty()
    }

    async fn execute(&self, _input: Value, context: &ToolContext<'_>) -> Result<ToolOutput> {
        let agent = context.agent()?;
        let tasks = agent.schedules().await;

        if tasks.is_empty() {
            return Ok(ToolOutput::text("No scheduled tasks found."));
        }
        Ok(ToolOutput::Json(serde_json::to_value(tasks)?))
    }
}

pub struct CancelScheduledTaskTool;

#[async_trait]
impl Tool for CancelScheduledTaskTool {
    fn name(&self) -> &str {
        "cancel_scheduled_task"
    }

    fn description(&self) -> &str {
        "Cancel a scheduled task using its ID"
    }

    fn input_schema(&self) -> ToolInputSchema {
        ToolInputSchema::simple(vec![("task_id", "The ID of the task to cancel")])
    }

    async fn execute(&self, input: Value, context: &ToolContext<'_>) -> Result<ToolOutput> {
        let task_id = input["task_id"]
            .as_str()
            .context("Missing task_id parameter")?;

        let agent = context.agent()?;
        let message = match agent.cancel_schedule(task_id).await {
            Ok(true) => format!("Task {} has been successfully canceled.", task_id),
            Ok(false) => format!("No task found with id {}", task_id),
            Err(e) => format!("Error canceling task {}: {}", task_id, e),
        };
        Ok(ToolOutput::text(message))
    }
}
