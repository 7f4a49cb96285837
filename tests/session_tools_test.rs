// Integration tests for the agent-backed tools
//
// Tests the full workflow through the executor: memory, scheduling,
// and MCP server management against one live session

use serde_json::json;

use chaperone::agent::{AgentHandle, AgentSession, ToolContext};
use chaperone::meme::TemplateCatalog;
use chaperone::tools::implementations::builtin_registry;
use chaperone::tools::{ToolExecutor, ToolOutput, ToolResult, ToolUse};

fn executor() -> ToolExecutor {
    ToolExecutor::new(builtin_registry(
        TemplateCatalog::new(),
        "http://localhost:5173",
    ))
}

async fn invoke(
    executor: &ToolExecutor,
    context: &ToolContext<'_>,
    name: &str,
    input: serde_json::Value,
) -> ToolResult {
    let call = ToolUse::new(name.to_string(), input);
    executor.execute(&call, context).await
}

fn text_of(result: &ToolResult) -> &str {
    match &result.output {
        ToolOutput::Text(text) => text,
        other => panic!("expected text output, got {:?}", other),
    }
}

#[tokio::test]
async fn test_memory_round_trip() {
    let executor = executor();
    let session = AgentSession::new();
    let context = ToolContext::with_agent(&session);

    let set = invoke(
        &executor,
        &context,
        "set_memory",
        json!({ "key": "favorite_color", "value": "teal" }),
    )
    .await;
    assert!(!set.is_error);
    assert_eq!(text_of(&set), "Memory \"favorite_color\" set to \"teal\"");
    assert_eq!(
        session.memory_snapshot().await.get("favorite_color"),
        Some(&"teal".to_string())
    );

    let forgot = invoke(
        &executor,
        &context,
        "forget_memory",
        json!({ "key": "favorite_color" }),
    )
    .await;
    assert_eq!(text_of(&forgot), "Memory entry \"favorite_color\" forgotten");
    assert!(session.memory_snapshot().await.is_empty());
}

#[tokio::test]
async fn test_schedule_lifecycle() {
    let executor = executor();
    let session = AgentSession::new();
    let context = ToolContext::with_agent(&session);

    let empty = invoke(&executor, &context, "get_scheduled_tasks", json!({})).await;
    assert_eq!(text_of(&empty), "No scheduled tasks found.");

    let scheduled = invoke(
        &executor,
        &context,
        "schedule_task",
        json!({
            "when": { "type": "delayed", "delayInSeconds": 300 },
            "description": "water the plants"
        }),
    )
    .await;
    assert!(!scheduled.is_error);
    assert_eq!(text_of(&scheduled), "Task scheduled for type \"delayed\" : 300");

    let listed = invoke(&executor, &context, "get_scheduled_tasks", json!({})).await;
    let ToolOutput::Json(tasks) = &listed.output else {
        panic!("expected structured task list");
    };
    assert_eq!(tasks.as_array().unwrap().len(), 1);
    assert_eq!(tasks[0]["description"], "water the plants");
    let task_id = tasks[0]["id"].as_str().unwrap().to_string();

    let canceled = invoke(
        &executor,
        &context,
        "cancel_scheduled_task",
        json!({ "task_id": task_id }),
    )
    .await;
    assert_eq!(
        text_of(&canceled),
        format!("Task {} has been successfully canceled.", task_id)
    );

    let empty_again = invoke(&executor, &context, "get_scheduled_tasks", json!({})).await;
    assert_eq!(text_of(&empty_again), "No scheduled tasks found.");

    let missing = invoke(
        &executor,
        &context,
        "cancel_scheduled_task",
        json!({ "task_id": task_id }),
    )
    .await;
    assert_eq!(
        text_of(&missing),
        format!("No task found with id {}", task_id)
    );
}

#[tokio::test]
async fn test_invalid_schedule_input_is_an_answer() {
    let executor = executor();
    let session = AgentSession::new();
    let context = ToolContext::with_agent(&session);

    let result = invoke(
        &executor,
        &context,
        "schedule_task",
        json!({ "when": { "type": "sometime" }, "description": "x" }),
    )
    .await;

    // The model reads this and corrects its input
    assert!(!result.is_error);
    assert_eq!(text_of(&result), "Not a valid schedule input");
    assert!(session.schedules().await.is_empty());
}

#[tokio::test]
async fn test_mcp_server_lifecycle() {
    let executor = executor();
    let session = AgentSession::new();
    let context = ToolContext::with_agent(&session);

    let added = invoke(
        &executor,
        &context,
        "add_mcp_server",
        json!({ "name": "docs", "url": "https://mcp.example.com/sse" }),
    )
    .await;
    assert!(!added.is_error);
    assert!(text_of(&added).starts_with("MCP server added with id "));

    let listed = invoke(&executor, &context, "list_mcp_servers", json!({})).await;
    let ToolOutput::Json(servers) = &listed.output else {
        panic!("expected structured server list");
    };
    assert_eq!(servers.as_array().unwrap().len(), 1);
    assert_eq!(servers[0]["name"], "docs");
    let server_id = servers[0]["id"].as_str().unwrap().to_string();

    let removed = invoke(
        &executor,
        &context,
        "remove_mcp_server",
        json!({ "id": server_id }),
    )
    .await;
    assert_eq!(
        text_of(&removed),
        format!("MCP server removed with id {}", server_id)
    );

    // Removing twice surfaces through the error path
    let again = invoke(
        &executor,
        &context,
        "remove_mcp_server",
        json!({ "id": server_id }),
    )
    .await;
    assert!(again.is_error);
    assert!(text_of(&again).starts_with("Execution error:"));
}

#[tokio::test]
async fn test_missing_parameter_is_execution_error() {
    let executor = executor();
    let session = AgentSession::new();
    let context = ToolContext::with_agent(&session);

    let result = invoke(&executor, &context, "set_memory", json!({ "key": "k" })).await;

    assert!(result.is_error);
    assert!(text_of(&result).contains("Missing value parameter"));
}

#[tokio::test]
async fn test_agent_tools_fail_without_a_session() {
    let executor = executor();
    let context = ToolContext::detached();

    let result = invoke(
        &executor,
        &context,
        "set_memory",
        json!({ "key": "k", "value": "v" }),
    )
    .await;

    assert!(result.is_error);
    assert!(text_of(&result).contains("no agent session is attached"));
}

#[tokio::test]
async fn test_generate_meme_is_offline() {
    let executor = executor();
    let session = AgentSession::new();
    let context = ToolContext::with_agent(&session);

    let result = invoke(
        &executor,
        &context,
        "generate_meme",
        json!({
            "template": "drake",
            "top_text": "writing docs",
            "bottom_text": "writing memes"
        }),
    )
    .await;

    assert!(!result.is_error);
    assert_eq!(
        result.output,
        ToolOutput::ImageUrl(
            "https://api.memegen.link/images/drake/writing_docs/writing_memes".to_string()
        )
    );
}
