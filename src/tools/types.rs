// Core types for the tool layer
//
// Compatible with the chat-agent runtime's tool call format

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tools::output::ToolOutput;

/// Result text signalling that a human approved a gated call
pub const APPROVAL_APPROVED: &str = "Yes, confirmed.";

/// Result text signalling that a human rejected a gated call
pub const APPROVAL_REJECTED: &str = "No, denied.";

/// Tool definition surfaced to the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: ToolInputSchema,
    /// True when the tool carries no auto executor and a human must
    /// approve each call before the implementation runs
    #[serde(default)]
    pub requires_confirmation: bool,
}

/// JSON Schema for tool input parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInputSchema {
    #[serde(rename = "type")]
    pub schema_type: String, // Usually "object"
    pub properties: Value,
    pub required: Vec<String>,
}

impl ToolInputSchema {
    /// Create a simple schema with required string parameters
    pub fn simple(params: Vec<(&str, &str)>) -> Self {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for (param_name, param_desc) in params.iter() {
            properties.insert(
                param_name.to_string(),
                serde_json::json!({
                    "type": "string",
                    "description": param_desc
                }),
            );
            required.push(param_name.to_string());
        }

        Self {
            schema_type: "object".to_string(),
            properties: Value::Object(properties),
            required,
        }
    }

    /// Create an empty schema for tools that take no parameters
    pub fn empty() -> Self {
        Self {
            schema_type: "object".to_string(),
            properties: Value::Object(serde_json::Map::new()),
            required: Vec::new(),
        }
    }
}

/// Tool call request (from the agent runtime)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolUse {
    pub id: String,   // Format: call_[random]
    pub name: String, // Tool name
    pub input: Value, // Tool parameters (JSON object)
}

impl ToolUse {
    /// Generate unique tool call ID
    pub fn generate_id() -> String {
        use rand::Rng;
        let random: String = rand::thread_rng()
            .sample_iter(&rand::distributions::Alphanumeric)
            .take(24)
            .map(char::from)
            .collect();
        format!("call_{}", random)
    }

    pub fn new(name: String, input: Value) -> Self {
        Self {
            id: Self::generate_id(),
            name,
            input,
        }
    }
}

/// Tool execution result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub tool_use_id: String,
    pub output: ToolOutput,
    pub is_error: bool,
}

impl ToolResult {
    pub fn success(tool_use_id: String, output: ToolOutput) -> Self {
        Self {
            tool_use_id,
            output,
            is_error: false,
        }
    }

    pub fn error(tool_use_id: String, error_message: String) -> Self {
        Self {
            tool_use_id,
            output: ToolOutput::Text(error_message),
            is_error: true,
        }
    }

    /// Result for a gated call the human turned down. The rejection
    /// sentinel travels the normal result channel, so this is not an
    /// error from the runtime's point of view.
    pub fn rejected(tool_use_id: String) -> Self {
        Self {
            tool_use_id,
            output: ToolOutput::Text(APPROVAL_REJECTED.to_string()),
            is_error: false,
        }
    }
}

/// Lifecycle state of one tool invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvocationState {
    /// Arguments complete, execution not finished
    #[serde(alias = "call")]
    PendingCall,
    /// Arguments still streaming in
    PartialCall,
    /// Terminal: a result is attached
    Result,
}

/// One tool call as the renderer sees it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInvocation {
    pub tool_name: String,
    pub tool_call_id: String,
    pub state: InvocationState,
    pub args: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

impl ToolInvocation {
    /// New invocation with complete arguments
    pub fn pending(tool_name: impl Into<String>, tool_call_id: impl Into<String>, args: Value) -> Self {
        Self {
            tool_name: tool_name.into(),
            tool_call_id: tool_call_id.into(),
            state: InvocationState::PendingCall,
            args,
            result: None,
        }
    }

    /// Build from a runtime tool call
    pub fn from_call(call: &ToolUse) -> Self {
        Self::pending(call.name.clone(), call.id.clone(), call.input.clone())
    }

    pub fn is_resolved(&self) -> bool {
        self.state == InvocationState::Result
    }

    /// Attach a result, moving the invocation to its terminal state.
    /// Returns false (and leaves the invocation untouched) if a result
    /// was already attached.
    pub fn attach_result(&mut self, result: Value) -> bool {
        if self.is_resolved() {
            return false;
        }
        self.result = Some(result);
        self.state = InvocationState::Result;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_use_id_generation() {
        let id = ToolUse::generate_id();
        assert!(id.starts_with("call_"));
        assert_eq!(id.len(), 29); // "call_" + 24 chars
    }

    #[test]
    fn test_tool_result_success() {
        let result = ToolResult::success(
            "call_123".to_string(),
            ToolOutput::Text("Success".to_string()),
        );
        assert_eq!(result.tool_use_id, "call_123");
        assert!(!result.is_error);
    }

    #[test]
    fn test_tool_result_error() {
        let result = ToolResult::error("call_123".to_string(), "Failed".to_string());
        assert_eq!(result.tool_use_id, "call_123");
        assert_eq!(result.output, ToolOutput::Text("Failed".to_string()));
        assert!(result.is_error);
    }

    #[test]
    fn test_tool_result_rejected_is_not_error() {
        let result = ToolResult::rejected("call_123".to_string());
        assert_eq!(
            result.output,
            ToolOutput::Text(APPROVAL_REJECTED.to_string())
        );
        assert!(!result.is_error);
    }

    #[test]
    fn test_invocation_state_wire_names() {
        let json = serde_json::to_string(&InvocationState::PendingCall).unwrap();
        assert_eq!(json, "\"pending-call\"");
        let json = serde_json::to_string(&InvocationState::PartialCall).unwrap();
        assert_eq!(json, "\"partial-call\"");

        // Runtimes that name the complete-arguments state "call" still decode
        let state: InvocationState = serde_json::from_str("\"call\"").unwrap();
        assert_eq!(state, InvocationState::PendingCall);
    }

    #[test]
    fn test_invocation_serialization_uses_camel_case() {
        let invocation = ToolInvocation::pending(
            "generate_meme",
            "call_123",
            serde_json::json!({"template": "drake"}),
        );
        let json = serde_json::to_string(&invocation).unwrap();
        assert!(json.contains("\"toolName\":\"generate_meme\""));
        assert!(json.contains("\"toolCallId\":\"call_123\""));
        assert!(!json.contains("\"result\""));
    }

    #[test]
    fn test_attach_result_is_terminal() {
        let mut invocation =
            ToolInvocation::pending("get_local_time", "call_1", serde_json::json!({}));
        assert!(invocation.attach_result(serde_json::json!("10am")));
        assert!(invocation.is_resolved());

        // A second result must not overwrite the first
        assert!(!invocation.attach_result(serde_json::json!("11am")));
        assert_eq!(invocation.result, Some(serde_json::json!("10am")));
    }

    #[test]
    fn test_simple_input_schema() {
        let schema = ToolInputSchema::simple(vec![
            ("city", "The city to look up"),
            ("units", "Temperature units (metric, imperial)"),
        ]);

        assert_eq!(schema.schema_type, "object");
        assert_eq!(schema.required.len(), 2);
        assert!(schema.required.contains(&"city".to_string()));
        assert!(schema.required.contains(&"units".to_string()));
    }

    #[test]
    fn test_empty_input_schema() {
        let schema = ToolInputSchema::empty();
        assert_eq!(schema.schema_type, "object");
        assert!(schema.required.is_empty());
    }
}
