// Tool execution engine
//
// Drives one call end to end: auto tools run directly, gated tools
// park on the confirmation gate until a human decides.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, error, info, instrument, warn};

use crate::agent::ToolContext;
use crate::tools::gate::{ApprovalSignal, ConfirmationGate};
use crate::tools::registry::{Tool, ToolRegistry};
use crate::tools::types::{ToolResult, ToolUse};

/// Tool executor - manages tool execution lifecycle
pub struct ToolExecutor {
    registry: ToolRegistry,
    gate: Arc<ConfirmationGate>,
}

impl ToolExecutor {
    /// Create new tool executor with its own gate
    pub fn new(registry: ToolRegistry) -> Self {
        Self::with_gate(registry, Arc::new(ConfirmationGate::new()))
    }

    /// Create new tool executor over a shared gate
    pub fn with_gate(registry: ToolRegistry, gate: Arc<ConfirmationGate>) -> Self {
        Self { registry, gate }
    }

    /// The gate rendering surfaces resolve approvals through
    pub fn gate(&self) -> &Arc<ConfirmationGate> {
        &self.gate
    }

    /// Get reference to registry
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Execute a single tool call
    #[instrument(skip(self, call, context), fields(tool = %call.name, id = %call.id))]
    pub async fn execute(&self, call: &ToolUse, context: &ToolContext<'_>) -> ToolResult {
        info!("Executing tool: {}", call.name);

        let needs_confirmation = match self.registry.needs_confirmation(&call.name) {
            Some(needs) => needs,
            None => {
                error!("Unknown tool: {}", call.name);
                return ToolResult::error(
                    call.id.clone(),
                    format!("Tool '{}' not found", call.name),
                );
            }
        };

        if needs_confirmation {
            return self.execute_gated(call, context).await;
        }

        match self.registry.auto_executor(&call.name) {
            Some(tool) => self.run(tool, call, context).await,
            None => ToolResult::error(
                call.id.clone(),
                format!("Tool '{}' has no executor", call.name),
            ),
        }
    }

    /// Park on the gate, then act on the human's decision. Nothing
    /// side-effecting runs before the signal arrives; a rejection
    /// never touches the implementation.
    async fn execute_gated(&self, call: &ToolUse, context: &ToolContext<'_>) -> ToolResult {
        let receiver = self.gate.open(call);
        debug!("Awaiting human approval");

        match receiver.await {
            Ok(ApprovalSignal::Approve) => {
                let Some(implementation) = self.registry.implementation(&call.name) else {
                    error!("No implementation registered for approved tool: {}", call.name);
                    return ToolResult::error(
                        call.id.clone(),
                        format!("Tool '{}' has no implementation registered", call.name),
                    );
                };
                info!("Call approved, invoking implementation");
                self.run(implementation, call, context).await
            }
            Ok(ApprovalSignal::Reject) => {
                warn!("Call rejected by user");
                ToolResult::rejected(call.id.clone())
            }
            Err(_) => {
                // Gate dropped, or the entry was replaced by a re-open
                error!("Approval channel closed before a decision arrived");
                ToolResult::error(call.id.clone(), "Tool approval cancelled".to_string())
            }
        }
    }

    async fn run(&self, tool: &dyn Tool, call: &ToolUse, context: &ToolContext<'_>) -> ToolResult {
        match tool.execute(call.input.clone(), context).await {
            Ok(output) => {
                info!("Tool executed successfully");
                ToolResult::success(call.id.clone(), output)
            }
            Err(e) => {
                error!("Tool execution failed: {}", e);
                ToolResult::error(call.id.clone(), format!("Execution error: {}", e))
            }
        }
    }

    /// Execute a batch as independent concurrent operations. Results
    /// come back in input order; completion order is unspecified.
    #[instrument(skip(self, calls, context))]
    pub async fn execute_all(
        &self,
        calls: &[ToolUse],
        context: &ToolContext<'_>,
    ) -> Vec<ToolResult> {
        info!("Executing {} tool call(s)", calls.len());
        join_all(calls.iter().map(|call| self.execute(call, context))).await
    }
}
