// Confirmation gate for human-in-the-loop tool calls
//
// Gated calls park here until a human resolves them. The executor
// awaits the receiver; whatever surface the human uses (TUI card,
// REPL command, external runtime) calls resolve with the decision.
// There is no timeout: an unresolved call stays pending until the
// gate is dropped.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::oneshot;
use tracing::debug;

use crate::tools::types::{ToolUse, APPROVAL_APPROVED, APPROVAL_REJECTED};

/// Human decision on one gated call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalSignal {
    Approve,
    Reject,
}

impl ApprovalSignal {
    /// Sentinel text this signal travels as on the result channel
    pub fn as_result_text(&self) -> &'static str {
        match self {
            ApprovalSignal::Approve => APPROVAL_APPROVED,
            ApprovalSignal::Reject => APPROVAL_REJECTED,
        }
    }

    /// Parse a sentinel off the result channel
    pub fn from_result_text(text: &str) -> Option<Self> {
        match text {
            APPROVAL_APPROVED => Some(ApprovalSignal::Approve),
            APPROVAL_REJECTED => Some(ApprovalSignal::Reject),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum GateError {
    /// No pending entry: the id is unknown or was already resolved
    #[error("no pending approval for call '{0}'")]
    UnknownCall(String),

    /// The executor side went away before the decision arrived
    #[error("approval for call '{0}' is no longer awaited")]
    Abandoned(String),

    /// The result text is not one of the approval sentinels
    #[error("'{0}' is not an approval sentinel")]
    NotASentinel(String),
}

/// One open approval, as rendering surfaces see it
#[derive(Debug, Clone)]
pub struct PendingApproval {
    pub call_id: String,
    pub tool_name: String,
    pub args: Value,
    pub opened_at: DateTime<Utc>,
}

struct GateEntry {
    info: PendingApproval,
    tx: oneshot::Sender<ApprovalSignal>,
}

/// Concurrent table of calls awaiting a human decision
pub struct ConfirmationGate {
    pending: DashMap<String, GateEntry>,
}

impl ConfirmationGate {
    pub fn new() -> Self {
        Self {
            pending: DashMap::new(),
        }
    }

    /// Park a call. The returned receiver completes when a human
    /// resolves it. Re-opening an id replaces the previous entry; its
    /// awaiter sees the channel close.
    pub fn open(&self, call: &ToolUse) -> oneshot::Receiver<ApprovalSignal> {
        let (tx, rx) = oneshot::channel();
        debug!(call_id = %call.id, tool = %call.name, "Opening confirmation gate");
        self.pending.insert(
            call.id.clone(),
            GateEntry {
                info: PendingApproval {
                    call_id: call.id.clone(),
                    tool_name: call.name.clone(),
                    args: call.input.clone(),
                    opened_at: Utc::now(),
                },
                tx,
            },
        );
        rx
    }

    /// Deliver the decision. The pending entry is consumed, so each
    /// call id resolves at most once.
    pub fn resolve(&self, call_id: &str, signal: ApprovalSignal) -> Result<(), GateError> {
        let (_, entry) = self
            .pending
            .remove(call_id)
            .ok_or_else(|| GateError::UnknownCall(call_id.to_string()))?;
        debug!(call_id = %call_id, signal = ?signal, "Resolving confirmation gate");
        entry
            .tx
            .send(signal)
            .map_err(|_| GateError::Abandoned(call_id.to_string()))
    }

    /// Resolve from the raw sentinel text a result channel carries.
    /// Non-sentinel text leaves the entry pending.
    pub fn resolve_with_result(
        &self,
        call_id: &str,
        text: &str,
    ) -> Result<ApprovalSignal, GateError> {
        let signal = ApprovalSignal::from_result_text(text)
            .ok_or_else(|| GateError::NotASentinel(text.to_string()))?;
        self.resolve(call_id, signal)?;
        Ok(signal)
    }

    pub fn is_pending(&self, call_id: &str) -> bool {
        self.pending.contains_key(call_id)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Snapshot of open approvals, oldest first
    pub fn pending(&self) -> Vec<PendingApproval> {
        let mut open: Vec<PendingApproval> = self
            .pending
            .iter()
            .map(|entry| entry.value().info.clone())
            .collect();
        open.sort_by_key(|approval| approval.opened_at);
        open
    }
}

impl Default for ConfirmationGate {
    fn default() -> Self {
        Self::new()
    }
}
