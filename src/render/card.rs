// Invocation card state and text rendering
//
// One tool call as the user sees it: header, arguments, approval
// prompt, result. The TUI widget and the plain-text playground both
// build their output from these pieces.

use crossterm::event::{KeyCode, KeyEvent};

use crate::tools::gate::ApprovalSignal;
use crate::tools::output::{ContentItem, ToolOutput};
use crate::tools::types::{InvocationState, ToolInvocation};

/// Marker some content-envelope tools prefix page links with
const PAGE_URL_MARKER: &str = "\n~ Page URL:";

/// One tool invocation rendered as a bordered card
pub struct InvocationCard {
    pub invocation: ToolInvocation,
    pub needs_confirmation: bool,
    pub expanded: bool,
}

impl InvocationCard {
    /// Cards start expanded so arguments are visible immediately
    pub fn new(invocation: ToolInvocation, needs_confirmation: bool) -> Self {
        Self {
            invocation,
            needs_confirmation,
            expanded: true,
        }
    }

    /// True while a confirmation-required call still waits for a human
    pub fn awaiting_approval(&self) -> bool {
        self.needs_confirmation && self.invocation.state != InvocationState::Result
    }

    /// The completed badge only marks auto tools; gated tools show
    /// their resolution through the result body instead
    pub fn shows_completed_badge(&self) -> bool {
        !self.needs_confirmation && self.invocation.state == InvocationState::Result
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Handle a key press on a focused card. Returns the approval
    /// signal to feed the gate when the user decides a pending call.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<ApprovalSignal> {
        match key.code {
            KeyCode::Tab | KeyCode::Char(' ') => {
                self.toggle_expanded();
                None
            }
            KeyCode::Char('y') | KeyCode::Char('a') if self.awaiting_approval() => {
                Some(ApprovalSignal::Approve)
            }
            KeyCode::Char('n') | KeyCode::Char('r') if self.awaiting_approval() => {
                Some(ApprovalSignal::Reject)
            }
            _ => None,
        }
    }

    /// Header: badge, tool name, completion marker, expand indicator
    pub fn header_text(&self) -> String {
        let mut header = format!("🤖 {}", self.invocation.tool_name);
        if self.shows_completed_badge() {
            header.push_str("  ✓ Completed");
        }
        header.push_str(if self.expanded { "  ▴" } else { "  ▾" });
        header
    }

    /// Arguments as pretty-printed JSON
    pub fn arguments_text(&self) -> String {
        serde_json::to_string_pretty(&self.invocation.args)
            .unwrap_or_else(|_| self.invocation.args.to_string())
    }

    /// Classified result, once one is attached
    pub fn result_output(&self) -> Option<ToolOutput> {
        self.invocation.result.as_ref().map(ToolOutput::classify)
    }

    /// Result body text, once a result is attached
    pub fn result_text(&self) -> Option<String> {
        self.result_output().map(|output| render_output(&output))
    }

    /// The whole card as plain text, for non-TUI surfaces
    pub fn to_plain_text(&self) -> String {
        let mut out = self.header_text();
        if !self.expanded {
            return out;
        }

        out.push_str("\nArguments:\n");
        out.push_str(&self.arguments_text());

        if self.awaiting_approval() {
            out.push_str("\nApprove? [y]es / [n]o");
        } else if let Some(result) = self.result_text() {
            out.push_str("\nResult:\n");
            out.push_str(&result);
        }
        out
    }
}

/// Render one classified output as display text.
///
/// Image URLs come back as the bare URL; hosts that can inline images
/// are expected to special-case `ToolOutput::ImageUrl` themselves.
pub fn render_output(output: &ToolOutput) -> String {
    match output {
        ToolOutput::Text(text) => text.clone(),
        ToolOutput::ImageUrl(url) => url.clone(),
        ToolOutput::Content(items) => items
            .iter()
            .map(render_content_item)
            .collect::<Vec<_>>()
            .join("\n"),
        ToolOutput::Json(value) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
    }
}

/// Page-URL items become a bulleted list; everything else renders
/// verbatim
fn render_content_item(item: &ContentItem) -> String {
    if item.is_text() && item.text.starts_with(PAGE_URL_MARKER) {
        item.text
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| format!("- {}", line.strip_prefix("~ ").unwrap_or(line)))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        item.text.clone()
    }
}
