// Interactive tool playground
//
// A readline loop driving the full execution path: registry, gate,
// executor, agent session. Gated calls park at the gate and the human
// resolves them with /approve and /reject, exactly as a hosting
// runtime would.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use serde_json::Value;

use chaperone::agent::{AgentHandle, AgentSession, ToolContext};
use chaperone::config::Config;
use chaperone::render::InvocationCard;
use chaperone::tools::implementations::builtin_registry;
use chaperone::tools::{ApprovalSignal, ToolExecutor, ToolInvocation, ToolResult, ToolUse};

const PROMPT: &str = "chaperone> ";

const HELP: &str = "\
Commands:
  /tools                       List registered tools
  /invoke <tool> [json-input]  Invoke a tool
  /pending                     List calls waiting for approval
  /approve <call-id>           Approve a pending call
  /reject <call-id>            Reject a pending call
  /memory                      Show session memory entries
  /schedules                   Show recorded scheduled tasks
  /servers                     Show registered MCP servers
  /help                        Show this help
  /quit                        Exit the playground";

pub struct Playground {
    executor: Arc<ToolExecutor>,
    session: Arc<AgentSession>,
    auto_approve: bool,
}

impl Playground {
    pub fn new(config: &Config, auto_approve: bool) -> Self {
        let registry =
            builtin_registry(config.template_catalog(), config.mcp.callback_host.clone());
        Self {
            executor: Arc::new(ToolExecutor::new(registry)),
            session: Arc::new(AgentSession::new()),
            auto_approve: auto_approve || config.playground.auto_approve,
        }
    }

    pub async fn run(&self) -> Result<()> {
        println!(
            "\x1b[1;36mchaperone playground\x1b[0m - {} tools registered",
            self.executor.registry().len()
        );
        if self.auto_approve {
            println!("\x1b[1;33mauto-approve is on: gated calls run without prompting\x1b[0m");
        }
        println!("Type /help for commands.\n");

        let mut editor = DefaultEditor::new().context("Failed to initialize readline editor")?;
        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    let line = line.trim().to_string();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = editor.add_history_entry(&line);
                    if line == "/quit" || line == "/exit" {
                        break;
                    }
                    if let Err(e) = self.dispatch(&line).await {
                        eprintln!("\x1b[1;31merror:\x1b[0m {:#}", e);
                    }
                }
                // Ctrl+C / Ctrl+D - graceful exit
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err).context("Failed to read input"),
            }
        }

        let open = self.executor.gate().pending_count();
        if open > 0 {
            println!("Leaving {} unresolved call(s) behind.", open);
        }
        Ok(())
    }

    async fn dispatch(&self, line: &str) -> Result<()> {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "/help" => println!("{}", HELP),
            "/tools" => self.show_tools(),
            "/invoke" => self.invoke(rest).await?,
            "/pending" => self.show_pending(),
            "/approve" => self.resolve(rest, ApprovalSignal::Approve)?,
            "/reject" => self.resolve(rest, ApprovalSignal::Reject)?,
            "/memory" => self.show_memory().await,
            "/schedules" => self.show_schedules().await,
            "/servers" => self.show_servers().await,
            _ => println!("Unknown command: {} (try /help)", command),
        }
        Ok(())
    }

    fn show_tools(&self) {
        let mut definitions = self.executor.registry().definitions();
        definitions.sort_by(|a, b| a.name.cmp(&b.name));

        for definition in definitions {
            let marker = if definition.requires_confirmation {
                " \x1b[1;33m[confirm]\x1b[0m"
            } else {
                ""
            };
            println!("  \x1b[1;36m{}\x1b[0m{}", definition.name, marker);
            println!("      {}", definition.description);
        }
    }

    async fn invoke(&self, rest: &str) -> Result<()> {
        let (name, input) = parse_invoke(rest)?;
        let needs_confirmation = match self.executor.registry().needs_confirmation(name) {
            Some(needs) => needs,
            None => bail!("unknown tool '{}' (see /tools)", name),
        };
        let call = ToolUse::new(name.to_string(), input);

        if needs_confirmation && !self.auto_approve {
            let card = InvocationCard::new(ToolInvocation::from_call(&call), true);
            println!("{}", card.to_plain_text());
            println!(
                "\nCall \x1b[1;36m{}\x1b[0m is waiting. Resolve it with /approve or /reject.",
                call.id
            );
            self.spawn_gated(call);
            return Ok(());
        }

        if needs_confirmation {
            self.spawn_auto_approver(call.id.clone());
        }

        let context = ToolContext::with_agent(self.session.as_ref());
        let result = self.executor.execute(&call, &context).await;
        print_result(&call, &result, needs_confirmation);
        Ok(())
    }

    /// Run a gated call in the background so the prompt stays free for
    /// /approve and /reject. The result card prints when the decision
    /// lands.
    fn spawn_gated(&self, call: ToolUse) {
        let executor = Arc::clone(&self.executor);
        let session = Arc::clone(&self.session);
        tokio::spawn(async move {
            let context = ToolContext::with_agent(session.as_ref());
            let result = executor.execute(&call, &context).await;
            println!();
            print_result(&call, &result, true);
        });
    }

    /// Approve the call as soon as it parks at the gate
    fn spawn_auto_approver(&self, call_id: String) {
        let gate = Arc::clone(self.executor.gate());
        tokio::spawn(async move {
            while !gate.is_pending(&call_id) {
                tokio::task::yield_now().await;
            }
            let _ = gate.resolve(&call_id, ApprovalSignal::Approve);
        });
    }

    fn show_pending(&self) {
        let pending = self.executor.gate().pending();
        if pending.is_empty() {
            println!("No calls waiting for approval.");
            return;
        }
        for approval in pending {
            println!(
                "  \x1b[1;33m{}\x1b[0m {} {}",
                approval.call_id, approval.tool_name, approval.args
            );
        }
    }

    fn resolve(&self, call_id: &str, signal: ApprovalSignal) -> Result<()> {
        if call_id.is_empty() {
            bail!("usage: /approve <call-id> or /reject <call-id> (see /pending)");
        }
        self.executor.gate().resolve(call_id, signal)?;
        Ok(())
    }

    async fn show_memory(&self) {
        let snapshot = self.session.memory_snapshot().await;
        if snapshot.is_empty() {
            println!("No memory entries.");
            return;
        }
        let mut entries: Vec<_> = snapshot.into_iter().collect();
        entries.sort();
        for (key, value) in entries {
            println!("  {} = {}", key, value);
        }
    }

    async fn show_schedules(&self) {
        let tasks = self.session.schedules().await;
        if tasks.is_empty() {
            println!("No scheduled tasks found.");
            return;
        }
        for task in tasks {
            println!("  {} [{}] {}", task.id, task.when.kind(), task.description);
        }
    }

    async fn show_servers(&self) {
        let servers = self.session.mcp_servers().await;
        if servers.is_empty() {
            println!("No MCP servers registered.");
            return;
        }
        for server in servers {
            println!("  {} {} ({})", server.id, server.name, server.url);
        }
    }
}

/// Split an /invoke argument string into the tool name and its JSON
/// input. A missing input means an empty object.
fn parse_invoke(rest: &str) -> Result<(&str, Value)> {
    let (name, input_text) = match rest.split_once(char::is_whitespace) {
        Some((name, input)) => (name, input.trim()),
        None => (rest, ""),
    };
    if name.is_empty() {
        bail!("usage: /invoke <tool> [json-input]");
    }

    let input = if input_text.is_empty() {
        serde_json::json!({})
    } else {
        serde_json::from_str(input_text).context("tool input must be a JSON object")?
    };
    Ok((name, input))
}

fn print_result(call: &ToolUse, result: &ToolResult, needs_confirmation: bool) {
    let mut invocation = ToolInvocation::from_call(call);
    invocation.attach_result(result.output.to_result_value());
    let card = InvocationCard::new(invocation, needs_confirmation);
    println!("{}", card.to_plain_text());
    if result.is_error {
        println!("\x1b[1;31m(tool reported an error)\x1b[0m");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_invoke_with_input() {
        let (name, input) = parse_invoke("get_weather_information {\"city\": \"Tokyo\"}").unwrap();
        assert_eq!(name, "get_weather_information");
        assert_eq!(input, json!({"city": "Tokyo"}));
    }

    #[test]
    fn test_parse_invoke_defaults_to_empty_object() {
        let (name, input) = parse_invoke("get_scheduled_tasks").unwrap();
        assert_eq!(name, "get_scheduled_tasks");
        assert_eq!(input, json!({}));
    }

    #[test]
    fn test_parse_invoke_rejects_empty_line() {
        assert!(parse_invoke("").is_err());
    }

    #[test]
    fn test_parse_invoke_rejects_malformed_json() {
        assert!(parse_invoke("set_memory {key: value}").is_err());
    }
}
