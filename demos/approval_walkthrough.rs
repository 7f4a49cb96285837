// Approval Walkthrough
//
// Demonstrates the confirmation gate end to end: an auto tool runs
// immediately, a gated call parks until a human approves it, and a
// second gated call shows what a rejection looks like on the result
// channel.
//
// Run: cargo run --example approval_walkthrough

use std::sync::Arc;

use serde_json::json;

use chaperone::agent::{AgentSession, ToolContext};
use chaperone::meme::TemplateCatalog;
use chaperone::render::InvocationCard;
use chaperone::tools::implementations::builtin_registry;
use chaperone::tools::{
    ApprovalSignal, ToolExecutor, ToolInvocation, ToolResult, ToolUse, APPROVAL_APPROVED,
    APPROVAL_REJECTED,
};

#[tokio::main]
async fn main() {
    println!("=== Chaperone Approval Walkthrough ===\n");

    let registry = builtin_registry(TemplateCatalog::new(), "http://localhost:5173");
    let executor = Arc::new(ToolExecutor::new(registry));
    let session = AgentSession::new();
    let context = ToolContext::with_agent(&session);

    println!("1. Auto tool (no approval required):");
    let call = ToolUse::new("get_local_time".to_string(), json!({"location": "Tokyo"}));
    let result = executor.execute(&call, &context).await;
    print_result_card(&call, &result, false);

    println!("\n2. Gated tool, approved:");
    let call = ToolUse::new(
        "get_weather_information".to_string(),
        json!({"city": "Tokyo"}),
    );
    let pending = InvocationCard::new(ToolInvocation::from_call(&call), true);
    println!("{}", indent(&pending.to_plain_text()));

    let approver = spawn_resolver(&executor, call.id.clone(), ApprovalSignal::Approve);
    let result = executor.execute(&call, &context).await;
    approver.await.unwrap();
    println!("   ... human pressed approve ...");
    print_result_card(&call, &result, true);

    println!("\n3. Gated tool, rejected:");
    let call = ToolUse::new(
        "get_weather_information".to_string(),
        json!({"city": "Osaka"}),
    );
    let rejecter = spawn_resolver(&executor, call.id.clone(), ApprovalSignal::Reject);
    let result = executor.execute(&call, &context).await;
    rejecter.await.unwrap();
    println!("   ... human pressed reject ...");
    print_result_card(&call, &result, true);
    println!(
        "   (the rejection sentinel is not an error: is_error = {})",
        result.is_error
    );

    println!("\n4. Image output classification:");
    let call = ToolUse::new(
        "generate_meme".to_string(),
        json!({
            "template": "drake",
            "top_text": "manual QA",
            "bottom_text": "confirmation gates"
        }),
    );
    let result = executor.execute(&call, &context).await;
    print_result_card(&call, &result, false);

    println!("\n=== Result Channel Sentinels ===\n");
    println!("Approvals travel the normal tool-result channel as text:");
    println!("  approve -> {:?}", APPROVAL_APPROVED);
    println!("  reject  -> {:?}", APPROVAL_REJECTED);
    println!(
        "  parsed back: {:?}",
        ApprovalSignal::from_result_text(APPROVAL_REJECTED)
    );
}

/// Stand-in for the human: waits until the call parks at the gate,
/// then delivers the decision
fn spawn_resolver(
    executor: &Arc<ToolExecutor>,
    call_id: String,
    signal: ApprovalSignal,
) -> tokio::task::JoinHandle<()> {
    let executor = Arc::clone(executor);
    tokio::spawn(async move {
        while !executor.gate().is_pending(&call_id) {
            tokio::task::yield_now().await;
        }
        executor.gate().resolve(&call_id, signal).unwrap();
    })
}

fn print_result_card(call: &ToolUse, result: &ToolResult, needs_confirmation: bool) {
    let mut invocation = ToolInvocation::from_call(call);
    invocation.attach_result(result.output.to_result_value());
    let card = InvocationCard::new(invocation, needs_confirmation);
    println!("{}", indent(&card.to_plain_text()));
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("   {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}
