// Chaperone - human-in-the-loop tool layer for chat agents
// Library exports

// Core modules
pub mod agent; // Agent handle, session state, schedules, MCP records
pub mod config;
pub mod errors;
pub mod meme; // Meme URL construction and template catalog
pub mod render; // Invocation cards (plain text and TUI)
pub mod tools; // Tool registry, confirmation gate, execution
