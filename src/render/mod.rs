// Rendering for tool invocations
//
// Card state plus the TUI widget over it

pub mod card;
pub mod widget;

pub use card::{render_output, InvocationCard};
pub use widget::CardWidget;
