// Common test utilities and fixtures

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items
// Note: These may appear unused in some test crates but are used in others
#[allow(unused_imports)]
pub use fixtures::DocTree;
#[allow(unused_imports)]
pub use helpers::{config_for, start_services, tool_text};
