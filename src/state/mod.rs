//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Plain state values (`sidebar`) are kept separate from their reactive
//! wrappers (`sidebar_context`) so lifecycle rules are testable without a
//! reactive runtime.

pub mod sidebar;
pub mod sidebar_context;
