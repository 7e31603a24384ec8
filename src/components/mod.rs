//! Reusable chat UI components.

pub mod copy_button;
pub mod scroll_to_bottom;
pub mod sidebar;
pub mod sidebar_provider;
