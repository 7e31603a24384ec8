//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, scrolling, clipboard)
//! from component logic so each can be exercised natively in tests.

pub mod clipboard;
pub mod local_storage;
pub mod scroll;
pub mod storage;
