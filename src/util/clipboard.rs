//! Copy-to-clipboard with a transient "copied" indicator.
//!
//! TRADE-OFFS
//! ==========
//! Only a successful clipboard write raises the indicator. Each copy bumps a
//! generation counter so a pending reset from an earlier copy cannot clear
//! the indicator of a later one.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use leptos::prelude::*;

/// How long the "copied" indicator stays up, in milliseconds.
pub const DEFAULT_COPY_TIMEOUT_MS: u32 = 2000;

/// Indicator state for one copy control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyState {
    copied: bool,
    generation: u64,
}

impl CopyState {
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Raise the indicator and return the generation to expire later.
    pub fn mark_copied(&mut self) -> u64 {
        self.generation += 1;
        self.copied = true;
        self.generation
    }

    /// Lower the indicator unless a newer copy has happened since.
    pub fn expire(&mut self, generation: u64) {
        if generation == self.generation {
            self.copied = false;
        }
    }
}

/// Handle returned by [`use_copy_to_clipboard`].
#[derive(Clone, Copy)]
pub struct CopyToClipboard {
    state: RwSignal<CopyState>,
    timeout_ms: u32,
}

impl CopyToClipboard {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            state: RwSignal::new(CopyState::default()),
            timeout_ms,
        }
    }

    /// Whether a copy succeeded within the last timeout window.
    pub fn is_copied(&self) -> bool {
        self.state.with(CopyState::is_copied)
    }

    /// Write `value` to the system clipboard.
    ///
    /// Empty values are ignored, as is everything outside the browser or in
    /// contexts that expose no clipboard (non-secure origins).
    pub fn copy(&self, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let clipboard = system_clipboard();
            if !should_copy(value, clipboard.is_some()) {
                return;
            }
            let Some(clipboard) = clipboard else {
                return;
            };
            let promise: js_sys::Promise = clipboard.write_text(value);
            let state = self.state;
            let timeout_ms = self.timeout_ms;
            leptos::task::spawn_local(async move {
                if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    log::warn!("clipboard write failed: {err:?}");
                    return;
                }
                let Some(generation) = state.try_update(CopyState::mark_copied) else {
                    return;
                };
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(timeout_ms))).await;
                let _ = state.try_update(|s| s.expire(generation));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (value, self.timeout_ms);
        }
    }
}

/// Whether a copy of `value` should be attempted.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn should_copy(value: &str, clipboard_available: bool) -> bool {
    clipboard_available && !value.is_empty()
}

/// `navigator.clipboard`, when present and able to write text.
#[cfg(feature = "hydrate")]
fn system_clipboard() -> Option<web_sys::Clipboard> {
    use wasm_bindgen::{JsCast, JsValue};

    let navigator = web_sys::window()?.navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")).ok()?;
    if clipboard.is_undefined() || clipboard.is_null() {
        log::debug!("clipboard unavailable in this context");
        return None;
    }
    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText")).ok()?;
    if !write_text.is_function() {
        return None;
    }
    Some(clipboard.unchecked_into())
}

/// Clipboard writer whose indicator resets after `timeout_ms`.
pub fn use_copy_to_clipboard(timeout_ms: u32) -> CopyToClipboard {
    CopyToClipboard::new(timeout_ms)
}
