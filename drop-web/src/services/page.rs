//! Page lifecycle signals
//!
//! Wallet extensions inject their provider object while the page loads, so
//! probing `window.solana` too early reads absence where there is none.
//! [`WindowLoad`] gates detection on the `load` event.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use lib_connect::LoadSignal;

#[wasm_bindgen(inline_js = "
export function windowLoaded() {
    return new Promise((resolve) => {
        window.addEventListener('load', () => resolve(), { once: true });
    });
}
")]
extern "C" {
    /// Promise that resolves on the window load event
    fn windowLoaded() -> js_sys::Promise;
}

/// [`LoadSignal`] backed by the window `load` event.
///
/// If the document is already complete when awaited, the load event has
/// fired and will not fire again. Resolution is then deferred by one timer
/// tick instead of parking on an event that never comes.
pub struct WindowLoad;

impl WindowLoad {
    pub fn new() -> Self {
        Self
    }

    fn already_loaded() -> bool {
        web_sys::window()
            .and_then(|window| window.document())
            .map(|document| is_complete(&document.ready_state()))
            .unwrap_or(false)
    }
}

/// The document is fully loaded only in the `complete` ready state;
/// `interactive` still precedes the load event.
fn is_complete(ready_state: &str) -> bool {
    ready_state == "complete"
}

#[async_trait(?Send)]
impl LoadSignal for WindowLoad {
    async fn ready(&self) {
        if Self::already_loaded() {
            log::debug!("document already complete, deferring one tick");
            TimeoutFuture::new(0).await;
            return;
        }

        if JsFuture::from(windowLoaded()).await.is_err() {
            log::warn!("window load promise rejected");
        }
    }
}
