//! Phantom wallet integration via wasm-bindgen
//!
//! JavaScript interop for the Phantom provider injected at `window.solana`.
//! Everything that touches the injected object lives here; the rest of the
//! app only sees the [`ProviderSource`] trait.

use async_trait::async_trait;
use serde::Deserialize;
use wasm_bindgen::prelude::*;

use lib_connect::{ConnectError, ConnectMode, ProviderPresence, ProviderSource, WalletAccount};

// ============================================================================
// PROVIDER DETECTION AND CONNECTION (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function probeProvider() {
    const solana = window.solana;
    if (!solana) {
        return { injected: false, isPhantom: false };
    }
    return { injected: true, isPhantom: solana.isPhantom === true };
}

export async function connectProvider(onlyIfTrusted) {
    const solana = window.solana;
    if (!solana) {
        throw { message: 'no provider injected', code: 0 };
    }
    try {
        const response = onlyIfTrusted
            ? await solana.connect({ onlyIfTrusted: true })
            : await solana.connect();
        return { publicKey: response.publicKey.toString() };
    } catch (error) {
        throw { message: error.message || String(error), code: error.code || 0 };
    }
}
")]
extern "C" {
    /// Probe `window.solana` for an injected provider
    fn probeProvider() -> JsValue;

    /// Connect to the injected provider, optionally trust-only
    #[wasm_bindgen(catch)]
    async fn connectProvider(only_if_trusted: bool) -> Result<JsValue, JsValue>;
}

/// Raw detection report crossing the JS boundary.
#[derive(Clone, Debug, Deserialize)]
struct ProbeReport {
    injected: bool,
    #[serde(rename = "isPhantom")]
    is_phantom: bool,
}

/// Error code Phantom raises when the user declines a connection prompt.
const USER_REJECTED_CODE: f64 = 4001.0;

/// [`ProviderSource`] backed by the Phantom extension at `window.solana`.
pub struct PhantomProvider;

impl PhantomProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl ProviderSource for PhantomProvider {
    fn detect(&self) -> ProviderPresence {
        let report: ProbeReport = match serde_wasm_bindgen::from_value(probeProvider()) {
            Ok(report) => report,
            Err(err) => {
                log::warn!("malformed provider probe report: {:?}", err);
                return ProviderPresence::Absent;
            }
        };

        if !report.injected {
            return ProviderPresence::Absent;
        }
        ProviderPresence::Present {
            recognized: report.is_phantom,
        }
    }

    async fn connect(&self, mode: ConnectMode) -> Result<WalletAccount, ConnectError> {
        let only_if_trusted = matches!(mode, ConnectMode::Silent);
        match connectProvider(only_if_trusted).await {
            Ok(response) => {
                let address = extract_public_key(&response)?;
                Ok(WalletAccount { address })
            }
            Err(error) => Err(classify_rejection(&error)),
        }
    }
}

/// Pull the base58 public key out of the provider's connect response.
fn extract_public_key(response: &JsValue) -> Result<String, ConnectError> {
    let value = js_sys::Reflect::get(response, &JsValue::from_str("publicKey"))
        .map_err(|_| ConnectError::Provider("missing publicKey in response".to_string()))?;
    value
        .as_string()
        .ok_or_else(|| ConnectError::Provider("publicKey is not a string".to_string()))
}

/// Map a thrown provider error onto the connection error taxonomy.
///
/// Phantom signals "the user said no" with code 4001; anything else is
/// surfaced as a provider fault with whatever message it carried.
fn classify_rejection(error: &JsValue) -> ConnectError {
    let code = js_sys::Reflect::get(error, &JsValue::from_str("code"))
        .ok()
        .and_then(|value| value.as_f64());
    if code == Some(USER_REJECTED_CODE) {
        return ConnectError::UserRejected;
    }

    let message = js_sys::Reflect::get(error, &JsValue::from_str("message"))
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_else(|| format!("{:?}", error));
    ConnectError::Provider(message)
}
