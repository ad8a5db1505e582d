//! Capability traits injected into the connection manager.
//!
//! The browser implementations live in `drop-web`; tests substitute fakes.
//! Everything here is single-threaded, so the futures are deliberately
//! not `Send`.

use async_trait::async_trait;

use crate::error::Result;
use crate::state::{ProviderPresence, WalletAccount};

/// How a connect request is allowed to interact with the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectMode {
    /// Reconnect only if the wallet already trusts this page. Never prompts.
    Silent,
    /// Full connect request raised from a user gesture. May prompt.
    Interactive,
}

/// Access to the injected wallet provider.
#[async_trait(?Send)]
pub trait ProviderSource {
    /// Probe the page for an injected provider. Safe to call repeatedly.
    fn detect(&self) -> ProviderPresence;

    /// Ask the provider for an account. Resolves when the provider settles
    /// the request; a declined request is
    /// [`ConnectError::UserRejected`](crate::error::ConnectError::UserRejected).
    async fn connect(&self, mode: ConnectMode) -> Result<WalletAccount>;
}

/// Resolves once the host page has finished loading.
///
/// Provider extensions inject themselves at an unspecified point during page
/// startup, so the first detection must wait for this signal.
#[async_trait(?Send)]
pub trait LoadSignal {
    async fn ready(&self);
}
