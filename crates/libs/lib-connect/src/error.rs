//! # Connection Errors
//!
//! This module defines the error type [`ConnectError`] used consistently
//! across the connection core and the browser frontend. It follows the
//! `thiserror` pattern for ergonomic error handling.
//!
//! ## Error Categories
//!
//! - [`ProviderUnavailable`](ConnectError::ProviderUnavailable) - caller-side
//!   precondition failure (connect requested with no usable provider)
//! - [`UserRejected`](ConnectError::UserRejected) - the user declined the
//!   wallet's approval prompt
//! - [`Provider`](ConnectError::Provider) - the provider itself misbehaved
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_connect::error::{ConnectError, Result};
//!
//! fn require_address(addr: &str) -> Result<&str> {
//!     if addr.is_empty() {
//!         return Err(ConnectError::Provider("empty account address".to_string()));
//!     }
//!     Ok(addr)
//! }
//!
//! assert!(require_address("").is_err());
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, ConnectError>`.
pub type Result<T> = std::result::Result<T, ConnectError>;

/// Error type for provider detection and wallet connection.
///
/// Each variant carries enough context for the UI to pick a message. The
/// `#[error]` attribute from `thiserror` provides the `Display`
/// implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    /// A connect request was made while no compatible provider is known.
    ///
    /// **Recovery**: detection is re-run and the page settles on the
    /// install-guidance view.
    #[error("No compatible wallet provider is available")]
    ProviderUnavailable,

    /// The user declined the wallet's approval prompt.
    ///
    /// **Recovery**: none required; the connect control stays available for
    /// another attempt.
    #[error("Wallet connection request was rejected")]
    UserRejected,

    /// The provider misbehaved (unclassifiable rejection, malformed
    /// response, missing public key).
    ///
    /// **Recovery**: retry is allowed; the full message goes to the log and
    /// the UI shows a generic failure line.
    #[error("Provider error: {0}")]
    Provider(String),
}

impl ConnectError {
    /// Get a user-friendly message for display next to the connect control.
    ///
    /// Provider internals are never exposed here; the full error is logged.
    pub fn user_message(&self) -> String {
        match self {
            ConnectError::ProviderUnavailable => {
                "No compatible wallet was found. Install Phantom and reload this page.".to_string()
            }
            ConnectError::UserRejected => {
                "The connection request was declined in the wallet.".to_string()
            }
            ConnectError::Provider(_) => {
                "The wallet did not respond as expected. Please try again.".to_string()
            }
        }
    }
}
