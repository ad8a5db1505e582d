//! # Connection Core
//!
//! Provider detection, the wallet connection state machine, and session
//! lending for the drop page. Framework-free: the browser bindings and the
//! Leptos view live in `drop-web`.

pub mod error;
pub mod manager;
pub mod session;
pub mod source;
pub mod state;

// Re-export commonly used types
pub use error::{ConnectError, Result};
pub use manager::{ConnectionManager, SubscriptionId};
pub use session::SessionHandle;
pub use source::{ConnectMode, LoadSignal, ProviderSource};
pub use state::{ConnectionState, ProviderPresence, WalletAccount};
