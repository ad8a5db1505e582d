//! Wallet state management
//!
//! The connection manager is main-thread only, so the context keeps it in
//! local storage and mirrors its state into a signal the view can track.
//! Components never talk to the provider directly; they go through this
//! context.

use leptos::prelude::*;

use lib_connect::{ConnectionManager, ConnectionState, SessionHandle, SubscriptionId};

/// Global wallet context shared through the component tree.
#[derive(Clone, Copy)]
pub struct WalletContext {
    manager: StoredValue<ConnectionManager, LocalStorage>,
    pub state: RwSignal<ConnectionState>,
    subscription: SubscriptionId,
}

impl WalletContext {
    pub fn new(manager: ConnectionManager) -> Self {
        let state = RwSignal::new(manager.state());
        let mirror = state;
        let subscription = manager.subscribe(move |next: &ConnectionState| {
            mirror.set(next.clone());
        });

        Self {
            manager: StoredValue::new_local(manager),
            state,
            subscription,
        }
    }

    /// Cheap handle to the shared connection manager.
    pub fn manager(&self) -> ConnectionManager {
        self.manager.get_value()
    }

    pub fn address(&self) -> Option<String> {
        self.state
            .with(|state| state.address().map(|address| address.to_string()))
    }

    /// Revocable handle to the current wallet session, if any.
    pub fn session(&self) -> Option<SessionHandle> {
        self.manager.with_value(|manager| manager.session())
    }

    pub fn disconnect(&self) {
        self.manager.with_value(|manager| manager.disconnect());
    }

    /// Discard in-flight connection work. Safe to call during owner
    /// teardown, after the stored manager may already be gone.
    pub fn stop(&self) {
        if let Some(manager) = self.manager.try_get_value() {
            manager.stop();
        }
    }
}

/// Provide the wallet context to the component tree.
///
/// The reactive mirror is torn down with the owner that called this, so a
/// late notification cannot write into a disposed signal.
pub fn provide_wallet_context(manager: ConnectionManager) -> WalletContext {
    let context = WalletContext::new(manager);
    on_cleanup(move || {
        if let Some(manager) = context.manager.try_get_value() {
            manager.unsubscribe(context.subscription);
        }
    });
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
