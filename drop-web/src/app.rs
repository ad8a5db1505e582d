//! Root application component
//!
//! Owns the connection manager for the lifetime of the mounted page and
//! dispatches exactly one of three panels from the wallet state: install
//! guidance, the connect button, or the mint machine.

use std::rc::Rc;

use leptos::prelude::*;

use lib_connect::{ConnectionManager, ConnectionState};

use crate::components::{ConnectButton, Footer, Guidance, Header, MintMachine};
use crate::services::{PhantomProvider, WindowLoad};
use crate::state::provide_wallet_context;

/// The three mutually exclusive panels the page can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    /// No usable provider: point the visitor at the install page.
    GetWallet,
    /// A connect gesture is still the next step. Disabled until a
    /// recognized provider is confirmed and while a request is in flight.
    Connect { enabled: bool },
    /// A wallet session is live: show the drop machine.
    Mint,
}

/// Decide which panel the current wallet state gets.
///
/// Detection that has not settled yet keeps the connect control visible but
/// inert, so the page never flashes install guidance at a visitor whose
/// wallet just has not been found yet.
pub fn select_panel(state: &ConnectionState, pending: bool) -> Panel {
    match state {
        ConnectionState::Unknown => Panel::Connect { enabled: false },
        ConnectionState::NoProvider => Panel::GetWallet,
        ConnectionState::ProviderFound { recognized: false } => Panel::GetWallet,
        ConnectionState::ProviderFound { recognized: true } => Panel::Connect {
            enabled: !pending,
        },
        ConnectionState::Connected { .. } => Panel::Mint,
    }
}

#[component]
pub fn App() -> impl IntoView {
    let manager =
        ConnectionManager::new(Rc::new(PhantomProvider::new()), Rc::new(WindowLoad::new()));
    let wallet_ctx = provide_wallet_context(manager);

    let (pending, set_pending) = signal(false);

    // Detection and the trust-only reconnect start once the page has
    // loaded; the manager waits on the load signal internally.
    let starter = wallet_ctx.manager();
    leptos::task::spawn_local(async move {
        starter.start().await;
    });

    // Whatever is still in flight when this shell unmounts is discarded.
    on_cleanup(move || {
        wallet_ctx.stop();
    });

    view! {
        <div class="app">
            <div class="container">
                <Header/>
                {move || {
                    let state = wallet_ctx.state.get();
                    match select_panel(&state, pending.get()) {
                        Panel::GetWallet => view! { <Guidance/> }.into_any(),
                        Panel::Connect { enabled } => view! {
                            <ConnectButton enabled=enabled set_pending=set_pending/>
                        }
                        .into_any(),
                        Panel::Mint => {
                            let session = wallet_ctx.session();
                            view! { <MintMachine session=session/> }.into_any()
                        }
                    }
                }}
                <Footer/>
            </div>
        </div>
    }
}
