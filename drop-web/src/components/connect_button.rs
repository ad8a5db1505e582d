//! Wallet connect button
//!
//! The explicit connect gesture. The button renders whenever a provider
//! story is still possible, but only accepts clicks once a recognized
//! provider has been confirmed and no request is already in flight.

use leptos::prelude::*;

use crate::state::use_wallet_context;

#[component]
pub fn ConnectButton(enabled: bool, set_pending: WriteSignal<bool>) -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let (error, set_error) = signal(None::<String>);

    let on_connect = move |_| {
        if !enabled {
            return;
        }
        set_pending.set(true);
        set_error.set(None);

        let manager = wallet_ctx.manager();
        leptos::task::spawn_local(async move {
            match manager.connect().await {
                Ok(address) => log::info!("connected to wallet {}", address),
                Err(err) => set_error.set(Some(err.user_message())),
            }
            set_pending.set(false);
        });
    };

    let disabled = !enabled;
    let button_style = if enabled {
        "cursor: pointer; margin-bottom: 20px;"
    } else {
        "cursor: not-allowed; margin-bottom: 20px;"
    };

    view! {
        <div class="connect-container">
            <button
                class="cta-button connect-wallet-button"
                style=button_style
                disabled=disabled
                on:click=on_connect
            >
                {move || {
                    if wallet_ctx.state.get().can_connect() {
                        "Connect to Wallet"
                    } else {
                        "❗ Connect to Wallet"
                    }
                }}
            </button>
            {move || {
                error.get().map(|message| view! {
                    <p class="error-text" style="color: #ff6b6b; margin-bottom: 16px;">
                        {message}
                    </p>
                })
            }}
        </div>
    }
}
