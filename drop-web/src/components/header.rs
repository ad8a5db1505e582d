//! Drop page header
//!
//! Title, season copy, and the connected-wallet chip with its disconnect
//! control.

use leptos::prelude::*;

use crate::state::use_wallet_context;
use crate::utils::constants::{DROP_SEASON, DROP_SUBTITLE, DROP_TITLE};
use crate::utils::format::truncate_address;

#[component]
pub fn Header() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    let on_disconnect = move |_| {
        wallet_ctx.disconnect();
    };

    view! {
        <div class="header-container">
            <p class="header">{DROP_TITLE}</p>
            <p class="sub-text">{DROP_SUBTITLE}</p>
            <p class="sub-text">{DROP_SEASON}</p>
            {move || {
                wallet_ctx.address().map(|address| view! {
                    <div
                        class="wallet-chip"
                        style="display: inline-flex; align-items: center; gap: 12px; margin-top: 10px;"
                    >
                        <span style="font-family: monospace;">{truncate_address(&address)}</span>
                        <button class="cta-button disconnect-button" on:click=on_disconnect>
                            "Disconnect"
                        </button>
                    </div>
                })
            }}
        </div>
    }
}
