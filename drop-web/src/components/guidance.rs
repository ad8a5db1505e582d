//! Install guidance
//!
//! Shown when no usable wallet provider is present in the page. Points the
//! visitor at the Phantom install page instead of offering a connect button
//! that could never succeed.

use leptos::prelude::*;

use crate::utils::constants::WALLET_INSTALL_URL;

#[component]
pub fn Guidance() -> impl IntoView {
    view! {
        <div
            class="wallet-guidance"
            style="display: flex; flex-direction: column; width: 260px; background: #fff; \
                   border-radius: 10px; margin: 10px auto; padding: 30px 40px 16px 40px;"
        >
            <p style="color: black;">
                "❗ You will need a Phantom Wallet before you can connect to this app."
            </p>
            <p style="color: black;">"Get your Phantom Wallet 👻 here:"</p>
            <p style="padding: 0px 0px 10px 0px;">
                <a href=WALLET_INSTALL_URL>"Phantom App"</a>
            </p>
        </div>
    }
}
