//! Mint machine surface
//!
//! Mounted once a wallet session has been lent to the page. Drop mechanics
//! (program accounts, transaction building, metadata) live behind this
//! surface; the shell only guarantees the session handoff.

use leptos::prelude::*;

use lib_connect::SessionHandle;

use crate::utils::format::truncate_address;

#[component]
pub fn MintMachine(session: Option<SessionHandle>) -> impl IntoView {
    // The dispatcher re-renders this on every state change, so a one-time
    // read of the handle here cannot go stale.
    let live = session.filter(|handle| handle.provider().is_some());
    if live.is_none() {
        log::warn!("mint machine mounted without a live session");
    }

    let machine = live.and_then(|handle| handle.address()).map(|address| {
        view! {
            <div class="machine-container">
                <p class="sub-text">{format!("Connected as {}", truncate_address(&address))}</p>
                <p class="sub-text">"Candy drop loading..."</p>
            </div>
        }
    });

    view! { <div class="candy-machine">{machine}</div> }
}
