//! Footer credit link

use leptos::prelude::*;

use crate::utils::constants::{TWITTER_HANDLE, TWITTER_LINK};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <div class="footer-container">
            <img alt="Twitter Logo" class="twitter-logo" src="/assets/twitter-logo.svg"/>
            <a class="footer-text" href=TWITTER_LINK target="_blank" rel="noreferrer">
                {format!("built by @{}", TWITTER_HANDLE)}
            </a>
        </div>
    }
}
