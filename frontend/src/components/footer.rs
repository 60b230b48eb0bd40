//! Footer component

use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>
                {APP_NAME} " • Demo page • Powered by "
                <span class="rust-badge">"🦀 Rust + Leptos"</span>
            </div>
            <div class="footer-note">
                "Files you select never leave your browser."
            </div>
        </footer>
    }
}
