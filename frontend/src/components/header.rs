use leptos::*;

use crate::services::{scroll_to, scroll_y};
use crate::types::ScrollBlock;
use crate::{APP_NAME, NAVBAR_SCROLL_THRESHOLD, NAV_LINKS};

#[component]
pub fn Header() -> impl IntoView {
    let (scrolled, set_scrolled) = create_signal(false);

    // Compact navbar once the page is scrolled
    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        set_scrolled.set(scroll_y() > NAVBAR_SCROLL_THRESHOLD);
    });
    on_cleanup(move || scroll_handle.remove());

    view! {
        <nav class="navbar" class:navbar-scrolled=move || scrolled.get()>
            <a href="#top" class="logo" on:click=move |ev: ev::MouseEvent| {
                ev.prevent_default();
                scroll_to("top", ScrollBlock::Start);
            }>
                "📝 " {APP_NAME}
            </a>
            <div class="nav-links">
                {NAV_LINKS
                    .iter()
                    .map(|&(anchor, label)| {
                        view! {
                            <a
                                href=format!("#{}", anchor)
                                class="nav-link"
                                on:click=move |ev: ev::MouseEvent| {
                                    ev.prevent_default();
                                    scroll_to(anchor, ScrollBlock::Start);
                                }
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
