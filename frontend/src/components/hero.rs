//! Hero section component

use leptos::*;

use crate::services::scroll_to;
use crate::types::ScrollBlock;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero" id="top">
            <h1>"Turn a semester of material into one set of master notes"</h1>
            <p class="subtitle">
                "Upload your syllabus and every slide deck, handout and scan you have. "
                "We organise it all by topic into a single, study-ready document."
            </p>
            <a href="#upload" class="hero-cta" on:click=move |ev: ev::MouseEvent| {
                ev.prevent_default();
                scroll_to("upload", ScrollBlock::Start);
            }>
                "Try the demo"
            </a>
        </div>
    }
}
