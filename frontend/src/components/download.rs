use leptos::*;
use notesynth::{Session, DISCLOSURE};

use crate::services::{alert, save_document};
use crate::types::{AppError, AppResult};

fn download(session: RwSignal<Session>) -> AppResult<()> {
    let document = session.with_untracked(|s| s.download())?;
    save_document(&document)
}

#[component]
pub fn DownloadSection(session: RwSignal<Session>) -> impl IntoView {
    let complete = move || session.with(|s| s.view().is_complete());
    let summary = move || {
        session.with(|s| {
            s.request()
                .map(|r| format!("Compiled from {} study material(s)", r.material_count))
                .unwrap_or_default()
        })
    };

    let on_download = move |_| match download(session) {
        Ok(()) => alert(DISCLOSURE),
        Err(e) => {
            log::error!("❌ {}", e);
            if !matches!(e, AppError::Browser(_)) {
                alert(e.user_message());
            }
        }
    };

    view! {
        <div
            class="download-section"
            id="download-section"
            style:display=move || super::display(complete())
        >
            <div class="download-icon">"🎉"</div>
            <h3>"Your master notes are ready!"</h3>
            <p class="download-summary">{summary}</p>
            <button type="button" class="btn-primary" id="download-btn" on:click=on_download>
                "📥 Download PDF"
            </button>
        </div>
    }
}
