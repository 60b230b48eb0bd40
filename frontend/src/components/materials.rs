//! Materials list with per-row remove buttons.

use leptos::*;
use notesynth::{RemoveHandle, Session};

#[component]
pub fn MaterialsList(
    session: RwSignal<Session>,
    /// Notice for files dropped at the cap
    notice: ReadSignal<Option<String>>,
) -> impl IntoView {
    // Re-rendered from scratch on every change, so handles are always fresh
    let materials = create_memo(move |_| session.with(|s| s.render_materials()));

    let on_remove = move |handle: RemoveHandle| {
        if let Some(Err(e)) = session.try_update(|s| s.remove_material(handle)) {
            log::warn!("⚠️  {}", e);
        }
    };

    view! {
        <div class="materials-list" id="materials-list">
            <For
                each=move || materials.get().entries
                key=|entry| (entry.handle.revision, entry.handle.index)
                children=move |entry| {
                    let handle = entry.handle;
                    view! {
                        <div class="file-item">
                            <span>{entry.label}</span>
                            <span
                                class="file-remove"
                                role="button"
                                data-index=handle.index
                                aria-label=entry.remove_label
                                on:click=move |_| on_remove(handle)
                            >
                                "×"
                            </span>
                        </div>
                    }
                }
            />
            {move || materials.get().count_info.map(|info| view! {
                <div class="file-count-info">{info}</div>
            })}
            {move || notice.get().map(|text| view! {
                <div class="file-notice">{text}</div>
            })}
        </div>
    }
}
