//! Syllabus and materials upload zones with drag & drop support.
//!
//! Picker and drop both hand their files to the session; refused files are
//! reported with a blocking alert, files dropped at the cap with a notice.

use leptos::*;
use notesynth::{DragPhase, DropZone, FileRef, Session, SlotKind};
use web_sys::HtmlInputElement;

use super::MaterialsList;
use crate::services::{alert, dropped_files, picked_files};

/// Offer files to a slot and report refusals. Returns the overflow notice.
fn offer_files(session: RwSignal<Session>, slot: SlotKind, files: Vec<FileRef>) -> Option<String> {
    if files.is_empty() {
        return None;
    }

    let report = session.try_update(|s| s.offer(slot, files))?;
    for err in &report.rejected {
        alert(&err.to_string());
    }

    let cap = session.with_untracked(|s| s.materials().cap());
    report.overflow_notice(cap)
}

fn materials_hint(max_materials: usize) -> String {
    format!("Slides, handouts, notes and scans, up to {} files", max_materials)
}

#[component]
pub fn UploadZone(
    slot: SlotKind,
    session: RwSignal<Session>,
    /// Receives the overflow notice of each selection
    #[prop(optional)]
    set_notice: Option<WriteSignal<Option<String>>>,
    children: Children,
) -> impl IntoView {
    let zone = create_rw_signal(DropZone::new(slot));
    let input_ref = create_node_ref::<html::Input>();

    let (prefix, icon, title) = match slot {
        SlotKind::Syllabus => ("syllabus", "📋", "Course syllabus"),
        SlotKind::Materials => ("materials", "📚", "Study materials"),
    };
    let (accept, hint) = session.with_untracked(|s| {
        let config = s.config();
        match slot {
            SlotKind::Syllabus => (config.syllabus_types.join(","), "One file: PDF, Word or text".to_string()),
            SlotKind::Materials => (config.material_types.join(","), materials_hint(config.max_materials)),
        }
    });

    let handle_files = move |files: Vec<FileRef>| {
        let notice = offer_files(session, slot, files);
        if let Some(set_notice) = set_notice {
            set_notice.set(notice);
        }
    };

    let on_drag = move |ev: ev::DragEvent| {
        let Some(phase) = DragPhase::from_event_type(&ev.type_()) else {
            return;
        };
        let Some(response) = zone.try_update(|z| z.handle(phase)) else {
            return;
        };

        if response.prevent_default {
            ev.prevent_default();
        }
        if response.stop_propagation {
            ev.stop_propagation();
        }
        if response.route_files {
            handle_files(dropped_files(&ev));
        }
    };

    let on_change = move |ev: ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        handle_files(picked_files(&input));
    };

    let open_picker = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div class="upload-card">
            <div
                class="upload-zone"
                class:dragover=move || zone.get().is_active()
                id=format!("{}-upload", prefix)
                on:dragenter=on_drag
                on:dragover=on_drag
                on:dragleave=on_drag
                on:drop=on_drag
            >
                <div class="upload-icon">{icon}</div>
                <div class="upload-text">{title}</div>
                <div class="upload-hint">"Drag & drop here"</div>
                <div class="upload-hint">{hint}</div>
                <input
                    type="file"
                    id=format!("{}-input", prefix)
                    accept=accept
                    multiple={!slot.is_single_file()}
                    style="display:none"
                    node_ref=input_ref
                    on:change=on_change
                />
                <button type="button" class="upload-button" id=format!("{}-btn", prefix) on:click=open_picker>
                    "Choose file"
                </button>
            </div>
            {children()}
        </div>
    }
}

#[component]
pub fn SyllabusUpload(session: RwSignal<Session>) -> impl IntoView {
    let label = move || session.with(|s| s.syllabus_label());

    // `slot` is reserved by the `view!` macro, so the zone is built via its props builder.
    UploadZone(
        UploadZoneProps::builder()
            .slot(SlotKind::Syllabus)
            .session(session)
            .children(Box::new(move || {
                view! {
                    <div
                        class="file-info"
                        id="syllabus-info"
                        style:display=move || super::display(label().is_some())
                    >
                        {move || label().unwrap_or_default()}
                    </div>
                }
                .into_view()
                .into()
            }))
            .build(),
    )
}

#[component]
pub fn MaterialsUpload(session: RwSignal<Session>) -> impl IntoView {
    let (notice, set_notice) = create_signal(None::<String>);

    // `slot` is reserved by the `view!` macro, so the zone is built via its props builder.
    UploadZone(
        UploadZoneProps::builder()
            .slot(SlotKind::Materials)
            .session(session)
            .set_notice(set_notice)
            .children(Box::new(move || view! { <MaterialsList session=session notice=notice/> }.into_view().into()))
            .build(),
    )
}
