//! Course details form and the generation trigger.

use leptos::*;
use notesynth::{drive, DriveOutcome, Session};

use crate::services::{alert, scroll_to, GlooTimer};
use crate::types::{AppError, ScrollBlock};

/// Start the simulated pipeline and play it on browser timers.
///
/// Refused triggers show the reason and change nothing.
pub fn start_generation(session: RwSignal<Session>) {
    let ticket = match session.try_update(|s| s.begin_generation()) {
        Some(Ok(ticket)) => ticket,
        Some(Err(e)) => {
            alert(AppError::from(e).user_message());
            return;
        }
        None => return,
    };

    spawn_local(async move {
        let outcome = drive(ticket.start, ticket.timing, &GlooTimer, &ticket.cancel, |state| {
            session.update(|s| {
                if let Err(e) = s.enter(state) {
                    log::warn!("Ignoring pipeline transition: {}", e);
                }
            });
        })
        .await;

        match outcome {
            DriveOutcome::Completed => {
                // Wait for the download section to be displayed
                request_animation_frame(|| scroll_to("download-section", ScrollBlock::Center));
            }
            DriveOutcome::Cancelled(state) => {
                log::info!("Generation stopped at {:?}", state);
            }
        }
    });
}

#[component]
pub fn CourseDetails(session: RwSignal<Session>) -> impl IntoView {
    view! {
        <div class="course-details">
            <div class="form-field">
                <label for="subject-name">"Subject name"</label>
                <input
                    type="text"
                    id="subject-name"
                    placeholder="e.g. Linear Algebra"
                    prop:value=move || session.with(|s| s.subject_name().to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        session.update(|s| s.set_subject_name(value));
                    }
                />
            </div>
            <div class="form-field">
                <label for="course-code">"Course code (optional)"</label>
                <input
                    type="text"
                    id="course-code"
                    placeholder="e.g. MATH 221"
                    prop:value=move || session.with(|s| s.course_code().to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        session.update(|s| s.set_course_code(value));
                    }
                />
            </div>
        </div>
    }
}

#[component]
pub fn GenerateButton(session: RwSignal<Session>) -> impl IntoView {
    let idle = move || session.with(|s| s.view().is_idle());

    view! {
        <button
            type="button"
            class="btn-primary generate-btn"
            id="generate-btn"
            style:display=move || super::display(idle())
            on:click=move |_| start_generation(session)
        >
            "✨ Generate Master Notes"
        </button>
    }
}
