use leptos::*;
use notesynth::{PipelineState, Session, ViewState, STEPS, STEP_TITLES};

/// Width of the progress fill for a running state.
pub fn progress_width(state: Option<PipelineState>) -> String {
    format!("{}%", state.map(|s| s.progress()).unwrap_or(0))
}

/// Whether the indicator of step `index` is lit.
pub fn step_active(state: Option<PipelineState>, index: usize) -> bool {
    state.map(|s| s.active_steps() > index).unwrap_or(false)
}

#[component]
pub fn ProgressSection(session: RwSignal<Session>) -> impl IntoView {
    let state = create_memo(move |_| match session.with(|s| s.view()) {
        ViewState::Running(state) => Some(state),
        _ => None,
    });

    view! {
        <div
            class="progress-section"
            id="progress-section"
            style:display=move || super::display(state.get().is_some())
        >
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    id="progress-fill"
                    style:width=move || progress_width(state.get())
                ></div>
            </div>
            <div class="progress-status" id="progress-status">
                {move || state.get().map(|s| s.status()).unwrap_or_default()}
            </div>
            <div class="progress-steps">
                {STEPS
                    .iter()
                    .zip(STEP_TITLES)
                    .enumerate()
                    .map(|(i, (step, title))| view! {
                        <div
                            class="progress-step"
                            id=step.id
                            class:active=move || step_active(state.get(), i)
                        >
                            <span class="step-number">{i + 1}</span>
                            <span class="step-title">{title}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
