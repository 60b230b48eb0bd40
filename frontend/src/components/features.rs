//! Marketing sections: how it works and feature highlights.

use leptos::*;

use notesynth::STEP_TITLES;

const FEATURES: &[(&str, &str, &str)] = &[
    ("🗂️", "Syllabus-driven structure", "Sections follow the topics of your course outline."),
    ("🔗", "Cross-referenced content", "Overlapping material is merged instead of repeated."),
    ("🧮", "Formulas and figures", "Equations, diagrams and tables keep their captions."),
    ("📑", "Summaries and index", "Every section ends with key takeaways."),
];

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section class="how-it-works" id="how-it-works">
            <h2>"How it works"</h2>
            <ol class="how-steps">
                {STEP_TITLES
                    .iter()
                    .enumerate()
                    .map(|(i, title)| view! {
                        <li class="how-step">
                            <span class="how-step-number">{i + 1}</span>
                            <span class="how-step-title">{*title}</span>
                        </li>
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="features" id="features">
            <h2>"What you get"</h2>
            <div class="feature-grid">
                {FEATURES
                    .iter()
                    .map(|&(icon, title, text)| view! {
                        <div class="feature-card">
                            <div class="feature-icon">{icon}</div>
                            <h3>{title}</h3>
                            <p>{text}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
