//! Master Note Synthesizer - Demo page (Rust/Leptos)
//!
//! A WebAssembly page that lets visitors pick a syllabus and study materials,
//! plays a simulated synthesis sequence and offers a placeholder download.
//! All state lives in one [`notesynth::Session`] held in a signal.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Header (navbar, smooth-scroll links)                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero, HowItWorks                                        │
//! │  ├── SyllabusUpload + MaterialsUpload (drag & drop)          │
//! │  ├── CourseDetails + GenerateButton          (Idle)          │
//! │  ├── ProgressSection                         (Running)       │
//! │  ├── DownloadSection                         (Complete)      │
//! │  └── Features                                                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Page constants
//! - [`types`] - Error and scroll types
//! - [`components`] - UI components
//! - [`services`] - Browser APIs (files, timers, downloads)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use notesynth::Session;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{AppError, AppResult, ScrollBlock};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("📝 Master Note Synthesizer - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // The whole page state
    let session = create_rw_signal(Session::default());

    // A run still on its timers must not outlive the page
    on_cleanup(move || {
        session.try_update(|s| s.cancel_generation());
    });

    view! {
        <Header/>

        <div class="container">
            <Hero/>
            <HowItWorks/>

            <section class="upload" id="upload">
                <h2>"Try it with your own course"</h2>
                <div class="upload-grid">
                    <SyllabusUpload session=session/>
                    <MaterialsUpload session=session/>
                </div>

                <CourseDetails session=session/>
                <GenerateButton session=session/>
                <ProgressSection session=session/>
                <DownloadSection session=session/>
            </section>

            <Features/>
        </div>

        <Footer/>
    }
}
