//! # Notesynth - Master Note Synthesizer demo engine
//!
//! The state and behavior behind the Master Note Synthesizer demo page. Users
//! pick a syllabus and study materials, enter a subject, and watch a scripted
//! progress sequence end in a placeholder download. No file is read and no
//! PDF is produced.
//!
//! ## Flow
//!
//! ```text
//! ┌────────────┐     ┌────────────┐     ┌────────────┐     ┌────────────┐
//! │  Pickers / │────▶│   Intake   │────▶│  Session   │────▶│  Pipeline  │
//! │ Drop zones │     │ (type/size)│     │ (owned)    │     │ (4 steps)  │
//! └────────────┘     └────────────┘     └────────────┘     └─────┬──────┘
//!                                                                 ▼
//!                                                          ┌────────────┐
//!                                                          │ Placeholder│
//!                                                          │  download  │
//!                                                          └────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use notesynth::{drive, FileRef, ManualTimer, Session};
//!
//! let mut session = Session::default();
//! session.select_syllabus(vec![FileRef::new("syllabus.pdf", 4096)]);
//! session.add_materials(vec![FileRef::new("week1.pptx", 8192)]);
//! session.set_subject_name("Linear Algebra");
//!
//! let ticket = session.begin_generation()?;
//! let timer = ManualTimer::new();
//! futures::executor::block_on(drive(ticket.start, ticket.timing, &timer, &ticket.cancel, |s| {
//!     let _ = session.enter(s);
//! }));
//! let document = session.download()?;
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error hierarchy
//! - [`config`] - Limits, allow-lists and delays
//! - [`models`] - File references, slots, view state
//! - [`intake`] - Type and size validation
//! - [`materials`] - Capped materials list with revision-checked removal
//! - [`dropzone`] - Drag-and-drop targets
//! - [`pipeline`] - Step table, state machine, timers, driver
//! - [`session`] - Owned page state
//! - [`download`] - Placeholder document
//! - [`activity`] - Activity feed

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Intake
pub mod dropzone;
pub mod intake;
pub mod materials;

// Simulation
pub mod download;
pub mod pipeline;
pub mod session;

// Logging
pub mod activity;

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{
    DownloadError, GenerateError, IntakeError, ListError, PipelineError, SessionError, SessionResult,
};

// =============================================================================
// Re-exports - Configuration & Models
// =============================================================================

pub use config::SynthConfig;
pub use models::{FileRef, GenerationRequest, SlotKind, ViewState};

// =============================================================================
// Re-exports - Intake
// =============================================================================

pub use dropzone::{DragPhase, DragResponse, DropZone};
pub use intake::{validate_file, AllowList, IntakeReport};
pub use materials::{MaterialEntry, MaterialList, MaterialsView, RemoveHandle};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use pipeline::{
    drive, CancellationToken, DriveOutcome, ManualTimer, PipelineState, PipelineStep, PipelineTiming,
    Schedule, Timer, STEPS, STEP_TITLES,
};

#[cfg(feature = "cli")]
pub use pipeline::TokioTimer;

// =============================================================================
// Re-exports - Session & Download
// =============================================================================

pub use download::{PlaceholderDocument, DISCLOSURE};
pub use session::{GenerationTicket, Session};

pub use activity::{ActivityEntry, ActivityLevel, ACTIVITY};
