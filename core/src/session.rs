//! The owned state of one page view.
//!
//! Handlers receive the [`Session`] explicitly; there is no ambient state.
//! Every refused action leaves the session untouched.

use chrono::NaiveDate;
use tokio_util::sync::CancellationToken;

use crate::activity::{record, record_detail, ActivityLevel};
use crate::config::SynthConfig;
use crate::download::PlaceholderDocument;
use crate::dropzone::DropZone;
use crate::error::{DownloadError, DownloadResult, GenerateError, GenerateResult, ListResult, PipelineError, PipelineResult};
use crate::intake::{partition, AllowList, IntakeReport};
use crate::materials::{MaterialList, MaterialsView, RemoveHandle};
use crate::models::{FileRef, GenerationRequest, SlotKind, ViewState};
use crate::pipeline::{PipelineState, PipelineTiming};

/// Handed out when a run starts; owned by whoever drives the timers.
#[derive(Debug, Clone)]
pub struct GenerationTicket {
    pub request: GenerationRequest,
    pub timing: PipelineTiming,
    /// State the view is already in
    pub start: PipelineState,
    pub cancel: CancellationToken,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: SynthConfig,
    syllabus: Option<FileRef>,
    materials: MaterialList,
    subject_name: String,
    course_code: String,
    view: ViewState,
    request: Option<GenerationRequest>,
    cancel: Option<CancellationToken>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SynthConfig::default())
    }
}

impl Session {
    pub fn new(config: SynthConfig) -> Self {
        let materials = MaterialList::new(config.max_materials);
        Self {
            config,
            syllabus: None,
            materials,
            subject_name: String::new(),
            course_code: String::new(),
            view: ViewState::Idle,
            request: None,
            cancel: None,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    pub fn syllabus(&self) -> Option<&FileRef> {
        self.syllabus.as_ref()
    }

    /// `✓ <name>` once a syllabus is stored.
    pub fn syllabus_label(&self) -> Option<String> {
        self.syllabus.as_ref().map(|f| format!("✓ {}", f.name))
    }

    pub fn materials(&self) -> &MaterialList {
        &self.materials
    }

    pub fn render_materials(&self) -> MaterialsView {
        self.materials.render()
    }

    pub fn subject_name(&self) -> &str {
        &self.subject_name
    }

    pub fn course_code(&self) -> &str {
        &self.course_code
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Inputs captured by the last successful trigger.
    pub fn request(&self) -> Option<&GenerationRequest> {
        self.request.as_ref()
    }

    // =========================================================================
    // Text fields
    // =========================================================================

    pub fn set_subject_name(&mut self, value: impl Into<String>) {
        self.subject_name = value.into();
    }

    pub fn set_course_code(&mut self, value: impl Into<String>) {
        self.course_code = value.into();
    }

    // =========================================================================
    // Intake
    // =========================================================================

    /// Offer files to a slot, from a picker or a drop.
    pub fn offer(&mut self, slot: SlotKind, files: Vec<FileRef>) -> IntakeReport {
        match slot {
            SlotKind::Syllabus => self.select_syllabus(files),
            SlotKind::Materials => self.add_materials(files),
        }
    }

    /// Files dropped on a zone go through the same intake as the pickers.
    pub fn drop_files(&mut self, zone: &DropZone, files: Vec<FileRef>) -> IntakeReport {
        self.offer(zone.target(), files)
    }

    /// Keep the first file of the selection as the syllabus, if valid.
    pub fn select_syllabus(&mut self, files: Vec<FileRef>) -> IntakeReport {
        let allowed = AllowList::for_slot(SlotKind::Syllabus, &self.config);
        let first: Vec<FileRef> = files.into_iter().take(1).collect();
        let (mut accepted, rejected) = partition(first, &allowed, &self.config);

        for err in &rejected {
            record(ActivityLevel::Error, err.to_string());
        }

        let mut report = IntakeReport { rejected, ..Default::default() };
        if let Some(file) = accepted.pop() {
            record(ActivityLevel::Success, format!("Syllabus selected: {}", file.name));
            report.accepted.push(file.name.clone());
            self.syllabus = Some(file);
        }
        report
    }

    /// Validate each file and append the valid ones up to the cap.
    pub fn add_materials(&mut self, files: Vec<FileRef>) -> IntakeReport {
        let allowed = AllowList::for_slot(SlotKind::Materials, &self.config);
        let (accepted, rejected) = partition(files, &allowed, &self.config);

        for err in &rejected {
            record(ActivityLevel::Error, err.to_string());
        }

        let room = self.materials.cap().saturating_sub(self.materials.len());
        let names: Vec<String> = accepted.iter().take(room).map(|f| f.name.clone()).collect();
        let overflow = self.materials.extend(accepted);

        let report = IntakeReport { accepted: names, rejected, overflow };

        if !report.accepted.is_empty() {
            record(ActivityLevel::Success, format!(
                "Added {} study material(s), {}/{} in list",
                report.accepted.len(),
                self.materials.len(),
                self.materials.cap()
            ));
            for name in &report.accepted {
                record_detail(name.clone());
            }
        }
        if let Some(notice) = report.overflow_notice(self.materials.cap()) {
            record(ActivityLevel::Warning, notice);
        }
        report
    }

    pub fn remove_material(&mut self, handle: RemoveHandle) -> ListResult<FileRef> {
        let removed = self.materials.remove(handle)?;
        record(ActivityLevel::Info, format!("Removed {}", removed.name));
        Ok(removed)
    }

    pub fn remove_material_at(&mut self, index: usize) -> ListResult<FileRef> {
        let removed = self.materials.remove_at(index)?;
        record(ActivityLevel::Info, format!("Removed {}", removed.name));
        Ok(removed)
    }

    // =========================================================================
    // Generation
    // =========================================================================

    /// Check the trigger preconditions without changing anything.
    pub fn check_ready(&self) -> GenerateResult<()> {
        if !self.view.is_idle() {
            return Err(GenerateError::AlreadyStarted);
        }
        if self.syllabus.is_none() {
            return Err(GenerateError::MissingSyllabus);
        }
        if self.materials.is_empty() {
            return Err(GenerateError::NoMaterials);
        }
        if self.subject_name.trim().is_empty() {
            return Err(GenerateError::BlankSubject);
        }
        Ok(())
    }

    /// Start the simulated pipeline.
    ///
    /// On success the view is `Running` at the first step; the caller drives
    /// the rest of the run with [`crate::pipeline::drive`] and feeds each state
    /// back through [`enter`](Self::enter).
    pub fn begin_generation(&mut self) -> GenerateResult<GenerationTicket> {
        if let Err(e) = self.check_ready() {
            record(ActivityLevel::Warning, e.to_string());
            return Err(e);
        }

        let syllabus = match &self.syllabus {
            Some(file) => file.clone(),
            None => return Err(GenerateError::MissingSyllabus),
        };
        let course_code = Some(self.course_code.clone()).filter(|c| !c.is_empty());

        let request = GenerationRequest {
            syllabus,
            subject_name: self.subject_name.clone(),
            course_code,
            material_count: self.materials.len(),
        };

        let cancel = CancellationToken::new();
        let start = PipelineState::FIRST;

        self.view = ViewState::Running(start);
        self.request = Some(request.clone());
        self.cancel = Some(cancel.clone());

        record(ActivityLevel::Info, format!(
            "Generating notes for \"{}\" from {} study material(s)",
            request.subject_name, request.material_count
        ));
        self.log_state(start);

        Ok(GenerationTicket {
            request,
            timing: PipelineTiming::from(&self.config),
            start,
            cancel,
        })
    }

    /// Apply a pipeline state. States only move forward.
    pub fn enter(&mut self, state: PipelineState) -> PipelineResult<()> {
        let current = match self.view {
            ViewState::Running(current) => current,
            _ => return Err(PipelineError::NotRunning),
        };
        if state < current {
            return Err(PipelineError::Rewind { from: current, to: state });
        }

        self.view = if state.is_complete() {
            self.cancel = None;
            ViewState::Complete
        } else {
            ViewState::Running(state)
        };
        self.log_state(state);
        Ok(())
    }

    /// Stop the current run. The view stays where it is.
    pub fn cancel_generation(&mut self) {
        if let Some(token) = self.cancel.take() {
            token.cancel();
            record(ActivityLevel::Warning, "Generation cancelled");
        }
    }

    fn log_state(&self, state: PipelineState) {
        match state {
            PipelineState::Step(_) => record_detail(format!("[{:>3}%] {}", state.progress(), state.status())),
            PipelineState::Settling => log::debug!("Pipeline settling"),
            PipelineState::Complete => record(ActivityLevel::Success, "Your master notes are ready"),
        }
    }

    // =========================================================================
    // Download
    // =========================================================================

    /// Build the placeholder document for today.
    pub fn download(&self) -> DownloadResult<PlaceholderDocument> {
        self.download_on(chrono::Local::now().date_naive())
    }

    /// Build the placeholder document for a given date.
    ///
    /// Subject and course code are read as they are now; the material count
    /// is the one captured at trigger time.
    pub fn download_on(&self, date: NaiveDate) -> DownloadResult<PlaceholderDocument> {
        let request = match (&self.view, &self.request) {
            (ViewState::Complete, Some(request)) => request,
            _ => return Err(DownloadError::NotReady),
        };

        let course_code = Some(self.course_code.as_str()).filter(|c| !c.is_empty());
        let document = PlaceholderDocument::new(&self.subject_name, course_code, request.material_count, date);
        record(ActivityLevel::Success, format!("Prepared {}", document.file_name));
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BYTES_PER_MB;
    use crate::dropzone::DragPhase;
    use crate::error::ListError;
    use crate::pipeline::{drive, DriveOutcome, ManualTimer};
    use futures::executor::block_on;

    fn file(name: &str) -> FileRef {
        FileRef::new(name, 1024)
    }

    fn ready_session() -> Session {
        let mut session = Session::default();
        session.select_syllabus(vec![file("syllabus.pdf")]);
        session.add_materials(vec![file("week1.pdf"), file("week2.pptx")]);
        session.set_subject_name("Linear Algebra");
        session
    }

    fn run_to_completion(session: &mut Session) -> (DriveOutcome, Vec<ViewState>) {
        let ticket = session.begin_generation().unwrap();
        let timer = ManualTimer::new();
        let mut views = vec![session.view()];
        let outcome = block_on(drive(ticket.start, ticket.timing, &timer, &ticket.cancel, |state| {
            session.enter(state).unwrap();
            views.push(session.view());
        }));
        (outcome, views)
    }

    #[test]
    fn test_syllabus_replaced_and_only_first_kept() {
        let mut session = Session::default();
        session.select_syllabus(vec![file("old.pdf")]);
        let report = session.select_syllabus(vec![file("new.docx"), file("other.pdf")]);

        assert_eq!(report.accepted, vec!["new.docx"]);
        assert_eq!(session.syllabus().unwrap().name, "new.docx");
        assert_eq!(session.syllabus_label().as_deref(), Some("✓ new.docx"));
    }

    #[test]
    fn test_invalid_syllabus_keeps_previous() {
        let mut session = Session::default();
        session.select_syllabus(vec![file("old.pdf")]);

        let report = session.select_syllabus(vec![file("slides.pptx")]);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(session.syllabus().unwrap().name, "old.pdf");

        let report = session.select_syllabus(vec![FileRef::new("huge.pdf", 51 * BYTES_PER_MB)]);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(session.syllabus().unwrap().name, "old.pdf");
    }

    #[test]
    fn test_rejected_materials_do_not_block_others() {
        let mut session = Session::default();
        let report = session.add_materials(vec![
            file("a.pdf"),
            file("b.gif"),
            FileRef::new("c.pdf", 60 * BYTES_PER_MB),
            file("d.png"),
        ]);

        assert_eq!(report.accepted, vec!["a.pdf", "d.png"]);
        assert_eq!(report.rejected.len(), 2);
        assert_eq!(session.materials().len(), 2);
    }

    #[test]
    fn test_overflow_is_reported() {
        let mut session = Session::default();
        let batch: Vec<_> = (0..55).map(|i| file(&format!("{}.txt", i))).collect();
        let report = session.add_materials(batch);

        assert_eq!(report.accepted.len(), 50);
        assert_eq!(report.overflow, 5);
        assert_eq!(session.materials().len(), 50);
        assert!(report.rejected.is_empty());
    }

    #[test]
    fn test_drop_routes_through_intake() {
        let mut session = Session::default();
        let mut zone = DropZone::new(SlotKind::Materials);
        zone.handle(DragPhase::Enter);
        let response = zone.handle(DragPhase::Drop);
        assert!(response.route_files);

        let report = session.drop_files(&zone, vec![file("a.pdf"), file("b.exe")]);
        assert_eq!(report.accepted, vec!["a.pdf"]);
        assert_eq!(report.rejected.len(), 1);

        let syllabus_zone = DropZone::new(SlotKind::Syllabus);
        session.drop_files(&syllabus_zone, vec![file("outline.txt"), file("x.pdf")]);
        assert_eq!(session.syllabus().unwrap().name, "outline.txt");
    }

    #[test]
    fn test_remove_material_by_handle() {
        let mut session = ready_session();
        let handle = session.render_materials().entries[0].handle;
        assert_eq!(session.remove_material(handle).unwrap().name, "week1.pdf");
        assert_eq!(
            session.remove_material(handle),
            Err(ListError::StaleHandle { index: 0, rendered: handle.revision, current: handle.revision + 1 })
        );
        assert_eq!(session.materials().len(), 1);
    }

    #[test]
    fn test_trigger_preconditions_in_order() {
        let mut session = Session::default();
        assert_eq!(session.begin_generation().unwrap_err(), GenerateError::MissingSyllabus);

        session.select_syllabus(vec![file("s.pdf")]);
        assert_eq!(session.begin_generation().unwrap_err(), GenerateError::NoMaterials);

        session.add_materials(vec![file("m.pdf")]);
        session.set_subject_name("   ");
        assert_eq!(session.begin_generation().unwrap_err(), GenerateError::BlankSubject);

        assert_eq!(session.view(), ViewState::Idle);
        assert!(session.request().is_none());
    }

    #[test]
    fn test_full_run_reaches_complete() {
        let mut session = ready_session();
        let (outcome, views) = run_to_completion(&mut session);

        assert_eq!(outcome, DriveOutcome::Completed);
        assert_eq!(
            views,
            vec![
                ViewState::Running(PipelineState::Step(0)),
                ViewState::Running(PipelineState::Step(1)),
                ViewState::Running(PipelineState::Step(2)),
                ViewState::Running(PipelineState::Step(3)),
                ViewState::Running(PipelineState::Settling),
                ViewState::Complete,
            ]
        );
    }

    #[test]
    fn test_no_second_run() {
        let mut session = ready_session();
        run_to_completion(&mut session);
        assert_eq!(session.begin_generation().unwrap_err(), GenerateError::AlreadyStarted);
        assert!(session.view().is_complete());
    }

    #[test]
    fn test_enter_rejects_rewind_and_idle() {
        let mut session = ready_session();
        assert_eq!(session.enter(PipelineState::Step(1)), Err(PipelineError::NotRunning));

        session.begin_generation().unwrap();
        session.enter(PipelineState::Step(2)).unwrap();
        assert_eq!(
            session.enter(PipelineState::Step(1)),
            Err(PipelineError::Rewind { from: PipelineState::Step(2), to: PipelineState::Step(1) })
        );
        assert_eq!(session.view(), ViewState::Running(PipelineState::Step(2)));
    }

    #[test]
    fn test_cancel_keeps_view() {
        let mut session = ready_session();
        let ticket = session.begin_generation().unwrap();
        session.enter(PipelineState::Step(1)).unwrap();
        session.cancel_generation();

        assert!(ticket.cancel.is_cancelled());
        assert_eq!(session.view(), ViewState::Running(PipelineState::Step(1)));
    }

    #[test]
    fn test_download_requires_completion() {
        let session = ready_session();
        assert!(matches!(session.download(), Err(DownloadError::NotReady)));
    }

    #[test]
    fn test_download_uses_trigger_time_count() {
        let mut session = ready_session();
        session.set_course_code("MATH 221");
        run_to_completion(&mut session);

        // Later list edits do not change the compiled count
        session.remove_material_at(0).unwrap();

        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let doc = session.download_on(date).unwrap();
        assert_eq!(doc.file_name, "Linear_Algebra_Master_Notes.txt");
        assert!(doc.content.contains("Subject: Linear Algebra (MATH 221)"));
        assert!(doc.content.contains("Compiled from: 2 study material(s)"));
        assert!(doc.content.contains("Generated: 10/18/2026"));
    }
}
