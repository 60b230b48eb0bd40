//! Drag-and-drop targets.
//!
//! A zone only tracks its "active" indicator and tells the caller to swallow
//! the browser's default handling. Dropped files are routed by the session
//! through the same intake as the file pickers.

use crate::models::SlotKind;

/// Phase of a drag gesture over a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Enter,
    Over,
    Leave,
    Drop,
}

impl DragPhase {
    /// Map a DOM event type (`dragenter`, `dragover`, ...) to a phase.
    pub fn from_event_type(event_type: &str) -> Option<Self> {
        match event_type {
            "dragenter" => Some(DragPhase::Enter),
            "dragover" => Some(DragPhase::Over),
            "dragleave" => Some(DragPhase::Leave),
            "drop" => Some(DragPhase::Drop),
            _ => None,
        }
    }
}

/// What the caller must do with the DOM event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragResponse {
    pub prevent_default: bool,
    pub stop_propagation: bool,
    /// Indicator state after this event
    pub active: bool,
    /// The dropped files should be handed to the session
    pub route_files: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropZone {
    target: SlotKind,
    active: bool,
}

impl DropZone {
    pub fn new(target: SlotKind) -> Self {
        Self { target, active: false }
    }

    pub fn target(&self) -> SlotKind {
        self.target
    }

    /// Whether the `dragover` class is currently shown.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn handle(&mut self, phase: DragPhase) -> DragResponse {
        self.active = matches!(phase, DragPhase::Enter | DragPhase::Over);
        DragResponse {
            prevent_default: true,
            stop_propagation: true,
            active: self.active,
            route_files: phase == DragPhase::Drop,
        }
    }
}
