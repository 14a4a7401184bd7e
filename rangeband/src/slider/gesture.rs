//! Per-handle drag lifecycle.
//!
//! Each handle owns one `GestureSession`, a two-state machine:
//!
//! ```text
//! Idle --begin--> Dragging --end--> Idle
//! ```
//!
//! A begin received while already Dragging restarts the session with a fresh
//! start offset. There is no cancel; the last committed position stays
//! authoritative after `end`.

use tracing::trace;

use super::Handle;

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragPhase {
    Idle,
    Dragging { start_offset_px: f64 },
}

/// Drag state machine for a single handle.
#[derive(Debug, Clone, Copy)]
pub(super) struct GestureSession {
    handle: Handle,
    phase: DragPhase,
}

impl GestureSession {
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            phase: DragPhase::Idle,
        }
    }

    /// Enters `Dragging`, capturing the handle's current offset as the base
    /// for subsequent deltas. Restarts the capture when already dragging.
    pub fn begin(&mut self, current_offset_px: f64) {
        trace!(handle = ?self.handle, start_offset_px = current_offset_px, "drag begin");
        self.phase = DragPhase::Dragging {
            start_offset_px: current_offset_px,
        };
    }

    /// Candidate offset for a live delta, or `None` when no drag is active.
    pub fn candidate(&self, delta_px: f64) -> Option<f64> {
        match self.phase {
            DragPhase::Dragging { start_offset_px } => Some(start_offset_px + delta_px),
            DragPhase::Idle => None,
        }
    }

    /// Returns to `Idle`. No rollback of the last committed position.
    pub fn end(&mut self) {
        trace!(handle = ?self.handle, "drag end");
        self.phase = DragPhase::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }
}
