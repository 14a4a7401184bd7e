//! Derived, render-only state.
//!
//! Everything here is recomputed from the current offsets on each call;
//! nothing is stored authoritatively. The drawing layer consumes this
//! snapshot, the logic layer never reads it back.

use super::SliderConfig;

/// A horizontal span of the track, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Left edge of the span.
    pub start_px: f64,
    /// Width of the span; never negative.
    pub width_px: f64,
}

/// Snapshot of everything the drawing layer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    /// Filled part of the track, between the two handles.
    pub active_segment: Segment,
    /// Horizontal translation of the start (low) handle.
    pub start_handle_offset_px: f64,
    /// Horizontal translation of the end (high) handle.
    pub end_handle_offset_px: f64,
    /// Tooltip text over the start handle; `Some` only while it is dragged.
    pub start_tooltip: Option<String>,
    /// Tooltip text over the end handle; `Some` only while it is dragged.
    pub end_tooltip: Option<String>,
}

pub(super) struct RenderInputs {
    pub start_offset_px: f64,
    pub end_offset_px: f64,
    pub start_dragging: bool,
    pub end_dragging: bool,
    pub start_value: f64,
    pub end_value: f64,
}

pub(super) fn derive_render_state(
    inputs: RenderInputs,
    config: &SliderConfig,
    label: &str,
) -> RenderState {
    let tooltip = |dragging: bool, value: f64| {
        dragging.then(|| format_tooltip(value, config.step, label))
    };

    RenderState {
        active_segment: Segment {
            start_px: inputs.start_offset_px,
            width_px: (inputs.end_offset_px - inputs.start_offset_px).max(0.0),
        },
        start_handle_offset_px: inputs.start_offset_px,
        end_handle_offset_px: inputs.end_offset_px,
        start_tooltip: tooltip(inputs.start_dragging, inputs.start_value),
        end_tooltip: tooltip(inputs.end_dragging, inputs.end_value),
    }
}

/// Formats a quantized value for the tooltip: one decimal place for
/// sub-integer steps, plain integer otherwise, with the slider label appended
/// as a unit suffix when present.
fn format_tooltip(value: f64, step: f64, label: &str) -> String {
    let text = if step < 1.0 {
        format!("{value:.1}")
    } else {
        format!("{}", value.round() as i64)
    };
    if label.is_empty() {
        text
    } else {
        format!("{text} {label}")
    }
}
