//! The dual-handle range slider controller.
//!
//! ## Usage
//!
//! Build a [`RangeSlider`] from [`RangeSliderArgs`], feed it per-handle drag
//! events (`begin_drag` / `drag_by` / `end_drag`) and read the quantized
//! selection through the `on_change` callback or [`RangeSlider::range`]. The
//! drawing layer pulls a [`RenderState`] snapshot whenever it wants to paint.

use derive_setters::Setters;
use parking_lot::Mutex;
use thiserror::Error;
use tracing::trace;

use crate::callback::CallbackWith;

use gesture::GestureSession;
use render::RenderInputs;

pub use render::{RenderState, Segment};

mod constraint;
mod gesture;
mod mapper;
mod render;

const DEFAULT_MIN_HANDLE_SEPARATION: f64 = 10.0;
const DEFAULT_TRACK_LENGTH: f64 = 260.0;

/// A rejected slider configuration.
///
/// Construction fails fast on geometry that would otherwise produce silently
/// wrong values; a successfully constructed slider cannot fail afterwards.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// `track_length` was zero or negative.
    #[error("track length must be positive, got {0}")]
    NonPositiveTrackLength(f64),
    /// `domain_min` was not strictly below `domain_max`.
    #[error("domain min {min} must be less than domain max {max}")]
    EmptyDomain {
        /// The offending lower bound.
        min: f64,
        /// The offending upper bound.
        max: f64,
    },
    /// `step` was zero or negative.
    #[error("step must be positive, got {0}")]
    NonPositiveStep(f64),
    /// `min_handle_separation` was negative.
    #[error("handle separation must not be negative, got {0}")]
    NegativeSeparation(f64),
}

/// Immutable slider geometry, validated at construction.
///
/// A track narrower than `min_handle_separation` is not an error: the start
/// handle wins and the end handle is pinned past the track end (see
/// [`RangeSlider`] docs).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderConfig {
    /// Length of the drag track in pixels.
    pub track_length: f64,
    /// Lower bound of the domain the track maps onto.
    pub domain_min: f64,
    /// Upper bound of the domain the track maps onto.
    pub domain_max: f64,
    /// Quantization step for domain values.
    pub step: f64,
    /// Minimum distance kept between the two handles, in pixels.
    pub min_handle_separation: f64,
}

impl SliderConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.track_length > 0.0) {
            return Err(ConfigError::NonPositiveTrackLength(self.track_length));
        }
        if !(self.domain_min < self.domain_max) {
            return Err(ConfigError::EmptyDomain {
                min: self.domain_min,
                max: self.domain_max,
            });
        }
        if !(self.step > 0.0) {
            return Err(ConfigError::NonPositiveStep(self.step));
        }
        if !(self.min_handle_separation >= 0.0) {
            return Err(ConfigError::NegativeSeparation(self.min_handle_separation));
        }
        Ok(())
    }
}

/// Identifies one of the two handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    /// The low end of the selected range.
    Start,
    /// The high end of the selected range.
    End,
}

/// The selected range in domain values, quantized to the configured step.
///
/// Derived from the authoritative pixel offsets on every read; `min <= max`
/// always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeValue {
    /// Lower end of the selection.
    pub min: f64,
    /// Upper end of the selection.
    pub max: f64,
}

impl RangeValue {
    /// Returns whether `value` lies inside the selection, bounds included.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamps `value` into the selection.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Arguments for constructing a [`RangeSlider`].
#[derive(PartialEq, Clone, Setters)]
pub struct RangeSliderArgs {
    /// Length of the drag track in pixels. Must be positive.
    pub track_length: f64,
    /// Lower bound of the domain. Must be below `domain_max`.
    pub domain_min: f64,
    /// Upper bound of the domain.
    pub domain_max: f64,
    /// Quantization step for domain values. Must be positive.
    pub step: f64,
    /// Minimum distance kept between the handles, in pixels.
    pub min_handle_separation: f64,
    /// Unit label appended to tooltip text (e.g. `"yrs"`, `"cm"`).
    #[setters(into)]
    pub label: String,
    /// Initial value for the start handle; defaults to `domain_min`.
    #[setters(strip_option)]
    pub initial_min: Option<f64>,
    /// Initial value for the end handle; defaults to `domain_max`.
    #[setters(strip_option)]
    pub initial_max: Option<f64>,
    /// Callback invoked with the quantized range on every committed update.
    #[setters(skip)]
    pub on_change: CallbackWith<RangeValue>,
}

impl RangeSliderArgs {
    /// Sets the on_change handler.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(RangeValue) + Send + Sync + 'static,
    {
        self.on_change = CallbackWith::new(on_change);
        self
    }

    /// Sets the on_change handler using a shared callback.
    pub fn on_change_shared(mut self, on_change: impl Into<CallbackWith<RangeValue>>) -> Self {
        self.on_change = on_change.into();
        self
    }
}

impl Default for RangeSliderArgs {
    fn default() -> Self {
        Self {
            track_length: DEFAULT_TRACK_LENGTH,
            domain_min: 0.0,
            domain_max: 100.0,
            step: 1.0,
            min_handle_separation: DEFAULT_MIN_HANDLE_SEPARATION,
            label: String::new(),
            initial_min: None,
            initial_max: None,
            on_change: CallbackWith::new(|_| {}),
        }
    }
}

/// The pair of authoritative offsets plus both drag sessions.
///
/// Guarded by a single mutex so that each update's read-then-clamp-then-write
/// of the shared pair is one atomic step relative to the other handle.
struct SliderState {
    start_offset_px: f64,
    end_offset_px: f64,
    start_session: GestureSession,
    end_session: GestureSession,
}

impl SliderState {
    fn offset(&self, handle: Handle) -> f64 {
        match handle {
            Handle::Start => self.start_offset_px,
            Handle::End => self.end_offset_px,
        }
    }

    fn set_offset(&mut self, handle: Handle, offset_px: f64) {
        match handle {
            Handle::Start => self.start_offset_px = offset_px,
            Handle::End => self.end_offset_px = offset_px,
        }
    }

    fn session(&self, handle: Handle) -> &GestureSession {
        match handle {
            Handle::Start => &self.start_session,
            Handle::End => &self.end_session,
        }
    }

    fn session_mut(&mut self, handle: Handle) -> &mut GestureSession {
        match handle {
            Handle::Start => &mut self.start_session,
            Handle::End => &mut self.end_session,
        }
    }
}

/// Controller for a dual-handle range slider.
///
/// Owns the two authoritative handle offsets and one gesture session per
/// handle. Every committed update clamps the moving handle against the other
/// handle's live offset, so `min <= max` is never observable violated, and
/// invokes `on_change` with the freshly quantized range — on every
/// intermediate drag frame, not just on release. Callers that only want the
/// final value must debounce externally.
///
/// The two sessions are independent and may overlap in time; the shared pair
/// is serialized behind one lock, and the callback runs outside it so a
/// handler may read the slider back.
pub struct RangeSlider {
    config: SliderConfig,
    label: String,
    on_change: CallbackWith<RangeValue>,
    state: Mutex<SliderState>,
}

impl RangeSlider {
    /// Validates the configuration and seeds both handles from the initial
    /// values (defaulting to the domain bounds).
    ///
    /// Initial values violating the separation invariant are resolved in
    /// favor of the start handle.
    pub fn new(args: RangeSliderArgs) -> Result<Self, ConfigError> {
        let config = SliderConfig {
            track_length: args.track_length,
            domain_min: args.domain_min,
            domain_max: args.domain_max,
            step: args.step,
            min_handle_separation: args.min_handle_separation,
        };
        config.validate()?;

        let initial_min = args.initial_min.unwrap_or(config.domain_min);
        let initial_max = args.initial_max.unwrap_or(config.domain_max);
        let start_raw =
            mapper::value_to_position(initial_min, &config).clamp(0.0, config.track_length);
        let end_raw = mapper::value_to_position(initial_max, &config);
        let end_offset_px = constraint::clamp_end(
            end_raw,
            start_raw,
            config.track_length,
            config.min_handle_separation,
        );
        let start_offset_px =
            constraint::clamp_start(start_raw, end_offset_px, config.min_handle_separation);

        Ok(Self {
            config,
            label: args.label,
            on_change: args.on_change,
            state: Mutex::new(SliderState {
                start_offset_px,
                end_offset_px,
                start_session: GestureSession::new(Handle::Start),
                end_session: GestureSession::new(Handle::End),
            }),
        })
    }

    /// The validated geometry this slider was built with.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// The tooltip unit label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Starts (or restarts) a drag on `handle`, capturing its current offset
    /// as the base for subsequent deltas. Does not invoke the callback.
    pub fn begin_drag(&self, handle: Handle) {
        let mut state = self.state.lock();
        let offset = state.offset(handle);
        state.session_mut(handle).begin(offset);
    }

    /// Commits a live drag delta for `handle`.
    ///
    /// The candidate `start offset + delta` is clamped against the other
    /// handle's current offset and the track bounds, written as the new
    /// authoritative position, and reported through the callback. Deltas are
    /// relative to the offset captured at `begin_drag`, not cumulative.
    /// Ignored when no drag is active on `handle`.
    pub fn drag_by(&self, handle: Handle, delta_px: f64) {
        let committed = {
            let mut state = self.state.lock();
            let Some(candidate) = state.session(handle).candidate(delta_px) else {
                trace!(?handle, delta_px, "drag update without active session ignored");
                return;
            };
            let clamped = match handle {
                Handle::Start => constraint::clamp_start(
                    candidate,
                    state.end_offset_px,
                    self.config.min_handle_separation,
                ),
                Handle::End => constraint::clamp_end(
                    candidate,
                    state.start_offset_px,
                    self.config.track_length,
                    self.config.min_handle_separation,
                ),
            };
            state.set_offset(handle, clamped);
            (state.start_offset_px, state.end_offset_px)
        };
        trace!(?handle, start_px = committed.0, end_px = committed.1, "drag committed");
        self.notify(committed);
    }

    /// Ends the drag on `handle` and reports the final committed offsets
    /// through the callback exactly once. The last committed position stays
    /// authoritative; there is no rollback. Ignored when `handle` is idle.
    pub fn end_drag(&self, handle: Handle) {
        let committed = {
            let mut state = self.state.lock();
            if !state.session(handle).is_dragging() {
                return;
            }
            state.session_mut(handle).end();
            (state.start_offset_px, state.end_offset_px)
        };
        self.notify(committed);
    }

    /// Whether `handle` currently has an active drag session.
    pub fn is_dragging(&self, handle: Handle) -> bool {
        self.state.lock().session(handle).is_dragging()
    }

    /// Whether either handle currently has an active drag session.
    pub fn is_dragging_any(&self) -> bool {
        let state = self.state.lock();
        state.start_session.is_dragging() || state.end_session.is_dragging()
    }

    /// The current selection, quantized to the configured step.
    pub fn range(&self) -> RangeValue {
        let committed = {
            let state = self.state.lock();
            (state.start_offset_px, state.end_offset_px)
        };
        self.range_from(committed)
    }

    /// Moves both handles programmatically, outside a gesture.
    ///
    /// Values are clamped into the domain and against the separation
    /// invariant (start handle wins), then re-quantized. Fires the callback
    /// once, and only when the committed offsets actually change.
    pub fn set_range(&self, min: f64, max: f64) {
        let committed = {
            let mut state = self.state.lock();
            let start_raw = mapper::value_to_position(
                min.clamp(self.config.domain_min, self.config.domain_max),
                &self.config,
            )
            .clamp(0.0, self.config.track_length);
            let end_raw = mapper::value_to_position(
                max.clamp(self.config.domain_min, self.config.domain_max),
                &self.config,
            );
            let end = constraint::clamp_end(
                end_raw,
                start_raw,
                self.config.track_length,
                self.config.min_handle_separation,
            );
            let start = constraint::clamp_start(start_raw, end, self.config.min_handle_separation);
            if start == state.start_offset_px && end == state.end_offset_px {
                None
            } else {
                state.start_offset_px = start;
                state.end_offset_px = end;
                Some((start, end))
            }
        };
        if let Some(committed) = committed {
            self.notify(committed);
        }
    }

    /// Derives the render-only snapshot for the drawing layer.
    pub fn render_state(&self) -> RenderState {
        let inputs = {
            let state = self.state.lock();
            RenderInputs {
                start_offset_px: state.start_offset_px,
                end_offset_px: state.end_offset_px,
                start_dragging: state.start_session.is_dragging(),
                end_dragging: state.end_session.is_dragging(),
                start_value: mapper::position_to_value(state.start_offset_px, &self.config),
                end_value: mapper::position_to_value(state.end_offset_px, &self.config),
            }
        };
        render::derive_render_state(inputs, &self.config, &self.label)
    }

    fn range_from(&self, (start_px, end_px): (f64, f64)) -> RangeValue {
        RangeValue {
            min: mapper::position_to_value(start_px, &self.config),
            max: mapper::position_to_value(end_px, &self.config),
        }
    }

    fn notify(&self, committed: (f64, f64)) {
        self.on_change.call(self.range_from(committed));
    }
}
