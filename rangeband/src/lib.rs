//! Interaction engine for a dual-handle range slider.
//!
//! This crate implements the logic of a range filter control (age, height,
//! distance, ...): two draggable handles on a fixed-length track, each
//! clamped against the other so the selected range never inverts, with pixel
//! offsets quantized into domain values on every committed update.
//!
//! Rendering is out of scope. The crate exposes a derived
//! [`RenderState`](slider::RenderState) snapshot that a drawing layer can
//! consume, and a synchronous `on_change` callback carrying the quantized
//! `{min, max}` pair for the surrounding form state.
//!
//! # Example
//!
//! ```
//! use rangeband::slider::{Handle, RangeSlider, RangeSliderArgs};
//!
//! let slider = RangeSlider::new(
//!     RangeSliderArgs::default()
//!         .track_length(300.0)
//!         .domain_min(18.0)
//!         .domain_max(70.0)
//!         .step(1.0)
//!         .label("yrs")
//!         .on_change(|range| {
//!             println!("selected {} - {}", range.min, range.max);
//!         }),
//! )
//! .expect("valid config");
//!
//! slider.begin_drag(Handle::Start);
//! slider.drag_by(Handle::Start, 75.0);
//! slider.end_drag(Handle::Start);
//!
//! assert_eq!(slider.range().min, 31.0);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod callback;
pub mod slider;

pub use callback::CallbackWith;
pub use slider::{ConfigError, Handle, RangeSlider, RangeSliderArgs, RangeValue};
