//! Scripted walkthrough of an age-filter range slider.
//!
//! Drives the controller with the event sequence a touch backend would
//! deliver and prints what the callback and the render snapshot report.

use std::sync::Arc;

use parking_lot::Mutex;
use rangeband::{Handle, RangeSlider, RangeSliderArgs, RangeValue};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,rangeband=trace".into()),
        )
        .init();

    let reported: Arc<Mutex<Vec<RangeValue>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = reported.clone();

    let slider = RangeSlider::new(
        RangeSliderArgs::default()
            .track_length(300.0)
            .domain_min(18.0)
            .domain_max(70.0)
            .step(1.0)
            .min_handle_separation(10.0)
            .label("yrs")
            .initial_min(22.0)
            .initial_max(45.0)
            .on_change(move |range| {
                println!("age filter: {} - {} yrs", range.min, range.max);
                sink.lock().push(range);
            }),
    )
    .expect("static config");

    println!("initial: {:?}", slider.range());

    // User grabs the low handle and sweeps right in a few frames.
    slider.begin_drag(Handle::Start);
    for delta in [30.0, 65.0, 110.0] {
        slider.drag_by(Handle::Start, delta);
        if let Some(tooltip) = slider.render_state().start_tooltip {
            println!("  tooltip: {tooltip}");
        }
    }
    slider.end_drag(Handle::Start);

    // Meanwhile the high handle comes down until the separation stops it.
    slider.begin_drag(Handle::End);
    slider.drag_by(Handle::End, -400.0);
    slider.end_drag(Handle::End);

    let snapshot = slider.render_state();
    println!(
        "active segment: {:.1}px wide at {:.1}px",
        snapshot.active_segment.width_px, snapshot.active_segment.start_px
    );
    println!("final: {:?}", slider.range());
    println!("callback fired {} times", reported.lock().len());
}
