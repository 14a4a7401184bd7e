//! Separation clamps for the two handles.
//!
//! Pure functions producing the nearest legal offset for one handle given the
//! other handle's current offset. Inputs must not be NaN.

/// Clamps a candidate offset for the start (low) handle.
///
/// The start handle may not come closer than `min_sep` to the end handle and
/// may not leave the track on the left.
pub(super) fn clamp_start(candidate_px: f64, end_offset_px: f64, min_sep: f64) -> f64 {
    candidate_px.min(end_offset_px - min_sep).max(0.0)
}

/// Clamps a candidate offset for the end (high) handle.
///
/// The end handle may not come closer than `min_sep` to the start handle and
/// may not leave the track on the right. On a track narrower than `min_sep`
/// the start handle wins: the separation floor is applied after the track
/// bound, pinning the end handle at `start + min_sep` even past the track
/// end.
pub(super) fn clamp_end(
    candidate_px: f64,
    start_offset_px: f64,
    track_length: f64,
    min_sep: f64,
) -> f64 {
    candidate_px
        .min(track_length)
        .max(start_offset_px + min_sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_stops_short_of_end() {
        assert_eq!(clamp_start(295.0, 300.0, 10.0), 290.0);
        assert_eq!(clamp_start(290.0, 300.0, 10.0), 290.0);
        assert_eq!(clamp_start(100.0, 300.0, 10.0), 100.0);
    }

    #[test]
    fn start_never_leaves_track() {
        assert_eq!(clamp_start(-25.0, 300.0, 10.0), 0.0);
        assert_eq!(clamp_start(0.0, 300.0, 10.0), 0.0);
    }

    #[test]
    fn end_stops_short_of_start() {
        assert_eq!(clamp_end(95.0, 100.0, 300.0, 10.0), 110.0);
        assert_eq!(clamp_end(110.0, 100.0, 300.0, 10.0), 110.0);
        assert_eq!(clamp_end(200.0, 100.0, 300.0, 10.0), 200.0);
    }

    #[test]
    fn end_never_passes_track_end_on_normal_tracks() {
        assert_eq!(clamp_end(340.0, 100.0, 300.0, 10.0), 300.0);
    }

    #[test]
    fn degenerate_track_pins_end_past_track_end() {
        // Track narrower than the separation: start wins, end sits at
        // start + min_sep even though that exceeds the track length.
        assert_eq!(clamp_end(6.0, 0.0, 6.0, 10.0), 10.0);
        assert_eq!(clamp_start(5.0, 10.0, 10.0), 0.0);
    }

    #[test]
    fn zero_separation_allows_touching_handles() {
        assert_eq!(clamp_start(150.0, 150.0, 0.0), 150.0);
        assert_eq!(clamp_end(150.0, 150.0, 300.0, 0.0), 150.0);
    }
}
