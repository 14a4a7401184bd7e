//! Track offset ↔ domain value mapping.
//!
//! Values are always recomputed from the authoritative pixel offset, never
//! accumulated from a previous value, so the same offset maps to the same
//! value on every call.

use super::SliderConfig;

/// Maps a track offset to its quantized domain value.
///
/// Linear interpolation over the track, snapped to the nearest multiple of
/// `step` relative to `domain_min` (half rounds away from zero, which is what
/// [`f64::round`] does), then clamped into the domain.
pub(super) fn position_to_value(offset_px: f64, config: &SliderConfig) -> f64 {
    debug_assert!(config.track_length > 0.0 && config.step > 0.0);

    let span = config.domain_max - config.domain_min;
    let raw = config.domain_min + (offset_px / config.track_length) * span;
    let steps = ((raw - config.domain_min) / config.step).round();
    let snapped = config.domain_min + steps * config.step;
    snapped.clamp(config.domain_min, config.domain_max)
}

/// Maps a domain value back to a track offset.
///
/// Exact inverse of the unclamped linear map; only used to seed handle
/// positions from caller-supplied initial values.
pub(super) fn value_to_position(value: f64, config: &SliderConfig) -> f64 {
    debug_assert!(config.track_length > 0.0);

    let span = config.domain_max - config.domain_min;
    (value - config.domain_min) / span * config.track_length
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(track_length: f64, domain_min: f64, domain_max: f64, step: f64) -> SliderConfig {
        SliderConfig {
            track_length,
            domain_min,
            domain_max,
            step,
            min_handle_separation: 10.0,
        }
    }

    #[test]
    fn track_ends_map_to_domain_ends() {
        let cfg = config(300.0, 18.0, 70.0, 1.0);
        assert_eq!(position_to_value(0.0, &cfg), 18.0);
        assert_eq!(position_to_value(300.0, &cfg), 70.0);
    }

    #[test]
    fn integer_step_always_yields_integers() {
        let cfg = config(300.0, 0.0, 10_000.0, 1.0);
        for offset in [0.0, 1.0, 13.7, 150.0, 290.0, 299.9] {
            let value = position_to_value(offset, &cfg);
            assert_eq!(value, value.round(), "offset {offset} gave {value}");
        }
    }

    #[test]
    fn fractional_step_snaps_to_tenths() {
        let cfg = config(300.0, 4.0, 10.0, 0.1);
        for offset in [0.0, 7.0, 150.0, 212.5, 300.0] {
            let value = position_to_value(offset, &cfg);
            let in_tenths = (value - 4.0) / 0.1;
            assert!(
                (in_tenths - in_tenths.round()).abs() < 1e-9,
                "offset {offset} gave {value}"
            );
        }
    }

    #[test]
    fn midpoint_of_fractional_domain_rounds_to_seven() {
        let cfg = config(300.0, 4.0, 10.0, 0.1);
        let value = position_to_value(150.0, &cfg);
        assert!((value - 7.0).abs() < 1e-9);
    }

    #[test]
    fn snap_rounds_half_away_from_zero() {
        // Offsets chosen so the raw value lands exactly between two steps
        // (0.25 and 0.75 are exact in binary); halves go up, not to even.
        let cfg = config(1.0, 0.0, 10.0, 1.0);
        assert_eq!(position_to_value(0.25, &cfg), 3.0);
        assert_eq!(position_to_value(0.75, &cfg), 8.0);
    }

    #[test]
    fn out_of_range_offsets_clamp_into_domain() {
        let cfg = config(300.0, 18.0, 70.0, 1.0);
        assert_eq!(position_to_value(-40.0, &cfg), 18.0);
        assert_eq!(position_to_value(340.0, &cfg), 70.0);
    }

    #[test]
    fn round_trips_valid_step_multiples() {
        let cfg = config(300.0, 18.0, 70.0, 1.0);
        for k in 0..=52 {
            let value = 18.0 + k as f64;
            assert_eq!(position_to_value(value_to_position(value, &cfg), &cfg), value);
        }

        let cfg = config(300.0, 4.0, 10.0, 0.1);
        for k in 0..=60 {
            let value = 4.0 + k as f64 * 0.1;
            assert_eq!(position_to_value(value_to_position(value, &cfg), &cfg), value);
        }
    }

    #[test]
    fn mapping_is_deterministic() {
        let cfg = config(300.0, 0.0, 10_000.0, 1.0);
        let first = position_to_value(133.7, &cfg);
        for _ in 0..100 {
            assert_eq!(position_to_value(133.7, &cfg), first);
        }
    }
}
