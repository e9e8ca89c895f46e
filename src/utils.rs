/// Utility helpers for Playdeck

/// Format a playback position as `M:SS`.
///
/// Minutes are unpadded, seconds are zero-padded, and both are floored.
/// Unknown positions (NaN, infinite, zero or negative) render as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Map a playback position onto the 0-100 slider scale.
pub fn progress_percent(current_time: f64, duration: f64) -> f64 {
    let pct = current_time / duration * 100.0;
    if pct.is_nan() {
        0.0
    } else {
        pct
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(59.99), "0:59");
        assert_eq!(format_time(600.0), "10:00");
        assert_eq!(format_time(3725.4), "62:05");
    }

    #[test]
    fn unknown_positions_read_as_zero() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(-3.0), "0:00");
    }

    #[test]
    fn progress_handles_zero_over_zero() {
        assert_eq!(progress_percent(0.0, 0.0), 0.0);
        assert_eq!(progress_percent(30.0, 120.0), 25.0);
    }

    proptest! {
        #[test]
        fn seconds_field_is_always_two_digits(secs in 0.0f64..100_000.0) {
            let text = format_time(secs);
            let (_, seconds) = text.split_once(':').expect("separator");
            prop_assert_eq!(seconds.len(), 2);
            prop_assert!(seconds.parse::<u8>().expect("digits") < 60);
        }
    }
}
