/// Format a seconds value as `m:ss`.
///
/// Total: NaN and infinities render as `0:00`, negative values clamp to zero.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return ZERO_TIME.to_string();
    }
    let whole = seconds.max(0.0).floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

pub const ZERO_TIME: &str = "0:00";

/// A duration the browser has actually resolved (not NaN, not a live stream).
pub fn usable_duration(duration: f64) -> Option<f64> {
    (duration.is_finite() && duration > 0.0).then_some(duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(59.99), "0:59");
        assert_eq!(format_time(600.0), "10:00");
        assert_eq!(format_time(3725.4), "62:05");
    }

    #[test]
    fn non_finite_input_formats_as_zero() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(f64::NEG_INFINITY), "0:00");
    }

    #[test]
    fn negative_input_clamps_to_zero() {
        assert_eq!(format_time(-12.0), "0:00");
    }

    #[test]
    fn usable_duration_rejects_unknown_values() {
        assert_eq!(usable_duration(f64::NAN), None);
        assert_eq!(usable_duration(f64::INFINITY), None);
        assert_eq!(usable_duration(0.0), None);
        assert_eq!(usable_duration(183.2), Some(183.2));
    }
}
