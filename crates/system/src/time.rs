use crate::sensor::SecsLeft;

/// Format the sensor's seconds-left value for display.
///
/// Sentinels map to `"Unlimited"` / `"Calculating..."`; otherwise `"2h 5m"`,
/// or `"5m"` under one hour.  Partial minutes are truncated.
pub fn format_time_remaining(secs_left: SecsLeft) -> String {
    let secs = match secs_left {
        SecsLeft::Unlimited  => return "Unlimited".to_string(),
        SecsLeft::Unknown    => return "Calculating...".to_string(),
        SecsLeft::Seconds(s) => s,
    };

    let hours   = secs / 3600;
    let minutes = (secs % 3600) / 60;

    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_and_minutes() {
        assert_eq!(format_time_remaining(SecsLeft::Seconds(3661)), "1h 1m");
    }

    #[test]
    fn under_a_minute_is_zero_minutes() {
        assert_eq!(format_time_remaining(SecsLeft::Seconds(59)), "0m");
        assert_eq!(format_time_remaining(SecsLeft::Seconds(0)), "0m");
    }

    #[test]
    fn whole_hours_keep_minutes() {
        assert_eq!(format_time_remaining(SecsLeft::Seconds(7200)), "2h 0m");
    }

    #[test]
    fn truncates_rather_than_rounds() {
        assert_eq!(format_time_remaining(SecsLeft::Seconds(3599)), "59m");
    }

    #[test]
    fn long_estimates_do_not_wrap_at_a_day() {
        assert_eq!(format_time_remaining(SecsLeft::Seconds(90_000)), "25h 0m");
    }

    #[test]
    fn sentinels() {
        assert_eq!(format_time_remaining(SecsLeft::Unlimited), "Unlimited");
        assert_eq!(format_time_remaining(SecsLeft::Unknown), "Calculating...");
    }
}
