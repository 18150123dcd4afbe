//! Display formatting for API values

/// Format an ISO-8601 duration for display.
///
/// `PT4M13S` becomes `4:13`, `PT1H2M5S` becomes `1:02:05`. Anything
/// unparseable renders as `0:00`.
pub fn format_duration(duration: &str) -> String {
    let Some(rest) = duration.strip_prefix("PT") else {
        return "0:00".to_string();
    };

    let mut hours = 0u64;
    let mut minutes = 0u64;
    let mut seconds = 0u64;
    let mut value = 0u64;
    let mut saw_digit = false;

    for c in rest.chars() {
        match c {
            '0'..='9' => {
                value = value * 10 + u64::from(c as u8 - b'0');
                saw_digit = true;
            }
            'H' if saw_digit => {
                hours = value;
                value = 0;
                saw_digit = false;
            }
            'M' if saw_digit => {
                minutes = value;
                value = 0;
                saw_digit = false;
            }
            'S' if saw_digit => {
                seconds = value;
                value = 0;
                saw_digit = false;
            }
            _ => return "0:00".to_string(),
        }
    }

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Format a view count for display: `1234567` becomes `1.2M views`.
pub fn format_views(views: &str) -> String {
    let num: u64 = views.parse().unwrap_or(0);
    if num >= 1_000_000_000 {
        format!("{:.1}B views", num as f64 / 1_000_000_000.0)
    } else if num >= 1_000_000 {
        format!("{:.1}M views", num as f64 / 1_000_000.0)
    } else if num >= 1_000 {
        format!("{:.1}K views", num as f64 / 1_000.0)
    } else {
        format!("{num} views")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_render_as_clock_time() {
        assert_eq!(format_duration("PT4M13S"), "4:13");
        assert_eq!(format_duration("PT1H2M5S"), "1:02:05");
        assert_eq!(format_duration("PT30S"), "0:30");
        assert_eq!(format_duration("PT2H"), "2:00:00");
        assert_eq!(format_duration(""), "0:00");
        assert_eq!(format_duration("garbage"), "0:00");
    }

    #[test]
    fn view_counts_abbreviate() {
        assert_eq!(format_views("1234567"), "1.2M views");
        assert_eq!(format_views("1400000000"), "1.4B views");
        assert_eq!(format_views("12345"), "12.3K views");
        assert_eq!(format_views("999"), "999 views");
        assert_eq!(format_views("not-a-number"), "0 views");
    }
}
