use chrono::{DateTime, Utc};

/// Human-readable distance between `then` and `now`, e.g. `"5 minutes ago"`.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();
    let distance = distance_in_words(seconds.unsigned_abs());

    if seconds >= 0 {
        format!("{} ago", distance)
    } else {
        format!("in {}", distance)
    }
}

fn distance_in_words(seconds: u64) -> String {
    const MINUTE: u64 = 60;
    const HOUR: u64 = 60 * MINUTE;
    const DAY: u64 = 24 * HOUR;
    const MONTH: u64 = 30 * DAY;
    const YEAR: u64 = 365 * DAY;

    let plural = |n: u64, unit: &str| {
        if n == 1 {
            format!("1 {}", unit)
        } else {
            format!("{} {}s", n, unit)
        }
    };

    match seconds {
        s if s < 30 => "less than a minute".to_string(),
        s if s < 45 * MINUTE => plural(((s + 30) / MINUTE).max(1), "minute"),
        s if s < DAY => format!("about {}", plural(((s + HOUR / 2) / HOUR).max(1), "hour")),
        s if s < MONTH => plural(((s + DAY / 2) / DAY).max(1), "day"),
        s if s < YEAR => format!("about {}", plural(((s + MONTH / 2) / MONTH).max(1), "month")),
        s => format!("about {}", plural(s / YEAR, "year")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn ago(seconds: i64) -> String {
        let now = Utc::now();
        relative_time(now - Duration::seconds(seconds), now)
    }

    #[test]
    fn formats_common_distances() {
        assert_eq!(ago(5), "less than a minute ago");
        assert_eq!(ago(60), "1 minute ago");
        assert_eq!(ago(5 * 60), "5 minutes ago");
        assert_eq!(ago(2 * 3600), "about 2 hours ago");
        assert_eq!(ago(3 * 86_400), "3 days ago");
        assert_eq!(ago(400 * 86_400), "about 1 year ago");
    }

    #[test]
    fn future_timestamps_read_forward() {
        assert_eq!(ago(-5 * 60), "in 5 minutes");
    }
}
