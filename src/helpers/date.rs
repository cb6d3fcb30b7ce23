//! Date helper functions

use chrono::{DateTime, TimeZone, Utc};

/// Format a date using a chrono format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "%B %-d, %Y") // -> "March 15, 2024"
/// ```
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, format: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format(format).to_string()
}

/// Format a date in ISO 8601 / RFC 3339 form
pub fn date_xml<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}

/// Get relative time (like "2 hours ago") measured from `now`
pub fn relative_date(date: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(*date);

    if duration.num_seconds() < 0 {
        return "in the future".to_string();
    }

    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if minutes < 1 {
        "just now".to_string()
    } else if minutes == 1 {
        "a minute ago".to_string()
    } else if minutes < 60 {
        format!("{} minutes ago", minutes)
    } else if hours == 1 {
        "an hour ago".to_string()
    } else if hours < 24 {
        format!("{} hours ago", hours)
    } else if days == 1 {
        "yesterday".to_string()
    } else if days < 30 {
        format!("{} days ago", days)
    } else if days < 365 {
        let months = days / 30;
        if months == 1 {
            "a month ago".to_string()
        } else {
            format!("{} months ago", months)
        }
    } else {
        let years = days / 365;
        if years == 1 {
            "a year ago".to_string()
        } else {
            format!("{} years ago", years)
        }
    }
}

/// Generate a <time> HTML element
pub fn time_tag<Tz: TimeZone>(date: &DateTime<Tz>, format: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        r#"<time datetime="{}">{}</time>"#,
        date_xml(date),
        format_date(date, format)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2024, 3, 5, 10, 30, 0).unwrap();
        assert_eq!(format_date(&date, "%Y-%m-%d"), "2024-03-05");
        assert_eq!(format_date(&date, "%B %-d, %Y"), "March 5, 2024");
    }

    #[test]
    fn test_relative_date() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let earlier = |h: i64| now - chrono::Duration::hours(h);
        assert_eq!(relative_date(&now, &now), "just now");
        assert_eq!(relative_date(&earlier(3), &now), "3 hours ago");
        assert_eq!(relative_date(&earlier(24), &now), "yesterday");
        assert_eq!(relative_date(&earlier(24 * 400), &now), "a year ago");
        assert_eq!(relative_date(&earlier(-1), &now), "in the future");
    }

    #[test]
    fn test_time_tag() {
        let date = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        assert_eq!(
            time_tag(&date, "%Y"),
            r#"<time datetime="2024-03-15T00:00:00+00:00">2024</time>"#
        );
    }
}
