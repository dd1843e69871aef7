use chrono::Duration;

/// Render an age as "2 hours ago", "1 minute ago", "just now"
pub fn format_relative_age(age: Duration) -> String {
    let (value, unit) = if age.num_days() > 0 {
        (age.num_days(), "day")
    } else if age.num_hours() > 0 {
        (age.num_hours(), "hour")
    } else if age.num_minutes() > 0 {
        (age.num_minutes(), "minute")
    } else {
        return "just now".to_string();
    };
    let plural = if value == 1 { "" } else { "s" };
    format!("{} {}{} ago", value, unit, plural)
}
