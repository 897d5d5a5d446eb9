use chrono::{DateTime, Duration, TimeZone};
use now::DateTimeNow;

/// Time remaining until 23:59:59 of the day `date` falls in, in its own timezone.
pub fn time_left_in_day<Tz: TimeZone>(date: DateTime<Tz>) -> Duration {
    let end = date.beginning_of_day() + Duration::days(1) - Duration::seconds(1);
    end - date
}

/// Whole hours and the leftover minutes of a duration, both rounded down.
pub fn hours_and_minutes(duration: Duration) -> (i64, i64) {
    (duration.num_hours(), duration.num_minutes() % 60)
}
