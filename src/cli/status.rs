use chrono::FixedOffset;
use serde::Serialize;

use crate::{
    scoring::{
        messages::ENCOURAGEMENTS,
        picker::{pick_from, MessagePicker},
    },
    utils::{
        clock::Clock,
        time::{hours_and_minutes, time_left_in_day},
    },
};

/// What the `status` command shows: the clock in the configured zone, how much of the day is left
/// and a random encouragement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    pub local_time: String,
    pub utc_offset: String,
    pub hours_left: i64,
    pub minutes_left: i64,
    pub encouragement: &'static str,
}

pub fn current_status(
    clock: &dyn Clock,
    timezone: FixedOffset,
    picker: &mut dyn MessagePicker,
) -> Status {
    let now = clock.time().with_timezone(&timezone);
    let (hours_left, minutes_left) = hours_and_minutes(time_left_in_day(now));
    Status {
        local_time: now.format("%Y-%m-%d %H:%M").to_string(),
        utc_offset: timezone.to_string(),
        hours_left,
        minutes_left,
        encouragement: pick_from(picker, &ENCOURAGEMENTS),
    }
}
