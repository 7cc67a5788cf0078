//! Calendar resolution for plan weeks and days.
//!
//! Plans are laid out on calendar weeks (Monday = 1 .. Sunday = 7). Week
//! `total_weeks` is the week containing the race.

use crate::DayOfWeek;
use chrono::{Datelike, Duration, NaiveDate};

/// Start date `total_weeks` whole weeks before the race
pub fn start_date_from_race(race_date: NaiveDate, total_weeks: u32) -> NaiveDate {
    race_date - Duration::days(i64::from(total_weeks) * 7)
}

/// Date of `day_of_week` in plan week `week`, counted from `start_date`
pub fn scheduled_date(start_date: NaiveDate, week: u32, day_of_week: DayOfWeek) -> NaiveDate {
    let offset = i64::from(week.saturating_sub(1)) * 7 + i64::from(day_of_week.saturating_sub(1));
    start_date + Duration::days(offset)
}

/// ISO day of week for a date
pub fn day_of_week(date: NaiveDate) -> DayOfWeek {
    date.weekday().number_from_monday() as DayOfWeek
}

/// Monday of the calendar week containing `date`
pub fn week_monday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Number of whole calendar weeks from `start_date` through the race week
///
/// Week 1 is the first full calendar week beginning on or after the start,
/// so no workout is ever scheduled before `start_date`. `None` when the start
/// falls after the race week's Monday.
pub fn total_weeks_between(start_date: NaiveDate, race_date: NaiveDate) -> Option<u32> {
    let days = (week_monday(race_date) - start_date).num_days();
    if days < 0 {
        return None;
    }
    u32::try_from(days / 7 + 1).ok()
}

/// Monday of plan week 1 for a plan ending in the race week
pub fn plan_start(race_date: NaiveDate, total_weeks: u32) -> NaiveDate {
    week_monday(race_date) - Duration::days(i64::from(total_weeks.saturating_sub(1)) * 7)
}

/// Days between two weekdays going the shorter way round the week
/// (Sunday and Monday are one day apart)
pub fn day_gap(a: DayOfWeek, b: DayOfWeek) -> u8 {
    let forward = (i16::from(a) - i16::from(b)).rem_euclid(7) as u8;
    forward.min(7 - forward)
}
