//! Placement of a week's workout types onto training days.
//!
//! Rules, in priority order:
//! 1. The hardest session goes on the latest training day
//! 2. Other hard sessions go as far as possible from already placed hard
//!    sessions, so back-to-back hard days only happen when unavoidable
//! 3. Easy and recovery runs fill the remaining days in planner order

use crate::dates::day_gap;
use crate::{DayOfWeek, Error, Result, WorkoutType};
use std::collections::BTreeMap;

/// Assign each workout type to one of `workout_days`
///
/// Fails with a constraint violation if the counts differ, which means the
/// planner emitted the wrong number of workouts for the week.
pub fn assign(
    week_workout_types: &[WorkoutType],
    workout_days: &[DayOfWeek],
) -> Result<BTreeMap<DayOfWeek, WorkoutType>> {
    if week_workout_types.len() != workout_days.len() {
        return Err(Error::ConstraintViolation(format!(
            "{} workouts planned for {} training days",
            week_workout_types.len(),
            workout_days.len()
        )));
    }

    let mut free: Vec<DayOfWeek> = workout_days.to_vec();
    free.sort_unstable();
    free.dedup();
    if free.len() != workout_days.len() {
        return Err(Error::ConstraintViolation(format!(
            "duplicate training days in {:?}",
            workout_days
        )));
    }

    let mut assigned = BTreeMap::new();

    // Rule 1: hardest session on the latest day (first one wins ties)
    let anchor_idx = week_workout_types
        .iter()
        .enumerate()
        .max_by_key(|(i, t)| (t.intensity_rank(), std::cmp::Reverse(*i)))
        .map(|(i, _)| i);

    let Some(anchor_idx) = anchor_idx else {
        return Ok(assigned);
    };
    let Some(latest) = free.pop() else {
        return Ok(assigned);
    };
    let anchor = week_workout_types[anchor_idx];
    assigned.insert(latest, anchor);

    let mut hard_days: Vec<DayOfWeek> = if anchor.is_hard() {
        vec![latest]
    } else {
        vec![]
    };

    let rest = week_workout_types
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != anchor_idx)
        .map(|(_, t)| *t);
    let (hard, easy): (Vec<WorkoutType>, Vec<WorkoutType>) = rest.partition(|t| t.is_hard());

    // Rule 2: spread the remaining hard sessions
    for workout_type in hard {
        let Some(day) = furthest_from(&free, &hard_days) else {
            break;
        };
        free.retain(|d| *d != day);
        hard_days.push(day);
        assigned.insert(day, workout_type);

        if hard_days
            .iter()
            .any(|other| *other != day && day_gap(*other, day) <= 1)
        {
            tracing::debug!(
                "{} on day {} sits next to another hard session; no other slot available",
                workout_type,
                day
            );
        }
    }

    // Rule 3: fill the rest in order
    for (day, workout_type) in free.into_iter().zip(easy) {
        assigned.insert(day, workout_type);
    }

    Ok(assigned)
}

/// Free day whose nearest hard session is furthest away; earliest day on ties
fn furthest_from(free: &[DayOfWeek], hard_days: &[DayOfWeek]) -> Option<DayOfWeek> {
    let nearest = |day: DayOfWeek| {
        hard_days
            .iter()
            .map(|h| day_gap(day, *h))
            .min()
            .unwrap_or(u8::MAX)
    };

    free.iter()
        .copied()
        .reduce(|best, day| if nearest(day) > nearest(best) { day } else { best })
}
