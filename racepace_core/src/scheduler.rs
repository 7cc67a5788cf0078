//! Plan generation: composes pacing, periodization, rest days, assignment,
//! workout generation and date resolution into one scheduled plan.
//!
//! Generation is a pure function of the configuration. The same input always
//! yields the same plan, including ids and dates.

use crate::assignment::assign;
use crate::dates::{
    day_of_week, plan_start, scheduled_date, total_weeks_between, week_monday,
};
use crate::pace::PaceTable;
use crate::periodization::PeriodizationPlanner;
use crate::workouts::generate;
use crate::{
    rest_days, DayOfWeek, Error, Result, ScheduledTrainingPlan, ScheduledWorkout,
    TrainingPlanConfig, WorkoutType, MAX_TOTAL_WEEKS, MAX_WORKOUT_DAYS, MIN_WORKOUT_DAYS,
};
use chrono::NaiveDate;

/// Plan length used when the configuration has no start date
pub const DEFAULT_TOTAL_WEEKS: u32 = 14;

/// Tunables that are not part of the per-plan configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchedulerSettings {
    pub default_total_weeks: u32,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            default_total_weeks: DEFAULT_TOTAL_WEEKS,
        }
    }
}

/// Stateless plan generator
#[derive(Clone, Debug, Default)]
pub struct TrainingScheduler {
    settings: SchedulerSettings,
}

impl TrainingScheduler {
    pub fn new(settings: SchedulerSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &SchedulerSettings {
        &self.settings
    }

    /// Generate the full dated plan for `config`
    ///
    /// ## Pipeline
    ///
    /// 1. Validate the configuration (no partial work on bad input)
    /// 2. Resolve the effective training days against rest days
    /// 3. Pick the race-week days around the race weekday
    /// 4. For each week: plan types → assign days → generate metrics → stamp dates
    pub fn generate(&self, config: &TrainingPlanConfig) -> Result<ScheduledTrainingPlan> {
        validate_config(config, &self.settings)?;
        let paces = PaceTable::from_goal_time(&config.goal_finish_time)?;
        let total_weeks = resolve_total_weeks(config, &self.settings)?;

        let training_days = effective_training_days(config)?;
        let race_dow = day_of_week(config.race_date);
        let race_week = race_week_days(
            &training_days,
            race_dow,
            config.preferences.rest_days(),
            total_weeks,
        )?;

        let grid = PlanGrid {
            start_date: plan_start(config.race_date, total_weeks),
            total_weeks,
            paces,
        };
        let planner = PeriodizationPlanner::new(total_weeks);

        tracing::info!(
            "Generating {}-week plan from {} to {} on days {:?} (race week {:?}, carried {:?})",
            total_weeks,
            grid.start_date,
            config.race_date,
            training_days,
            race_week.days,
            race_week.carried
        );

        // Race day and in-week shake-outs first; the rest go to carried days
        let race_types = planner.workout_types(total_weeks, training_days.len());
        let (race_types, carried_types) = race_types.split_at(race_week.days.len());

        let mut workouts = Vec::with_capacity(total_weeks as usize * training_days.len());

        for week in 1..=total_weeks {
            let assigned = if week == total_weeks {
                assign(race_types, &race_week.days)?
            } else {
                let types = planner.workout_types(week, training_days.len());
                assign(&types, &training_days)?
            };

            let mut week_workouts = Vec::with_capacity(assigned.len() + race_week.carried.len());
            for (day, workout_type) in assigned {
                week_workouts.push(grid.workout(week, day, workout_type, week)?);
            }

            if week + 1 == total_weeks && !race_week.carried.is_empty() {
                for (day, workout_type) in race_week.carried.iter().zip(carried_types) {
                    week_workouts.push(grid.workout(week, *day, *workout_type, total_weeks)?);
                }
                week_workouts.sort_by_key(|w| w.day_of_week);
            }

            workouts.extend(week_workouts);
        }

        check_race_day(&workouts, config)?;

        let plan = ScheduledTrainingPlan {
            workouts,
            start_date: grid.start_date,
            end_date: config.race_date,
            total_weeks,
        };

        tracing::info!(
            "Generated {} workouts, {:.1} km total",
            plan.workouts.len(),
            plan.total_distance_km()
        );

        Ok(plan)
    }
}

/// Calendar layout shared by every workout of one plan
struct PlanGrid {
    start_date: NaiveDate,
    total_weeks: u32,
    paces: PaceTable,
}

impl PlanGrid {
    /// Workout dated in calendar week `week`, sized as a workout of `load_week`
    fn workout(
        &self,
        week: u32,
        day: DayOfWeek,
        workout_type: WorkoutType,
        load_week: u32,
    ) -> Result<ScheduledWorkout> {
        let metrics = generate(workout_type, load_week, self.total_weeks, &self.paces)?;
        Ok(ScheduledWorkout {
            id: ScheduledWorkout::make_id(week, day),
            week,
            day_of_week: day,
            workout_type,
            name: metrics.name,
            description: metrics.description,
            distance_km: metrics.distance_km,
            duration_minutes: metrics.duration_minutes,
            target_pace: metrics.target_pace,
            intervals: metrics.intervals,
            scheduled_date: scheduled_date(self.start_date, week, day),
        })
    }
}

/// Generate a plan with default settings
pub fn generate_plan(config: &TrainingPlanConfig) -> Result<ScheduledTrainingPlan> {
    TrainingScheduler::default().generate(config)
}

/// Reject malformed input before any computation
pub fn validate_config(config: &TrainingPlanConfig, settings: &SchedulerSettings) -> Result<()> {
    crate::pace::parse_goal_time(&config.goal_finish_time)?;
    validate_days(&config.workout_days_of_week, config.preferences.rest_days())?;

    if let Some(start) = config.start_date {
        if start >= config.race_date {
            return Err(Error::ConfigValidation(format!(
                "start date {} must be before race date {}",
                start, config.race_date
            )));
        }
    }

    resolve_total_weeks(config, settings).map(|_| ())
}

/// Check a training-day selection and rest days: 3-4 distinct days, all 1-7
pub fn validate_days(workout_days: &[DayOfWeek], rest_days: &[DayOfWeek]) -> Result<()> {
    if workout_days.len() < MIN_WORKOUT_DAYS || workout_days.len() > MAX_WORKOUT_DAYS {
        return Err(Error::ConfigValidation(format!(
            "{} workout days selected; choose between {} and {}",
            workout_days.len(),
            MIN_WORKOUT_DAYS,
            MAX_WORKOUT_DAYS
        )));
    }

    check_day_values("workout day", workout_days)?;
    for (i, day) in workout_days.iter().enumerate() {
        if workout_days[..i].contains(day) {
            return Err(Error::ConfigValidation(format!(
                "workout day {} selected more than once",
                day
            )));
        }
    }

    check_day_values("rest day", rest_days)
}

/// Plan length from the start date, or the configured default without one
fn resolve_total_weeks(config: &TrainingPlanConfig, settings: &SchedulerSettings) -> Result<u32> {
    let total_weeks = match config.start_date {
        Some(start) => total_weeks_between(start, config.race_date).ok_or_else(|| {
            Error::ConfigValidation(format!(
                "start date {} leaves no full race week; start on or before {}",
                start,
                week_monday(config.race_date)
            ))
        })?,
        None => settings.default_total_weeks,
    };

    if total_weeks == 0 || total_weeks > MAX_TOTAL_WEEKS {
        return Err(Error::ConfigValidation(format!(
            "plan length of {} weeks is outside 1-{}",
            total_weeks, MAX_TOTAL_WEEKS
        )));
    }

    Ok(total_weeks)
}

fn check_day_values(label: &str, days: &[DayOfWeek]) -> Result<()> {
    match days.iter().find(|d| !(1..=7).contains(*d)) {
        Some(day) => Err(Error::ConfigValidation(format!(
            "{} {} is out of range 1-7 (Monday = 1)",
            label, day
        ))),
        None => Ok(()),
    }
}

/// Training days after applying rest-day preferences, ascending
fn effective_training_days(config: &TrainingPlanConfig) -> Result<Vec<DayOfWeek>> {
    let prefs = &config.preferences;
    let analysis = rest_days::validate(
        &config.workout_days_of_week,
        prefs.rest_days(),
        prefs.enforces_rest_days(),
    );

    let mut days = if analysis.is_valid {
        config.workout_days_of_week.clone()
    } else if let Some(suggestion) = analysis.suggestions.first() {
        tracing::warn!(
            "Training days {:?} clash with rest days {:?}; using {:?} instead",
            config.workout_days_of_week,
            analysis.conflicts,
            suggestion
        );
        suggestion.clone()
    } else {
        return Err(Error::ConstraintViolation(format!(
            "training days {:?} conflict with enforced rest days on {:?} and no alternative exists",
            config.workout_days_of_week, analysis.conflicts
        )));
    };

    days.sort_unstable();
    Ok(days)
}

/// Race-week slots
#[derive(Debug, PartialEq, Eq)]
struct RaceWeek {
    /// Days in the race's own calendar week, race day last
    days: Vec<DayOfWeek>,
    /// Shake-out days carried back into the week before, latest first
    carried: Vec<DayOfWeek>,
}

/// Days used in the race week: the race weekday plus the latest training
/// days before it
///
/// If too few training days precede the race, the latest free non-rest days
/// before it are borrowed for shake-out runs. A race early in the week
/// carries the remaining shake-outs onto free days at the end of the
/// previous week.
fn race_week_days(
    training_days: &[DayOfWeek],
    race_dow: DayOfWeek,
    rest_days: &[DayOfWeek],
    total_weeks: u32,
) -> Result<RaceWeek> {
    let needed = training_days.len().saturating_sub(1);
    let is_free = |day: &DayOfWeek| !training_days.contains(day) && !rest_days.contains(day);

    let mut before: Vec<DayOfWeek> = training_days
        .iter()
        .copied()
        .filter(|d| *d < race_dow)
        .collect();
    let mut days = before.split_off(before.len().saturating_sub(needed));

    for borrowed in (1..race_dow).rev().filter(is_free) {
        if days.len() >= needed {
            break;
        }
        tracing::warn!(
            "Race week borrows day {} for a shake-out run before race day {}",
            borrowed,
            race_dow
        );
        days.push(borrowed);
    }

    let mut carried = Vec::new();
    if total_weeks > 1 {
        for day in (1..=7).rev().filter(is_free) {
            if days.len() + carried.len() >= needed {
                break;
            }
            tracing::warn!(
                "Race on day {} carries a shake-out run back to day {} of the previous week",
                race_dow,
                day
            );
            carried.push(day);
        }
    }

    if days.len() + carried.len() < needed {
        return Err(Error::ConstraintViolation(format!(
            "race on day {} leaves room for only {} of {} training days in race week",
            race_dow,
            days.len() + carried.len() + 1,
            training_days.len()
        )));
    }

    days.push(race_dow);
    days.sort_unstable();
    Ok(RaceWeek { days, carried })
}

fn check_race_day(workouts: &[ScheduledWorkout], config: &TrainingPlanConfig) -> Result<()> {
    match workouts.last() {
        Some(last)
            if last.workout_type == WorkoutType::RaceDay
                && last.scheduled_date == config.race_date =>
        {
            Ok(())
        }
        Some(last) => Err(Error::Computation(format!(
            "final workout {} ({}) on {} does not match race date {}",
            last.id, last.workout_type, last.scheduled_date, config.race_date
        ))),
        None => Err(Error::Computation("plan contains no workouts".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Preferences;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_config() -> TrainingPlanConfig {
        TrainingPlanConfig {
            start_date: None,
            race_date: date(2024, 6, 1),
            goal_finish_time: "3:30:00".into(),
            workout_days_of_week: vec![1, 3, 6],
            preferences: Preferences::default(),
        }
    }

    #[test]
    fn test_workout_count_matches_weeks_times_days() {
        let plan = generate_plan(&create_test_config()).unwrap();
        assert_eq!(plan.total_weeks, 14);
        assert_eq!(plan.workouts.len(), 14 * 3);
    }

    #[test]
    fn test_workout_count_across_configs() {
        let day_sets: [&[DayOfWeek]; 4] = [&[1, 3, 6], &[2, 4, 7], &[1, 3, 5, 7], &[2, 4, 6, 7]];
        for days in day_sets {
            for weeks in [1, 4, 8, 14, 20, 26] {
                let mut config = create_test_config();
                config.workout_days_of_week = days.to_vec();
                let scheduler = TrainingScheduler::new(SchedulerSettings {
                    default_total_weeks: weeks,
                });
                let plan = scheduler.generate(&config).unwrap();
                assert_eq!(plan.workouts.len(), weeks as usize * days.len());
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let config = create_test_config();
        let a = generate_plan(&config).unwrap();
        let b = generate_plan(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_ids_unique_and_ordered() {
        let plan = generate_plan(&create_test_config()).unwrap();
        let ids: HashSet<_> = plan.workouts.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids.len(), plan.workouts.len());

        for pair in plan.workouts.windows(2) {
            assert!((pair[0].week, pair[0].day_of_week) < (pair[1].week, pair[1].day_of_week));
            assert!(pair[0].scheduled_date < pair[1].scheduled_date);
        }
        assert_eq!(plan.workouts[0].id, "1-1");
    }

    #[test]
    fn test_race_day_lands_on_race_date() {
        let plan = generate_plan(&create_test_config()).unwrap();
        let last = plan.workouts.last().unwrap();

        assert_eq!(last.workout_type, WorkoutType::RaceDay);
        assert_eq!(last.scheduled_date, date(2024, 6, 1));
        assert_eq!(last.id, "14-6");
        assert_eq!(plan.end_date, date(2024, 6, 1));
        assert_eq!(plan.start_date, date(2024, 2, 26));
        assert_eq!(
            plan.workouts
                .iter()
                .filter(|w| w.workout_type == WorkoutType::RaceDay)
                .count(),
            1
        );
    }

    #[test]
    fn test_dates_match_day_of_week() {
        let plan = generate_plan(&create_test_config()).unwrap();
        for workout in &plan.workouts {
            assert_eq!(day_of_week(workout.scheduled_date), workout.day_of_week);
        }
    }

    #[test]
    fn test_start_date_sets_total_weeks() {
        let mut config = create_test_config();
        config.start_date = Some(date(2024, 3, 4));
        let plan = generate_plan(&config).unwrap();

        assert_eq!(plan.total_weeks, 13);
        assert_eq!(plan.start_date, date(2024, 3, 4));
        assert!(plan.workouts[0].scheduled_date >= date(2024, 3, 4));
    }

    #[test]
    fn test_long_run_on_saturday_in_training_weeks() {
        let plan = generate_plan(&create_test_config()).unwrap();
        for week in 1..14 {
            let saturday = plan
                .workouts_for_week(week)
                .find(|w| w.day_of_week == 6)
                .unwrap();
            assert_eq!(saturday.workout_type, WorkoutType::LongRun);
        }
    }

    #[test]
    fn test_sunday_race_uses_days_before_it() {
        let mut config = create_test_config();
        config.race_date = date(2024, 6, 2);
        let plan = generate_plan(&config).unwrap();

        let race_week: Vec<_> = plan.workouts_for_week(14).map(|w| w.day_of_week).collect();
        assert_eq!(race_week, vec![3, 6, 7]);
        assert_eq!(plan.workouts.len(), 42);
    }

    #[test]
    fn test_race_week_borrows_free_day() {
        let mut config = create_test_config();
        config.workout_days_of_week = vec![1, 3, 6, 7];
        let plan = generate_plan(&config).unwrap();

        let race_week: Vec<_> = plan.workouts_for_week(14).map(|w| w.day_of_week).collect();
        assert_eq!(race_week, vec![1, 3, 5, 6]);
    }

    #[test]
    fn test_monday_race_carries_shake_outs_to_previous_week() {
        let mut config = create_test_config();
        config.race_date = date(2024, 6, 3);
        let plan = generate_plan(&config).unwrap();

        assert_eq!(plan.workouts.len(), 14 * 3);

        let race_week: Vec<_> = plan.workouts_for_week(14).map(|w| w.day_of_week).collect();
        assert_eq!(race_week, vec![1]);

        let week_13: Vec<_> = plan
            .workouts_for_week(13)
            .map(|w| (w.day_of_week, w.workout_type))
            .collect();
        assert_eq!(week_13.len(), 5);
        assert_eq!(week_13[2].0, 5);
        assert_eq!(week_13[2].1, WorkoutType::EasyRun);
        assert_eq!(week_13[4].0, 7);
        assert_eq!(week_13[4].1, WorkoutType::EasyRun);

        let ids: HashSet<_> = plan.workouts.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids.len(), plan.workouts.len());
        for pair in plan.workouts.windows(2) {
            assert!(pair[0].scheduled_date < pair[1].scheduled_date);
        }
        for workout in &plan.workouts {
            assert_eq!(day_of_week(workout.scheduled_date), workout.day_of_week);
        }

        let last = plan.workouts.last().unwrap();
        assert_eq!(last.workout_type, WorkoutType::RaceDay);
        assert_eq!(last.scheduled_date, date(2024, 6, 3));
    }

    #[test]
    fn test_tuesday_race_four_days() {
        let mut config = create_test_config();
        config.race_date = date(2024, 6, 4);
        config.workout_days_of_week = vec![2, 4, 6, 7];
        let plan = generate_plan(&config).unwrap();

        assert_eq!(plan.workouts.len(), 14 * 4);
        let race_week: Vec<_> = plan.workouts_for_week(14).map(|w| w.day_of_week).collect();
        assert_eq!(race_week, vec![1, 2]);
        // Friday is the latest free day of the week before
        assert!(plan
            .workouts_for_week(13)
            .any(|w| w.day_of_week == 5 && w.workout_type == WorkoutType::EasyRun));
    }

    #[test]
    fn test_single_week_monday_race_cannot_fit() {
        let mut config = create_test_config();
        config.race_date = date(2024, 6, 3);
        let scheduler = TrainingScheduler::new(SchedulerSettings {
            default_total_weeks: 1,
        });
        let err = scheduler.generate(&config).unwrap_err();
        assert!(matches!(err, Error::ConstraintViolation(_)));
    }

    #[test]
    fn test_monday_race_blocked_by_rest_days() {
        let mut config = create_test_config();
        config.race_date = date(2024, 6, 3);
        config.workout_days_of_week = vec![1, 3, 5, 7];
        config.preferences.preferred_rest_days = Some(vec![2, 4, 6]);
        let err = generate_plan(&config).unwrap_err();
        assert!(matches!(err, Error::ConstraintViolation(_)));
    }

    #[test]
    fn test_start_date_inside_race_week_rejected() {
        let mut config = create_test_config();
        config.start_date = Some(date(2024, 5, 30));
        let err = generate_plan(&config).unwrap_err();
        assert!(matches!(err, Error::ConfigValidation(_)));

        config.start_date = Some(date(2024, 5, 28));
        assert!(matches!(
            generate_plan(&config),
            Err(Error::ConfigValidation(_))
        ));
    }

    #[test]
    fn test_start_date_on_race_week_monday() {
        let mut config = create_test_config();
        config.start_date = Some(date(2024, 5, 27));
        let plan = generate_plan(&config).unwrap();

        assert_eq!(plan.total_weeks, 1);
        assert_eq!(plan.workouts.len(), 3);
        assert!(plan
            .workouts
            .iter()
            .all(|w| w.scheduled_date >= date(2024, 5, 27)));
    }

    #[test]
    fn test_plan_length_bounded() {
        let config = create_test_config();
        for weeks in [0, MAX_TOTAL_WEEKS + 1, 2_000_000_000, u32::MAX] {
            let scheduler = TrainingScheduler::new(SchedulerSettings {
                default_total_weeks: weeks,
            });
            let err = scheduler.generate(&config).unwrap_err();
            assert!(matches!(err, Error::ConfigValidation(_)), "{} weeks", weeks);
        }

        let scheduler = TrainingScheduler::new(SchedulerSettings {
            default_total_weeks: MAX_TOTAL_WEEKS,
        });
        let plan = scheduler.generate(&config).unwrap();
        assert_eq!(plan.total_weeks, MAX_TOTAL_WEEKS);
    }

    #[test]
    fn test_distant_start_date_rejected() {
        let mut config = create_test_config();
        config.start_date = Some(date(1900, 1, 1));
        let err = generate_plan(&config).unwrap_err();
        assert!(matches!(err, Error::ConfigValidation(_)));

        config.start_date = Some(NaiveDate::MIN);
        assert!(matches!(
            generate_plan(&config),
            Err(Error::ConfigValidation(_))
        ));
    }

    #[test]
    fn test_validate_days() {
        assert!(validate_days(&[1, 3, 6], &[7]).is_ok());
        assert!(validate_days(&[1, 3, 5, 7], &[]).is_ok());

        for (days, rest) in [
            (&[1, 2][..], &[2][..]),
            (&[1, 2, 3, 4, 5][..], &[][..]),
            (&[1, 1, 3][..], &[][..]),
            (&[1, 3, 9][..], &[][..]),
            (&[1, 3, 6][..], &[0][..]),
        ] {
            assert!(
                matches!(validate_days(days, rest), Err(Error::ConfigValidation(_))),
                "{:?} / {:?}",
                days,
                rest
            );
        }
    }

    #[test]
    fn test_enforced_rest_day_adopts_suggestion() {
        let mut config = create_test_config();
        config.workout_days_of_week = vec![1, 3, 6, 7];
        config.preferences.preferred_rest_days = Some(vec![7]);
        config.preferences.enforce_rest_days = Some(true);

        let plan = generate_plan(&config).unwrap();
        assert!(plan.workouts.iter().all(|w| w.day_of_week != 7));
        assert_eq!(plan.workouts.len(), 14 * 4);
    }

    #[test]
    fn test_unenforced_rest_day_keeps_days() {
        let mut config = create_test_config();
        config.race_date = date(2024, 6, 2);
        config.workout_days_of_week = vec![1, 3, 6, 7];
        config.preferences.preferred_rest_days = Some(vec![7]);

        let plan = generate_plan(&config).unwrap();
        assert!(plan.workouts_for_week(1).any(|w| w.day_of_week == 7));
    }

    #[test]
    fn test_enforced_rest_days_without_alternative() {
        let mut config = create_test_config();
        config.preferences.preferred_rest_days = Some(vec![2, 3, 4, 5, 6, 7]);
        config.preferences.enforce_rest_days = Some(true);

        let err = generate_plan(&config).unwrap_err();
        assert!(matches!(err, Error::ConstraintViolation(_)));
    }

    #[test]
    fn test_config_validation_errors() {
        let cases: [fn(&mut TrainingPlanConfig); 10] = [
            |c| c.goal_finish_time = "3h30".into(),
            |c| c.goal_finish_time = "0:00:00".into(),
            |c| c.workout_days_of_week = vec![1, 3],
            |c| c.workout_days_of_week = vec![1, 2, 3, 4, 5],
            |c| c.workout_days_of_week = vec![1, 3, 3],
            |c| c.workout_days_of_week = vec![0, 3, 6],
            |c| c.workout_days_of_week = vec![1, 3, 8],
            |c| c.preferences.preferred_rest_days = Some(vec![9]),
            |c| c.start_date = Some(date(2024, 6, 1)),
            |c| c.start_date = Some(date(2024, 7, 1)),
        ];

        for (i, mutate) in cases.iter().enumerate() {
            let mut config = create_test_config();
            mutate(&mut config);
            let err = generate_plan(&config).unwrap_err();
            assert!(
                matches!(err, Error::ConfigValidation(_)),
                "case {} gave {:?}",
                i,
                err
            );
        }
    }

    #[test]
    fn test_tempo_in_build_week() {
        let plan = generate_plan(&create_test_config()).unwrap();
        // Week 7 is an odd build week
        let tempo = plan
            .workouts_for_week(7)
            .find(|w| w.workout_type == WorkoutType::TempoRun)
            .unwrap();
        assert_eq!(tempo.distance_km, 4.0 + 0.5 * 7.0 + 3.0);
        assert_eq!(tempo.day_of_week, 3);
    }

    #[test]
    fn test_no_hard_sessions_in_base_phase() {
        let plan = generate_plan(&create_test_config()).unwrap();
        for week in 1..=5 {
            assert!(plan.workouts_for_week(week).all(|w| !matches!(
                w.workout_type,
                WorkoutType::TempoRun | WorkoutType::IntervalSet
            )));
        }
    }

    #[test]
    fn test_weekly_distance_summary() {
        let plan = generate_plan(&create_test_config()).unwrap();
        let weekly = plan.weekly_distance_km();
        assert_eq!(weekly.len(), 14);
        let sum: f64 = weekly.iter().sum();
        assert!((sum - plan.total_distance_km()).abs() < 1e-6);
    }
}
