//! Per-type workout generators.
//!
//! Each generator is a pure function of `(week, total_weeks, paces)`:
//! - Long runs climb by a fixed weekly increment to a capped peak, then taper
//! - Tempo and interval sessions progress through the peak week, then taper
//! - Easy and recovery runs stay inside a flat distance band
//! - Race day is the full marathon at goal pace
//!
//! Duration is always `distance × pace`, rounded to the nearest minute.

use crate::pace::PaceTable;
use crate::{Error, IntervalRep, Pace, Result, WorkoutType, MARATHON_DISTANCE_KM};

const LONG_RUN_BASE_KM: f64 = 8.0;
const LONG_RUN_INCREMENT_KM: f64 = 1.2;
const LONG_RUN_PEAK_KM: f64 = 32.0;

/// Weeks between the peak week and race week
const TAPER_WEEKS: u32 = 3;
/// Fraction of peak volume left by race week
const TAPER_FLOOR: f64 = 0.6;

const TEMPO_BASE_KM: f64 = 4.0;
const TEMPO_INCREMENT_KM: f64 = 0.5;
const TEMPO_MAX_KM: f64 = 10.0;
const WARM_UP_KM: f64 = 1.5;
const COOL_DOWN_KM: f64 = 1.5;

const INTERVAL_REP_KM: f64 = 0.8;
const INTERVAL_MIN_REPS: u32 = 4;
const INTERVAL_MAX_REPS: u32 = 8;
const INTERVAL_REST_SECONDS: u32 = 90;

const EASY_MIN_KM: f64 = 5.0;
const EASY_MAX_KM: f64 = 8.0;
const RECOVERY_FACTOR: f64 = 0.75;

/// Computed metrics for one workout, before it is placed on a date
#[derive(Clone, Debug, PartialEq)]
pub struct WorkoutMetrics {
    pub name: String,
    pub description: String,
    pub distance_km: f64,
    pub duration_minutes: u32,
    pub target_pace: Pace,
    pub intervals: Option<Vec<IntervalRep>>,
}

impl WorkoutMetrics {
    fn new(
        workout_type: WorkoutType,
        description: String,
        distance_km: f64,
        target_pace: Pace,
    ) -> Self {
        Self {
            name: workout_type.display_name().to_string(),
            description,
            distance_km,
            duration_minutes: target_pace.minutes_for(distance_km),
            target_pace,
            intervals: None,
        }
    }

    fn check(&self, workout_type: WorkoutType, week: u32) -> Result<()> {
        if !self.distance_km.is_finite() || self.distance_km < 0.0 {
            return Err(Error::Computation(format!(
                "{} in week {} produced invalid distance {}",
                workout_type, week, self.distance_km
            )));
        }
        let pace = self.target_pace.seconds_per_km();
        if !pace.is_finite() || pace <= 0.0 {
            return Err(Error::Computation(format!(
                "{} in week {} produced invalid pace {}",
                workout_type, week, pace
            )));
        }
        Ok(())
    }
}

/// Generate metrics for a workout type in a given week
pub fn generate(
    workout_type: WorkoutType,
    week: u32,
    total_weeks: u32,
    paces: &PaceTable,
) -> Result<WorkoutMetrics> {
    let metrics = match workout_type {
        WorkoutType::LongRun => long_run(week, total_weeks, paces),
        WorkoutType::TempoRun => tempo_run(week, total_weeks, paces),
        WorkoutType::IntervalSet => interval_set(week, total_weeks, paces),
        WorkoutType::EasyRun => easy_run(week, total_weeks, paces),
        WorkoutType::RecoveryRun => recovery_run(week, total_weeks, paces),
        WorkoutType::RaceDay => race_day(paces),
    };

    metrics.check(workout_type, week)?;

    tracing::debug!(
        "Week {}: {} {:.1} km in {} min",
        week,
        workout_type,
        metrics.distance_km,
        metrics.duration_minutes
    );

    Ok(metrics)
}

// ============================================================================
// Progression Curves
// ============================================================================

/// Week in which long-run volume peaks before the taper begins
pub fn peak_week(total_weeks: u32) -> u32 {
    total_weeks.saturating_sub(TAPER_WEEKS).max(1)
}

/// Share of peak volume kept in `week`: 1.0 up to the peak week, then a
/// linear decline to 60% by race week
pub fn taper_factor(week: u32, total_weeks: u32) -> f64 {
    let peak = peak_week(total_weeks);
    if week <= peak || total_weeks <= peak {
        return 1.0;
    }
    let progress = f64::from(week.min(total_weeks) - peak) / f64::from(total_weeks - peak);
    1.0 - (1.0 - TAPER_FLOOR) * progress
}

/// Fraction of the way from week 1 to the peak week, in `[0, 1]`
fn build_progress(week: u32, total_weeks: u32) -> f64 {
    let peak = peak_week(total_weeks);
    if peak <= 1 {
        return 1.0;
    }
    f64::from(week.clamp(1, peak) - 1) / f64::from(peak - 1)
}

fn round_tenth(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}

fn round_half(km: f64) -> f64 {
    (km * 2.0).round() / 2.0
}

/// Long-run distance: `8 + 1.2 × (week − 1)` capped at 32 km through the
/// peak week, then tapering to 60% of the distance reached at the peak
pub fn long_run_distance_km(week: u32, total_weeks: u32) -> f64 {
    let week = week.max(1);
    let peak = peak_week(total_weeks);
    let build = |w: u32| {
        (LONG_RUN_BASE_KM + LONG_RUN_INCREMENT_KM * f64::from(w - 1)).min(LONG_RUN_PEAK_KM)
    };

    let distance = if week <= peak {
        build(week)
    } else {
        build(peak) * taper_factor(week, total_weeks)
    };

    round_tenth(distance)
}

/// Distance of the tempo segment alone, excluding warm-up and cool-down
pub fn tempo_segment_km(week: u32, total_weeks: u32) -> f64 {
    let at = |w: u32| (TEMPO_BASE_KM + TEMPO_INCREMENT_KM * f64::from(w)).min(TEMPO_MAX_KM);
    let peak = peak_week(total_weeks);

    if week <= peak {
        at(week)
    } else {
        round_tenth(at(peak) * taper_factor(week, total_weeks))
    }
}

/// Number of 800m repeats: 4 in week 1 rising to 8 by the peak week
pub fn interval_repeats(week: u32, total_weeks: u32) -> u32 {
    let span = f64::from(INTERVAL_MAX_REPS - INTERVAL_MIN_REPS);
    let at_peak = INTERVAL_MIN_REPS + (span * build_progress(week, total_weeks)).round() as u32;

    if week <= peak_week(total_weeks) {
        at_peak
    } else {
        let tapered = (f64::from(at_peak) * taper_factor(week, total_weeks)).round() as u32;
        tapered.max(INTERVAL_MIN_REPS)
    }
}

/// Easy-run distance inside the 5–8 km band; race week gets the minimum
pub fn easy_run_distance_km(week: u32, total_weeks: u32) -> f64 {
    if total_weeks > 1 && week >= total_weeks {
        return EASY_MIN_KM;
    }
    round_half(EASY_MIN_KM + (EASY_MAX_KM - EASY_MIN_KM) * build_progress(week, total_weeks))
}

/// Recovery-run distance, never longer than the same week's easy run
pub fn recovery_run_distance_km(week: u32, total_weeks: u32) -> f64 {
    let easy = easy_run_distance_km(week, total_weeks);
    round_half(easy * RECOVERY_FACTOR).min(easy)
}

// ============================================================================
// Generators
// ============================================================================

fn long_run(week: u32, total_weeks: u32, paces: &PaceTable) -> WorkoutMetrics {
    let distance = long_run_distance_km(week, total_weeks);
    let description = if week > peak_week(total_weeks) {
        format!(
            "Taper long run: {:.1} km at a relaxed pace between easy and marathon effort.",
            distance
        )
    } else {
        format!(
            "Long run: {:.1} km steady, between easy and marathon effort. Practise race fuelling.",
            distance
        )
    };

    WorkoutMetrics::new(WorkoutType::LongRun, description, distance, paces.long_run())
}

fn tempo_run(week: u32, total_weeks: u32, paces: &PaceTable) -> WorkoutMetrics {
    let tempo = tempo_segment_km(week, total_weeks);
    let total = round_tenth(tempo + WARM_UP_KM + COOL_DOWN_KM);
    let description = format!(
        "Warm up {:.1} km easy, then {:.1} km at tempo pace (comfortably hard), cool down {:.1} km easy.",
        WARM_UP_KM, tempo, COOL_DOWN_KM
    );

    WorkoutMetrics::new(WorkoutType::TempoRun, description, total, paces.tempo)
}

fn interval_set(week: u32, total_weeks: u32, paces: &PaceTable) -> WorkoutMetrics {
    let repeats = interval_repeats(week, total_weeks);
    let total = round_tenth(f64::from(repeats) * INTERVAL_REP_KM + WARM_UP_KM + COOL_DOWN_KM);
    let description = format!(
        "Warm up {:.1} km easy, then {} x 800m at interval pace with {}s recovery jog, cool down {:.1} km easy.",
        WARM_UP_KM, repeats, INTERVAL_REST_SECONDS, COOL_DOWN_KM
    );

    let reps = (0..repeats)
        .map(|_| IntervalRep {
            distance_km: INTERVAL_REP_KM,
            pace: paces.interval,
            rest_seconds: INTERVAL_REST_SECONDS,
        })
        .collect();

    let mut metrics =
        WorkoutMetrics::new(WorkoutType::IntervalSet, description, total, paces.interval);
    metrics.intervals = Some(reps);
    metrics
}

fn easy_run(week: u32, total_weeks: u32, paces: &PaceTable) -> WorkoutMetrics {
    let distance = easy_run_distance_km(week, total_weeks);
    let description = if total_weeks > 1 && week >= total_weeks {
        format!("Shake-out run: {:.1} km very relaxed. Stay fresh for race day.", distance)
    } else {
        format!("Easy run: {:.1} km at conversational pace.", distance)
    };

    WorkoutMetrics::new(WorkoutType::EasyRun, description, distance, paces.easy)
}

fn recovery_run(week: u32, total_weeks: u32, paces: &PaceTable) -> WorkoutMetrics {
    let distance = recovery_run_distance_km(week, total_weeks);
    let description = format!(
        "Recovery run: {:.1} km very easy. Keep the effort light.",
        distance
    );

    WorkoutMetrics::new(WorkoutType::RecoveryRun, description, distance, paces.recovery)
}

fn race_day(paces: &PaceTable) -> WorkoutMetrics {
    let description = format!(
        "Race day: {} km at goal marathon pace. Start controlled and run even splits.",
        MARATHON_DISTANCE_KM
    );

    WorkoutMetrics::new(
        WorkoutType::RaceDay,
        description,
        MARATHON_DISTANCE_KM,
        paces.marathon,
    )
}
