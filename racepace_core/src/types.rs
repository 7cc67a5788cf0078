//! Core domain types for the race training planner.
//!
//! This module defines the fundamental types used throughout the system:
//! - Training configuration supplied by the caller
//! - Workout types and the scheduled workouts built from them
//! - The immutable scheduled plan
//! - Rest-day validation results

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Marathon race distance in kilometres
pub const MARATHON_DISTANCE_KM: f64 = 42.195;

/// Fewest training days per week a plan may use
pub const MIN_WORKOUT_DAYS: usize = 3;

/// Most training days per week a plan may use
pub const MAX_WORKOUT_DAYS: usize = 4;

/// Longest plan, in weeks, the scheduler will lay out
pub const MAX_TOTAL_WEEKS: u32 = 52;

/// ISO day of week, Monday = 1 through Sunday = 7
pub type DayOfWeek = u8;

// ============================================================================
// Preferences
// ============================================================================

/// Unit the caller wants distances displayed in
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DistanceUnit {
    Miles,
    #[default]
    Kilometers,
}

/// How paces are rendered for display
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaceFormat {
    /// Minutes and seconds per unit, e.g. `5:24 /km`
    #[default]
    MinSec,
    /// Decimal minutes per unit, e.g. `5.40 min/km`
    Decimal,
}

/// User preferences carried alongside the plan configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub distance_unit: DistanceUnit,

    #[serde(default)]
    pub pace_format: PaceFormat,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_rest_days: Option<Vec<DayOfWeek>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforce_rest_days: Option<bool>,
}

impl Preferences {
    /// Preferred rest days, empty when none were given
    pub fn rest_days(&self) -> &[DayOfWeek] {
        self.preferred_rest_days.as_deref().unwrap_or(&[])
    }

    pub fn enforces_rest_days(&self) -> bool {
        self.enforce_rest_days.unwrap_or(false)
    }
}

/// Caller-owned input to plan generation. Read-only to the engine.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPlanConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    pub race_date: NaiveDate,

    /// Goal finish time as `H:MM:SS`
    pub goal_finish_time: String,

    pub workout_days_of_week: Vec<DayOfWeek>,

    #[serde(default)]
    pub preferences: Preferences,
}

// ============================================================================
// Workout Types
// ============================================================================

/// Closed set of workout kinds the engine can schedule
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WorkoutType {
    EasyRun,
    TempoRun,
    IntervalSet,
    LongRun,
    RecoveryRun,
    RaceDay,
}

impl WorkoutType {
    /// Sessions that must not land on adjacent days when avoidable
    pub fn is_hard(self) -> bool {
        match self {
            WorkoutType::TempoRun
            | WorkoutType::IntervalSet
            | WorkoutType::LongRun
            | WorkoutType::RaceDay => true,
            WorkoutType::EasyRun | WorkoutType::RecoveryRun => false,
        }
    }

    /// Relative stress of the session, higher is harder
    pub fn intensity_rank(self) -> u8 {
        match self {
            WorkoutType::RaceDay => 5,
            WorkoutType::LongRun => 4,
            WorkoutType::TempoRun | WorkoutType::IntervalSet => 3,
            WorkoutType::EasyRun => 2,
            WorkoutType::RecoveryRun => 1,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            WorkoutType::EasyRun => "Easy Run",
            WorkoutType::TempoRun => "Tempo Run",
            WorkoutType::IntervalSet => "Interval Set",
            WorkoutType::LongRun => "Long Run",
            WorkoutType::RecoveryRun => "Recovery Run",
            WorkoutType::RaceDay => "Race Day",
        }
    }
}

impl std::fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Target pace stored canonically as seconds per kilometre
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct Pace(f64);

impl Pace {
    pub fn from_seconds_per_km(seconds: f64) -> Self {
        Self(seconds)
    }

    pub fn seconds_per_km(self) -> f64 {
        self.0
    }

    /// Scale this pace by a multiplicative offset (>1 is slower)
    pub fn scaled(self, factor: f64) -> Self {
        Self(self.0 * factor)
    }

    /// Minutes needed to cover `distance_km` at this pace, rounded
    pub fn minutes_for(self, distance_km: f64) -> u32 {
        (distance_km * self.0 / 60.0).round() as u32
    }
}

/// One repeat within an interval session
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IntervalRep {
    pub distance_km: f64,
    pub pace: Pace,
    pub rest_seconds: u32,
}

// ============================================================================
// Scheduled Plan
// ============================================================================

/// A single workout placed on a calendar date
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledWorkout {
    /// `"{week}-{dayOfWeek}"`, stable across runs with the same configuration
    pub id: String,
    pub week: u32,
    pub day_of_week: DayOfWeek,
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    pub name: String,
    pub description: String,
    pub distance_km: f64,
    pub duration_minutes: u32,
    pub target_pace: Pace,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intervals: Option<Vec<IntervalRep>>,
    pub scheduled_date: NaiveDate,
}

impl ScheduledWorkout {
    /// Correlation key used to join externally stored completion records
    pub fn make_id(week: u32, day_of_week: DayOfWeek) -> String {
        format!("{}-{}", week, day_of_week)
    }
}

/// The complete, immutable output of plan generation
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledTrainingPlan {
    /// Ordered by week, then day of week
    pub workouts: Vec<ScheduledWorkout>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_weeks: u32,
}

impl ScheduledTrainingPlan {
    /// Workouts scheduled in the given week, in day order
    pub fn workouts_for_week(&self, week: u32) -> impl Iterator<Item = &ScheduledWorkout> {
        self.workouts.iter().filter(move |w| w.week == week)
    }

    /// Total scheduled distance for each week, indexed from week 1
    pub fn weekly_distance_km(&self) -> Vec<f64> {
        let mut totals = vec![0.0; self.total_weeks as usize];
        for workout in &self.workouts {
            if let Some(slot) = totals.get_mut(workout.week.saturating_sub(1) as usize) {
                *slot += workout.distance_km;
            }
        }
        totals
    }

    pub fn total_distance_km(&self) -> f64 {
        self.workouts.iter().map(|w| w.distance_km).sum()
    }

    pub fn race_day(&self) -> Option<&ScheduledWorkout> {
        self.workouts
            .iter()
            .find(|w| w.workout_type == WorkoutType::RaceDay)
    }
}

// ============================================================================
// Rest-Day Validation
// ============================================================================

/// Result of checking workout days against preferred rest days
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RestDayAnalysis {
    pub is_valid: bool,
    /// Days present in both the workout days and the preferred rest days
    pub conflicts: Vec<DayOfWeek>,
    /// Alternative workout-day sets of the same length, best first
    pub suggestions: Vec<Vec<DayOfWeek>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hard_workout_types() {
        assert!(WorkoutType::LongRun.is_hard());
        assert!(WorkoutType::TempoRun.is_hard());
        assert!(WorkoutType::IntervalSet.is_hard());
        assert!(WorkoutType::RaceDay.is_hard());
        assert!(!WorkoutType::EasyRun.is_hard());
        assert!(!WorkoutType::RecoveryRun.is_hard());
    }

    #[test]
    fn test_intensity_rank_ordering() {
        assert!(WorkoutType::RaceDay.intensity_rank() > WorkoutType::LongRun.intensity_rank());
        assert!(WorkoutType::LongRun.intensity_rank() > WorkoutType::TempoRun.intensity_rank());
        assert_eq!(
            WorkoutType::TempoRun.intensity_rank(),
            WorkoutType::IntervalSet.intensity_rank()
        );
        assert!(WorkoutType::EasyRun.intensity_rank() > WorkoutType::RecoveryRun.intensity_rank());
    }

    #[test]
    fn test_pace_minutes_rounding() {
        let pace = Pace::from_seconds_per_km(300.0);
        assert_eq!(pace.minutes_for(10.0), 50);
        assert_eq!(pace.minutes_for(0.1), 1); // 0.5 min rounds up
    }

    #[test]
    fn test_config_deserializes_from_camel_case_json() {
        let json = r#"{
            "raceDate": "2024-06-01",
            "goalFinishTime": "3:30:00",
            "workoutDaysOfWeek": [1, 3, 6],
            "preferences": {
                "distanceUnit": "MILES",
                "preferredRestDays": [7],
                "enforceRestDays": true
            }
        }"#;

        let config: TrainingPlanConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.start_date, None);
        assert_eq!(config.race_date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(config.preferences.distance_unit, DistanceUnit::Miles);
        assert_eq!(config.preferences.pace_format, PaceFormat::MinSec);
        assert_eq!(config.preferences.rest_days(), &[7]);
        assert!(config.preferences.enforces_rest_days());
    }

    #[test]
    fn test_workout_serializes_type_field() {
        let workout = ScheduledWorkout {
            id: ScheduledWorkout::make_id(2, 6),
            week: 2,
            day_of_week: 6,
            workout_type: WorkoutType::LongRun,
            name: "Long Run".into(),
            description: String::new(),
            distance_km: 9.2,
            duration_minutes: 50,
            target_pace: Pace::from_seconds_per_km(330.0),
            intervals: None,
            scheduled_date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        };

        let value = serde_json::to_value(&workout).unwrap();
        assert_eq!(value["id"], "2-6");
        assert_eq!(value["type"], "LongRun");
        assert_eq!(value["scheduledDate"], "2024-03-09");
        assert_eq!(value["targetPace"], 330.0);
        assert!(value.get("intervals").is_none());
    }
}
