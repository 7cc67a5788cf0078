//! Periodization: which workout types occur in each week of the plan.
//!
//! Phases run base → build → peak → taper → race week. Boundaries are
//! computed once from the plan length:
//! - Base: weeks 1..=⌈T×0.35⌉
//! - Build: the next ⌈T×0.40⌉ weeks
//! - Peak: the next ⌈T×0.15⌉ weeks
//! - Taper: whatever remains before the race week
//!
//! The race week is always the final week. Distances within each phase are
//! left to the workout generators.

use crate::WorkoutType;
use serde::{Deserialize, Serialize};

/// Training phase of a week
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Base,
    Build,
    Peak,
    Taper,
    RaceWeek,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base => write!(f, "base"),
            Self::Build => write!(f, "build"),
            Self::Peak => write!(f, "peak"),
            Self::Taper => write!(f, "taper"),
            Self::RaceWeek => write!(f, "race week"),
        }
    }
}

/// Last week of each phase, fixed for the life of a plan
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseBoundaries {
    pub total_weeks: u32,
    pub base_end: u32,
    pub build_end: u32,
    pub peak_end: u32,
}

/// `⌈weeks × percent / 100⌉` without floating point drift
fn ceil_share(weeks: u32, percent: u32) -> u32 {
    (weeks * percent).div_ceil(100)
}

impl PhaseBoundaries {
    pub fn new(total_weeks: u32) -> Self {
        // Every phase ends before the race week
        let last_training_week = total_weeks.saturating_sub(1);

        let base_end = ceil_share(total_weeks, 35).min(last_training_week);
        let build_end = (base_end + ceil_share(total_weeks, 40)).min(last_training_week);
        let peak_end = (build_end + ceil_share(total_weeks, 15)).min(last_training_week);

        Self {
            total_weeks,
            base_end,
            build_end,
            peak_end,
        }
    }

    pub fn phase_for(&self, week: u32) -> Phase {
        if week >= self.total_weeks {
            Phase::RaceWeek
        } else if week <= self.base_end {
            Phase::Base
        } else if week <= self.build_end {
            Phase::Build
        } else if week <= self.peak_end {
            Phase::Peak
        } else {
            Phase::Taper
        }
    }
}

/// Decides the weekly workout-type mix for a plan of fixed length
#[derive(Clone, Copy, Debug)]
pub struct PeriodizationPlanner {
    boundaries: PhaseBoundaries,
}

impl PeriodizationPlanner {
    pub fn new(total_weeks: u32) -> Self {
        Self {
            boundaries: PhaseBoundaries::new(total_weeks),
        }
    }

    pub fn boundaries(&self) -> &PhaseBoundaries {
        &self.boundaries
    }

    pub fn phase_for(&self, week: u32) -> Phase {
        self.boundaries.phase_for(week)
    }

    /// Ordered workout types for `week`, one per training day
    ///
    /// The first entries are the key sessions (long run, hard session or
    /// race), followed by easy or recovery runs filling the remaining days.
    pub fn workout_types(&self, week: u32, day_count: usize) -> Vec<WorkoutType> {
        let phase = self.phase_for(week);
        let long_and_hard = [WorkoutType::LongRun, hard_session_for(week)];

        let (key, fill): (&[WorkoutType], &[WorkoutType]) = match phase {
            Phase::Base => (
                &[WorkoutType::LongRun, WorkoutType::EasyRun],
                &[WorkoutType::RecoveryRun, WorkoutType::EasyRun],
            ),
            Phase::Build => (
                &long_and_hard,
                &[WorkoutType::EasyRun, WorkoutType::RecoveryRun],
            ),
            Phase::Peak => (&long_and_hard, &[WorkoutType::RecoveryRun]),
            Phase::Taper => (&long_and_hard, &[WorkoutType::EasyRun]),
            Phase::RaceWeek => (&[WorkoutType::RaceDay], &[WorkoutType::EasyRun]),
        };

        let types: Vec<WorkoutType> = key
            .iter()
            .chain(fill.iter().cycle())
            .take(day_count)
            .copied()
            .collect();

        tracing::debug!("Week {} ({}): {:?}", week, phase, types);
        types
    }
}

/// Tempo in odd weeks, intervals in even weeks
fn hard_session_for(week: u32) -> WorkoutType {
    if week % 2 == 1 {
        WorkoutType::TempoRun
    } else {
        WorkoutType::IntervalSet
    }
}

/// Pure form of [`PeriodizationPlanner::workout_types`]
pub fn workout_types_for_week(week: u32, total_weeks: u32, day_count: usize) -> Vec<WorkoutType> {
    PeriodizationPlanner::new(total_weeks).workout_types(week, day_count)
}
