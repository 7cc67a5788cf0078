#![forbid(unsafe_code)]

//! Core plan-generation engine for the Racepace marathon planner.
//!
//! This crate provides:
//! - Domain types (configuration, workouts, scheduled plans)
//! - Pace derivation from a goal finish time
//! - Per-type workout generators and weekly periodization
//! - Rest-day validation and day assignment
//! - Calendar resolution and the plan scheduler
//! - A caller-owned plan cache and display unit conversions

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod pace;
pub mod workouts;
pub mod periodization;
pub mod rest_days;
pub mod assignment;
pub mod dates;
pub mod scheduler;
pub mod units;
pub mod cache;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use pace::PaceTable;
pub use periodization::{Phase, PhaseBoundaries, PeriodizationPlanner};
pub use scheduler::{generate_plan, SchedulerSettings, TrainingScheduler};
pub use cache::PlanCache;
