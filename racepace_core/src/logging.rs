//! Logging infrastructure for Racepace.
//!
//! Provides centralized tracing setup for binaries. Library code only emits
//! events; it never installs a subscriber.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging with sensible defaults
///
/// Default level is WARN, but can be overridden with RUST_LOG env var.
/// Output goes to stderr so plan output on stdout stays machine-readable.
pub fn init() {
    init_with_level("warn")
}

/// Initialize logging with a specific default level
///
/// # Arguments
/// * `default_level` - Default log level (debug, info, warn, error)
///
/// This can still be overridden by RUST_LOG environment variable.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Initialize logging for testing (captures logs for test output)
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::generate_plan;
    use crate::{Preferences, TrainingPlanConfig};
    use chrono::NaiveDate;

    #[test]
    fn test_generation_with_debug_logging() {
        init_test();

        let config = TrainingPlanConfig {
            start_date: None,
            race_date: NaiveDate::from_ymd_opt(2024, 10, 13).unwrap(),
            goal_finish_time: "4:15:00".into(),
            workout_days_of_week: vec![2, 4, 7],
            preferences: Preferences::default(),
        };

        let plan = generate_plan(&config).unwrap();
        assert_eq!(plan.workouts.len(), 42);
    }
}
