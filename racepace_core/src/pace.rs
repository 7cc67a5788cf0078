//! Pace derivation from a goal finish time.
//!
//! Every training pace is a fixed multiplicative offset from goal marathon
//! pace, so the table is fully determined by the goal time.

use crate::{Error, Pace, Result, MARATHON_DISTANCE_KM};

const EASY_FACTOR: f64 = 1.15;
const RECOVERY_FACTOR: f64 = 1.25;
const TEMPO_FACTOR: f64 = 0.93;
const INTERVAL_FACTOR: f64 = 0.85;

/// Target paces for every workout intensity
///
/// Ordering always holds: interval < tempo < marathon < easy < recovery
/// (seconds per km, smaller is faster).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaceTable {
    pub marathon: Pace,
    pub easy: Pace,
    pub recovery: Pace,
    pub tempo: Pace,
    pub interval: Pace,
}

impl PaceTable {
    /// Build the pace table for a goal finish time in `H:MM:SS` form
    pub fn from_goal_time(goal_finish_time: &str) -> Result<Self> {
        let total_seconds = parse_goal_time(goal_finish_time)?;
        Ok(Self::from_total_seconds(total_seconds))
    }

    fn from_total_seconds(total_seconds: u32) -> Self {
        let marathon = Pace::from_seconds_per_km(f64::from(total_seconds) / MARATHON_DISTANCE_KM);

        let table = Self {
            marathon,
            easy: marathon.scaled(EASY_FACTOR),
            recovery: marathon.scaled(RECOVERY_FACTOR),
            tempo: marathon.scaled(TEMPO_FACTOR),
            interval: marathon.scaled(INTERVAL_FACTOR),
        };

        tracing::debug!(
            "Derived paces (s/km): interval {:.1}, tempo {:.1}, marathon {:.1}, easy {:.1}, recovery {:.1}",
            table.interval.seconds_per_km(),
            table.tempo.seconds_per_km(),
            table.marathon.seconds_per_km(),
            table.easy.seconds_per_km(),
            table.recovery.seconds_per_km()
        );

        table
    }

    /// Pace halfway between easy and marathon pace, used for long runs
    pub fn long_run(&self) -> Pace {
        Pace::from_seconds_per_km(
            (self.easy.seconds_per_km() + self.marathon.seconds_per_km()) / 2.0,
        )
    }
}

/// Parse `H:MM:SS` (one or two hour digits) into total seconds
///
/// Rejects anything that does not match the pattern, minutes or seconds
/// of 60 and above, and a zero total.
pub fn parse_goal_time(input: &str) -> Result<u32> {
    let invalid = || {
        Error::ConfigValidation(format!(
            "goal finish time '{}' must be in H:MM:SS format",
            input
        ))
    };

    let parts: Vec<&str> = input.split(':').collect();
    let [hours, minutes, seconds] = parts.as_slice() else {
        return Err(invalid());
    };

    let field = |s: &str, min_len: usize, max_len: usize| -> Result<u32> {
        if s.len() < min_len || s.len() > max_len || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        s.parse::<u32>().map_err(|_| invalid())
    };

    let hours = field(*hours, 1, 2)?;
    let minutes = field(*minutes, 2, 2)?;
    let seconds = field(*seconds, 2, 2)?;

    if minutes >= 60 || seconds >= 60 {
        return Err(invalid());
    }

    let total = hours * 3600 + minutes * 60 + seconds;
    if total == 0 {
        return Err(Error::ConfigValidation(
            "goal finish time must be greater than zero".into(),
        ));
    }

    Ok(total)
}
