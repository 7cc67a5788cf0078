//! Display conversions.
//!
//! The engine computes in kilometres and seconds per kilometre only. These
//! helpers are for callers that present a plan in the user's units.

use crate::{DistanceUnit, Pace, PaceFormat};

pub const KM_PER_MILE: f64 = 1.609344;

impl DistanceUnit {
    /// Convert a distance in kilometres into this unit
    pub fn from_km(self, km: f64) -> f64 {
        match self {
            DistanceUnit::Kilometers => km,
            DistanceUnit::Miles => km / KM_PER_MILE,
        }
    }

    /// Convert a distance in this unit into kilometres
    pub fn to_km(self, value: f64) -> f64 {
        match self {
            DistanceUnit::Kilometers => value,
            DistanceUnit::Miles => value * KM_PER_MILE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
        }
    }
}

impl Pace {
    pub fn seconds_per_unit(self, unit: DistanceUnit) -> f64 {
        unit.to_km(self.seconds_per_km())
    }

    /// Render as `4:59 /km` or `4.98 min/km`
    pub fn format(self, unit: DistanceUnit, format: PaceFormat) -> String {
        let seconds = self.seconds_per_unit(unit);
        match format {
            PaceFormat::MinSec => {
                let total = seconds.round() as u64;
                format!("{}:{:02} /{}", total / 60, total % 60, unit.label())
            }
            PaceFormat::Decimal => format!("{:.2} min/{}", seconds / 60.0, unit.label()),
        }
    }
}

pub fn format_distance(km: f64, unit: DistanceUnit) -> String {
    format!("{:.1} {}", unit.from_km(km), unit.label())
}

/// `45 min` under an hour, `3h 30m` otherwise
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        format!("{} min", minutes)
    } else {
        format!("{}h {:02}m", minutes / 60, minutes % 60)
    }
}
