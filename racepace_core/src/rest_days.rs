//! Rest-day validation.
//!
//! A conflict is any day the user both wants to train on and wants to rest
//! on. Enforced rest days make conflicts fatal unless an alternative day set
//! can be suggested; unenforced rest days only produce a warning.

use crate::dates::day_gap;
use crate::{DayOfWeek, RestDayAnalysis, MIN_WORKOUT_DAYS};

/// Upper bound on alternative day sets returned
const MAX_SUGGESTIONS: usize = 3;

/// Check `workout_days` against `preferred_rest_days`
pub fn validate(
    workout_days: &[DayOfWeek],
    preferred_rest_days: &[DayOfWeek],
    enforce_rest_days: bool,
) -> RestDayAnalysis {
    let mut conflicts: Vec<DayOfWeek> = workout_days
        .iter()
        .copied()
        .filter(|d| preferred_rest_days.contains(d))
        .collect();
    conflicts.sort_unstable();
    conflicts.dedup();

    if conflicts.is_empty() {
        return RestDayAnalysis {
            is_valid: true,
            conflicts,
            suggestions: vec![],
        };
    }

    let suggestions = suggest_alternatives(workout_days, preferred_rest_days, &conflicts);

    if enforce_rest_days {
        tracing::info!(
            "Workout days {:?} conflict with enforced rest days on {:?}; {} alternative(s)",
            workout_days,
            conflicts,
            suggestions.len()
        );
    } else {
        tracing::warn!(
            "Workout days {:?} include preferred rest days {:?}",
            workout_days,
            conflicts
        );
    }

    RestDayAnalysis {
        is_valid: !enforce_rest_days,
        conflicts,
        suggestions,
    }
}

/// Equal-length day sets that keep every non-conflicting workout day and
/// avoid every rest day, best first
///
/// Ranked by fewest back-to-back days, then by how close the replacement
/// days sit to the days they replace.
fn suggest_alternatives(
    workout_days: &[DayOfWeek],
    preferred_rest_days: &[DayOfWeek],
    conflicts: &[DayOfWeek],
) -> Vec<Vec<DayOfWeek>> {
    let available: Vec<DayOfWeek> = (1..=7)
        .filter(|d| !preferred_rest_days.contains(d))
        .collect();

    let wanted = workout_days.len();
    if available.len() < MIN_WORKOUT_DAYS || available.len() < wanted {
        tracing::debug!(
            "Only {} non-rest days available, cannot suggest {}-day alternatives",
            available.len(),
            wanted
        );
        return vec![];
    }

    let kept: Vec<DayOfWeek> = workout_days
        .iter()
        .copied()
        .filter(|d| !conflicts.contains(d))
        .collect();

    let mut candidates: Vec<(usize, u32, Vec<DayOfWeek>)> = (0u8..128)
        .filter(|mask| mask.count_ones() as usize == wanted)
        .map(|mask| {
            (1..=7u8)
                .filter(|d| mask & (1u8 << (d - 1)) != 0)
                .collect::<Vec<_>>()
        })
        .filter(|days| days.iter().all(|d| available.contains(d)))
        .filter(|days| kept.iter().all(|d| days.contains(d)))
        .map(|days| {
            let displacement: u32 = days
                .iter()
                .filter(|d| !kept.contains(d))
                .map(|d| {
                    conflicts
                        .iter()
                        .map(|c| u32::from(day_gap(*d, *c)))
                        .min()
                        .unwrap_or(0)
                })
                .sum();
            (adjacent_pairs(&days), displacement, days)
        })
        .collect();

    candidates.sort();
    candidates
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, _, days)| days)
        .collect()
}

/// Number of day pairs that fall on consecutive days, Sunday→Monday included
pub fn adjacent_pairs(days: &[DayOfWeek]) -> usize {
    days.iter()
        .enumerate()
        .flat_map(|(i, a)| days[i + 1..].iter().map(move |b| (*a, *b)))
        .filter(|(a, b)| day_gap(*a, *b) == 1)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_conflicts_is_valid() {
        let analysis = validate(&[1, 3, 6], &[7], true);
        assert!(analysis.is_valid);
        assert!(analysis.conflicts.is_empty());
        assert!(analysis.suggestions.is_empty());
    }

    #[test]
    fn test_enforced_conflict_suggests_alternative() {
        let analysis = validate(&[1, 3, 6, 7], &[7], true);

        assert!(!analysis.is_valid);
        assert_eq!(analysis.conflicts, vec![7]);
        assert!(!analysis.suggestions.is_empty());
        for suggestion in &analysis.suggestions {
            assert_eq!(suggestion.len(), 4);
            assert!(!suggestion.contains(&7));
            for kept in [1, 3, 6] {
                assert!(suggestion.contains(&kept));
            }
        }
        // Fewest back-to-back days, then closest to the dropped Sunday
        assert_eq!(analysis.suggestions[0], vec![1, 3, 5, 6]);
    }

    #[test]
    fn test_unenforced_conflict_is_soft_warning() {
        let analysis = validate(&[1, 3, 6, 7], &[7], false);
        assert!(analysis.is_valid);
        assert_eq!(analysis.conflicts, vec![7]);
    }

    #[test]
    fn test_too_few_free_days_gives_no_suggestion() {
        // Only Mon and Tue left
        let analysis = validate(&[1, 3, 5], &[3, 4, 5, 6, 7], true);
        assert!(!analysis.is_valid);
        assert_eq!(analysis.conflicts, vec![3, 5]);
        assert!(analysis.suggestions.is_empty());
    }

    #[test]
    fn test_not_enough_for_equal_length() {
        // Three free days cannot hold a four-day week
        let analysis = validate(&[1, 2, 4, 6], &[4, 5, 6, 7], true);
        assert!(analysis.suggestions.is_empty());
    }

    #[test]
    fn test_suggestions_capped() {
        let analysis = validate(&[1, 2, 3], &[1, 2, 3], true);
        assert_eq!(analysis.conflicts, vec![1, 2, 3]);
        assert_eq!(analysis.suggestions.len(), MAX_SUGGESTIONS);
        assert!(analysis
            .suggestions
            .iter()
            .all(|s| s.iter().all(|d| *d >= 4)));
    }

    #[test]
    fn test_adjacent_pairs_wraps_week() {
        assert_eq!(adjacent_pairs(&[1, 3, 5]), 0);
        assert_eq!(adjacent_pairs(&[1, 2, 3]), 2);
        assert_eq!(adjacent_pairs(&[1, 4, 7]), 1);
    }
}
