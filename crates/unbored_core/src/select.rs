//! Activity selection engine.
//!
//! # Responsibility
//! - Narrow the catalog with the active filter predicates.
//! - Draw a uniformly random candidate while avoiding an immediate repeat.
//!
//! # Invariants
//! - Filtering preserves catalog order and never mutates the catalog.
//! - With two or more candidates and a known previous pick among them, the
//!   previous pick is never drawn again.
//! - A single candidate is returned as-is, repeat or not.

use crate::model::activity::{Activity, ActivityFilters, ActivityId};
use rand::Rng;

/// Applies the ANDed category/mood/duration predicates over the catalog.
///
/// An unset mood or duration places no constraint; the `All` category
/// sentinel matches every category.
pub fn filter_activities(catalog: &[Activity], filters: &ActivityFilters) -> Vec<Activity> {
    catalog
        .iter()
        .filter(|activity| filters.category.matches(activity.category))
        .filter(|activity| match filters.mood {
            Some(mood) => activity.mood.contains(&mood),
            None => true,
        })
        .filter(|activity| match filters.duration {
            Some(duration) => activity.duration == duration.minutes(),
            None => true,
        })
        .cloned()
        .collect()
}

/// Picks a random candidate, avoiding `previous` when an alternative exists.
///
/// Uses the process RNG. See [`pick_random_with`] for the deterministic
/// variant used in tests.
pub fn pick_random(candidates: &[Activity], previous: Option<ActivityId>) -> Option<Activity> {
    pick_random_with(candidates, previous, &mut rand::rng())
}

/// Picks a random candidate using the supplied RNG.
///
/// # Contract
/// - Empty `candidates` yields `None`.
/// - One candidate is returned unconditionally.
/// - Otherwise the entry matching `previous` is excluded before a uniform
///   draw; should exclusion empty the pool, the draw falls back to the full
///   candidate set.
pub fn pick_random_with<R: Rng>(
    candidates: &[Activity],
    previous: Option<ActivityId>,
    rng: &mut R,
) -> Option<Activity> {
    if candidates.is_empty() {
        return None;
    }
    if candidates.len() == 1 {
        return Some(candidates[0].clone());
    }

    let pool: Vec<&Activity> = match previous {
        Some(previous_id) => {
            let fresh: Vec<&Activity> = candidates
                .iter()
                .filter(|activity| activity.id != previous_id)
                .collect();
            if fresh.is_empty() {
                candidates.iter().collect()
            } else {
                fresh
            }
        }
        None => candidates.iter().collect(),
    };

    let index = rng.random_range(0..pool.len());
    Some(pool[index].clone())
}
