//! Activity roulette use-case service.
//!
//! # Responsibility
//! - Drive one spin end to end: filter, pick, persist, count.
//! - Keep counter bookkeeping consistent with favorite membership.
//!
//! # Invariants
//! - `spin` never presents the same activity twice in a row when an
//!   alternative candidate exists.
//! - `favorited` is incremented only when a favorite is newly added, so an
//!   idempotent re-add never double-counts.

use crate::model::activity::{Activity, ActivityFilters, ActivityId};
use crate::repo::activity_repo::{ActivityRepository, StatCounter};
use crate::select::{filter_activities, pick_random_with};
use rand::Rng;

/// Use-case wrapper combining the read-only catalog with the persisted
/// activity state.
pub struct ActivityService<R: ActivityRepository> {
    catalog: Vec<Activity>,
    repo: R,
}

impl<R: ActivityRepository> ActivityService<R> {
    /// Creates a service over a loaded catalog and a repository.
    pub fn new(catalog: Vec<Activity>, repo: R) -> Self {
        Self { catalog, repo }
    }

    pub fn catalog(&self) -> &[Activity] {
        &self.catalog
    }

    /// Spins the roulette under the given filters.
    ///
    /// # Contract
    /// - Filters the catalog, draws avoiding the persisted current activity,
    ///   persists the draw as current and bumps the `viewed` counter.
    /// - No candidates: the current activity is cleared and `None` returned;
    ///   nothing is counted.
    pub fn spin(&self, filters: &ActivityFilters) -> Option<Activity> {
        self.spin_with(filters, &mut rand::rng())
    }

    /// Deterministic variant of [`spin`](Self::spin) for tests.
    pub fn spin_with<G: Rng>(&self, filters: &ActivityFilters, rng: &mut G) -> Option<Activity> {
        let candidates = filter_activities(&self.catalog, filters);
        let previous = self.repo.current().map(|activity| activity.id);
        let picked = pick_random_with(&candidates, previous, rng);
        self.repo.set_current(picked.clone());
        if picked.is_some() {
            self.repo.increment(StatCounter::Viewed);
        }
        picked
    }

    /// Adds or removes `activity` from favorites, returning the resulting
    /// membership. A new add bumps the `favorited` counter.
    pub fn toggle_favorite(&self, activity: &Activity) -> bool {
        if self.repo.is_favorite(activity.id) {
            self.repo.remove_favorite(activity.id);
            false
        } else {
            if self.repo.add_favorite(activity.clone()) {
                self.repo.increment(StatCounter::Favorited);
            }
            true
        }
    }

    /// Records that the user completed the presented activity.
    pub fn complete(&self, _id: ActivityId) {
        self.repo.increment(StatCounter::Completed);
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }
}
