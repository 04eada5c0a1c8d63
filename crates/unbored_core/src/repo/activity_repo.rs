//! Activity repository: favorites, custom activities, counters and the
//! current selection, persisted as one state object.
//!
//! # Responsibility
//! - Own the `activity-storage` key and its read-modify-write cycle.
//! - Enforce set semantics (one entry per id) for favorites and custom
//!   activities.
//!
//! # Invariants
//! - `add_favorite`/`add_custom` never create duplicate ids.
//! - Stats counters are monotonically non-decreasing.
//! - Removal of an absent id is a defined no-op.

use crate::model::activity::{Activity, ActivityId, ActivityState};
use crate::store::{StorageBackend, Store};

const ACTIVITY_KEY: &str = "activity-storage";

/// Named interaction counter. Advisory only; never drives control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatCounter {
    Viewed,
    Favorited,
    Completed,
}

/// Repository interface over the persisted activity state.
pub trait ActivityRepository {
    /// Returns the full persisted state.
    fn state(&self) -> ActivityState;
    fn is_favorite(&self, id: ActivityId) -> bool;
    /// Adds to favorites unless the id is already present.
    /// Returns `true` when the entry was newly appended.
    fn add_favorite(&self, activity: Activity) -> bool;
    /// Removes the favorite with `id` when present. Idempotent.
    fn remove_favorite(&self, id: ActivityId);
    /// Adds a user-defined activity unless the id is already present.
    /// Returns `true` when the entry was newly appended.
    fn add_custom(&self, activity: Activity) -> bool;
    /// Removes the custom activity with `id` when present. Idempotent.
    fn remove_custom(&self, id: ActivityId);
    /// Adds 1 to the named counter.
    fn increment(&self, counter: StatCounter);
    /// Persists the activity currently shown by the roulette.
    fn set_current(&self, activity: Option<Activity>);
    fn current(&self) -> Option<Activity>;
}

/// Activity repository backed by the injected store adapter.
pub struct StoreActivityRepository<'s, B: StorageBackend> {
    store: &'s Store<B>,
}

impl<'s, B: StorageBackend> StoreActivityRepository<'s, B> {
    pub fn new(store: &'s Store<B>) -> Self {
        Self { store }
    }

    fn mutate<T>(&self, apply: impl FnOnce(&mut ActivityState) -> T) -> T {
        let mut state: ActivityState = self.store.load(ACTIVITY_KEY);
        let result = apply(&mut state);
        self.store.save(ACTIVITY_KEY, &state);
        result
    }
}

impl<B: StorageBackend> ActivityRepository for StoreActivityRepository<'_, B> {
    fn state(&self) -> ActivityState {
        self.store.load(ACTIVITY_KEY)
    }

    fn is_favorite(&self, id: ActivityId) -> bool {
        self.state().favorites.iter().any(|fav| fav.id == id)
    }

    fn add_favorite(&self, activity: Activity) -> bool {
        self.mutate(|state| {
            if state.favorites.iter().any(|fav| fav.id == activity.id) {
                return false;
            }
            state.favorites.push(activity);
            true
        })
    }

    fn remove_favorite(&self, id: ActivityId) {
        self.mutate(|state| state.favorites.retain(|fav| fav.id != id));
    }

    fn add_custom(&self, activity: Activity) -> bool {
        self.mutate(|state| {
            if state
                .custom_activities
                .iter()
                .any(|custom| custom.id == activity.id)
            {
                return false;
            }
            state.custom_activities.push(activity);
            true
        })
    }

    fn remove_custom(&self, id: ActivityId) {
        self.mutate(|state| state.custom_activities.retain(|custom| custom.id != id));
    }

    fn increment(&self, counter: StatCounter) {
        self.mutate(|state| match counter {
            StatCounter::Viewed => state.stats.viewed += 1,
            StatCounter::Favorited => state.stats.favorited += 1,
            StatCounter::Completed => state.stats.completed += 1,
        });
    }

    fn set_current(&self, activity: Option<Activity>) {
        self.mutate(|state| state.current_activity = activity);
    }

    fn current(&self) -> Option<Activity> {
        self.state().current_activity
    }
}
