//! Activity catalog model and persisted roulette state.
//!
//! # Responsibility
//! - Define the read-only catalog record and its enum dimensions.
//! - Define the single persisted state object for favorites, custom
//!   activities, interaction counters and the current selection.
//!
//! # Invariants
//! - Catalog records are never mutated by the application.
//! - `favorites` and `custom_activities` hold at most one entry per id.
//! - Stats counters only ever increase.

use serde::{Deserialize, Serialize};

/// Stable identifier assigned by the static catalog.
pub type ActivityId = u32;

/// Broad activity grouping used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Indoor,
    Creative,
    Social,
    Physical,
}

/// Mood an activity is suited for. An activity can serve several moods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Bored,
    Energetic,
    Stressed,
}

/// Physical effort level, display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intensity {
    Low,
    Medium,
    High,
}

/// One selectable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
    pub category: Category,
    /// Moods this activity suits. Matching any one is enough.
    pub mood: Vec<Mood>,
    /// Expected duration in minutes.
    pub duration: u32,
    pub emoji: String,
    pub intensity: Intensity,
}

/// Category filter including the match-everything sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}

/// Preset duration buckets offered by the filter bar, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Duration {
    Min15,
    Min30,
    Min60,
    Min120,
}

impl Duration {
    pub fn minutes(&self) -> u32 {
        match self {
            Self::Min15 => 15,
            Self::Min30 => 30,
            Self::Min60 => 60,
            Self::Min120 => 120,
        }
    }
}

/// Transient filter state driving the selection engine. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActivityFilters {
    pub category: CategoryFilter,
    /// `None` means no mood constraint.
    pub mood: Option<Mood>,
    /// `None` means no duration constraint.
    pub duration: Option<Duration>,
}

/// Interaction counters, advisory and display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivityStats {
    pub viewed: u64,
    pub favorited: u64,
    pub completed: u64,
}

/// Everything the roulette persists, stored as one JSON object under a
/// single storage key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivityState {
    pub favorites: Vec<Activity>,
    #[serde(rename = "customActivities", default)]
    pub custom_activities: Vec<Activity>,
    #[serde(default)]
    pub stats: ActivityStats,
    #[serde(rename = "currentActivity", default)]
    pub current_activity: Option<Activity>,
}

#[cfg(test)]
mod tests {
    use super::{Activity, ActivityState, Category, CategoryFilter, Intensity, Mood};

    fn sample() -> Activity {
        Activity {
            id: 7,
            name: "Shadow boxing".to_string(),
            category: Category::Physical,
            mood: vec![Mood::Energetic, Mood::Stressed],
            duration: 15,
            emoji: "🥊".to_string(),
            intensity: Intensity::High,
        }
    }

    #[test]
    fn category_filter_all_matches_every_category() {
        for category in [
            Category::Indoor,
            Category::Creative,
            Category::Social,
            Category::Physical,
        ] {
            assert!(CategoryFilter::All.matches(category));
        }
        assert!(CategoryFilter::Only(Category::Physical).matches(Category::Physical));
        assert!(!CategoryFilter::Only(Category::Indoor).matches(Category::Physical));
    }

    #[test]
    fn activity_round_trips_through_json() {
        let activity = sample();
        let json = serde_json::to_string(&activity).unwrap();
        let back: Activity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, activity);
    }

    #[test]
    fn state_tolerates_missing_optional_fields() {
        // Older builds persisted only a favorites list in the state object.
        let state: ActivityState = serde_json::from_str(r#"{"favorites": []}"#).unwrap();
        assert!(state.favorites.is_empty());
        assert!(state.custom_activities.is_empty());
        assert_eq!(state.stats.viewed, 0);
        assert!(state.current_activity.is_none());
    }
}
