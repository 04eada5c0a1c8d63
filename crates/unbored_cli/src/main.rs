//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `unbored_core` linkage.
//! - Optionally spin the roulette once against a catalog file passed as the
//!   first argument.

use unbored_core::{
    ActivityFilters, ActivityService, MemoryBackend, Store, StoreActivityRepository,
};

fn main() {
    println!("unbored_core version={}", unbored_core::core_version());

    let Some(catalog_path) = std::env::args().nth(1) else {
        return;
    };

    let catalog = unbored_core::load_catalog_or_empty(&catalog_path);
    println!("catalog entries={}", catalog.len());

    let store = Store::new(MemoryBackend::new());
    let repo = StoreActivityRepository::new(&store);
    let service = ActivityService::new(catalog, repo);
    match service.spin(&ActivityFilters::default()) {
        Some(activity) => println!(
            "spin result: {} {} ({} min, {:?})",
            activity.emoji, activity.name, activity.duration, activity.category
        ),
        None => println!("spin result: no activities match"),
    }
}
