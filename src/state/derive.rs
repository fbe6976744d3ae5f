//! View derivation: canonical dataset + controls -> displayed list
//!
//! Steps, in order:
//! 1. status filter
//! 2. case-insensitive mission name search
//! 3. stable chronological sort on `launch_date_utc`
//!
//! The function is pure. Calling it twice with the same inputs yields
//! the same list, and nothing it receives is mutated.

use std::cmp::Ordering;

use super::controls::{SortOrder, ViewControls};
use super::data::Launch;

/// Compute the displayed list for the given dataset and controls
pub fn derive_view(dataset: &[Launch], controls: &ViewControls) -> Vec<Launch> {
    let needle = controls.search_text.to_lowercase();

    // Parse each timestamp once, not once per comparison
    let mut keyed: Vec<_> = dataset
        .iter()
        .filter(|launch| controls.status_filter.matches(launch))
        .filter(|launch| launch.mission_matches(&needle))
        .map(|launch| (launch.launch_time(), launch))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| compare_times(*a, *b, controls.sort_order));

    keyed.into_iter().map(|(_, launch)| launch.clone()).collect()
}

/// Order two optional timestamps. Unparseable ones always go last.
fn compare_times<T: Ord>(a: Option<T>, b: Option<T>, order: SortOrder) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match order {
            SortOrder::Ascending => a.cmp(&b),
            SortOrder::Descending => b.cmp(&a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
