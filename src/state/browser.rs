//! Launch browser state: canonical dataset, controls, expansion and
//! the derived list currently on screen.
//!
//! Every input change goes through [`LaunchBrowser::apply`]. The browser
//! compares its derivation inputs before and after the change and
//! re-derives exactly once when something actually moved, so no setter
//! has to remember to refresh the view.

use super::catalog::Catalog;
use super::controls::{StatusFilter, ViewControls};
use super::data::Launch;
use super::derive::derive_view;

/// A change to one of the four derivation inputs
#[derive(Debug, Clone)]
pub enum ViewChange {
    /// The catalog finished loading
    DatasetLoaded(Catalog),
    SearchText(String),
    StatusFilter(StatusFilter),
    ToggleSortOrder,
}

#[derive(Debug, Default)]
pub struct LaunchBrowser {
    catalog: Catalog,
    /// Bumped on every dataset replacement
    catalog_revision: u64,
    controls: ViewControls,
    /// Flight number of the single expanded card, if any
    expanded: Option<u32>,
    displayed: Vec<Launch>,
}

impl LaunchBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one input change and re-derive the displayed list if needed.
    ///
    /// Returns true if the displayed list was recomputed.
    pub fn apply(&mut self, change: ViewChange) -> bool {
        let before = (self.catalog_revision, self.controls.clone());

        match change {
            ViewChange::DatasetLoaded(catalog) => {
                self.catalog = catalog;
                self.catalog_revision += 1;
            }
            ViewChange::SearchText(text) => self.controls.search_text = text,
            ViewChange::StatusFilter(filter) => self.controls.status_filter = filter,
            ViewChange::ToggleSortOrder => {
                self.controls.sort_order = self.controls.sort_order.toggled();
            }
        }

        if before == (self.catalog_revision, self.controls.clone()) {
            return false;
        }

        // Built off to the side, then swapped in whole
        self.displayed = derive_view(self.catalog.launches(), &self.controls);
        true
    }

    /// Expand the launch, or collapse it if it is already expanded.
    ///
    /// Expanding a launch collapses whichever one was open before.
    pub fn toggle_expanded(&mut self, flight_number: u32) {
        self.expanded = match self.expanded {
            Some(current) if current == flight_number => None,
            _ => Some(flight_number),
        };
    }

    pub fn is_expanded(&self, flight_number: u32) -> bool {
        self.expanded == Some(flight_number)
    }

    pub fn expanded(&self) -> Option<u32> {
        self.expanded
    }

    pub fn controls(&self) -> &ViewControls {
        &self.controls
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn displayed(&self) -> &[Launch] {
        &self.displayed
    }

    /// Look up a launch in the canonical dataset
    pub fn launch(&self, flight_number: u32) -> Option<&Launch> {
        self.catalog
            .launches()
            .iter()
            .find(|launch| launch.flight_number == flight_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::controls::SortOrder;
    use crate::state::data::sample_launch;

    fn ids(launches: &[Launch]) -> Vec<u32> {
        launches.iter().map(|l| l.flight_number).collect()
    }

    fn scenario_catalog() -> Catalog {
        let falcon_1 = sample_launch(1, "Falcon 1", "2006-03-24");
        let mut falcon_9 = sample_launch(2, "Falcon 9", "2025-01-01");
        falcon_9.launch_success = None;
        falcon_9.upcoming = true;
        Catalog::from_records(vec![falcon_1, falcon_9])
    }

    #[test]
    fn test_initial_state_is_empty() {
        let browser = LaunchBrowser::new();
        assert!(browser.displayed().is_empty());
        assert_eq!(browser.controls(), &ViewControls::default());
        assert_eq!(browser.expanded(), None);
    }

    #[test]
    fn test_dataset_load_seeds_displayed_list() {
        let mut browser = LaunchBrowser::new();
        assert!(browser.apply(ViewChange::DatasetLoaded(scenario_catalog())));
        // Default order is newest first
        assert_eq!(ids(browser.displayed()), [2, 1]);
    }

    #[test]
    fn test_status_filter_scenario() {
        let mut browser = LaunchBrowser::new();
        browser.apply(ViewChange::DatasetLoaded(scenario_catalog()));

        browser.apply(ViewChange::StatusFilter(StatusFilter::Upcoming));
        assert_eq!(ids(browser.displayed()), [2]);

        browser.apply(ViewChange::StatusFilter(StatusFilter::Success));
        assert_eq!(ids(browser.displayed()), [1]);
    }

    #[test]
    fn test_unchanged_input_does_not_rederive() {
        let mut browser = LaunchBrowser::new();
        browser.apply(ViewChange::DatasetLoaded(scenario_catalog()));

        assert!(!browser.apply(ViewChange::StatusFilter(StatusFilter::All)));
        assert!(browser.apply(ViewChange::SearchText("falcon".into())));
        assert!(!browser.apply(ViewChange::SearchText("falcon".into())));
    }

    #[test]
    fn test_controls_before_dataset_arrives() {
        // Control change first, dataset second
        let mut early = LaunchBrowser::new();
        early.apply(ViewChange::StatusFilter(StatusFilter::Success));
        early.apply(ViewChange::ToggleSortOrder);
        early.apply(ViewChange::DatasetLoaded(scenario_catalog()));

        // Dataset first, control change second
        let mut late = LaunchBrowser::new();
        late.apply(ViewChange::DatasetLoaded(scenario_catalog()));
        late.apply(ViewChange::StatusFilter(StatusFilter::Success));
        late.apply(ViewChange::ToggleSortOrder);

        assert_eq!(early.displayed(), late.displayed());
        assert_eq!(ids(early.displayed()), [1]);
    }

    #[test]
    fn test_toggle_sort_order() {
        let mut browser = LaunchBrowser::new();
        browser.apply(ViewChange::DatasetLoaded(scenario_catalog()));

        browser.apply(ViewChange::ToggleSortOrder);
        assert_eq!(browser.controls().sort_order, SortOrder::Ascending);
        assert_eq!(ids(browser.displayed()), [1, 2]);

        browser.apply(ViewChange::ToggleSortOrder);
        assert_eq!(ids(browser.displayed()), [2, 1]);
    }

    #[test]
    fn test_search_without_match_is_empty_not_error() {
        let mut browser = LaunchBrowser::new();
        browser.apply(ViewChange::DatasetLoaded(scenario_catalog()));
        browser.apply(ViewChange::SearchText("Dragon".into()));
        assert!(browser.displayed().is_empty());
        assert_eq!(browser.catalog().len(), 2);
    }

    #[test]
    fn test_expansion_is_exclusive() {
        let mut browser = LaunchBrowser::new();

        browser.toggle_expanded(1);
        browser.toggle_expanded(2);
        assert!(!browser.is_expanded(1));
        assert!(browser.is_expanded(2));

        browser.toggle_expanded(2);
        assert_eq!(browser.expanded(), None);

        browser.toggle_expanded(1);
        browser.toggle_expanded(1);
        assert_eq!(browser.expanded(), None);
    }

    #[test]
    fn test_launch_lookup() {
        let mut browser = LaunchBrowser::new();
        browser.apply(ViewChange::DatasetLoaded(scenario_catalog()));
        assert_eq!(browser.launch(2).map(|l| l.mission_name.as_str()), Some("Falcon 9"));
        assert!(browser.launch(99).is_none());
    }
}
