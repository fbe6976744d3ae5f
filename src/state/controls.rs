//! View controls: the three user inputs that shape the displayed list

use std::fmt;

use super::data::Launch;

/// Which launch outcomes are shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Success,
    Failure,
    Upcoming,
}

impl StatusFilter {
    /// All filters in the order the radio buttons are laid out
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Success,
        StatusFilter::Failure,
        StatusFilter::Upcoming,
    ];

    /// Does this filter keep the launch?
    ///
    /// `Failure` only matches a known unsuccessful outcome, never `None`.
    pub fn matches(self, launch: &Launch) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Success => launch.launch_success == Some(true),
            StatusFilter::Failure => launch.launch_success == Some(false),
            StatusFilter::Upcoming => launch.upcoming,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StatusFilter::All => "All",
            StatusFilter::Success => "Success",
            StatusFilter::Failure => "Failure",
            StatusFilter::Upcoming => "Upcoming",
        };
        f.write_str(label)
    }
}

/// Chronological direction of the displayed list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Earliest first
    Ascending,
    /// Latest first
    #[default]
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Label used on the sort button
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Oldest to Newest",
            SortOrder::Descending => "Newest to Oldest",
        }
    }
}

/// Current values of the search box, status radios and sort button
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewControls {
    pub search_text: String,
    pub status_filter: StatusFilter,
    pub sort_order: SortOrder,
}
