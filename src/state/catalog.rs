//! The canonical launch dataset for the session

use std::collections::HashMap;

use super::data::Launch;

/// Deduplicated, load-once set of all launches.
///
/// Every `flight_number` appears at most once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    launches: Vec<Launch>,
}

impl Catalog {
    /// Build the catalog from raw source records, collapsing duplicates
    pub fn from_records(records: Vec<Launch>) -> Self {
        Self {
            launches: dedup_by_flight_number(records),
        }
    }

    pub fn launches(&self) -> &[Launch] {
        &self.launches
    }

    pub fn len(&self) -> usize {
        self.launches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.launches.is_empty()
    }
}

/// Collapse records that share a flight number.
///
/// The last record seen for an identifier wins, and it takes the slot
/// where that identifier first appeared.
pub fn dedup_by_flight_number(records: Vec<Launch>) -> Vec<Launch> {
    let mut slots: HashMap<u32, usize> = HashMap::with_capacity(records.len());
    let mut unique: Vec<Launch> = Vec::with_capacity(records.len());

    for launch in records {
        match slots.get(&launch.flight_number) {
            Some(&slot) => unique[slot] = launch,
            None => {
                slots.insert(launch.flight_number, unique.len());
                unique.push(launch);
            }
        }
    }

    unique
}
