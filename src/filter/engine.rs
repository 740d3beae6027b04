//! Filter engine
//!
//! Owns the authoritative vehicle collection and the view the list shows.
//! Every filter call recomputes the view from scratch; nothing is cached.

use tracing::{debug, warn};

use super::criteria::{FilterCriteria, IdMatcher};
use crate::models::VehicleRecord;

/// Ordered subset of the loaded collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredView {
    records: Vec<VehicleRecord>,
}

impl FilteredView {
    pub fn new(records: Vec<VehicleRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VehicleRecord> {
        self.records.iter()
    }

    pub fn ids(&self) -> Vec<i64> {
        self.records.iter().map(|v| v.id).collect()
    }
}

impl From<Vec<VehicleRecord>> for FilteredView {
    fn from(records: Vec<VehicleRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a FilteredView {
    type Item = &'a VehicleRecord;
    type IntoIter = std::slice::Iter<'a, VehicleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Apply criteria to a collection, keeping source order
pub fn filter_records(records: &[VehicleRecord], criteria: &FilterCriteria) -> FilteredView {
    let predicate = criteria.compile();

    if predicate.id == IdMatcher::Invalid {
        warn!(id = ?criteria.id, "id filter is not a number; no vehicles match");
    }

    let matched: Vec<_> = records
        .iter()
        .filter(|v| predicate.matches(v))
        .cloned()
        .collect();

    debug!(total = records.len(), matched = matched.len(), "filtered vehicle list");
    FilteredView::new(matched)
}

/// Holds the loaded vehicles and the currently active view
#[derive(Debug, Default)]
pub struct FilterEngine {
    records: Vec<VehicleRecord>,
    view: FilteredView,
}

impl FilterEngine {
    /// Create an empty engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine already loaded with `records`
    pub fn with_records(records: Vec<VehicleRecord>) -> Self {
        let mut engine = Self::new();
        engine.load(records);
        engine
    }

    /// Replace the collection; the active view becomes the full collection
    pub fn load(&mut self, records: Vec<VehicleRecord>) -> &FilteredView {
        debug!(count = records.len(), "loaded vehicles");
        self.view = FilteredView::new(records.clone());
        self.records = records;
        &self.view
    }

    /// Compute a view without touching the active one
    pub fn filter(&self, criteria: &FilterCriteria) -> FilteredView {
        filter_records(&self.records, criteria)
    }

    /// Compute a view and make it the active one
    pub fn apply(&mut self, criteria: &FilterCriteria) -> &FilteredView {
        self.view = self.filter(criteria);
        &self.view
    }

    /// Drop all criteria; the active view becomes the full collection
    pub fn reset(&mut self) -> &FilteredView {
        self.view = FilteredView::new(self.records.clone());
        &self.view
    }

    /// Every loaded vehicle, in load order
    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    /// The active view
    pub fn view(&self) -> &FilteredView {
        &self.view
    }
}
