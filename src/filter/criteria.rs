//! Filter criteria for the vehicle list
//!
//! Criteria hold the raw text a user typed into each filter field. Text is
//! interpreted only when the criteria are compiled into a [`Predicate`], so a
//! malformed id never becomes an error: it simply matches nothing.

use crate::models::{VehicleRecord, VehicleStatus};

/// Per-field matchers for the vehicle list
///
/// A field that is `None` (or blank) matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Exact id, as entered
    pub id: Option<String>,
    /// Case-insensitive substring of the make
    pub make: Option<String>,
    /// Case-insensitive substring of the model
    pub model: Option<String>,
    /// Case-insensitive substring of the color
    pub color: Option<String>,
    /// Exact status
    pub status: Option<VehicleStatus>,
}

impl FilterCriteria {
    /// Criteria that match everything
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.make = Some(make.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_status(mut self, status: VehicleStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// True when no field restricts the result
    pub fn is_empty(&self) -> bool {
        let id_blank = self.id.as_deref().map_or(true, |id| id.trim().is_empty());
        let text_blank = |s: &Option<String>| s.as_deref().map_or(true, str::is_empty);

        id_blank
            && text_blank(&self.make)
            && text_blank(&self.model)
            && text_blank(&self.color)
            && self.status.is_none()
    }

    /// Interpret the raw criteria once so records can be tested cheaply
    pub fn compile(&self) -> Predicate {
        Predicate {
            id: IdMatcher::from_input(self.id.as_deref()),
            make: substring_needle(self.make.as_deref()),
            model: substring_needle(self.model.as_deref()),
            color: substring_needle(self.color.as_deref()),
            status: self.status,
        }
    }
}

/// How the id field constrains a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdMatcher {
    /// No id entered
    Any,
    /// A parsable id
    Exact(i64),
    /// Text that is not an integer; nothing matches
    Invalid,
}

impl IdMatcher {
    fn from_input(input: Option<&str>) -> Self {
        match input.map(str::trim) {
            None | Some("") => Self::Any,
            Some(text) => text.parse().map_or(Self::Invalid, Self::Exact),
        }
    }

    fn matches(&self, id: i64) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(wanted) => *wanted == id,
            Self::Invalid => false,
        }
    }
}

fn substring_needle(input: Option<&str>) -> Option<String> {
    input.filter(|s| !s.is_empty()).map(str::to_lowercase)
}

fn contains_ignore_case(haystack: &str, needle: &Option<String>) -> bool {
    match needle {
        Some(needle) => haystack.to_lowercase().contains(needle.as_str()),
        None => true,
    }
}

/// Compiled form of [`FilterCriteria`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub id: IdMatcher,
    make: Option<String>,
    model: Option<String>,
    color: Option<String>,
    status: Option<VehicleStatus>,
}

impl Predicate {
    /// Test a single record; all field matchers must hold
    pub fn matches(&self, vehicle: &VehicleRecord) -> bool {
        self.id.matches(vehicle.id)
            && contains_ignore_case(&vehicle.make, &self.make)
            && contains_ignore_case(&vehicle.model, &self.model)
            && contains_ignore_case(vehicle.color_or_empty(), &self.color)
            && self.status.map_or(true, |status| status == vehicle.status)
    }
}
