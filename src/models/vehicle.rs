//! Vehicle model
//!
//! Represents a vehicle on the lot, linked to the customer it belongs to.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sales status of a vehicle
///
/// The localized label is the serialized form and appears verbatim in every
/// export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VehicleStatus {
    /// On the lot and can be sold
    #[default]
    #[serde(rename = "Verfügbar")]
    Available,
    /// Held for a customer
    #[serde(rename = "Reserviert")]
    Reserved,
    /// Sold
    #[serde(rename = "Verkauft")]
    Sold,
}

impl VehicleStatus {
    /// All statuses in display order
    pub const ALL: [VehicleStatus; 3] = [Self::Available, Self::Reserved, Self::Sold];

    /// The localized label used in exports and listings
    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "Verfügbar",
            Self::Reserved => "Reserviert",
            Self::Sold => "Verkauft",
        }
    }

    /// Parse a status from either its label or its English name
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|status| {
            status.label().to_lowercase() == needle || status.english_name() == needle
        })
    }

    fn english_name(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Reserved => "reserved",
            Self::Sold => "sold",
        }
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for VehicleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!(
                "unknown vehicle status '{}' (expected one of: Verfügbar, Reserviert, Verkauft)",
                s
            )
        })
    }
}

/// A vehicle record
///
/// Field order matches the column order of every export format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    /// Unique identifier
    pub id: i64,

    /// Owning customer (reference only)
    pub customer_id: i64,

    /// Manufacturer
    pub make: String,

    /// Model name
    pub model: String,

    /// Date of first registration, kept exactly as entered
    #[serde(default)]
    pub initial_registration: Option<String>,

    /// Paint color
    #[serde(default)]
    pub color: Option<String>,

    /// Sales status
    pub status: VehicleStatus,

    /// Equipment list, in entry order
    #[serde(default)]
    pub equipment_features: Vec<String>,
}

impl VehicleRecord {
    /// Create a new available vehicle with no optional data
    pub fn new(id: i64, customer_id: i64, make: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            id,
            customer_id,
            make: make.into(),
            model: model.into(),
            initial_registration: None,
            color: None,
            status: VehicleStatus::Available,
            equipment_features: Vec::new(),
        }
    }

    /// Builder: set the color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Builder: set the initial registration date
    pub fn with_initial_registration(mut self, date: impl Into<String>) -> Self {
        self.initial_registration = Some(date.into());
        self
    }

    /// Builder: set the status
    pub fn with_status(mut self, status: VehicleStatus) -> Self {
        self.status = status;
        self
    }

    /// Builder: set the equipment list
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.equipment_features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Color, or the empty string when unset
    pub fn color_or_empty(&self) -> &str {
        self.color.as_deref().unwrap_or("")
    }

    /// Initial registration, or the empty string when unset
    pub fn initial_registration_or_empty(&self) -> &str {
        self.initial_registration.as_deref().unwrap_or("")
    }

    /// Equipment features joined for single-cell display
    pub fn features_joined(&self) -> String {
        self.equipment_features.join(", ")
    }

    /// Validate the vehicle
    pub fn validate(&self) -> Result<(), VehicleValidationError> {
        if self.make.trim().is_empty() {
            return Err(VehicleValidationError::EmptyMake);
        }

        if self.model.trim().is_empty() {
            return Err(VehicleValidationError::EmptyModel);
        }

        if let Some(date) = &self.initial_registration {
            if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
                return Err(VehicleValidationError::InvalidRegistrationDate(date.clone()));
            }
        }

        if self.equipment_features.iter().any(|f| f.trim().is_empty()) {
            return Err(VehicleValidationError::EmptyFeature);
        }

        Ok(())
    }
}

impl fmt::Display for VehicleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} {} ({})", self.id, self.make, self.model, self.status)
    }
}

/// Validation errors for vehicles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VehicleValidationError {
    EmptyMake,
    EmptyModel,
    InvalidRegistrationDate(String),
    EmptyFeature,
}

impl fmt::Display for VehicleValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMake => write!(f, "Vehicle make cannot be empty"),
            Self::EmptyModel => write!(f, "Vehicle model cannot be empty"),
            Self::InvalidRegistrationDate(date) => {
                write!(f, "Invalid initial registration '{}' (expected YYYY-MM-DD)", date)
            }
            Self::EmptyFeature => write!(f, "Equipment features cannot be empty"),
        }
    }
}

impl std::error::Error for VehicleValidationError {}
