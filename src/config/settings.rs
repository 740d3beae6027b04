//! User settings for fleetdesk
//!
//! Manages export preferences: where payloads are delivered, which format is
//! used when none is given, and whether free text is escaped.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::FleetPaths;
use crate::error::FleetError;
use crate::export::ExportFormat;

/// User settings for fleetdesk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Directory export payloads are delivered to (defaults to <base>/exports)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,

    /// Format used by `vehicle export` when `--format` is omitted
    #[serde(default)]
    pub default_export_format: ExportFormat,

    /// Escape quotes in CSV cells and markup characters in XML text.
    ///
    /// Off by default: exports reproduce free text verbatim, so a `;` in a
    /// make or a `<` in a feature name ends up unescaped in the payload.
    #[serde(default)]
    pub escape_special_chars: bool,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            export_dir: None,
            default_export_format: ExportFormat::default(),
            escape_special_chars: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FleetPaths) -> Result<Self, FleetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| FleetError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FleetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FleetPaths) -> Result<(), FleetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FleetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FleetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Resolve the directory exports are delivered to
    pub fn export_dir(&self, paths: &FleetPaths) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| paths.exports_dir())
    }
}
