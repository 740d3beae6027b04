//! Delivery targets for export payloads
//!
//! A delivery receives the encoded bytes together with the fixed filename and
//! media type of the format and makes them available to the user.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::{FleetError, FleetResult};

/// Hands an encoded payload to the user
pub trait Delivery {
    fn deliver(&self, payload: &[u8], filename: &str, media_type: &str) -> FleetResult<()>;
}

/// Saves payloads as files in a directory, replacing earlier exports
#[derive(Debug, Clone)]
pub struct DirectoryDelivery {
    dir: PathBuf,
}

impl DirectoryDelivery {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Where a payload named `filename` ends up
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }
}

impl Delivery for DirectoryDelivery {
    fn deliver(&self, payload: &[u8], filename: &str, media_type: &str) -> FleetResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            FleetError::Export(format!(
                "Failed to create export directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let path = self.path_for(filename);
        let temp_path = self.path_for(&format!("{}.tmp", filename));

        let mut file = File::create(&temp_path).map_err(|e| {
            FleetError::Export(format!("Failed to create {}: {}", temp_path.display(), e))
        })?;
        file.write_all(payload)
            .and_then(|_| file.sync_all())
            .map_err(|e| FleetError::Export(format!("Failed to write export: {}", e)))?;

        fs::rename(&temp_path, &path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            FleetError::Export(format!("Failed to move export into place: {}", e))
        })?;

        debug!(media_type, "export payload written");
        info!(path = %path.display(), "export saved");
        Ok(())
    }
}

/// Writes payloads to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutDelivery;

impl Delivery for StdoutDelivery {
    fn deliver(&self, payload: &[u8], filename: &str, media_type: &str) -> FleetResult<()> {
        debug!(filename, media_type, "writing export to stdout");
        let mut stdout = io::stdout().lock();
        stdout.write_all(payload)?;
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directory_delivery_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let delivery = DirectoryDelivery::new(temp_dir.path().join("exports"));

        delivery
            .deliver(b"id;customerId", "vehicles-export.csv", "text/csv")
            .unwrap();

        let path = delivery.path_for("vehicles-export.csv");
        assert_eq!(fs::read(&path).unwrap(), b"id;customerId");
        assert!(!delivery.path_for("vehicles-export.csv.tmp").exists());
    }

    #[test]
    fn test_directory_delivery_replaces_previous_export() {
        let temp_dir = TempDir::new().unwrap();
        let delivery = DirectoryDelivery::new(temp_dir.path());

        delivery.deliver(b"first", "vehicles-export.json", "application/json").unwrap();
        delivery.deliver(b"second", "vehicles-export.json", "application/json").unwrap();

        let contents = fs::read_to_string(delivery.path_for("vehicles-export.json")).unwrap();
        assert_eq!(contents, "second");
    }
}
