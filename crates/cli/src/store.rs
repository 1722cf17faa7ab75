//! JSON key-value store for hangar and fleet data.
//!
//! The whole store is one JSON object on disk. Reads are forgiving: a
//! missing file, a missing key or a malformed value falls back to defaults
//! with a warning. Writes report their errors.

use hangar_core::{Aircraft, AircraftId, Hangar};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Key holding the hangar record.
pub const HANGAR_KEY: &str = "hangar";

/// Key holding the aircraft list.
pub const AIRCRAFT_KEY: &str = "aircraft";

/// Errors that can occur when writing the store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access store: {0}")]
    IoError(#[from] io::Error),

    #[error("Failed to encode JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// File-backed key → JSON document store.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Opens a store at `path`. The file is created on first write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the raw document. A missing file is an empty document.
    fn read_document(&self) -> Result<Map<String, Value>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Loads the value under `key`, or `None` if it is missing or unreadable.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let mut document = match self.read_document() {
            Ok(document) => document,
            Err(e) => {
                log::warn!("Error loading '{}' from {}: {}", key, self.path.display(), e);
                return None;
            }
        };

        let value = document.remove(key)?;
        match serde_json::from_value(value) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                log::warn!("Error parsing '{}' from {}: {}", key, self.path.display(), e);
                None
            }
        }
    }

    /// Loads the value under `key`, falling back to `fallback`.
    pub fn load_or_else<T: DeserializeOwned>(&self, key: &str, fallback: impl FnOnce() -> T) -> T {
        self.get(key).unwrap_or_else(fallback)
    }

    /// Stores `value` under `key`, keeping the other keys.
    ///
    /// A malformed existing document is replaced.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let mut document = match self.read_document() {
            Ok(document) => document,
            Err(StoreError::JsonError(e)) => {
                log::warn!("Replacing malformed store {}: {}", self.path.display(), e);
                Map::new()
            }
            Err(e) => return Err(e),
        };

        document.insert(key.to_string(), serde_json::to_value(value)?);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&document)?)?;
        Ok(())
    }

    /// Loads the hangar, falling back to the default "Main Hangar".
    pub fn load_hangar(&self) -> Hangar {
        self.load_or_else(HANGAR_KEY, Hangar::default)
    }

    /// Loads the fleet, falling back to an empty list.
    pub fn load_aircraft(&self) -> Vec<Aircraft> {
        self.load_or_else(AIRCRAFT_KEY, Vec::new)
    }

    pub fn save_hangar(&self, hangar: &Hangar) -> Result<(), StoreError> {
        self.set(HANGAR_KEY, hangar)
    }

    pub fn save_aircraft(&self, aircraft: &[Aircraft]) -> Result<(), StoreError> {
        self.set(AIRCRAFT_KEY, &aircraft)
    }

    /// Appends an aircraft to the stored fleet.
    pub fn add_aircraft(&self, aircraft: Aircraft) -> Result<(), StoreError> {
        let mut fleet = self.load_aircraft();
        fleet.push(aircraft);
        self.save_aircraft(&fleet)
    }

    /// Removes the aircraft with `id`. Returns whether one was removed.
    pub fn remove_aircraft(&self, id: &str) -> Result<bool, StoreError> {
        let mut fleet = self.load_aircraft();
        let before = fleet.len();
        fleet.retain(|a| a.id() != id);
        if fleet.len() == before {
            return Ok(false);
        }
        self.save_aircraft(&fleet)?;
        Ok(true)
    }

    /// Generates an id not used by the stored fleet.
    pub fn new_aircraft_id(&self) -> AircraftId {
        let fleet = self.load_aircraft();
        loop {
            let id = format!("{:016x}", rand::random::<u64>());
            if fleet.iter().all(|a| a.id() != id) {
                return id;
            }
        }
    }
}
