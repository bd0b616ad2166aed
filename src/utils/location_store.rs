// Persistence of the user's chosen delivery location

use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::StoreError;
use crate::models::UserLocation;

/// Key-value persistence for the single saved [`UserLocation`]
pub trait LocationStore {
    /// Returns the saved location, `None` when nothing has been saved yet
    fn load(&self) -> Result<Option<UserLocation>, StoreError>;

    fn save(&self, location: &UserLocation) -> Result<(), StoreError>;

    fn clear(&self) -> Result<(), StoreError>;
}

/// Stores the location as pretty-printed JSON in a single file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl LocationStore for JsonFileStore {
    fn load(&self) -> Result<Option<UserLocation>, StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved location");
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let location: UserLocation = serde_json::from_str(&json)?;
        debug!(pincode = %location.pincode, "loaded saved location");
        Ok(Some(location))
    }

    fn save(&self, location: &UserLocation) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(location)?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        info!(pincode = %location.pincode, path = %self.path.display(), "saved location");
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

/// Keeps the location in memory only
#[derive(Debug, Default)]
pub struct MemoryStore {
    location: RefCell<Option<UserLocation>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location(location: UserLocation) -> Self {
        Self {
            location: RefCell::new(Some(location)),
        }
    }
}

impl LocationStore for MemoryStore {
    fn load(&self) -> Result<Option<UserLocation>, StoreError> {
        Ok(self.location.borrow().clone())
    }

    fn save(&self, location: &UserLocation) -> Result<(), StoreError> {
        *self.location.borrow_mut() = Some(location.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.location.borrow_mut().take();
        Ok(())
    }
}
