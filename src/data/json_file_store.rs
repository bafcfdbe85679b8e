use std::{fs, io, path::PathBuf};

use super::{StoreError, UserStore};
use crate::model::Account;

/// The real backing store: one pretty-printed json array in one file.
/// Every save clobbers the whole file; there is no append path.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl UserStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Account>, StoreError> {
        let file_text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            // no file yet means no users yet, the first save creates it
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::ReadFailure(e.to_string())),
        };
        serde_json::from_str(&file_text).map_err(|e| StoreError::ParseFailure(e.to_string()))
    }

    fn save(&self, accounts: &[Account]) -> Result<(), StoreError> {
        let file_text = serde_json::to_string_pretty(accounts)
            .map_err(|e| StoreError::WriteFailure(e.to_string()))?;
        fs::write(&self.path, file_text).map_err(|e| StoreError::WriteFailure(e.to_string()))
    }
}
