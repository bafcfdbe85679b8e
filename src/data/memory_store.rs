use std::sync::{Mutex, PoisonError};

use super::{StoreError, UserStore};
use crate::model::Account;

/// In-memory stand-in for the backing file so handler logic can be tested
/// without touching the filesystem.
pub struct MemoryStore {
    accounts: Mutex<Vec<Account>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_accounts(Vec::new())
    }

    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        Self {
            accounts: Mutex::new(accounts),
        }
    }
}

impl UserStore for MemoryStore {
    fn load(&self) -> Result<Vec<Account>, StoreError> {
        Ok(self
            .accounts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, accounts: &[Account]) -> Result<(), StoreError> {
        *self
            .accounts
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = accounts.to_vec();
        Ok(())
    }
}
