use thiserror::Error;

use crate::model::Account;

pub mod json_file_store;
pub mod memory_store;
pub mod user_db;

/// Repository seam over the backing collection. The whole collection moves
/// through `load`/`save` in one piece; there is no per-record access.
pub trait UserStore {
    fn load(&self) -> Result<Vec<Account>, StoreError>;
    fn save(&self, accounts: &[Account]) -> Result<(), StoreError>;

    fn find_by_username(&self, username: &str) -> Result<Option<Account>, StoreError> {
        Ok(self
            .load()?
            .into_iter()
            .find(|account| account.username == username))
    }

    fn append(&self, account: Account) -> Result<(), StoreError> {
        let mut accounts = self.load()?;
        accounts.push(account);
        self.save(&accounts)
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read the users file: {0}")]
    ReadFailure(String),
    #[error("users file is not valid json: {0}")]
    ParseFailure(String),
    #[error("failed to write the users file: {0}")]
    WriteFailure(String),
}
