use std::sync::{Mutex, MutexGuard, PoisonError};

use super::UserStore;
use crate::model::{Account, UserRegistryError};

/// Managed state wrapping the store. Registration is a read-check-write
/// sequence, so the whole cycle runs under one lock: two concurrent
/// registrations of the same username cannot both pass the uniqueness check.
pub struct UserDb {
    store: Mutex<Box<dyn UserStore + Send>>,
}

impl UserDb {
    pub fn new(store: Box<dyn UserStore + Send>) -> Self {
        UserDb {
            store: Mutex::new(store),
        }
    }

    fn store(&self) -> MutexGuard<'_, Box<dyn UserStore + Send>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn register(&self, account: Account) -> Result<(), UserRegistryError> {
        let store = self.store();
        if store.find_by_username(&account.username)?.is_some() {
            return Err(UserRegistryError::UserAlreadyExists);
        }
        store.append(account)?;
        Ok(())
    }

    /// Unknown username and wrong password fail identically so the response
    /// never discloses which accounts exist.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Account, UserRegistryError> {
        self.store()
            .load()?
            .into_iter()
            .find(|account| account.username == username && account.password == password)
            .ok_or(UserRegistryError::InvalidCredentials)
    }

    pub fn list(&self) -> Result<Vec<Account>, UserRegistryError> {
        Ok(self.store().load()?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::memory_store::MemoryStore;

    fn test_db() -> UserDb {
        UserDb::new(Box::new(MemoryStore::new()))
    }

    fn account(username: &str, password: &str) -> Account {
        Account {
            username: username.to_string(),
            password: password.to_string(),
            role: "user".to_string(),
        }
    }

    #[test]
    fn test_register_new_user() {
        let db = test_db();
        db.register(account("alice", "pw1")).unwrap();
        assert_eq!(db.list().unwrap().len(), 1);
    }

    #[test]
    fn test_register_duplicate_leaves_collection_unchanged() {
        let db = test_db();
        db.register(account("alice", "pw1")).unwrap();
        let result = db.register(account("alice", "other"));
        assert!(matches!(result, Err(UserRegistryError::UserAlreadyExists)));
        assert_eq!(db.list().unwrap().len(), 1);
    }

    #[test]
    fn test_authenticate_match_returns_the_account() {
        let db = test_db();
        let mut admin = account("alice", "pw1");
        admin.role = "admin".to_string();
        db.register(admin).unwrap();
        let found = db.authenticate("alice", "pw1").unwrap();
        assert_eq!(found.role, "admin");
    }

    #[test]
    fn test_concurrent_registrations_create_one_account() {
        let db = test_db();
        let results: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| db.register(account("alice", "pw1"))))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert_eq!(
            results
                .iter()
                .filter(|r| matches!(r, Err(UserRegistryError::UserAlreadyExists)))
                .count(),
            7
        );
        assert_eq!(db.list().unwrap().len(), 1);
    }

    #[test]
    fn test_authenticate_failures_are_indistinguishable() {
        let db = test_db();
        db.register(account("alice", "pw1")).unwrap();
        let wrong_password = db.authenticate("alice", "wrong").unwrap_err();
        let unknown_user = db.authenticate("mallory", "pw1").unwrap_err();
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
        assert!(matches!(wrong_password, UserRegistryError::InvalidCredentials));
        assert!(matches!(unknown_user, UserRegistryError::InvalidCredentials));
    }
}
