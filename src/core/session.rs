use crate::core::{KeyValueStore, User};
use crate::utils::error::Result;

pub const DEFAULT_STORAGE_KEY: &str = "aoGymUser";

/// Mock login session persisted as one JSON document under a fixed key.
///
/// Unreadable or malformed data counts as "logged out"; it is logged and
/// never surfaced to the caller.
pub struct SessionStore<S: KeyValueStore> {
    storage: S,
    storage_key: String,
    current_user: Option<User>,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, storage_key: impl Into<String>) -> Self {
        let mut store = Self {
            storage,
            storage_key: storage_key.into(),
            current_user: None,
        };
        store.current_user = store.load();
        store
    }

    pub fn load(&self) -> Option<User> {
        let raw = match self.storage.get_item(&self.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Error loading user data: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Stored session is malformed, treating as logged out: {}", e);
                None
            }
        }
    }

    pub fn save(&mut self, user: &User) -> Result<()> {
        let json = serde_json::to_string(user)?;
        if let Err(e) = self.storage.set_item(&self.storage_key, &json) {
            tracing::error!("Error saving user data: {}", e);
            return Err(e);
        }
        self.current_user = Some(user.clone());
        Ok(())
    }

    pub fn clear(&mut self) {
        if let Err(e) = self.storage.remove_item(&self.storage_key) {
            tracing::error!("Error clearing user data: {}", e);
        }
        self.current_user = None;
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStorage;
    use crate::domain::model::UserStats;
    use crate::utils::error::GymError;
    use chrono::NaiveDate;

    fn user() -> User {
        User {
            id: "user_1".to_string(),
            email: "member@aogym.com".to_string(),
            first_name: "Fatima".to_string(),
            last_name: "Ali".to_string(),
            phone: "+15551234567".to_string(),
            membership_type: "Basic".to_string(),
            membership_status: "Active".to_string(),
            join_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            expiry_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            stats: UserStats::default(),
            recent_activity: Vec::new(),
        }
    }

    struct BrokenStorage;

    impl KeyValueStore for BrokenStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>> {
            Err(GymError::StorageError {
                message: "storage disabled".to_string(),
            })
        }

        fn set_item(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(GymError::StorageError {
                message: "quota exceeded".to_string(),
            })
        }

        fn remove_item(&mut self, _key: &str) -> Result<()> {
            Err(GymError::StorageError {
                message: "storage disabled".to_string(),
            })
        }
    }

    #[test]
    fn test_save_then_reload() {
        let mut session = SessionStore::new(MemoryStorage::default());
        assert!(!session.is_logged_in());

        session.save(&user()).unwrap();
        assert!(session.is_logged_in());

        let restored = SessionStore::new(session.storage().clone());
        assert_eq!(restored.current_user(), Some(&user()));
    }

    #[test]
    fn test_malformed_data_is_absence() {
        let mut storage = MemoryStorage::default();
        storage.set_item(DEFAULT_STORAGE_KEY, "{not json").unwrap();

        let session = SessionStore::new(storage);

        assert!(session.load().is_none());
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_unavailable_storage_degrades() {
        let mut session = SessionStore::new(BrokenStorage);
        assert!(session.load().is_none());
        assert!(session.save(&user()).is_err());
        assert!(!session.is_logged_in());

        session.clear();
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_clear_removes_stored_document() {
        let mut session = SessionStore::with_key(MemoryStorage::default(), "customKey");
        session.save(&user()).unwrap();

        session.clear();

        assert!(session.current_user().is_none());
        assert_eq!(session.storage().get_item("customKey").unwrap(), None);
    }
}
