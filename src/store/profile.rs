use tracing::{error, info, warn};

use super::{KeyValueStore, Result};
use crate::models::UserProfile;

/// Storage key holding the JSON-encoded profile.
pub const USER_PROFILE_KEY: &str = "simpleBible:user";

/// Save, load and clear the onboarding profile on top of any key-value store.
pub struct ProfileStore<S> {
    store: S,
}

impl<S: KeyValueStore> ProfileStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Replace any stored profile. Failures are logged and returned so the
    /// caller can tell the user the save did not happen.
    pub fn save(&self, profile: &UserProfile) -> Result<()> {
        let payload = serde_json::to_string(profile)?;
        self.store
            .set_item(USER_PROFILE_KEY, &payload)
            .inspect_err(|err| error!(error = %err, "failed to save user profile"))?;
        info!("user profile saved");
        Ok(())
    }

    /// Read the stored profile. A missing key, a storage failure, unparseable
    /// JSON and blank fields all come back as `None`.
    pub fn load(&self) -> Option<UserProfile> {
        let raw = match self.store.get_item(USER_PROFILE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!(error = %err, "failed to read user profile");
                return None;
            }
        };

        let stored: UserProfile = match serde_json::from_str(&raw) {
            Ok(profile) => profile,
            Err(err) => {
                warn!(error = %err, "stored user profile is not valid JSON");
                return None;
            }
        };

        match UserProfile::new(&stored.name, &stored.church) {
            Ok(profile) => Some(profile),
            Err(err) => {
                warn!(error = %err, "stored user profile is incomplete");
                None
            }
        }
    }

    pub fn clear(&self) -> Result<()> {
        self.store
            .remove_item(USER_PROFILE_KEY)
            .inspect_err(|err| error!(error = %err, "failed to remove user profile"))?;
        info!("user profile cleared");
        Ok(())
    }

    pub fn inner(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, StoreError};

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>> {
            Err(StoreError::Unavailable("disk gone".to_string()))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
            Err(StoreError::Unavailable("disk gone".to_string()))
        }

        fn remove_item(&self, _key: &str) -> Result<()> {
            Err(StoreError::Unavailable("disk gone".to_string()))
        }
    }

    fn profile() -> UserProfile {
        UserProfile::new("Ana", "Igreja Batista").unwrap()
    }

    #[test]
    fn save_then_load_round_trips() {
        let profiles = ProfileStore::new(MemoryStore::new());
        profiles.save(&profile()).unwrap();
        assert_eq!(profiles.load(), Some(profile()));
    }

    #[test]
    fn stored_payload_is_plain_json_object() {
        let profiles = ProfileStore::new(MemoryStore::new());
        profiles.save(&profile()).unwrap();
        let raw = profiles.inner().get_item(USER_PROFILE_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"{"name":"Ana","church":"Igreja Batista"}"#);
    }

    #[test]
    fn clear_then_load_is_absent() {
        let profiles = ProfileStore::new(MemoryStore::new());
        profiles.save(&profile()).unwrap();
        profiles.clear().unwrap();
        assert_eq!(profiles.load(), None);
    }

    #[test]
    fn empty_store_loads_nothing() {
        let profiles = ProfileStore::new(MemoryStore::new());
        assert_eq!(profiles.load(), None);
    }

    #[test]
    fn malformed_payload_loads_nothing() {
        let store = MemoryStore::new();
        store.set_item(USER_PROFILE_KEY, "not json").unwrap();
        assert_eq!(ProfileStore::new(store).load(), None);
    }

    #[test]
    fn blank_fields_load_nothing() {
        let store = MemoryStore::new();
        store
            .set_item(USER_PROFILE_KEY, r#"{"name":"","church":"  "}"#)
            .unwrap();
        assert_eq!(ProfileStore::new(store).load(), None);
    }

    #[test]
    fn padded_fields_load_trimmed() {
        let store = MemoryStore::new();
        store
            .set_item(USER_PROFILE_KEY, r#"{"name":" Ana ","church":"Sede "}"#)
            .unwrap();
        assert_eq!(
            ProfileStore::new(store).load(),
            Some(UserProfile::new("Ana", "Sede").unwrap())
        );
    }

    #[test]
    fn broken_backend_fails_writes_but_not_reads() {
        let profiles = ProfileStore::new(BrokenStore);
        assert!(matches!(profiles.save(&profile()), Err(StoreError::Unavailable(_))));
        assert!(matches!(profiles.clear(), Err(StoreError::Unavailable(_))));
        assert_eq!(profiles.load(), None);
    }
}
