//! Profile persistence through the on-disk SQLite store.

use simple_bible::store::USER_PROFILE_KEY;
use simple_bible::{KeyValueStore, ProfileStore, SqliteStore, UserProfile};

fn open(dir: &tempfile::TempDir) -> SqliteStore {
    SqliteStore::open(&dir.path().join("simple-bible.sqlite")).unwrap()
}

#[test]
fn profile_survives_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let profile = UserProfile::new("Ana", "Igreja Batista").unwrap();
    ProfileStore::new(open(&dir)).save(&profile).unwrap();

    let reopened = ProfileStore::new(open(&dir));
    assert_eq!(reopened.load(), Some(profile));
}

#[test]
fn later_save_wins() {
    let dir = tempfile::tempdir().unwrap();
    let profiles = ProfileStore::new(open(&dir));
    profiles.save(&UserProfile::new("Ana", "Sede").unwrap()).unwrap();
    profiles.save(&UserProfile::new("Bia", "Filial").unwrap()).unwrap();
    assert_eq!(profiles.load().unwrap().name, "Bia");
}

#[test]
fn clear_removes_the_profile() {
    let dir = tempfile::tempdir().unwrap();
    let profiles = ProfileStore::new(open(&dir));
    profiles.save(&UserProfile::new("Ana", "Sede").unwrap()).unwrap();
    profiles.clear().unwrap();
    assert_eq!(profiles.load(), None);
    profiles.clear().unwrap();
}

#[test]
fn never_written_store_has_no_profile() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(ProfileStore::new(open(&dir)).load(), None);
}

#[test]
fn garbage_payload_is_treated_as_no_profile() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&dir);
    store.set_item(USER_PROFILE_KEY, "not json").unwrap();
    assert_eq!(ProfileStore::new(store).load(), None);
}

#[test]
fn payload_with_missing_field_is_treated_as_no_profile() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&dir);
    store.set_item(USER_PROFILE_KEY, r#"{"name":"Ana"}"#).unwrap();
    assert_eq!(ProfileStore::new(store).load(), None);
}
