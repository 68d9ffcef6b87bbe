use std::fs;
use std::path::Path;
use std::thread;

use attestation_core::preferences::{
    ExperienceTierController, FilePreferenceStore, MemoryPreferenceStore, PreferenceError,
    PreferenceFile, PreferenceStore, TIER_KEY,
};
use attestation_core::types::{ExperienceTier, TerminologySystem};
use tempfile::tempdir;

fn only_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn defaults_to_basic_when_nothing_stored() {
    let controller = ExperienceTierController::new(MemoryPreferenceStore::new());
    assert_eq!(controller.get_stored_tier(), ExperienceTier::Basic);
    assert_eq!(controller.active_system(), TerminologySystem::Learner);
}

#[test]
fn set_tier_is_read_back() {
    let mut controller = ExperienceTierController::new(MemoryPreferenceStore::new());

    controller.set_tier(ExperienceTier::Advanced).unwrap();

    assert_eq!(controller.get_stored_tier(), ExperienceTier::Advanced);
    assert_eq!(controller.active_system(), TerminologySystem::Base);
    assert_eq!(
        controller.store().read(TIER_KEY).unwrap().as_deref(),
        Some("advanced")
    );
}

#[test]
fn unrecognized_stored_value_falls_back_to_basic() {
    let mut store = MemoryPreferenceStore::new();
    store.write(TIER_KEY, "expert").unwrap();

    let controller = ExperienceTierController::new(store);

    assert_eq!(controller.get_stored_tier(), ExperienceTier::Basic);
}

#[test]
fn last_write_wins() {
    let mut controller = ExperienceTierController::new(MemoryPreferenceStore::new());
    controller.set_tier(ExperienceTier::Advanced).unwrap();
    controller.set_tier(ExperienceTier::Learner).unwrap();
    assert_eq!(controller.get_stored_tier(), ExperienceTier::Learner);
}

struct FailingStore;

impl PreferenceStore for FailingStore {
    fn read(&self, _key: &str) -> Result<Option<String>, PreferenceError> {
        Err(PreferenceError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        )))
    }

    fn write(&mut self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
        Err(PreferenceError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        )))
    }
}

#[test]
fn read_failure_degrades_and_write_failure_surfaces() {
    let mut controller = ExperienceTierController::new(FailingStore);
    assert_eq!(controller.get_stored_tier(), ExperienceTier::Basic);
    assert!(matches!(
        controller.set_tier(ExperienceTier::Advanced),
        Err(PreferenceError::Io(_))
    ));
}

#[test]
fn file_store_persists_across_instances() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("prefs").join("reader.json");

    let mut controller = ExperienceTierController::new(FilePreferenceStore::new(&path));
    assert_eq!(controller.get_stored_tier(), ExperienceTier::Basic);
    assert!(!path.exists(), "reading must not create the preference file");

    controller.set_tier(ExperienceTier::Advanced).unwrap();

    let reopened = ExperienceTierController::new(FilePreferenceStore::new(&path));
    assert_eq!(reopened.get_stored_tier(), ExperienceTier::Advanced);
    assert_eq!(reopened.into_store().path(), path.as_path());

    let file: PreferenceFile = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(file.values.get(TIER_KEY).map(String::as_str), Some("advanced"));
    assert_eq!(only_files(path.parent().unwrap()), vec!["reader.json".to_string()]);
}

#[test]
fn file_store_keeps_unrelated_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("reader.json");
    let mut store = FilePreferenceStore::new(&path);

    store.write("font_size", "large").unwrap();
    store.write(TIER_KEY, "learner").unwrap();

    assert_eq!(store.read("font_size").unwrap().as_deref(), Some("large"));
    assert_eq!(store.read(TIER_KEY).unwrap().as_deref(), Some("learner"));
    assert_eq!(store.read("missing").unwrap(), None);
}

#[test]
fn corrupt_file_reads_as_basic_and_is_replaced_on_write() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("reader.json");
    fs::write(&path, b"{ not json").unwrap();

    let mut controller = ExperienceTierController::new(FilePreferenceStore::new(&path));
    assert_eq!(controller.get_stored_tier(), ExperienceTier::Basic);

    controller.set_tier(ExperienceTier::Learner).unwrap();
    assert_eq!(controller.get_stored_tier(), ExperienceTier::Learner);
}

#[test]
fn stores_sharing_a_directory_do_not_collide() {
    let dir = tempdir().unwrap();
    let mut a = FilePreferenceStore::new(dir.path().join("reader.a"));
    let mut b = FilePreferenceStore::new(dir.path().join("reader.b"));

    a.write(TIER_KEY, "advanced").unwrap();
    b.write(TIER_KEY, "learner").unwrap();
    a.write(TIER_KEY, "basic").unwrap();

    assert_eq!(a.read(TIER_KEY).unwrap().as_deref(), Some("basic"));
    assert_eq!(b.read(TIER_KEY).unwrap().as_deref(), Some("learner"));
    assert_eq!(
        only_files(dir.path()),
        vec!["reader.a".to_string(), "reader.b".to_string()]
    );
}

#[test]
fn concurrent_writers_last_write_wins() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("reader.json");

    let handles: Vec<_> = ExperienceTier::ALL
        .into_iter()
        .cycle()
        .take(8)
        .map(|tier| {
            let mut controller = ExperienceTierController::new(FilePreferenceStore::new(&path));
            thread::spawn(move || {
                for _ in 0..25 {
                    controller.set_tier(tier)?;
                }
                Ok::<_, PreferenceError>(())
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    let stored = ExperienceTierController::new(FilePreferenceStore::new(&path))
        .store()
        .read(TIER_KEY)
        .unwrap();
    assert!(stored.is_some_and(|raw| raw.parse::<ExperienceTier>().is_ok()));
    assert_eq!(only_files(dir.path()), vec!["reader.json".to_string()]);
}
