#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use dwriter::core::store::{Addressing, EventStore};
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// The binary, with HOME pointed away from the user's real config
pub fn dwr() -> Command {
    let home = env::temp_dir().join("dwriter_test_home");
    fs::create_dir_all(&home).ok();
    let mut cmd = cargo_bin_cmd!("dwriter");
    cmd.env("HOME", home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_dwriter.db", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a DB through the binary (test mode, no config written)
pub fn init_db(db_path: &str) {
    dwr()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Fresh store in its own temp dir. Keep the TempDir alive for the test.
pub fn temp_store(addressing: Addressing) -> (TempDir, EventStore) {
    let dir = TempDir::new().expect("tempdir");
    let store = EventStore::open(&dir.path().join("DWriteData.db"), addressing).expect("open");
    (dir, store)
}

/// Store with the two records of the lunch scenario.
pub fn lunch_store() -> (TempDir, EventStore) {
    let (dir, store) = temp_store(Addressing::IdOffset);
    store.append("2013-02-14 10:00:00", "lunch").expect("append");
    store.append("2013-02-14 18:30:00", "dinner").expect("append");
    (dir, store)
}
