// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use msr_core::WatchedState;
use tempfile::tempdir;

#[test]
fn load_missing_file_returns_default() {
 let dir = tempdir().unwrap();
 let path = dir.path().join("watched_state.json");
 let state: WatchedState = load(&path);
 assert_eq!(state, WatchedState::default());
}

#[test]
fn load_empty_file_returns_default() {
 let dir = tempdir().unwrap();
 let path = dir.path().join("watched_state.json");
 fs::write(&path, b"").unwrap();
 let state: WatchedState = load(&path);
 assert_eq!(state, WatchedState::default());
}

#[test]
fn load_corrupted_file_backs_up_and_returns_default() {
 let dir = tempdir().unwrap();
 let path = dir.path().join("watched_state.json");
 fs::write(&path, b"{ not valid json").unwrap();

 let state: WatchedState = load(&path);
 assert_eq!(state, WatchedState::default());

 let backup = path.with_extension("json.corrupted");
 assert!(backup.exists());
}

#[test]
fn save_then_load_round_trips() {
 let dir = tempdir().unwrap();
 let path = dir.path().join("watched_state.json");

 let mut state = WatchedState::default();
 state.user_mut("alice");

 save(&path, &state).unwrap();
 let loaded: WatchedState = load(&path);
 assert_eq!(state, loaded);
}

#[test]
fn save_leaves_no_temp_file_behind() {
 let dir = tempdir().unwrap();
 let path = dir.path().join("watched_state.json");
 save(&path, &WatchedState::default()).unwrap();
 assert!(!path.with_extension("tmp").exists());
}
