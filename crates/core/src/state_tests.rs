// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn user_mut_creates_missing_user() {
 let mut state = WatchedState::new();
 state.user_mut("alice").library_mut("Movies").title = "Movies".into();
 assert!(state.users.contains_key("alice"));
 assert!(state.users["alice"].libraries.contains_key("Movies"));
}

#[test]
fn round_trips_through_json() {
 let mut state = WatchedState::new();
 state.user_mut("alice");
 let json = serde_json::to_string(&state).unwrap();
 let back: WatchedState = serde_json::from_str(&json).unwrap();
 assert_eq!(state, back);
}
