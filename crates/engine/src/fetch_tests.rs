// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::HashMap;
use std::sync::Arc;

use msr_core::WatchedState;
use msr_drivers::{DriverError, FakeDriver};

use super::*;

#[tokio::test]
async fn failed_server_is_reported_but_does_not_panic() {
 let failing = Arc::new(FakeDriver::new("bad", "bad server"));
 failing.fail_next_call(DriverError::Timeout);

 let results = fetch_watched(
 vec![ServerFetchRequest {
 driver: failing,
 users: vec!["alice".to_string()],
 library_filter: HashMap::new(),
 }],
 &WatchedState::default(),
 None,
 )
 .await;

 assert_eq!(results.len(), 1);
 assert!(results[0].result.is_err());
}

#[tokio::test]
async fn successful_servers_return_their_data() {
 let mut watched = HashMap::new();
 watched.insert("alice".to_string(), Default::default());
 let good = Arc::new(FakeDriver::new("good", "good server").seed_watched(watched));

 let results = fetch_watched(
 vec![ServerFetchRequest {
 driver: good,
 users: vec!["alice".to_string()],
 library_filter: HashMap::new(),
 }],
 &WatchedState::default(),
 None,
 )
 .await;

 assert_eq!(results.len(), 1);
 assert!(results[0].result.as_ref().unwrap().contains_key("alice"));
}
