// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fetch stage: pull current watched-state and playlists from every
//! configured server, bounded by the worker pool. A server that fails to
//! answer is logged and dropped from this cycle; the remaining servers
//! still participate in merge and diff/push.

use std::collections::HashMap;
use std::sync::Arc;

use msr_core::{LibraryKind, PlaylistState, UserData, UserPlaylists, WatchedState};
use msr_drivers::{DriverError, ServerDriver};

use crate::pool::{self, DEFAULT_CONCURRENCY};

/// One server's worth of fetch input: which users to ask about and which
/// libraries to restrict the answer to.
pub struct ServerFetchRequest {
 pub driver: Arc<dyn ServerDriver>,
 pub users: Vec<String>,
 pub library_filter: HashMap<String, LibraryKind>,
}

pub struct WatchedFetchResult {
 pub machine_id: String,
 pub info: String,
 pub result: Result<HashMap<String, UserData>, DriverError>,
}

pub struct PlaylistFetchResult {
 pub machine_id: String,
 pub info: String,
 pub result: Result<HashMap<String, UserPlaylists>, DriverError>,
}

pub async fn fetch_watched(
 requests: Vec<ServerFetchRequest>,
 previous_state: &WatchedState,
 concurrency: Option<usize>,
) -> Vec<WatchedFetchResult> {
 let previous = previous_state.clone();
 pool::run_bounded(requests, concurrency.unwrap_or(DEFAULT_CONCURRENCY), move |req| {
 let previous = previous.clone();
 async move {
 let machine_id = req.driver.machine_id().to_string();
 let info = req.driver.info().to_string();
 let result = req
 .driver
 .get_watched(&req.users, &req.library_filter, &previous)
 .await;
 if let Err(ref err) = result {
 tracing::warn!(server = %info, error = %err, "watched-state fetch failed");
 }
 WatchedFetchResult {
 machine_id,
 info,
 result,
 }
 }
 })
 .await
}

pub struct PlaylistFetchRequest {
 pub driver: Arc<dyn ServerDriver>,
 pub users: Vec<String>,
}

pub async fn fetch_playlists(
 requests: Vec<PlaylistFetchRequest>,
 previous_state: &PlaylistState,
 concurrency: Option<usize>,
) -> Vec<PlaylistFetchResult> {
 let previous = previous_state.clone();
 pool::run_bounded(requests, concurrency.unwrap_or(DEFAULT_CONCURRENCY), move |req| {
 let previous = previous.clone();
 async move {
 let machine_id = req.driver.machine_id().to_string();
 let info = req.driver.info().to_string();
 let result = req.driver.get_playlists(&req.users, &previous).await;
 if let Err(ref err) = result {
 tracing::warn!(server = %info, error = %err, "playlist fetch failed");
 }
 PlaylistFetchResult {
 machine_id,
 info,
 result,
 }
 }
 })
 .await
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod tests;
